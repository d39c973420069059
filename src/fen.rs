// This file is part of the chesscore library.
// Copyright (C) 2026 The chesscore developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Parse and write board placements.
//!
//! The placement lists rows from row 0 (Black's back rank) to row 7,
//! separated by `/`. Uppercase letters are White pieces, lowercase letters
//! are Black pieces, and digits count empty squares. This is the board part
//! of Forsyth-Edwards-Notation, optionally followed by the side to move.
//!
//! # Examples
//!
//! ```
//! use chesscore::{fen::Fen, Board, Color};
//!
//! let fen: Fen = "4k3/8/8/8/8/8/4P3/4K3 b".parse()?;
//! assert_eq!(fen.turn, Color::Black);
//! assert_eq!(fen.board.count(), 3);
//!
//! assert_eq!(Board::default().to_string(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
//! # Ok::<_, chesscore::fen::ParseFenError>(())
//! ```

use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{
    board::Board,
    color::{ByColor, Color},
    role::Role,
    square::Square,
};

/// Errors that can occur when parsing a placement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseFenError {
    InvalidBoard,
    InvalidTurn,
    MissingKing { color: Color },
    TooManyKings { color: Color },
    /// The side not to move is in check.
    OppositeCheck,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFenError::InvalidBoard => f.write_str("invalid board part in fen"),
            ParseFenError::InvalidTurn => f.write_str("invalid turn part in fen"),
            ParseFenError::MissingKing { color } => write!(f, "{color} has no king"),
            ParseFenError::TooManyKings { color } => write!(f, "{color} has more than one king"),
            ParseFenError::OppositeCheck => f.write_str("side not to move is in check"),
        }
    }
}

impl Error for ParseFenError {}

impl Board {
    /// Parses a placement without checking the number of kings.
    pub fn from_board_fen(board_fen: &str) -> Result<Board, ParseFenError> {
        let mut board = Board::empty();
        let mut rows = 0;

        for (row, part) in board_fen.split('/').enumerate() {
            let row = u8::try_from(row)
                .ok()
                .filter(|&row| row < 8)
                .ok_or(ParseFenError::InvalidBoard)?;
            let mut col = 0u8;

            for ch in part.chars() {
                if let Some(empty) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += empty as u8;
                } else {
                    let role = Role::from_char(ch).ok_or(ParseFenError::InvalidBoard)?;
                    if col >= 8 {
                        return Err(ParseFenError::InvalidBoard);
                    }
                    let color = Color::from_white(ch.is_ascii_uppercase());
                    board.put(Square::new(row, col), role, color);
                    col += 1;
                }

                if col > 8 {
                    return Err(ParseFenError::InvalidBoard);
                }
            }

            if col != 8 {
                return Err(ParseFenError::InvalidBoard);
            }
            rows += 1;
        }

        if rows != 8 {
            return Err(ParseFenError::InvalidBoard);
        }

        Ok(board)
    }

    /// Writes the placement.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for row in 0..8 {
            let mut empty = 0;

            for col in 0..8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen
    }
}

impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Board, ParseFenError> {
        Board::from_board_fen(s.trim())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_fen())
    }
}

/// A placement with the side to move and exactly one king per color,
/// where the side not to move is not in check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fen {
    pub board: Board,
    pub turn: Color,
}

impl Default for Fen {
    fn default() -> Fen {
        Fen {
            board: Board::default(),
            turn: Color::White,
        }
    }
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(fen: &str) -> Result<Fen, ParseFenError> {
        let mut parts = fen.split_ascii_whitespace();
        let board = Board::from_board_fen(parts.next().ok_or(ParseFenError::InvalidBoard)?)?;

        let turn = match parts.next() {
            None => Color::White,
            Some(part) => match *part.as_bytes() {
                [ch] => Color::from_char(char::from(ch)),
                _ => None,
            }
            .ok_or(ParseFenError::InvalidTurn)?,
        };

        if parts.next().is_some() {
            return Err(ParseFenError::InvalidTurn);
        }

        let kings = ByColor::new_with(|color| board.pieces_of(color, Role::King).count());
        if let Some(color) = kings.find(|&count| count == 0) {
            return Err(ParseFenError::MissingKing { color });
        }
        if let Some(color) = kings.find(|&count| count > 1) {
            return Err(ParseFenError::TooManyKings { color });
        }

        if board.in_check(!turn) {
            return Err(ParseFenError::OppositeCheck);
        }

        Ok(Fen { board, turn })
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board, self.turn.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_placement() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
            .parse()
            .expect("valid placement");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_placement_coordinates() {
        let board = Board::from_board_fen("8/8/8/8/8/8/3P4/8").expect("valid placement");
        assert_eq!(board.role_at(Square::new(6, 3)), Some(Role::Pawn));
        assert_eq!(board.color_at(Square::new(6, 3)), Some(Color::White));
    }

    #[test]
    fn test_write_placement() {
        let mut board = Board::empty();
        board.put(Square::new(0, 0), Role::Rook, Color::Black);
        board.put(Square::new(7, 4), Role::King, Color::White);
        assert_eq!(board.board_fen(), "r7/8/8/8/8/8/8/4K3");
        assert_eq!(Board::empty().board_fen(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_invalid_placements() {
        for fen in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/7X",
            "44/8/8/8/8/8/8/8k",
            "0p7/8/8/8/8/8/8/8",
        ] {
            assert_eq!(
                Board::from_board_fen(fen),
                Err(ParseFenError::InvalidBoard),
                "{fen:?}"
            );
        }
    }

    #[test]
    fn test_fen_turn_and_kings() {
        let fen: Fen = "4k3/8/8/8/8/8/8/4K3 b".parse().expect("valid fen");
        assert_eq!(fen.turn, Color::Black);
        assert_eq!(fen.to_string(), "4k3/8/8/8/8/8/8/4K3 b");

        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 x".parse::<Fen>(),
            Err(ParseFenError::InvalidTurn)
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 wb".parse::<Fen>(),
            Err(ParseFenError::InvalidTurn)
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/8".parse::<Fen>(),
            Err(ParseFenError::MissingKing {
                color: Color::White
            })
        );
        assert_eq!(
            "kk6/8/8/8/8/8/8/4K3".parse::<Fen>(),
            Err(ParseFenError::TooManyKings {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_fen_opposite_check() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/4RK2 w".parse::<Fen>(),
            Err(ParseFenError::OppositeCheck)
        );
        let fen: Fen = "4k3/8/8/8/8/8/8/4RK2 b".parse().expect("black to move out of check");
        assert!(fen.board.in_check(Color::Black));
    }
}
