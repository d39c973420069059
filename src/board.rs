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

//! The 8×8 grid and the pieces standing on it.

use std::fmt::{self, Write as _};

use crate::{
    color::Color,
    legal::PlayError,
    role::Role,
    square::Square,
    types::{Cell, Piece},
};

/// Back rank from the a-file to the h-file.
const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Piece positions on a board.
///
/// The board owns its grid exclusively. Every occupied cell holds a
/// [`Piece`] whose `square` equals the cell's coordinates.
///
/// # Examples
///
/// ```
/// use chesscore::{Board, Color, Role, Square};
///
/// let board = Board::default();
/// let piece = board.piece_at(Square::new(7, 4)).expect("white king");
/// assert_eq!(piece.role, Role::King);
/// assert_eq!(piece.color, Color::White);
///
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Cell; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Board {
        Board {
            grid: [[Cell::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, role) in (0..).zip(BACKRANK) {
                board.put(Square::new(color.backrank(), col), role, color);
                board.put(Square::new(color.pawn_row(), col), Role::Pawn, color);
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.grid[usize::from(sq.row())][usize::from(sq.col())]
    }

    /// Overwrites a cell. An occupant is rebound to `sq`.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        let cell = match cell {
            Cell::Occupied(piece) => Cell::Occupied(Piece { square: sq, ..piece }),
            Cell::Empty => Cell::Empty,
        };
        self.grid[usize::from(sq.row())][usize::from(sq.col())] = cell;
    }

    /// Places a new piece, replacing any occupant.
    pub fn put(&mut self, sq: Square, role: Role, color: Color) {
        self.set(sq, Cell::Occupied(Piece::new(role, color, sq)));
    }

    /// Clears a cell, returning its former occupant.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        self.set(sq, Cell::Empty);
        piece
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.get(sq).piece()
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).color()
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Moves the piece on `from` to `to` without any legality checks.
    ///
    /// Whatever stood on `to` is captured and returned. The moved piece's
    /// `square` is updated together with the grid.
    ///
    /// # Errors
    ///
    /// [`PlayError::NoPieceAtOrigin`] if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, PlayError> {
        let piece = self.remove(from).ok_or(PlayError::NoPieceAtOrigin)?;
        let captured = self.piece_at(to);
        self.set(to, Cell::Occupied(piece));
        Ok(captured)
    }

    /// Creates an independent copy of the board.
    ///
    /// Pieces are values bound to the grid that holds them, so the copy's
    /// pieces are distinct from the original's and moves played on either
    /// board are invisible to the other.
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    /// Iterates over all pieces in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().filter_map(|cell| cell.piece())
    }

    /// Iterates over the pieces of `color` in row-major order.
    pub fn all_pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.iter().filter(move |piece| piece.color == color)
    }

    /// Iterates over the pieces of `color` and `role` in row-major order.
    pub fn pieces_of(&self, color: Color, role: Role) -> impl Iterator<Item = Piece> + '_ {
        self.iter().filter(move |piece| piece.is(color, role))
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.grid {
            for (col, cell) in cells.iter().enumerate() {
                f.write_char(cell.piece().map_or('.', Piece::char))?;
                f.write_char(if col < 7 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.count(), 32);
        assert_eq!(
            board.piece_at(Square::new(6, 0)),
            Some(Piece::new(Role::Pawn, Color::White, Square::new(6, 0)))
        );
        assert_eq!(board.role_at(Square::new(0, 3)), Some(Role::Queen));
        assert_eq!(board.color_at(Square::new(0, 3)), Some(Color::Black));
        assert!(board.is_empty_at(Square::new(4, 4)));
        assert_eq!(board.all_pieces(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black, Role::Knight).count(), 2);
    }

    #[test]
    fn test_move_piece_updates_square() {
        let mut board = Board::new();
        let captured = board
            .move_piece(Square::new(6, 4), Square::new(4, 4))
            .expect("pawn on e2");
        assert_eq!(captured, None);
        assert!(board.is_empty_at(Square::new(6, 4)));
        let pawn = board.piece_at(Square::new(4, 4)).expect("pawn on e4");
        assert_eq!(pawn.square, Square::new(4, 4));
    }

    #[test]
    fn test_move_piece_from_empty() {
        let mut board = Board::new();
        assert_eq!(
            board.move_piece(Square::new(4, 4), Square::new(3, 4)),
            Err(PlayError::NoPieceAtOrigin)
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_capture_removes_piece() {
        let mut board = Board::empty();
        board.put(Square::new(0, 0), Role::Rook, Color::White);
        board.put(Square::new(0, 5), Role::Knight, Color::Black);
        let captured = board
            .move_piece(Square::new(0, 0), Square::new(0, 5))
            .expect("rook on a8");
        assert_eq!(captured.map(|p| p.role), Some(Role::Knight));
        assert_eq!(board.all_pieces(Color::Black).count(), 0);
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Board::new();
        let mut copy = original.duplicate();
        copy.move_piece(Square::new(7, 6), Square::new(5, 5))
            .expect("knight on g1");
        assert_eq!(
            original.piece_at(Square::new(7, 6)),
            Some(Piece::new(Role::Knight, Color::White, Square::new(7, 6)))
        );
        assert!(original.is_empty_at(Square::new(5, 5)));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_set_rebinds_piece() {
        let mut board = Board::empty();
        let rook = Piece::new(Role::Rook, Color::Black, Square::new(0, 0));
        board.set(Square::new(3, 3), Cell::Occupied(rook));
        assert_eq!(board.piece_at(Square::new(3, 3)).map(|p| p.square), Some(Square::new(3, 3)));
        assert!(board.is_empty_at(Square::new(0, 0)));
    }

    #[test]
    fn test_debug_grid() {
        let text = format!("{:?}", Board::new());
        assert!(text.starts_with("r n b q k b n r\n"));
        assert!(text.ends_with("R N B Q K B N R\n"));
    }
}
