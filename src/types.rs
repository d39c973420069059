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

use crate::{color::Color, role::Role, square::Square};

/// A piece standing on the board.
///
/// The square is kept in sync with the cell that holds the piece by
/// [`Board::move_piece`](crate::Board::move_piece), the only operation that
/// relocates pieces.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub square: Square,
}

impl Piece {
    pub const fn new(role: Role, color: Color, square: Square) -> Piece {
        Piece {
            role,
            color,
            square,
        }
    }

    /// The FEN letter: uppercase for White, lowercase for Black.
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    #[inline]
    pub fn is(self, color: Color, role: Role) -> bool {
        self.color == color && self.role == role
    }
}

/// The content of a square.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The color of the occupant, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        self.piece().map(|piece| piece.color)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Cell {
        piece.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Cell {
        Cell::Occupied(piece)
    }
}
