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

//! Check and checkmate detection.
//!
//! Attacks are computed from candidate moves. Checking a king never asks
//! for legal moves, so check detection and the legality filter built on top
//! of it cannot recurse into each other.

use std::{error::Error, fmt};

use crate::{board::Board, color::Color, role::Role, square::Square};

/// A color has no king on the board.
///
/// Boards reachable from the starting position always have one king per
/// color, so this indicates corrupted state rather than a user error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvariantViolation {
    pub color: Color,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant violated: {} has no king", self.color)
    }
}

impl Error for InvariantViolation {}

impl Board {
    /// The square of the first king of `color` in row-major order.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, Role::King)
            .next()
            .map(|king| king.square)
    }

    /// The square of the king of `color`.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvariantViolation`] if `color` has no king.
    #[track_caller]
    pub fn king_position(&self, color: Color) -> Square {
        match self.king_of(color) {
            Some(sq) => sq,
            None => panic!("{}", InvariantViolation { color }),
        }
    }

    /// Whether any piece of `by` has `sq` among its candidate moves.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.all_pieces(by).any(|piece| piece.attacks(self, sq))
    }

    /// Whether the king of `color` is attacked.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king, see [`Board::king_position`].
    pub fn in_check(&self, color: Color) -> bool {
        self.is_attacked(self.king_position(color), !color)
    }

    /// Whether `color` is in check and has no legal move.
    pub fn checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_moves(color)
    }
}
