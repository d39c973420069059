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

//! Legal move filtering and validated move execution.
//!
//! A candidate is legal if playing it on a duplicate of the board does not
//! leave the mover's king in check. The live board is only mutated once a
//! move has been accepted.

use std::{error::Error, fmt};

use tracing::{debug, trace};

use crate::{
    board::Board,
    color::Color,
    movegen::MoveList,
    square::Square,
    types::Piece,
};

/// Error when a move cannot be played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// The origin square is empty.
    NoPieceAtOrigin,
    /// The piece on the origin belongs to the other side.
    WrongColorTurn,
    /// The destination is not a legal move for the piece.
    IllegalDestination,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayError::NoPieceAtOrigin => "no piece at origin",
            PlayError::WrongColorTurn => "piece belongs to the other side",
            PlayError::IllegalDestination => "illegal destination",
        })
    }
}

impl Error for PlayError {}

/// State of a side after its opponent moved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
}

impl Status {
    pub fn is_check(self) -> bool {
        matches!(self, Status::Check | Status::Checkmate)
    }
}

/// Result of a successful [`Board::attempt_move`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Status of the side that has to reply.
    pub status: Status,
}

impl Board {
    /// Filters the candidate moves of `piece` down to those that do not
    /// leave its own king in check.
    ///
    /// # Panics
    ///
    /// Panics if the piece's color has no king.
    pub fn legal_moves(&self, piece: &Piece) -> MoveList {
        let mut moves = piece.candidate_moves(self);
        moves.retain(|to| self.is_safe(piece, *to));
        moves
    }

    fn is_safe(&self, piece: &Piece, to: Square) -> bool {
        let mut after = self.duplicate();
        match after.move_piece(piece.square, to) {
            Ok(_) => !after.in_check(piece.color),
            Err(_) => false,
        }
    }

    /// Whether any piece of `color` has a legal move.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.all_pieces(color)
            .any(|piece| !self.legal_moves(&piece).is_empty())
    }

    /// All legal `(from, to)` pairs of `color`, grouped by origin in
    /// row-major order.
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.all_pieces(color)
            .flat_map(|piece| {
                self.legal_moves(&piece)
                    .into_iter()
                    .map(move |to| (piece.square, to))
            })
            .collect()
    }

    /// Status of `color`, which is about to move.
    pub fn status(&self, color: Color) -> Status {
        if !self.in_check(color) {
            Status::Ongoing
        } else if self.has_legal_moves(color) {
            Status::Check
        } else {
            Status::Checkmate
        }
    }

    /// Validates and plays a move for `color`.
    ///
    /// # Errors
    ///
    /// * [`PlayError::NoPieceAtOrigin`] if `from` is empty.
    /// * [`PlayError::WrongColorTurn`] if the piece on `from` is not of `color`.
    /// * [`PlayError::IllegalDestination`] if `to` is not among the legal
    ///   moves of that piece.
    ///
    /// The board is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesscore::{Board, Color, PlayError, Square, Status};
    ///
    /// let mut board = Board::default();
    /// let e2: Square = "e2".parse()?;
    /// let e4: Square = "e4".parse()?;
    ///
    /// assert_eq!(
    ///     board.attempt_move(Color::Black, e2, e4),
    ///     Err(PlayError::WrongColorTurn)
    /// );
    ///
    /// let outcome = board.attempt_move(Color::White, e2, e4)?;
    /// assert_eq!(outcome.status, Status::Ongoing);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn attempt_move(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<Outcome, PlayError> {
        let result = self.validate(color, from, to);
        match result {
            Ok(()) => {
                let captured = self.move_piece(from, to)?;
                let status = self.status(!color);
                debug!(%color, %from, %to, captured = ?captured.map(|p| p.role), ?status, "move played");
                Ok(Outcome {
                    from,
                    to,
                    captured,
                    status,
                })
            }
            Err(err) => {
                trace!(%color, %from, %to, %err, "move rejected");
                Err(err)
            }
        }
    }

    fn validate(&self, color: Color, from: Square, to: Square) -> Result<(), PlayError> {
        let piece = self.piece_at(from).ok_or(PlayError::NoPieceAtOrigin)?;
        if piece.color != color {
            return Err(PlayError::WrongColorTurn);
        }
        if !self.legal_moves(&piece).contains(&to) {
            return Err(PlayError::IllegalDestination);
        }
        Ok(())
    }
}
