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

//! Candidate move generation.
//!
//! Candidates depend on board occupancy only. Whether a candidate would
//! expose the mover's own king is decided by the legality filter in
//! [`legal`](crate::legal), which is layered on top.
//!
//! # Examples
//!
//! ```
//! use chesscore::{Board, Color, Role, Square};
//!
//! let mut board = Board::empty();
//! board.put(Square::new(0, 0), Role::Rook, Color::White);
//! let rook = board.piece_at(Square::new(0, 0)).expect("rook");
//! assert_eq!(rook.candidate_moves(&board).len(), 14);
//! ```

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    role::Movement,
    square::Square,
    types::Piece,
};

/// Destinations of a single piece. A queen in the middle of an empty board
/// has the most with 27.
pub type MoveList = ArrayVec<Square, 32>;

impl Piece {
    /// Generates the squares this piece could move to, ignoring whether
    /// the move would leave its own king in check.
    pub fn candidate_moves(&self, board: &Board) -> MoveList {
        let mut moves = MoveList::new();
        match self.role.movement() {
            Movement::Slide(dirs) => self.gen_slides(board, dirs, &mut moves),
            Movement::Step(steps) => self.gen_steps(board, steps, &mut moves),
            Movement::Pawn => self.gen_pawn(board, &mut moves),
        }
        moves
    }

    /// Whether a candidate move of this piece lands on `target`.
    pub fn attacks(&self, board: &Board, target: Square) -> bool {
        self.candidate_moves(board).contains(&target)
    }

    fn gen_slides(&self, board: &Board, dirs: &[(i32, i32)], moves: &mut MoveList) {
        for &(drow, dcol) in dirs {
            let mut previous = self.square;
            while let Some(to) = previous.offset(drow, dcol) {
                match board.color_at(to) {
                    None => moves.push(to),
                    Some(color) => {
                        if color != self.color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                previous = to;
            }
        }
    }

    fn gen_steps(&self, board: &Board, steps: &[(i32, i32)], moves: &mut MoveList) {
        moves.extend(
            steps
                .iter()
                .filter_map(|&(drow, dcol)| self.square.offset(drow, dcol))
                .filter(|&to| board.color_at(to) != Some(self.color)),
        );
    }

    fn gen_pawn(&self, board: &Board, moves: &mut MoveList) {
        let forward = self.color.forward();

        if let Some(single) = self.square.offset(forward, 0) {
            if board.is_empty_at(single) {
                moves.push(single);

                if self.square.row() == self.color.pawn_row() {
                    if let Some(double) = single.offset(forward, 0) {
                        if board.is_empty_at(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for dcol in [-1, 1] {
            if let Some(to) = self.square.offset(forward, dcol) {
                if board.color_at(to) == Some(!self.color) {
                    moves.push(to);
                }
            }
        }
    }
}

impl Board {
    /// Candidate moves of the piece on `sq`, empty if there is none.
    pub fn candidate_moves(&self, sq: Square) -> MoveList {
        self.piece_at(sq)
            .map(|piece| piece.candidate_moves(self))
            .unwrap_or_default()
    }
}
