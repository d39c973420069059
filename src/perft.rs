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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use chesscore::{perft, Board, Color};
//!
//! let board = Board::default();
//! assert_eq!(perft(&board, Color::White, 1), 20);
//! assert_eq!(perft(&board, Color::White, 2), 400);
//! ```

use crate::{board::Board, color::Color};

/// Counts legal move paths of a given length, starting with `turn` to move.
///
/// Paths ending in checkmate early are not counted. Useful for comparing,
/// testing and debugging move generation correctness.
pub fn perft(board: &Board, turn: Color, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = board.all_legal_moves(turn);

    if depth == 1 {
        moves.len() as u64
    } else {
        moves
            .into_iter()
            .map(|(from, to)| {
                let mut child = board.duplicate();
                match child.move_piece(from, to) {
                    Ok(_) => perft(&child, !turn, depth - 1),
                    Err(_) => 0,
                }
            })
            .sum()
    }
}
