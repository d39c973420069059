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

//! Turn and selection state driven by an interactive front end.
//!
//! A front end maps its raw input to [`Command`]s and renders frames from
//! [`RenderState`] snapshots. All rules live in [`Board`]; the session only
//! tracks whose turn it is, the cursor, and a pending move origin.

use tracing::debug;

use crate::{
    board::Board,
    color::Color,
    fen::Fen,
    legal::{Outcome, PlayError, Status},
    movegen::MoveList,
    role::Role,
    square::Square,
};

/// Cursor movement on screen. `Up` points toward row 0.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A discrete command acting on the cursor square.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Command {
    Cursor(Direction),
    Select,
    Confirm,
    Deselect,
}

/// Read-only snapshot for rendering a frame.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderState {
    /// `grid[row][col]`.
    pub grid: [[Option<(Role, Color)>; 8]; 8],
    /// The cursor square.
    pub highlighted: Square,
    /// The pending move origin.
    pub selected: Option<Square>,
    pub turn: Color,
}

impl RenderState {
    #[inline]
    pub fn at(&self, sq: Square) -> Option<(Role, Color)> {
        self.grid[usize::from(sq.row())][usize::from(sq.col())]
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    turn: Color,
    cursor: Square,
    selected: Option<Square>,
    winner: Option<Color>,
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

impl From<Fen> for Session {
    fn from(fen: Fen) -> Session {
        Session::with_board(fen.board, fen.turn)
    }
}

impl Session {
    /// Starts from the standard position with White to move.
    pub fn new() -> Session {
        Session::with_board(Board::default(), Color::White)
    }

    /// Starts from an arbitrary board with `turn` to move.
    ///
    /// Use [`Fen`] parsing to validate untrusted setups first.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvariantViolation`](crate::InvariantViolation) if
    /// either color has no king, and if the side not to move is in check.
    #[track_caller]
    pub fn with_board(board: Board, turn: Color) -> Session {
        for color in Color::ALL {
            board.king_position(color);
        }
        assert!(!board.in_check(!turn), "{} to move can capture the {} king", turn, !turn);
        let winner = board.checkmate(turn).then_some(!turn);
        Session {
            board,
            turn,
            cursor: Square::new(0, 0),
            selected: None,
            winner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn cursor(&self) -> Square {
        self.cursor
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// The side that delivered checkmate, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Moves the cursor, stopping at the edge of the board.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (drow, dcol) = direction.delta();
        if let Some(sq) = self.cursor.offset(drow, dcol) {
            self.cursor = sq;
        }
    }

    /// Marks `sq` as the move origin if it holds a piece of the side to
    /// move. Otherwise nothing changes. Returns whether `sq` was selected.
    pub fn select(&mut self, sq: Square) -> bool {
        if self.is_over() || self.board.color_at(sq) != Some(self.turn) {
            debug!(%sq, turn = %self.turn, "selection ignored");
            return false;
        }
        debug!(%sq, "origin selected");
        self.selected = Some(sq);
        true
    }

    pub fn select_cursor(&mut self) -> bool {
        self.select(self.cursor)
    }

    /// Attempts to move the pending origin to `sq`.
    ///
    /// Returns `None` if no origin is pending. The pending origin is cleared
    /// whatever the outcome. On success the turn passes to the opponent.
    pub fn confirm(&mut self, sq: Square) -> Option<Result<Outcome, PlayError>> {
        let from = self.selected.take()?;
        let result = self.board.attempt_move(self.turn, from, sq);
        if let Ok(outcome) = result {
            if outcome.status == Status::Checkmate {
                debug!(winner = %self.turn, "checkmate");
                self.winner = Some(self.turn);
            }
            self.turn = !self.turn;
        }
        Some(result)
    }

    pub fn confirm_cursor(&mut self) -> Option<Result<Outcome, PlayError>> {
        self.confirm(self.cursor)
    }

    /// Clears the pending origin without acting.
    pub fn deselect(&mut self) {
        if self.selected.take().is_some() {
            debug!("origin cleared");
        }
    }

    /// Applies a command at the cursor. Only [`Command::Confirm`] can
    /// produce a move result.
    pub fn apply(&mut self, command: Command) -> Option<Result<Outcome, PlayError>> {
        match command {
            Command::Cursor(direction) => self.move_cursor(direction),
            Command::Select => {
                self.select_cursor();
            }
            Command::Confirm => return self.confirm_cursor(),
            Command::Deselect => self.deselect(),
        }
        None
    }

    /// Legal destinations of the pending origin.
    pub fn targets(&self) -> MoveList {
        self.selected
            .and_then(|sq| self.board.piece_at(sq))
            .map(|piece| self.board.legal_moves(&piece))
            .unwrap_or_default()
    }

    pub fn render_state(&self) -> RenderState {
        let mut grid = [[None; 8]; 8];
        for piece in self.board.iter() {
            grid[usize::from(piece.square.row())][usize::from(piece.square.col())] =
                Some((piece.role, piece.color));
        }
        RenderState {
            grid,
            highlighted: self.cursor,
            selected: self.selected,
            turn: self.turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_clamped() {
        let mut session = Session::new();
        session.move_cursor(Direction::Up);
        session.move_cursor(Direction::Left);
        assert_eq!(session.cursor(), Square::new(0, 0));
        for _ in 0..10 {
            session.move_cursor(Direction::Down);
            session.move_cursor(Direction::Right);
        }
        assert_eq!(session.cursor(), Square::new(7, 7));
    }

    #[test]
    fn test_select_only_own_pieces() {
        let mut session = Session::new();
        assert!(!session.select(Square::new(1, 0)));
        assert!(!session.select(Square::new(4, 4)));
        assert_eq!(session.selected(), None);
        assert!(session.select(Square::new(6, 0)));
        assert!(!session.select(Square::new(0, 0)));
        assert_eq!(session.selected(), Some(Square::new(6, 0)));
    }

    #[test]
    fn test_confirm_without_origin() {
        let mut session = Session::new();
        assert_eq!(session.confirm(Square::new(4, 4)), None);
        assert_eq!(session.turn(), Color::White);
    }

    #[test]
    fn test_confirm_clears_origin_on_failure() {
        let mut session = Session::new();
        session.select(Square::new(6, 4));
        assert_eq!(
            session.confirm(Square::new(3, 4)),
            Some(Err(PlayError::IllegalDestination))
        );
        assert_eq!(session.selected(), None);
        assert_eq!(session.turn(), Color::White);
    }

    #[test]
    fn test_confirm_passes_turn() {
        let mut session = Session::new();
        session.select(Square::new(6, 4));
        let outcome = session
            .confirm(Square::new(4, 4))
            .expect("origin pending")
            .expect("legal move");
        assert_eq!(outcome.status, Status::Ongoing);
        assert_eq!(session.turn(), Color::Black);
        assert!(!session.select(Square::new(4, 4)));
    }

    #[test]
    fn test_deselect() {
        let mut session = Session::new();
        session.select(Square::new(7, 1));
        assert_eq!(session.targets().len(), 2);
        session.deselect();
        assert_eq!(session.selected(), None);
        assert!(session.targets().is_empty());
    }

    #[test]
    fn test_render_state() {
        let mut session = Session::new();
        session.apply(Command::Cursor(Direction::Down));
        let state = session.render_state();
        assert_eq!(state.highlighted, Square::new(1, 0));
        assert_eq!(state.at(Square::new(7, 4)), Some((Role::King, Color::White)));
        assert_eq!(state.at(Square::new(4, 4)), None);
        assert_eq!(state.turn, Color::White);
        assert_eq!(state.grid.iter().flatten().filter(|c| c.is_some()).count(), 32);
    }

    #[test]
    #[should_panic(expected = "white has no king")]
    fn test_with_board_requires_kings() {
        let mut board = Board::empty();
        board.put(Square::new(0, 4), Role::King, Color::Black);
        board.put(Square::new(7, 0), Role::Rook, Color::White);
        Session::with_board(board, Color::White);
    }

    #[test]
    #[should_panic(expected = "can capture the black king")]
    fn test_with_board_rejects_opposite_check() {
        let board: Board = "4k3/8/8/8/8/8/8/4RK2".parse().expect("valid placement");
        Session::with_board(board, Color::White);
    }

    #[test]
    fn test_render_state_parity() {
        let state = Session::new().render_state();
        assert!(!state.highlighted.is_dark());
        assert_eq!(
            Square::all().filter(|sq| sq.is_dark()).count(),
            32
        );
        assert!(Square::new(7, 6).is_dark());
        assert!(!Square::new(7, 7).is_dark());
    }
}
