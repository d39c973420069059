//! A chess rules core: board model, candidate and legal move generation,
//! check and checkmate detection.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use chesscore::{Board, Color};
//!
//! let board = Board::default();
//! assert_eq!(board.all_legal_moves(Color::White).len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use chesscore::{Board, Color, Square, Status};
//!
//! let mut board = Board::default();
//! board.attempt_move(Color::White, Square::new(6, 5), Square::new(5, 5))?; // f3
//! board.attempt_move(Color::Black, Square::new(1, 4), Square::new(3, 4))?; // e5
//! board.attempt_move(Color::White, Square::new(6, 6), Square::new(4, 6))?; // g4
//! let outcome = board.attempt_move(Color::Black, Square::new(0, 3), Square::new(4, 7))?; // Qh4#
//!
//! assert_eq!(outcome.status, Status::Checkmate);
//! assert!(board.checkmate(Color::White));
//! # Ok::<_, chesscore::PlayError>(())
//! ```
//!
//! Castling, en passant, promotion and draw detection are not part of the
//! rules implemented here.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Color`], [`Role`], [`Square`], [`Status`] and [`RenderState`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for [`Color`], [`Role`] and [`Square`].
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for [`Color`], [`Role`] and [`Square`].

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod board;
mod check;
mod color;
mod legal;
mod movegen;
mod perft;
mod role;
mod square;
mod types;

pub mod fen;
pub mod session;

pub use board::Board;
pub use check::InvariantViolation;
pub use color::{ByColor, Color, ParseColorError};
pub use legal::{Outcome, PlayError, Status};
pub use movegen::MoveList;
pub use perft::perft;
pub use role::{Movement, Role};
pub use session::{Command, Direction, RenderState, Session};
pub use square::{in_bounds, ParseSquareError, Square};
pub use types::{Cell, Piece};
