//! Tic-tac-toe rules: winning lines and terminal detection.
//!
//! The functions here are pure and operate on a [`Board`](crate::core::Board)
//! alone. Both the game core and the heuristic bot go through them, so the
//! bot's "would this win?" test is exactly the check the core runs after a
//! move.

pub mod lines;
pub mod outcome;

pub use lines::{completes_line, has_line, winning_mark, LINES};
pub use outcome::{check_terminal, GameResult, GameStatus};
