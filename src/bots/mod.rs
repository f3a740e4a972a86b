//! Opponents that pick a move from a client snapshot.
//!
//! A bot sees exactly what a client sees, a [`ClientGameState`], and
//! answers with one of the snapshot's legal actions, or `None` when there
//! is nothing to play. Bots never error and never touch the game; the
//! caller applies the answer.
//!
//! - [`HeuristicBot`]: win, block, center, corner, then random
//! - [`RandomBot`]: uniform over the legal actions

pub mod heuristic;
pub mod random;

pub use heuristic::{HeuristicBot, Rule};
pub use random::RandomBot;

use crate::core::{Action, ClientGameState};

/// Move chooser.
pub trait Bot {
    /// Pick an action from `snapshot.possible_actions`.
    ///
    /// Returns `None` when the game has ended or no action decodes.
    fn choose_action(&mut self, snapshot: &ClientGameState) -> Option<Action>;
}

impl<B: Bot + ?Sized> Bot for Box<B> {
    fn choose_action(&mut self, snapshot: &ClientGameState) -> Option<Action> {
        (**self).choose_action(snapshot)
    }
}
