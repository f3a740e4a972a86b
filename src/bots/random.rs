//! Uniform random bot.
//!
//! Baseline opponent for self-play tests and benchmarks.

use tracing::debug;

use super::Bot;
use crate::core::{Action, ClientGameState, GameRng};

#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Bot for RandomBot {
    fn choose_action(&mut self, snapshot: &ClientGameState) -> Option<Action> {
        if snapshot.is_game_ended {
            return None;
        }
        let actions = snapshot.legal_actions();
        let action = self.rng.choose(&actions).copied()?;
        debug!(%action, "random bot chose action");
        Some(action)
    }
}
