//! # rust-tictactoe
//!
//! A two-player tic-tac-toe engine with a rule-based bot, built to be
//! embedded in a browser host.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: `GameState` owns the board and is mutated only through
//!    `apply`. No I/O, no globals, no hidden randomness.
//!
//! 2. **Bytes at the Edge**: actions and snapshots cross the host boundary as
//!    JSON records. Legal actions are cached pre-serialized so a client can
//!    echo one back unchanged.
//!
//! 3. **Injected Randomness**: the bot's only random choice draws from a
//!    seedable `GameRng`, so every game is reproducible under test.
//!
//! ## Modules
//!
//! - `core`: players, board, actions, state, client projection, RNG, errors
//! - `rules`: winning lines and terminal detection
//! - `bots`: the `Bot` trait, the heuristic cascade and a random baseline
//! - `session`: host-owned game plus bot, speaking in bytes
//! - `wasm`: browser bindings (feature `wasm`)

pub mod core;
pub mod rules;
pub mod bots;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, PlaceSymbol, RawAction,
    Board, Mark, PlayerId,
    GameError, GameRng, GameRngState,
    GameState, ClientGameState,
};

pub use crate::rules::{GameResult, GameStatus};

pub use crate::bots::{Bot, HeuristicBot, RandomBot, Rule};

pub use crate::session::{Session, SessionConfig};
