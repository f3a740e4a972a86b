//! Core engine types: players, board, actions, state, projection, RNG.
//!
//! Everything here is pure and deterministic. The only mutation entry
//! point is [`GameState::apply`].

pub mod action;
pub mod board;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Action, ActionKind, PlaceSymbol, RawAction};
pub use board::{Board, CellList, CELL_COUNT, CENTER, CORNERS};
pub use error::{GameError, Result};
pub use player::{InvalidMark, InvalidPlayerId, Mark, PlayerId, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
pub use view::ClientGameState;
