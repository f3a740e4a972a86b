//! Engine error type.

use derive_more::{Display, Error};

use super::action::Action;

/// Errors returned by the game core and the session layer.
///
/// The bot never produces these; it returns `None` instead.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The action fails the legality predicate: wrong player,
    /// position off the board, or cell already taken.
    #[display("illegal action: {action}")]
    IllegalAction {
        action: Action,
    },

    /// An action was applied to a finished game.
    #[display("game has already ended")]
    GameEnded,

    /// The bytes do not decode as any known action variant.
    #[display("unknown action: {reason}")]
    UnknownAction {
        reason: String,
    },

    /// A snapshot could not be serialized or parsed.
    #[display("encoding failure: {reason}")]
    EncodingFailure {
        reason: String,
    },

    /// A board handed to `GameState::from_board` cannot arise in play.
    #[display("invalid position: {reason}")]
    InvalidPosition {
        reason: String,
    },

    /// A session entry point ran before a game was created.
    #[display("no active game")]
    NoActiveGame,
}

impl GameError {
    pub(crate) fn encoding(err: impl std::fmt::Display) -> Self {
        GameError::EncodingFailure {
            reason: err.to_string(),
        }
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
