//! Game outcomes and the state machine view of a game.

use serde::{Deserialize, Serialize};

use super::lines::winning_mark;
use crate::core::{Board, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Board full, no line.
    Draw,
}

impl GameResult {
    /// The winning player, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Where a game stands.
///
/// `Active(p)` moves to `Active(p.opponent())`, `Won(p)` or `Draw` on a
/// legal placement by `p`. The two terminal states have no way out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting on this player.
    Active(PlayerId),
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active(p) => write!(f, "active ({p} to move)"),
            GameStatus::Won(p) => write!(f, "won by {p}"),
            GameStatus::Draw => f.write_str("draw"),
        }
    }
}

/// Check if the board is finished.
///
/// Returns `Some(result)` if a line is complete or the board is full,
/// `None` if play continues.
#[must_use]
pub fn check_terminal(board: &Board) -> Option<GameResult> {
    if let Some(mark) = winning_mark(board) {
        return mark.owner().map(GameResult::Winner);
    }
    board.is_full().then_some(GameResult::Draw)
}
