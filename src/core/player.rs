//! Player identification and board marks.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats at the table. Only `0` and `1`
//! exist; anything else is rejected at construction and on the wire.
//!
//! ## Mark
//!
//! The content of a board cell. Player 0 always plays `X` and player 1
//! always plays `O`; the mapping is a pair of pure functions rather than a
//! lookup table, so winner attribution never depends on container order.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 2;

/// Raised when a raw integer is not a valid player ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid player id {_0}, expected 0 or 1")]
pub struct InvalidPlayerId(#[error(not(source))] pub u8);

/// Raised when a raw integer is not a valid mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid mark {_0}, expected 0, 1 or 2")]
pub struct InvalidMark(#[error(not(source))] pub u8);

/// Player identifier, either `0` (X, moves first) or `1` (O).
///
/// Serializes as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player, who plays X.
    pub const ZERO: PlayerId = PlayerId(0);

    /// The second player, who plays O.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a player ID, returning `None` outside `0..=1`.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < PLAYER_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw wire value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// The mark this player places.
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self.0 {
            0 => Mark::X,
            _ => Mark::O,
        }
    }

    /// Iterate over both player IDs.
    ///
    /// ```
    /// use tictactoe::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::ZERO, PlayerId::ONE]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ZERO, PlayerId::ONE].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(InvalidPlayerId(id))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Content of a single board cell.
///
/// Encoded on the wire as `0` (empty), `1` (X) or `2` (O).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Mark {
    #[default]
    Empty = 0,
    X = 1,
    O = 2,
}

impl Mark {
    /// The player who places this mark, `None` for an empty cell.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(PlayerId::ZERO),
            Mark::O => Some(PlayerId::ONE),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

impl TryFrom<u8> for Mark {
    type Error = InvalidMark;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Mark::Empty),
            1 => Ok(Mark::X),
            2 => Ok(Mark::O),
            other => Err(InvalidMark(other)),
        }
    }
}

impl From<Mark> for u8 {
    fn from(mark: Mark) -> Self {
        mark as u8
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Mark::Empty => ".",
            Mark::X => "X",
            Mark::O => "O",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ZERO.index(), 0);
        assert_eq!(PlayerId::ONE.index(), 1);
        assert_eq!(format!("{}", PlayerId::ZERO), "Player 0");
        assert_eq!(PlayerId::new(2), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::ZERO.opponent(), PlayerId::ONE);
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::ZERO);
    }

    #[test]
    fn test_mark_mapping_is_fixed() {
        assert_eq!(PlayerId::ZERO.mark(), Mark::X);
        assert_eq!(PlayerId::ONE.mark(), Mark::O);

        for player in PlayerId::all() {
            assert_eq!(player.mark().owner(), Some(player));
        }
        assert_eq!(Mark::Empty.owner(), None);
    }

    #[test]
    fn test_player_id_serialization() {
        assert_eq!(serde_json::to_string(&PlayerId::ONE).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::ZERO);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("-1").is_err());
    }

    #[test]
    fn test_mark_serialization() {
        assert_eq!(serde_json::to_string(&Mark::Empty).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Mark::X).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Mark>("2").unwrap(), Mark::O);
        assert!(serde_json::from_str::<Mark>("3").is_err());
    }

    #[test]
    fn test_invalid_values_display() {
        assert_eq!(InvalidPlayerId(7).to_string(), "invalid player id 7, expected 0 or 1");
        assert_eq!(InvalidMark(9).to_string(), "invalid mark 9, expected 0, 1 or 2");
    }
}
