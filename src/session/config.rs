//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};

/// Session configuration parameters.
///
/// Parses from JSON; missing fields keep their defaults, so `{}` is a
/// valid config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionConfig {
    /// Perspective of the snapshots returned to the host (default: 0).
    pub view_player: PlayerId,

    /// Seat the bot plays when asked to move (default: 1).
    pub bot_player: PlayerId,

    /// Seed for the bot's random fallback.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            view_player: PlayerId::ZERO,
            bot_player: PlayerId::ONE,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(GameError::encoding)
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a different snapshot perspective.
    pub fn with_view_player(mut self, player: PlayerId) -> Self {
        self.view_player = player;
        self
    }

    /// Create a new config with the bot in a different seat.
    pub fn with_bot_player(mut self, player: PlayerId) -> Self {
        self.bot_player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.view_player, PlayerId::ZERO);
        assert_eq!(config.bot_player, PlayerId::ONE);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_seed(123)
            .with_view_player(PlayerId::ONE)
            .with_bot_player(PlayerId::ZERO);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.view_player, PlayerId::ONE);
        assert_eq!(config.bot_player, PlayerId::ZERO);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(SessionConfig::from_json(b"{}").unwrap(), SessionConfig::default());

        let config = SessionConfig::from_json(br#"{"seed": 7, "botPlayer": 0}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.bot_player, PlayerId::ZERO);
        assert_eq!(config.view_player, PlayerId::ZERO);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        for bytes in [&br#"{"botPlayer": 2}"#[..], br#"{"sede": 1}"#, b"nope"] {
            assert!(matches!(
                SessionConfig::from_json(bytes),
                Err(GameError::EncodingFailure { .. })
            ));
        }
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"viewPlayer":0,"botPlayer":1,"seed":9}"#);
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
