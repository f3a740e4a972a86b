//! Host-owned game session.
//!
//! A [`Session`] bundles one game, one bot and a [`SessionConfig`] and
//! speaks in bytes: actions come in as wire records, snapshots go out as
//! serialized [`ClientGameState`]s. This is everything a host embedding
//! needs; the browser bindings in `wasm` are a thin shell over it.
//!
//! Sessions are independent values. A host that wants several games
//! keeps several sessions.
//!
//! ## Example
//!
//! ```
//! use tictactoe::core::ClientGameState;
//! use tictactoe::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(1));
//! session.run_action(br#"{"playerID":0,"position":0}"#).unwrap();
//! let bytes = session.bot_run_action().unwrap();
//!
//! let view = ClientGameState::decode(&bytes).unwrap();
//! assert_eq!(view.board[4], tictactoe::core::Mark::O);
//! ```

pub mod config;

pub use config::SessionConfig;

use tracing::{debug, info, instrument};

use crate::bots::{Bot, HeuristicBot};
use crate::core::{
    Action, ActionKind, ClientGameState, GameError, GameRng, GameRngState, GameState, Result,
};

/// One game plus the bot that plays in it.
#[derive(Clone, Debug)]
pub struct Session<B: Bot = HeuristicBot> {
    config: SessionConfig,
    game: GameState,
    bot: B,
}

impl Session<HeuristicBot> {
    /// Start a session with the heuristic bot, seeded from `config`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = GameRng::from_seed(config.seed);
        info!(seed = rng.seed(), "starting session");
        Self::with_bot(config, HeuristicBot::new(rng))
    }

    /// Start a session whose bot continues a captured random stream.
    ///
    /// `config.seed` is ignored; the stream comes from `rng`.
    #[must_use]
    pub fn resume(config: SessionConfig, rng: &GameRngState) -> Self {
        info!(seed = rng.seed, word_pos = %rng.word_pos, "resuming session");
        Self::with_bot(config, HeuristicBot::new(GameRng::from_state(rng)))
    }

    /// Position of the bot's random stream, so a session can be replayed.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.bot.rng().state()
    }
}

impl Default for Session<HeuristicBot> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<B: Bot> Session<B> {
    /// Start a session with any bot.
    pub fn with_bot(config: SessionConfig, bot: B) -> Self {
        Self {
            config,
            game: GameState::new(),
            bot,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Snapshot from the configured view perspective.
    #[must_use]
    pub fn snapshot(&self) -> ClientGameState {
        self.game.project(self.config.view_player)
    }

    /// Serialized snapshot from the configured view perspective.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>> {
        self.snapshot().encode()
    }

    /// Replace the game with a fresh one and return its snapshot.
    ///
    /// The bot is kept, so a seeded session continues its random stream.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Vec<u8>> {
        self.game = GameState::new();
        debug!("game reset");
        self.snapshot_bytes()
    }

    /// Decode an action, apply it, return the new snapshot.
    ///
    /// On error the game is unchanged.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn run_action(&mut self, bytes: &[u8]) -> Result<Vec<u8>> {
        let action = Action::decode(bytes)?;
        self.game.apply(Some(&action))?;
        self.snapshot_bytes()
    }

    /// Let the bot move for its seat, then return the new snapshot.
    ///
    /// Does nothing to a finished game. Out of turn the bot can only
    /// propose moves for the other seat, which are refused with
    /// `IllegalAction`.
    #[instrument(skip(self))]
    pub fn bot_run_action(&mut self) -> Result<Vec<u8>> {
        if !self.game.is_terminal() {
            let view = self.game.project(self.config.bot_player);
            let action = self.bot.choose_action(&view);
            if let Some(action) = action.filter(|a| a.player_id() != Some(self.config.bot_player)) {
                debug!(%action, seat = %self.config.bot_player, "bot proposed a move for the other seat");
                return Err(GameError::IllegalAction { action });
            }
            self.game.apply(action.as_ref())?;
        } else {
            debug!(status = %self.game.status(), "game over, bot skips");
        }
        self.snapshot_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::RandomBot;
    use crate::core::{Mark, PlayerId};

    fn decode(bytes: &[u8]) -> ClientGameState {
        ClientGameState::decode(bytes).unwrap()
    }

    #[test]
    fn test_new_session_snapshot() {
        let session = Session::new(SessionConfig::default().with_seed(1));
        let view = decode(&session.snapshot_bytes().unwrap());

        assert_eq!(view, GameState::new().project(PlayerId::ZERO));
        assert_eq!(session.config().seed, Some(1));
    }

    #[test]
    fn test_run_action_then_bot() {
        let mut session = Session::new(SessionConfig::default().with_seed(1));

        let view = decode(&session.run_action(br#"{"playerID":0,"position":0}"#).unwrap());
        assert_eq!(view.board[0], Mark::X);
        assert_eq!(view.current_player_id, PlayerId::ONE);

        let view = decode(&session.bot_run_action().unwrap());
        assert_eq!(view.board[4], Mark::O);
        assert_eq!(view.current_player_id, PlayerId::ZERO);
        assert_eq!(view.you_player_id, PlayerId::ZERO);
    }

    #[test]
    fn test_run_action_errors_keep_game() {
        let mut session = Session::new(SessionConfig::default().with_seed(1));
        session.run_action(br#"{"playerID":0,"position":0}"#).unwrap();
        let before = session.game().clone();

        assert!(matches!(
            session.run_action(b"garbage"),
            Err(GameError::UnknownAction { .. })
        ));
        assert!(matches!(
            session.run_action(br#"{"playerID":1,"position":0}"#),
            Err(GameError::IllegalAction { .. })
        ));
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_bot_skips_finished_game() {
        let mut session = Session::new(SessionConfig::default().with_seed(1));
        for (player, position) in [(0, 0), (1, 3), (0, 1), (1, 4), (0, 2)] {
            let bytes = format!(r#"{{"playerID":{player},"position":{position}}}"#);
            session.run_action(bytes.as_bytes()).unwrap();
        }
        let before = session.game().clone();

        let view = decode(&session.bot_run_action().unwrap());
        assert!(view.is_game_ended);
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_bot_out_of_turn_is_rejected() {
        let mut session = Session::new(SessionConfig::default().with_seed(1));
        let before = session.game().clone();

        assert!(matches!(
            session.bot_run_action(),
            Err(GameError::IllegalAction { .. })
        ));
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_resume_continues_bot_stream() {
        let config = SessionConfig::default().with_seed(17);
        let mut original = Session::new(config.clone());
        original.run_action(br#"{"playerID":0,"position":0}"#).unwrap();

        let captured = original.rng_state();
        assert_eq!(captured.seed, 17);

        let mut resumed = Session::resume(config, &captured);
        assert_eq!(resumed.rng_state(), captured);

        resumed.run_action(br#"{"playerID":0,"position":0}"#).unwrap();
        assert_eq!(resumed.bot_run_action().unwrap(), original.bot_run_action().unwrap());
        assert_eq!(resumed.rng_state(), original.rng_state());
    }

    #[test]
    fn test_reset() {
        let mut session = Session::with_bot(SessionConfig::default(), RandomBot::with_seed(3));
        session.run_action(br#"{"playerID":0,"position":8}"#).unwrap();

        let view = decode(&session.reset().unwrap());
        assert_eq!(view, GameState::new().project(PlayerId::ZERO));
    }

    #[test]
    fn test_bot_plays_first_when_seated_as_zero() {
        let config = SessionConfig::default()
            .with_seed(1)
            .with_bot_player(PlayerId::ZERO)
            .with_view_player(PlayerId::ONE);
        let mut session = Session::new(config);

        let view = decode(&session.bot_run_action().unwrap());
        assert_eq!(view.board[4], Mark::X);
        assert_eq!(view.you_player_id, PlayerId::ONE);
        assert_eq!(view.your_symbol, Mark::O);
    }
}
