//! Client view projection.
//!
//! A [`ClientGameState`] is what a client (or a bot) sees: the
//! authoritative fields copied verbatim, plus four fields relative to the
//! requested perspective. Tic-tac-toe has no hidden information, so
//! nothing is filtered out.
//!
//! ## Wire form
//!
//! ```text
//! {
//!   "board": [0,0,0,0,0,0,0,0,0],
//!   "currentPlayerID": 0,
//!   "isGameEnded": false,
//!   "winnerPlayerID": -1,
//!   "possibleActions": [{"playerID":0,"position":0}, ...],
//!   "youPlayerID": 0,
//!   "themPlayerID": 1,
//!   "yourSymbol": 1,
//!   "theirSymbol": 2
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::action::{Action, RawAction};
use super::board::Board;
use super::error::{GameError, Result};
use super::player::{Mark, PlayerId};
use super::state::GameState;
use crate::rules::GameStatus;

/// Read-only, per-perspective snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientGameState {
    pub board: Board,
    #[serde(rename = "currentPlayerID")]
    pub current_player_id: PlayerId,
    #[serde(rename = "isGameEnded")]
    pub is_game_ended: bool,
    /// `-1` on the wire when there is no winner.
    #[serde(rename = "winnerPlayerID", with = "winner_id")]
    pub winner_player_id: Option<PlayerId>,
    #[serde(rename = "possibleActions")]
    pub possible_actions: Vec<RawAction>,
    #[serde(rename = "youPlayerID")]
    pub you_player_id: PlayerId,
    #[serde(rename = "themPlayerID")]
    pub them_player_id: PlayerId,
    #[serde(rename = "yourSymbol")]
    pub your_symbol: Mark,
    #[serde(rename = "theirSymbol")]
    pub their_symbol: Mark,
}

impl ClientGameState {
    /// Project `state` for `perspective`.
    #[must_use]
    pub fn from_state(state: &GameState, perspective: PlayerId) -> Self {
        let opponent = perspective.opponent();
        Self {
            board: *state.board(),
            current_player_id: state.current_player(),
            is_game_ended: state.is_terminal(),
            winner_player_id: state.winner(),
            possible_actions: state.possible_actions().to_vec(),
            you_player_id: perspective,
            them_player_id: opponent,
            your_symbol: perspective.mark(),
            their_symbol: opponent.mark(),
        }
    }

    /// Serialize to the wire form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(GameError::encoding)
    }

    /// Parse a snapshot from the wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(GameError::encoding)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.is_game_ended, self.winner_player_id) {
            (false, _) => GameStatus::Active(self.current_player_id),
            (true, Some(winner)) => GameStatus::Won(winner),
            (true, None) => GameStatus::Draw,
        }
    }

    /// Decode `possibleActions`, skipping records no decoder recognizes.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.possible_actions
            .iter()
            .filter_map(|raw| match raw.decode() {
                Ok(action) => Some(action),
                Err(err) => {
                    trace!(record = raw.as_str(), %err, "skipping undecodable action");
                    None
                }
            })
            .collect()
    }
}

/// `Option<PlayerId>` as a signed integer, `-1` standing for `None`.
pub(crate) mod winner_id {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::PlayerId;

    pub fn serialize<S: Serializer>(
        winner: &Option<PlayerId>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match winner {
            Some(player) => serializer.serialize_i8(player.raw() as i8),
            None => serializer.serialize_i8(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<PlayerId>, D::Error> {
        let raw = i8::deserialize(deserializer)?;
        if raw == -1 {
            return Ok(None);
        }
        u8::try_from(raw)
            .ok()
            .and_then(PlayerId::new)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid winner id {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlaceSymbol;

    fn place(player: PlayerId, position: i32) -> Action {
        Action::PlaceSymbol(PlaceSymbol::new(player, position))
    }

    #[test]
    fn test_projection_mirrors_state() {
        let mut state = GameState::new();
        state.apply(Some(&place(PlayerId::ZERO, 4))).unwrap();

        for perspective in PlayerId::all() {
            let view = state.project(perspective);
            assert_eq!(&view.board, state.board());
            assert_eq!(view.current_player_id, state.current_player());
            assert_eq!(view.is_game_ended, state.is_terminal());
            assert_eq!(view.winner_player_id, state.winner());
            assert_eq!(view.possible_actions, state.possible_actions());
            assert_eq!(view.you_player_id, perspective);
            assert_eq!(view.them_player_id, perspective.opponent());
            assert_eq!(view.your_symbol, perspective.mark());
            assert_eq!(view.their_symbol, perspective.opponent().mark());
        }
    }

    #[test]
    fn test_initial_wire_form() {
        let view = GameState::new().project(PlayerId::ZERO);
        let json: serde_json::Value = serde_json::from_slice(&view.encode().unwrap()).unwrap();

        let possible: Vec<serde_json::Value> = (0..9)
            .map(|pos| serde_json::json!({"playerID": 0, "position": pos}))
            .collect();
        assert_eq!(
            json,
            serde_json::json!({
                "board": [0, 0, 0, 0, 0, 0, 0, 0, 0],
                "currentPlayerID": 0,
                "isGameEnded": false,
                "winnerPlayerID": -1,
                "possibleActions": possible,
                "youPlayerID": 0,
                "themPlayerID": 1,
                "yourSymbol": 1,
                "theirSymbol": 2,
            })
        );
    }

    #[test]
    fn test_terminal_wire_form_keeps_empty_array() {
        let mut state = GameState::new();
        for (player, position) in [(0, 0), (1, 3), (0, 1), (1, 4), (0, 2)] {
            let player = PlayerId::new(player).unwrap();
            state.apply(Some(&place(player, position))).unwrap();
        }
        let json: serde_json::Value =
            serde_json::from_slice(&state.project(PlayerId::ONE).encode().unwrap()).unwrap();

        assert_eq!(json["possibleActions"], serde_json::json!([]));
        assert_eq!(json["winnerPlayerID"], 0);
        assert_eq!(json["isGameEnded"], true);
        assert_eq!(json["yourSymbol"], 2);
    }

    #[test]
    fn test_decode_encoded_snapshot() {
        let view = GameState::new().project(PlayerId::ONE);
        let decoded = ClientGameState::decode(&view.encode().unwrap()).unwrap();
        assert_eq!(decoded, view);
        assert_eq!(decoded.status(), GameStatus::Active(PlayerId::ZERO));
    }

    #[test]
    fn test_decode_rejects_bad_winner() {
        let mut json: serde_json::Value =
            serde_json::from_slice(&GameState::new().project(PlayerId::ZERO).encode().unwrap())
                .unwrap();
        json["winnerPlayerID"] = serde_json::json!(5);
        let bytes = serde_json::to_vec(&json).unwrap();
        assert!(matches!(
            ClientGameState::decode(&bytes),
            Err(GameError::EncodingFailure { .. })
        ));
    }

    #[test]
    fn test_legal_actions_skip_unknown_records() {
        let mut view = GameState::new().project(PlayerId::ZERO);
        let unknown: RawAction = serde_json::from_str(r#"{"kind":"pass"}"#).unwrap();
        view.possible_actions.insert(0, unknown);

        let actions = view.legal_actions();
        assert_eq!(actions.len(), 9);
        assert_eq!(actions[0], place(PlayerId::ZERO, 0));
    }
}
