//! Action representation and the action wire form.
//!
//! Actions form an open set: each variant is its own type implementing
//! [`ActionKind`], and [`Action`] is the tagged sum that dispatches to
//! them. Only [`PlaceSymbol`] exists today.
//!
//! ## Wire form
//!
//! Every variant serializes as a flat JSON record. `PlaceSymbol` is
//!
//! ```text
//! { "playerID": 0, "position": 4 }
//! ```
//!
//! Decoding tries each variant's shape in turn ([`DECODERS`]) and fails
//! with [`GameError::UnknownAction`] if none accepts the bytes.
//!
//! ## Example
//!
//! ```
//! use tictactoe::core::{Action, PlaceSymbol, PlayerId};
//!
//! let action = Action::PlaceSymbol(PlaceSymbol::new(PlayerId::ZERO, 4));
//! let bytes = action.encode().unwrap();
//! assert_eq!(bytes, br#"{"playerID":0,"position":4}"#);
//! assert_eq!(Action::decode(&bytes).unwrap(), action);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::board::CELL_COUNT;
use super::error::{GameError, Result};
use super::player::PlayerId;
use super::state::GameState;

/// Behavior every action variant provides.
pub trait ActionKind {
    /// Whether the action may be applied to `state` right now.
    fn is_legal(&self, state: &GameState) -> bool;

    /// Apply the action's board effect.
    ///
    /// Fails with `IllegalAction` and leaves `state` untouched when
    /// `is_legal` is false. Terminal detection and turn passing are done by
    /// [`GameState::apply`], not here.
    fn apply(&self, state: &mut GameState) -> Result<()>;

    /// Stable name tag of the variant.
    fn name(&self) -> &'static str;

    /// The player taking the action, `None` if the record names no seat.
    fn player_id(&self) -> Option<PlayerId>;
}

/// Place the acting player's mark on an empty cell.
///
/// Both fields are kept as raw signed integers so that any integer
/// decodes; a seat or cell outside the game is rejected by the legality
/// check rather than the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceSymbol {
    #[serde(rename = "playerID")]
    pub player_id: i32,
    pub position: i32,
}

impl PlaceSymbol {
    #[must_use]
    pub const fn new(player: PlayerId, position: i32) -> Self {
        Self::from_raw(player.raw() as i32, position)
    }

    /// Build from wire integers without checking either.
    #[must_use]
    pub const fn from_raw(player_id: i32, position: i32) -> Self {
        Self {
            player_id,
            position,
        }
    }

    /// The acting seat, `None` if `player_id` is not 0 or 1.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        u8::try_from(self.player_id).ok().and_then(PlayerId::new)
    }

    /// The target cell, `None` if `position` is off the board.
    #[must_use]
    pub fn cell(&self) -> Option<usize> {
        usize::try_from(self.position)
            .ok()
            .filter(|&cell| cell < CELL_COUNT)
    }
}

impl ActionKind for PlaceSymbol {
    fn is_legal(&self, state: &GameState) -> bool {
        !state.is_terminal()
            && self.player() == Some(state.current_player())
            && self.cell().is_some_and(|cell| state.board().is_open(cell))
    }

    fn apply(&self, state: &mut GameState) -> Result<()> {
        match (self.player(), self.cell()) {
            (Some(player), Some(cell)) if self.is_legal(state) => {
                state.place(cell, player.mark());
                Ok(())
            }
            _ => Err(GameError::IllegalAction {
                action: Action::PlaceSymbol(*self),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "PLACE_SYMBOL"
    }

    fn player_id(&self) -> Option<PlayerId> {
        self.player()
    }
}

impl std::fmt::Display for PlaceSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Place symbol at position {}", self.position)
    }
}

/// A complete game action.
///
/// Serializes untagged: the wire form is the variant's own record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Action {
    PlaceSymbol(PlaceSymbol),
}

/// One decoder per variant, tried in order by [`Action::decode`].
pub const DECODERS: &[fn(&[u8]) -> serde_json::Result<Action>] = &[decode_place_symbol];

// Records only: a bare `[0, 4]` would otherwise satisfy serde's sequence form.
fn decode_place_symbol(bytes: &[u8]) -> serde_json::Result<Action> {
    let record: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;
    serde_json::from_value::<PlaceSymbol>(serde_json::Value::Object(record)).map(Action::PlaceSymbol)
}

impl Action {
    /// Decode an action from its wire form.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut last_err = None;
        for decoder in DECODERS {
            match decoder(bytes) {
                Ok(action) => return Ok(action),
                Err(err) => last_err = Some(err),
            }
        }
        Err(GameError::UnknownAction {
            reason: last_err.map_or_else(|| "no decoders".to_string(), |e| e.to_string()),
        })
    }

    /// Encode to the wire form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(GameError::encoding)
    }

    fn kind(&self) -> &dyn ActionKind {
        match self {
            Action::PlaceSymbol(place) => place,
        }
    }
}

impl ActionKind for Action {
    fn is_legal(&self, state: &GameState) -> bool {
        self.kind().is_legal(state)
    }

    fn apply(&self, state: &mut GameState) -> Result<()> {
        self.kind().apply(state)
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn player_id(&self) -> Option<PlayerId> {
        self.kind().player_id()
    }
}

impl From<PlaceSymbol> for Action {
    fn from(place: PlaceSymbol) -> Self {
        Action::PlaceSymbol(place)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceSymbol(place) => std::fmt::Display::fmt(place, f),
        }
    }
}

/// A serialized action record, kept verbatim.
///
/// This is what `possibleActions` carries: the bytes go out exactly as the
/// core produced them and are embedded as-is in snapshots.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAction(Box<RawValue>);

impl RawAction {
    /// Serialize an action into a raw record.
    pub fn from_action(action: &Action) -> Result<Self> {
        serde_json::value::to_raw_value(action)
            .map(RawAction)
            .map_err(GameError::encoding)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }

    /// Decode the record back into an action.
    pub fn decode(&self) -> Result<Action> {
        Action::decode(self.as_bytes())
    }
}

impl PartialEq for RawAction {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RawAction {}
