//! Authoritative game state.
//!
//! ## GameState
//!
//! Owns the board, the player to move, the terminal flag, the winner and
//! a cache of the current legal actions in wire form. It changes only
//! through [`GameState::apply`]; every successful apply leaves the
//! following true:
//!
//! - X marks equal O marks, or exceed them by one
//! - while running, player 0 moves iff the counts are equal
//! - terminal iff a line is complete or the board is full
//! - the cache is empty iff terminal, otherwise one placement per open cell
//!
//! When a move ends the game the mover stays "current"; read
//! [`GameState::status`] or the winner rather than the current player
//! once the game is over.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::action::{Action, ActionKind, PlaceSymbol, RawAction};
use super::board::Board;
use super::error::{GameError, Result};
use super::player::{Mark, PlayerId};
use super::view::{winner_id, ClientGameState};
use crate::rules::{check_terminal, has_line, GameStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: PlayerId,
    terminal: bool,
    winner: Option<PlayerId>,
    possible_actions: Vec<RawAction>,
}

impl GameState {
    /// The opening position: empty board, player 0 to move, nine
    /// placements cached.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            board: Board::new(),
            current_player: PlayerId::ZERO,
            terminal: false,
            winner: None,
            possible_actions: Vec::new(),
        };
        state.refresh_possible_actions();
        state
    }

    /// Restore a game from a board.
    ///
    /// The player to move is derived from the mark counts. A finished
    /// board gets the same frozen mover it would have after live play.
    ///
    /// ```
    /// use tictactoe::core::{Board, GameState, Mark::{Empty as E, X, O}, PlayerId};
    ///
    /// let state = GameState::from_board(Board::from_marks([X, X, E, E, O, E, E, E, E])).unwrap();
    /// assert_eq!(state.current_player(), PlayerId::ONE);
    /// assert_eq!(state.possible_actions().len(), 6);
    /// ```
    pub fn from_board(board: Board) -> Result<Self> {
        let xs = board.count(Mark::X);
        let os = board.count(Mark::O);
        let to_move = match xs.checked_sub(os) {
            Some(0) => PlayerId::ZERO,
            Some(1) => PlayerId::ONE,
            _ => {
                return Err(GameError::InvalidPosition {
                    reason: format!("{xs} X marks against {os} O marks"),
                })
            }
        };

        let mut state = Self {
            board,
            current_player: to_move,
            terminal: false,
            winner: None,
            possible_actions: Vec::new(),
        };
        if let Some(result) = check_terminal(&board) {
            state.terminal = true;
            state.winner = result.winner();
            state.current_player = to_move.opponent();
        }
        state.refresh_possible_actions();
        state.check_invariants()?;
        Ok(state)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move, or the last mover once the game has ended.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The winner, `None` while running or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Cached legal actions in wire form.
    #[must_use]
    pub fn possible_actions(&self) -> &[RawAction] {
        &self.possible_actions
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.terminal, self.winner) {
            (false, _) => GameStatus::Active(self.current_player),
            (true, Some(winner)) => GameStatus::Won(winner),
            (true, None) => GameStatus::Draw,
        }
    }

    /// Legal actions for the player to move, in ascending cell order.
    ///
    /// Empty once the game has ended.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.terminal {
            return Vec::new();
        }
        self.board
            .open_cells()
            .into_iter()
            .map(|cell| Action::PlaceSymbol(PlaceSymbol::new(self.current_player, cell as i32)))
            .collect()
    }

    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        action.is_legal(self)
    }

    /// Apply one action.
    ///
    /// `None` is accepted and does nothing, so a host can pass the bot's
    /// answer straight through even when the bot had nothing to play.
    /// On error the state is unchanged.
    pub fn apply(&mut self, action: Option<&Action>) -> Result<()> {
        let Some(action) = action else {
            trace!("no action to apply");
            return Ok(());
        };

        if self.terminal {
            debug!(%action, status = %self.status(), "rejected action on finished game");
            return Err(GameError::GameEnded);
        }
        if !action.is_legal(self) {
            debug!(%action, player = ?action.player_id(), current = %self.current_player, "rejected illegal action");
            return Err(GameError::IllegalAction { action: *action });
        }

        action.apply(self)?;
        self.settle();

        debug!(
            %action,
            player = ?action.player_id(),
            status = %self.status(),
            "applied action"
        );
        debug_assert!(self.check_invariants().is_ok(), "{:?}", self.check_invariants());
        Ok(())
    }

    /// Per-player snapshot for clients and bots.
    #[must_use]
    pub fn project(&self, perspective: PlayerId) -> ClientGameState {
        ClientGameState::from_state(self, perspective)
    }

    /// Full authoritative state as JSON, including the player/mark table.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let record = StateRecord {
            board: &self.board,
            current_player_id: self.current_player,
            player_symbols: PlayerId::all().map(|p| (p, p.mark())).collect(),
            is_game_ended: self.terminal,
            winner_player_id: self.winner,
            possible_actions: &self.possible_actions,
        };
        serde_json::to_vec(&record).map_err(GameError::encoding)
    }

    /// Verify the state invariants listed in the module docs.
    pub fn check_invariants(&self) -> Result<()> {
        let invalid = |reason: String| Err(GameError::InvalidPosition { reason });

        let xs = self.board.count(Mark::X);
        let os = self.board.count(Mark::O);
        if xs != os && xs != os + 1 {
            return invalid(format!("{xs} X marks against {os} O marks"));
        }

        let x_line = has_line(&self.board, Mark::X);
        let o_line = has_line(&self.board, Mark::O);
        if x_line && o_line {
            return invalid("both players have a line".to_string());
        }
        if (x_line && xs != os + 1) || (o_line && xs != os) {
            return invalid("play continued after a win".to_string());
        }

        if self.terminal != (x_line || o_line || self.board.is_full()) {
            return invalid(format!("terminal flag is {} for this board", self.terminal));
        }
        match (self.terminal, self.winner) {
            (false, Some(_)) => return invalid("winner set on a running game".to_string()),
            (true, Some(winner)) if !has_line(&self.board, winner.mark()) => {
                return invalid(format!("{winner} has no line"));
            }
            (true, None) if x_line || o_line => {
                return invalid("draw declared with a complete line".to_string());
            }
            _ => {}
        }

        let last_mover = if xs == os { PlayerId::ONE } else { PlayerId::ZERO };
        let expected = if self.terminal { last_mover } else { last_mover.opponent() };
        if self.current_player != expected {
            return invalid(format!("{} is current, expected {expected}", self.current_player));
        }

        let cached: Vec<Action> = self
            .possible_actions
            .iter()
            .filter_map(|raw| raw.decode().ok())
            .collect();
        if cached != self.legal_actions() {
            return invalid("possible actions out of date".to_string());
        }
        Ok(())
    }

    pub(crate) fn place(&mut self, cell: usize, mark: Mark) {
        self.board.set(cell, mark);
    }

    /// Terminal detection, turn passing and cache refresh after a move.
    fn settle(&mut self) {
        match check_terminal(&self.board) {
            Some(result) => {
                self.terminal = true;
                self.winner = result.winner();
            }
            None => self.current_player = self.current_player.opponent(),
        }
        self.refresh_possible_actions();
    }

    fn refresh_possible_actions(&mut self) {
        self.possible_actions = self
            .legal_actions()
            .iter()
            .filter_map(|action| match RawAction::from_action(action) {
                Ok(raw) => Some(raw),
                Err(err) => {
                    warn!(%action, %err, "dropping action that failed to serialize");
                    None
                }
            })
            .collect();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct StateRecord<'a> {
    board: &'a Board,
    #[serde(rename = "currentPlayerID")]
    current_player_id: PlayerId,
    #[serde(rename = "playerSymbols")]
    player_symbols: BTreeMap<PlayerId, Mark>,
    #[serde(rename = "isGameEnded")]
    is_game_ended: bool,
    #[serde(rename = "winnerPlayerID", with = "winner_id")]
    winner_player_id: Option<PlayerId>,
    #[serde(rename = "possibleActions")]
    possible_actions: &'a [RawAction],
}
