//! Rule-cascade bot.
//!
//! Rules are tried in order and the first that yields a move wins:
//!
//! 1. **Win**: a placement completing a line of `yourSymbol`
//! 2. **Block**: a placement where `theirSymbol` would complete a line
//! 3. **Center**: cell 4
//! 4. **Corner**: cells 0, 2, 6, 8 in that order
//! 5. **Random**: uniform over the legal placements
//!
//! Ties in rules 1 and 2 go to the earliest entry of `possibleActions`.
//! The win test is the core's own line check run on a copy of the board.
//!
//! This never loses a drawn position to a blunder, but it does not see
//! forks; it is not a full game-tree player.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::Bot;
use crate::core::{Action, Board, ClientGameState, GameRng, Mark, PlaceSymbol, CENTER, CORNERS};
use crate::rules::completes_line;

/// Which rule of the cascade produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Win,
    Block,
    Center,
    Corner,
    Random,
}

impl Rule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Win => "win",
            Rule::Block => "block",
            Rule::Center => "center",
            Rule::Corner => "corner",
            Rule::Random => "random",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type Placements = SmallVec<[PlaceSymbol; 9]>;

/// Win / block / center / corner / random.
///
/// ## Example
///
/// ```
/// use tictactoe::bots::{Bot, HeuristicBot};
/// use tictactoe::core::{Action, GameState, PlaceSymbol, PlayerId};
///
/// let mut bot = HeuristicBot::with_seed(1);
/// let snapshot = GameState::new().project(PlayerId::ZERO);
/// assert_eq!(
///     bot.choose_action(&snapshot),
///     Some(Action::PlaceSymbol(PlaceSymbol::new(PlayerId::ZERO, 4)))
/// );
/// ```
#[derive(Clone, Debug)]
pub struct HeuristicBot {
    rng: GameRng,
}

impl HeuristicBot {
    /// Create a bot drawing its random fallback from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Run the cascade, reporting which rule fired.
    pub fn decide(&mut self, snapshot: &ClientGameState) -> Option<(Action, Rule)> {
        let status = snapshot.status();
        if status.is_terminal() {
            trace!(%status, "nothing to play");
            return None;
        }

        let placements = placements(snapshot);
        if placements.is_empty() {
            trace!("no decodable placements");
            return None;
        }

        let board = &snapshot.board;
        let (place, rule) = first_completing(board, &placements, snapshot.your_symbol)
            .map(|p| (p, Rule::Win))
            .or_else(|| {
                first_completing(board, &placements, snapshot.their_symbol).map(|p| (p, Rule::Block))
            })
            .or_else(|| at_cell(&placements, CENTER).map(|p| (p, Rule::Center)))
            .or_else(|| {
                CORNERS
                    .iter()
                    .find_map(|&corner| at_cell(&placements, corner))
                    .map(|p| (p, Rule::Corner))
            })
            .or_else(|| self.rng.choose(&placements).map(|p| (*p, Rule::Random)))?;

        debug!(%rule, player = place.player_id, position = place.position, "bot chose action");
        Some((Action::PlaceSymbol(place), rule))
    }
}

impl Bot for HeuristicBot {
    fn choose_action(&mut self, snapshot: &ClientGameState) -> Option<Action> {
        self.decide(snapshot).map(|(action, _)| action)
    }
}

/// On-board placements from the snapshot, in list order.
fn placements(snapshot: &ClientGameState) -> Placements {
    snapshot
        .legal_actions()
        .into_iter()
        .filter_map(|action| match action {
            Action::PlaceSymbol(place) if place.cell().is_some() => Some(place),
            Action::PlaceSymbol(place) => {
                trace!(position = place.position, "skipping off-board placement");
                None
            }
        })
        .collect()
}

fn first_completing(board: &Board, placements: &[PlaceSymbol], mark: Mark) -> Option<PlaceSymbol> {
    placements
        .iter()
        .copied()
        .find(|place| place.cell().is_some_and(|cell| completes_line(board, cell, mark)))
}

fn at_cell(placements: &[PlaceSymbol], cell: usize) -> Option<PlaceSymbol> {
    placements.iter().copied().find(|place| place.cell() == Some(cell))
}
