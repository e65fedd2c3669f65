use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete inputs delivered by whatever drives the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    PlayerMove(Position),
    /// Red's answer, only valid for the game it was scheduled in.
    OpponentReply { epoch: u32 },
    /// Start over with a freshly generated seed.
    Reset { seed: Seed },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    NoChange,
    Placed(Position),
    Redirected { intended: Position, placed: Position },
    Reset,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn placed(self) -> Option<Position> {
        match self {
            Self::Placed(pos) | Self::Redirected { placed: pos, .. } => Some(pos),
            Self::NoChange | Self::Reset => None,
        }
    }
}

/// What the driver should schedule while Red is to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTicket {
    pub epoch: u32,
    pub delay_ms: u32,
}

impl ReplyTicket {
    pub const fn action(self) -> Action {
        Action::OpponentReply { epoch: self.epoch }
    }
}

/// Complete authoritative state of one game.
///
/// [`GameState::apply`] never mutates: every action yields a new state and
/// invalid actions yield an unchanged copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    seed: Seed,
    epoch: u32,
    rules: Rules,
    pacing: ReplyPacing,
}

impl GameState {
    pub fn new(seed: Seed) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: Seed, rules: Rules) -> Self {
        Self {
            board: Board::new(),
            seed,
            epoch: 0,
            rules,
            pacing: ReplyPacing::default(),
        }
    }

    pub fn with_pacing(self, pacing: ReplyPacing) -> Self {
        Self { pacing, ..self }
    }

    /// Resumes from an existing board, e.g. a saved position.
    pub fn from_board(board: Board, seed: Seed, rules: Rules) -> Self {
        Self {
            board,
            ..Self::with_rules(seed, rules)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn pacing(&self) -> ReplyPacing {
        self.pacing
    }

    pub fn cell(&self, coords: Position) -> Result<Cell> {
        self.board.cell(coords)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn status_message(&self) -> &'static str {
        self.outcome().status_message()
    }

    pub fn pending_reply(&self) -> Option<ReplyTicket> {
        if self.outcome() != GameOutcome::RedTurn {
            return None;
        }

        let ReplyPacing {
            min_delay_ms,
            max_delay_ms,
        } = self.pacing;
        Some(ReplyTicket {
            epoch: self.epoch,
            delay_ms: choose_in_range(self.seed, &self.board, min_delay_ms, max_delay_ms),
        })
    }

    pub fn apply(&self, action: Action) -> (Self, MoveOutcome) {
        let result = match action {
            Action::PlayerMove(coords) => self.player_move(coords),
            Action::OpponentReply { epoch } => self.opponent_reply(epoch),
            Action::Reset { seed } => Ok(self.reset(seed)),
        };

        match result {
            Ok((next, outcome)) => {
                log::debug!("{:?} -> {:?}, now {:?}", action, outcome, next.outcome());
                (next, outcome)
            }
            Err(err @ GameError::EmptyCandidateSet) => {
                log::warn!("{:?} dropped: {}", action, err);
                (self.clone(), MoveOutcome::NoChange)
            }
            Err(err) => {
                log::debug!("{:?} ignored: {}", action, err);
                (self.clone(), MoveOutcome::NoChange)
            }
        }
    }

    fn player_move(&self, intended: Position) -> Result<(Self, MoveOutcome)> {
        if self.outcome() != GameOutcome::BlueTurn {
            return Err(GameError::WrongTurn);
        }
        if !self.board.is_empty_at(intended)? {
            return Err(GameError::OccupiedCell);
        }

        let placed = if self.rules.redirect_double_threats {
            redirect_player_move(self.seed, &self.board, intended)
        } else {
            intended
        };
        let board = self.board.place(placed, Cell::Blue)?;

        let outcome = if placed == intended {
            MoveOutcome::Placed(placed)
        } else {
            MoveOutcome::Redirected { intended, placed }
        };
        Ok((self.with_board(board), outcome))
    }

    fn opponent_reply(&self, epoch: u32) -> Result<(Self, MoveOutcome)> {
        if epoch != self.epoch {
            log::debug!("stale reply from epoch {}, current {}", epoch, self.epoch);
            return Ok((self.clone(), MoveOutcome::NoChange));
        }

        let placed = TieredOpponent::new(self.seed).select(&self.board)?;
        let board = self.board.place(placed, Cell::Red)?;
        Ok((self.with_board(board), MoveOutcome::Placed(placed)))
    }

    fn reset(&self, seed: Seed) -> (Self, MoveOutcome) {
        let next = Self {
            board: Board::new(),
            seed,
            epoch: self.epoch.wrapping_add(1),
            ..self.clone()
        };
        (next, MoveOutcome::Reset)
    }

    fn with_board(&self, board: Board) -> Self {
        Self {
            board,
            ..self.clone()
        }
    }
}
