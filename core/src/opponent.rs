use crate::*;

/// Picks the next cell for a side to play.
pub trait MoveSelector {
    fn select(self, board: &Board) -> Result<Position>;
}

/// Which branch of the opponent heuristic produced a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    /// No Red piece yet: center, else a random free corner.
    Opening,
    /// One Red piece: a random free cell on a line through it that Blue has not touched.
    Extend,
    /// Two Red in a Blue-free line, take the third cell.
    Forced,
    /// Two Blue in a Red-free line, take the third cell.
    Block,
    /// Any free cell, chosen at random.
    Fallback,
}

/// Red's scripted opponent. Deterministic for a given seed and board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TieredOpponent {
    seed: Seed,
}

impl TieredOpponent {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// Chooses Red's move and reports the tier it came from.
    pub fn plan(&self, board: &Board) -> Result<(Tier, Position)> {
        if board.outcome() != GameOutcome::RedTurn {
            return Err(GameError::WrongTurn);
        }

        let planned = match board.count_of(Cell::Red) {
            0 => (Tier::Opening, self.opening(board)?),
            1 => {
                let Some(reference) = board.reference_cell(Cell::Red) else {
                    return Err(GameError::EmptyCandidateSet);
                };
                let candidates = extension_candidates(board, reference, Cell::Red);
                if candidates.is_empty() {
                    log::debug!("every line through {:?} is blocked", reference);
                    self.block_or_fallback(board)?
                } else {
                    (Tier::Extend, choose(self.seed, board, &candidates)?)
                }
            }
            _ => match forced_completion(board, Cell::Red) {
                Some(pos) => (Tier::Forced, pos),
                None => self.block_or_fallback(board)?,
            },
        };

        log::debug!("opponent plays {:?} via {:?}", planned.1, planned.0);
        Ok(planned)
    }

    fn opening(&self, board: &Board) -> Result<Position> {
        if board[CENTER].is_empty() {
            return Ok(CENTER);
        }

        let corners: Positions = CORNERS
            .into_iter()
            .filter(|&pos| board[pos].is_empty())
            .collect();
        choose(self.seed, board, &corners)
    }

    fn block_or_fallback(&self, board: &Board) -> Result<(Tier, Position)> {
        if let Some(pos) = forced_completion(board, Cell::Blue) {
            return Ok((Tier::Block, pos));
        }
        let empty = board.empty_cells();
        Ok((Tier::Fallback, choose(self.seed, board, &empty)?))
    }
}

impl MoveSelector for TieredOpponent {
    fn select(self, board: &Board) -> Result<Position> {
        self.plan(board).map(|(_, pos)| pos)
    }
}

/// Free cells on lines through `reference` that hold no piece of the other colour.
///
/// Lines are visited row, column, then diagonals; duplicates are dropped.
pub fn extension_candidates(board: &Board, reference: Position, color: Cell) -> Positions {
    let mut candidates = Positions::new();
    for line in Line::through(reference) {
        if board.line_contains(line, color.opponent()) {
            continue;
        }
        for pos in line.positions() {
            if board[pos].is_empty() && !candidates.contains(&pos) {
                candidates.push(pos);
            }
        }
    }
    candidates
}

/// The cell that completes a two-in-a-line of `color`.
///
/// Only lines through the first `color` cell in row-major order are
/// considered, in row, column, diagonal priority.
pub fn forced_completion(board: &Board, color: Cell) -> Option<Position> {
    let reference = board.reference_cell(color)?;
    Line::through(reference)
        .filter(|&line| {
            !board.line_contains(line, color.opponent()) && board.count_in_line(line, color) == 2
        })
        .find_map(|line| line.positions().find(|&pos| board[pos].is_empty()))
}

/// Where Blue's move to `intended` actually lands.
///
/// A Blue move onto either colour's forced-completion cell is moved to a
/// random free cell that is neither. If no such cell exists the move stands.
pub fn redirect_player_move(seed: Seed, board: &Board, intended: Position) -> Position {
    let mut guarded = Positions::new();
    guarded.extend(forced_completion(board, Cell::Blue));
    guarded.extend(forced_completion(board, Cell::Red));

    if !guarded.contains(&intended) {
        return intended;
    }

    let candidates: Positions = board
        .empty_cells()
        .into_iter()
        .filter(|pos| !guarded.contains(pos))
        .collect();

    match choose(seed, board, &candidates) {
        Ok(pos) => {
            log::debug!("player move {:?} redirected to {:?}", intended, pos);
            pos
        }
        Err(_) => intended,
    }
}
