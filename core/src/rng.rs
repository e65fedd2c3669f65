use core::iter;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque value that makes the opponent's random picks reproducible.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Seed(pub u64);

impl Seed {
    /// Wall-clock milliseconds since the unix epoch.
    pub fn from_clock() -> Self {
        use web_time::{SystemTime, UNIX_EPOCH};

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        Self(millis)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

fn mix(state: u64, word: u64) -> u64 {
    SmallRng::seed_from_u64(state ^ word).next_u64()
}

const fn position_word((x, y): Position) -> u64 {
    ((x as u64) << 8) | (y as u64)
}

/// Hashes `(seed, board, candidates)` into a single sampler seed.
pub fn choice_key(seed: Seed, board: &Board, candidates: &[Position]) -> u64 {
    board
        .words()
        .chain(iter::once(candidates.len() as u64))
        .chain(candidates.iter().copied().map(position_word))
        .fold(mix(seed.value(), 0), mix)
}

fn sampler(seed: Seed, board: &Board, candidates: &[Position]) -> SmallRng {
    SmallRng::seed_from_u64(choice_key(seed, board, candidates))
}

/// Picks one of `candidates` uniformly, as a pure function of its arguments.
///
/// An empty candidate list means a strategy tier produced nothing to play,
/// which the tier preconditions rule out.
pub fn choose(seed: Seed, board: &Board, candidates: &[Position]) -> Result<Position> {
    if candidates.is_empty() {
        log::warn!("choose called without candidates, seed {:?}", seed);
        return Err(GameError::EmptyCandidateSet);
    }

    let index = sampler(seed, board, candidates).random_range(0..candidates.len());
    log::trace!("choose {:?} out of {:?}", candidates[index], candidates);
    Ok(candidates[index])
}

/// Draws a value in `min..=max` from the same keyed sampler as [`choose`].
pub fn choose_in_range(seed: Seed, board: &Board, min: u32, max: u32) -> u32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    sampler(seed, board, &[]).random_range(low..=high)
}
