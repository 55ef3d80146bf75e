//! Uniform random picks over candidate slices.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{ErrorKind, Result};

/// Draws `count` distinct entries from `candidates` without replacement
/// (a partial Fisher-Yates shuffle). The candidates are assumed to be
/// distinct already, so distinct positions mean distinct values.
///
/// # Arguments
///
/// `candidates` - the deduplicated pool to draw from
/// `count` - how many picks are needed
/// `rng` - source of randomness
///
/// # Return
///
/// The picks in random order, or `NotEnoughCandidates` when the pool
/// is smaller than `count`. Never loops.
pub fn sample_unique<T, R>(candidates : &[T], count : usize, rng : &mut R) -> Result<Vec<T>>
where T : Clone, R : Rng + ?Sized {

    if candidates.len() < count {
        bail!(ErrorKind::NotEnoughCandidates(count, candidates.len()));
    }

    Ok(candidates.choose_multiple(rng, count).cloned().collect())
}

/// Picks one entry uniformly at random, `None` if there is nothing to pick.
pub fn pick_one<'a, T, R>(candidates : &'a [T], rng : &mut R) -> Option<&'a T>
where R : Rng + ?Sized {
    candidates.choose(rng)
}
