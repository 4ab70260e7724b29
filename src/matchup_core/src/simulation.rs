use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::OddsError;
use crate::odds::OddsEngine;

/// Draw the winning slot of a single match from an odds vector.
///
/// Falls back to the last slot if rounding leaves the cumulative sum just
/// short of the sampled value.
pub fn sample_winner<R: Rng>(odds: &[f64], rng: &mut R) -> usize {
    let draw = rng.gen::<f64>();
    let mut cumulative = 0.0;
    for (slot, &p) in odds.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return slot;
        }
    }
    odds.len().saturating_sub(1)
}

/// Monte Carlo simulation of a match-up.
///
/// # Arguments
/// * `engine` - Engine used to compute the odds being sampled
/// * `roster` - Member ratings per team slot
/// * `n_simulations` - Number of matches to simulate
/// * `seed` - Optional seed for reproducible runs
///
/// # Returns
/// Number of simulated wins per slot, in roster order
pub fn simulate_matchups<T: AsRef<[f64]>>(
    engine: &OddsEngine,
    roster: &[T],
    n_simulations: usize,
    seed: Option<u64>,
) -> Result<Vec<u64>, OddsError> {
    let odds = engine.odds(roster)?;
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut wins = vec![0u64; odds.len()];
    for _ in 0..n_simulations {
        wins[sample_winner(&odds, &mut rng)] += 1;
    }
    Ok(wins)
}
