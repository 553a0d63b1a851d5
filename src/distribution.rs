//! Balance analysis for the draw.
//!
//! The per-pool counts of the pooled cups come from sampling labels out of
//! [`PRO_POOL_DISTRIBUTION`] without replacement, so the label hits follow a
//! multivariate hypergeometric law. [`pool_count_distribution`] computes it
//! exactly; [`simulate_game_frequencies`] estimates how often every game
//! shows up by running many draws in parallel.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use statrs::function::factorial::binomial;
use std::collections::{BTreeMap, HashMap};

use crate::constants::PRO_POOL_DISTRIBUTION;
use crate::cup::Cup;
use crate::draw::{draw_games, pool_counts, PoolCounts};
use crate::error::DrawError;
use crate::pools::{pools_for_cup, CupPools};

/// How many copies of each pool label the distribution holds.
fn label_weights() -> [u64; 3] {
    let mut weights = [0; 3];
    for &label in PRO_POOL_DISTRIBUTION.iter() {
        weights[usize::from(label) - 1] += 1;
    }
    weights
}

fn pool_sizes(cup: Cup) -> Option<[usize; 3]> {
    match pools_for_cup(cup) {
        CupPools::Pooled {
            pool_1,
            pool_2,
            pool_3,
            ..
        } => Some([pool_1.len(), pool_2.len(), pool_3.len()]),
        CupPools::Final { .. } => None,
    }
}

/// Exact probability of every per-pool count triple for `cup`.
///
/// Sorted by counts. Empty for the Final, which does not draw per pool.
pub fn pool_count_distribution(cup: Cup) -> Vec<(PoolCounts, f64)> {
    let Some(sizes) = pool_sizes(cup) else {
        return Vec::new();
    };

    let [w1, w2, w3] = label_weights();
    let n = cup.secondary_sample_size() as u64;
    let total = binomial(w1 + w2 + w3, n);

    let mut dist: BTreeMap<PoolCounts, f64> = BTreeMap::new();
    for k1 in 0..=w1.min(n) {
        for k2 in 0..=w2.min(n - k1) {
            let k3 = n - k1 - k2;
            if k3 > w3 {
                continue;
            }
            let p = binomial(w1, k1) * binomial(w2, k2) * binomial(w3, k3) / total;
            let labels: Vec<u8> = std::iter::repeat(1)
                .take(k1 as usize)
                .chain(std::iter::repeat(2).take(k2 as usize))
                .chain(std::iter::repeat(3).take(k3 as usize))
                .collect();
            *dist.entry(pool_counts(&labels, sizes)).or_insert(0.0) += p;
        }
    }

    dist.into_iter().collect()
}

/// Expected number of games drawn from each pool. `None` for the Final.
pub fn expected_pool_counts(cup: Cup) -> Option<[f64; 3]> {
    if cup.is_final() {
        return None;
    }
    let mut expected = [0.0; 3];
    for (counts, p) in pool_count_distribution(cup) {
        for (e, c) in expected.iter_mut().zip(counts) {
            *e += p * c as f64;
        }
    }
    Some(expected)
}

/// Estimate how often each game appears in a draw for `cup`.
///
/// Runs `n_draws` independent draws in parallel. Each draw gets a sub-seed
/// from a master generator, so a fixed seed gives identical frequencies
/// regardless of thread scheduling. The concrete Big Game variants are
/// counted alongside the marker.
pub fn simulate_game_frequencies(
    cup: Cup,
    n_draws: usize,
    seed: Option<u64>,
) -> Result<HashMap<String, f64>, DrawError> {
    if n_draws == 0 {
        return Ok(HashMap::new());
    }

    let mut master = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let seeds: Vec<u64> = (0..n_draws).map(|_| master.gen::<u64>()).collect();

    let tallies = seeds
        .par_iter()
        .map(|&s| {
            let result = draw_games(cup, &mut ChaCha8Rng::seed_from_u64(s))?;
            let mut tally: HashMap<String, usize> = HashMap::new();
            for game in result.drawn_games() {
                *tally.entry(game.to_string()).or_insert(0) += 1;
            }
            Ok::<_, DrawError>(tally)
        })
        .try_reduce(HashMap::new, |mut acc, tally| {
            for (game, count) in tally {
                *acc.entry(game).or_insert(0) += count;
            }
            Ok(acc)
        })?;

    tracing::debug!(%cup, n_draws, games = tallies.len(), "simulated draws");

    Ok(tallies
        .into_iter()
        .map(|(game, count)| (game, count as f64 / n_draws as f64))
        .collect())
}
