use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{BIG_GAME, BIG_GAME_VARIANTS, DARTS_VARIANTS, FINAL_DRAW_COUNT, PRO_POOL_DISTRIBUTION};
use crate::cup::Cup;
use crate::error::DrawError;
use crate::pools::{pools_for_cup, CupPools};
use crate::sample::{random_element, sample};

/// Games drawn per pool, in pool order.
pub type PoolCounts = [usize; 3];

/// The outcome of one draw, as stored for the presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub cup_type: Cup,

    /// Games played regardless of the draw (darts placeholder excluded)
    pub fixed_games: Vec<String>,

    /// Drawn darts variant
    pub fixed_darts_game: String,

    #[serde(flatten)]
    pub outcome: DrawOutcome,
}

/// Cup-specific part of a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrawOutcome {
    Final {
        drawn_pool_games: Vec<String>,

        /// Set only when the Big Game marker was drawn
        selected_big_game: Option<String>,
    },
    Pooled {
        original_pool_1: Vec<String>,
        original_pool_2: Vec<String>,
        original_pool_3: Vec<String>,

        /// Pool labels drawn to decide the per-pool counts
        #[serde(default)]
        pool_labels: Vec<u8>,

        drawn_pool_1: Vec<String>,
        drawn_pool_2: Vec<String>,
        drawn_pool_3: Vec<String>,
    },
}

impl DrawResult {
    /// Every randomly drawn game, concrete Big Game variant included.
    pub fn drawn_games(&self) -> Vec<&str> {
        match &self.outcome {
            DrawOutcome::Final {
                drawn_pool_games,
                selected_big_game,
            } => drawn_pool_games
                .iter()
                .chain(selected_big_game)
                .map(String::as_str)
                .collect(),
            DrawOutcome::Pooled {
                drawn_pool_1,
                drawn_pool_2,
                drawn_pool_3,
                ..
            } => drawn_pool_1
                .iter()
                .chain(drawn_pool_2)
                .chain(drawn_pool_3)
                .map(String::as_str)
                .collect(),
        }
    }

    /// Check that a decoded record could have come out of a draw.
    ///
    /// The outcome shape must match the cup, a darts variant must be set,
    /// the big game choice is present iff the marker was drawn, and every
    /// pooled draw holds between one game and the whole pool, all taken
    /// from that pool.
    pub fn validate(&self) -> Result<(), DrawError> {
        let inconsistent = |msg: String| Err(DrawError::InconsistentRecord(msg));

        let final_outcome = matches!(self.outcome, DrawOutcome::Final { .. });
        if self.cup_type.is_final() != final_outcome {
            return inconsistent(format!(
                "{} cup stored with {} outcome",
                self.cup_type,
                if final_outcome { "final" } else { "pooled" }
            ));
        }
        if self.fixed_darts_game.is_empty() {
            return inconsistent("no darts variant".to_string());
        }

        match &self.outcome {
            DrawOutcome::Final {
                drawn_pool_games,
                selected_big_game,
            } => {
                let has_marker = drawn_pool_games.iter().any(|g| g == BIG_GAME);
                if has_marker != selected_big_game.is_some() {
                    return inconsistent(format!(
                        "big game choice {selected_big_game:?} does not match drawn games"
                    ));
                }
            }
            DrawOutcome::Pooled {
                original_pool_1,
                original_pool_2,
                original_pool_3,
                drawn_pool_1,
                drawn_pool_2,
                drawn_pool_3,
                ..
            } => {
                let pools = [
                    (original_pool_1, drawn_pool_1),
                    (original_pool_2, drawn_pool_2),
                    (original_pool_3, drawn_pool_3),
                ];
                for (i, (pool, drawn)) in pools.into_iter().enumerate() {
                    if drawn.is_empty() || drawn.len() > pool.len() {
                        return inconsistent(format!(
                            "pool {} drew {} of {} games",
                            i + 1,
                            drawn.len(),
                            pool.len()
                        ));
                    }
                    if let Some(stray) = drawn.iter().find(|g| !pool.contains(g)) {
                        return inconsistent(format!("pool {} drew {stray:?}, which it does not hold", i + 1));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Per-pool game counts from the sampled labels.
///
/// Each pool gets one game plus one per occurrence of its label, capped at
/// the pool's size.
pub fn pool_counts(labels: &[u8], pool_sizes: [usize; 3]) -> PoolCounts {
    let mut counts = [0; 3];
    for (i, count) in counts.iter_mut().enumerate() {
        let label = i as u8 + 1;
        let hits = labels.iter().filter(|&&l| l == label).count();
        *count = (hits + 1).min(pool_sizes[i]);
    }
    counts
}

fn pick<R: Rng + ?Sized>(choices: &[&str], what: &str, rng: &mut R) -> Result<String, DrawError> {
    random_element(choices, rng)
        .map(str::to_string)
        .ok_or_else(|| DrawError::Pool(format!("no {what} variants configured")))
}

/// Run one draw for `cup`.
pub fn draw_games<R: Rng + ?Sized>(cup: Cup, rng: &mut R) -> Result<DrawResult, DrawError> {
    let pools = pools_for_cup(cup);
    let fixed_darts_game = pick(&DARTS_VARIANTS, "darts", rng)?;

    let (fixed_games, outcome) = match pools {
        CupPools::Final {
            all_potential_games,
            fixed_games,
        } => {
            let drawn_pool_games = sample(&all_potential_games, FINAL_DRAW_COUNT, rng);
            let selected_big_game = if drawn_pool_games.iter().any(|g| g == BIG_GAME) {
                Some(pick(&BIG_GAME_VARIANTS, "big game", rng)?)
            } else {
                None
            };
            tracing::debug!(%cup, drawn = drawn_pool_games.len(), big_game = ?selected_big_game, "final draw");

            (
                fixed_games,
                DrawOutcome::Final {
                    drawn_pool_games,
                    selected_big_game,
                },
            )
        }
        CupPools::Pooled {
            pool_1,
            pool_2,
            pool_3,
            fixed_games,
        } => {
            let pool_labels = sample(&PRO_POOL_DISTRIBUTION, cup.secondary_sample_size(), rng);
            let [count_1, count_2, count_3] =
                pool_counts(&pool_labels, [pool_1.len(), pool_2.len(), pool_3.len()]);
            tracing::debug!(%cup, ?pool_labels, count_1, count_2, count_3, "pool counts");

            let drawn_pool_1 = sample(&pool_1, count_1, rng);
            let drawn_pool_2 = sample(&pool_2, count_2, rng);
            let drawn_pool_3 = sample(&pool_3, count_3, rng);

            (
                fixed_games,
                DrawOutcome::Pooled {
                    original_pool_1: pool_1,
                    original_pool_2: pool_2,
                    original_pool_3: pool_3,
                    pool_labels,
                    drawn_pool_1,
                    drawn_pool_2,
                    drawn_pool_3,
                },
            )
        }
    };

    Ok(DrawResult {
        cup_type: cup,
        fixed_games,
        fixed_darts_game,
        outcome,
    })
}

/// Run one draw for a cup given by its internal name.
pub fn draw_games_named<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<DrawResult, DrawError> {
    let cup = name.parse::<Cup>().inspect_err(|e| tracing::warn!(%e, "rejected cup selection"))?;
    draw_games(cup, rng)
}

/// Seedable draw source.
///
/// With a seed, the sequence of draws is reproducible; without one the
/// generator is seeded from the OS.
#[derive(Clone, Debug)]
pub struct Drawer {
    rng: ChaCha8Rng,
}

impl Drawer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Drawer { rng }
    }

    pub fn draw(&mut self, cup: Cup) -> Result<DrawResult, DrawError> {
        draw_games(cup, &mut self.rng).inspect_err(|e| tracing::error!(%cup, %e, "draw failed"))
    }

    pub fn draw_named(&mut self, name: &str) -> Result<DrawResult, DrawError> {
        draw_games_named(name, &mut self.rng).inspect_err(|e| tracing::error!(cup = name, %e, "draw failed"))
    }

    /// Run `n` draws, each from its own generator seeded off this one.
    pub fn draw_many(&mut self, cup: Cup, n: usize) -> Result<Vec<DrawResult>, DrawError> {
        (0..n)
            .map(|_| {
                let mut sub = ChaCha8Rng::seed_from_u64(self.rng.gen::<u64>());
                draw_games(cup, &mut sub)
            })
            .collect()
    }
}
