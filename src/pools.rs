use crate::constants::{
    BASE_FIXED_GAMES, BASE_POOL_1, BASE_POOL_2, BASE_POOL_3, BIG_GAME, DARTS_SENTINEL,
    FINAL_FIXED_GAME, POOL_1_EXTRA, POOL_2_EXTRA,
};
use crate::cup::Cup;

/// Which draw procedure a cup's pools feed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolKind {
    Final,
    Pooled,
}

/// Candidate games for one cup, before anything random happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CupPools {
    /// Final cup: one flat list, including the Big Game marker.
    Final {
        all_potential_games: Vec<String>,
        fixed_games: Vec<String>,
    },
    /// Every other cup: three pools drawn from independently.
    Pooled {
        pool_1: Vec<String>,
        pool_2: Vec<String>,
        pool_3: Vec<String>,
        fixed_games: Vec<String>,
    },
}

impl CupPools {
    pub fn kind(&self) -> PoolKind {
        match self {
            CupPools::Final { .. } => PoolKind::Final,
            CupPools::Pooled { .. } => PoolKind::Pooled,
        }
    }

    pub fn fixed_games(&self) -> &[String] {
        match self {
            CupPools::Final { fixed_games, .. } | CupPools::Pooled { fixed_games, .. } => fixed_games,
        }
    }
}

fn to_owned(games: &[&str]) -> Vec<String> {
    games.iter().map(|g| g.to_string()).collect()
}

/// Build the pools and fixed games for a cup.
///
/// Fixed games never include the darts placeholder; the drawn darts variant
/// takes its slot in the draw result.
pub fn pools_for_cup(cup: Cup) -> CupPools {
    let mut pool_1 = to_owned(&BASE_POOL_1);
    let mut pool_2 = to_owned(&BASE_POOL_2);
    let mut pool_3 = to_owned(&BASE_POOL_3);
    let mut fixed_games: Vec<String> = BASE_FIXED_GAMES
        .iter()
        .filter(|&&g| g != DARTS_SENTINEL)
        .map(|g| g.to_string())
        .collect();

    if cup.has_pool_1_extra() {
        pool_1.push(POOL_1_EXTRA.to_string());
    }
    if cup.has_pool_2_extra() {
        pool_2.push(POOL_2_EXTRA.to_string());
    }

    let pools = if cup.is_final() {
        pool_3.retain(|g| g != FINAL_FIXED_GAME);
        fixed_games.push(FINAL_FIXED_GAME.to_string());

        let mut all_potential_games = pool_1;
        all_potential_games.extend(pool_2);
        all_potential_games.extend(pool_3);
        all_potential_games.push(BIG_GAME.to_string());

        CupPools::Final {
            all_potential_games,
            fixed_games,
        }
    } else {
        CupPools::Pooled {
            pool_1,
            pool_2,
            pool_3,
            fixed_games,
        }
    };

    tracing::debug!(%cup, kind = ?pools.kind(), "built pools");
    pools
}
