/// Games in pool 1 for every cup
pub const BASE_POOL_1: [&str; 4] = ["Waffenspiel", "Schneeball", "Super Smash Bros", "Elytren"];

/// Games in pool 2 for every cup
pub const BASE_POOL_2: [&str; 5] = ["MP Minispiele", "Beat", "Square off", "Boccia", "Wii Bowling"];

/// Games in pool 3 for every cup
pub const BASE_POOL_3: [&str; 4] = ["200ccm", "Dobble", "Hosn obi", "Ultimat Chicken Horse run"];

/// Games played in every cup, independent of the draw
pub const BASE_FIXED_GAMES: [&str; 4] = ["Minigolf", "1 Dart", "Party", "150ccm"];

/// Fixed-games placeholder for the darts slot. The concrete variant is drawn separately.
pub const DARTS_SENTINEL: &str = "1 Dart";

/// Added to pool 1 for Mini, Mikro and Final
pub const POOL_1_EXTRA: &str = "MC Kampf";

/// Added to pool 2 for Mini and Final
pub const POOL_2_EXTRA: &str = "2tes Darts";

/// Moved from pool 3 into the fixed games for the Final
pub const FINAL_FIXED_GAME: &str = "Hosn obi";

/// Virtual entry in the Final pool that triggers a big game choice
pub const BIG_GAME: &str = "Big Game";

/// Concrete games behind the Big Game marker
pub const BIG_GAME_VARIANTS: [&str; 2] = ["Siedler", "Scrabble"];

/// Darts variants, one of which is drawn for every cup
pub const DARTS_VARIANTS: [&str; 2] = ["Around the Clock", "501"];

/// Pool labels sampled to decide how many games each pool contributes.
/// Three copies per label gives each pool the same weight.
pub const PRO_POOL_DISTRIBUTION: [u8; 9] = [1, 1, 1, 2, 2, 2, 3, 3, 3];

/// Number of games drawn from the flattened Final pool
pub const FINAL_DRAW_COUNT: usize = 11;

/// Secondary sample size for the Mini cup
pub const MINI_SECONDARY_SAMPLES: usize = 4;

/// Secondary sample size for Mikro, Nano and Piko
pub const DEFAULT_SECONDARY_SAMPLES: usize = 3;

/// Session storage key for the serialized draw record
pub const DRAW_DATA_KEY: &str = "gameDrawData";
