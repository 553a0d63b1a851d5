//! Cup Draw - game draw engine for a party tournament.
//!
//! Picks the games for a cup (Final, Mini, Mikro, Nano, Piko) by sampling
//! from fixed pools with seedable randomness, stores the result as a JSON
//! record and turns it back into a slide sequence. Python bindings are
//! available behind the `python` feature.

pub mod constants;
pub mod cup;
pub mod distribution;
pub mod draw;
pub mod error;
pub mod pools;
pub mod presentation;
pub mod sample;
pub mod session;
pub mod store;

#[cfg(feature = "python")]
mod python;

pub use constants::{DRAW_DATA_KEY, FINAL_DRAW_COUNT};
pub use cup::Cup;
pub use distribution::{expected_pool_counts, pool_count_distribution, simulate_game_frequencies};
pub use draw::{draw_games, draw_games_named, pool_counts, DrawOutcome, DrawResult, Drawer, PoolCounts};
pub use error::DrawError;
pub use pools::{pools_for_cup, CupPools, PoolKind};
pub use presentation::{presentation_steps, SlideCounts, Slideshow, Step};
pub use sample::{random_element, sample};
pub use session::DrawSession;
pub use store::{load_draw, save_draw, DrawStore, MemoryStore};
