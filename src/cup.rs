#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_SECONDARY_SAMPLES, MINI_SECONDARY_SAMPLES};
use crate::error::DrawError;

/// Tournament tier. Controls pool composition and how many games get drawn.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cup {
    Final,
    Mini,
    Mikro,
    Nano,
    Piko,
}

impl Cup {
    /// All cups in the order they are offered for selection.
    pub const ALL: [Cup; 5] = [Cup::Final, Cup::Mini, Cup::Mikro, Cup::Nano, Cup::Piko];

    /// Internal name, also used in the stored draw record.
    pub fn name(self) -> &'static str {
        match self {
            Cup::Final => "Final",
            Cup::Mini => "Mini",
            Cup::Mikro => "Mikro",
            Cup::Nano => "Nano",
            Cup::Piko => "Piko",
        }
    }

    /// German display label
    pub fn label(self) -> &'static str {
        match self {
            Cup::Final => "Finale",
            cup => cup.name(),
        }
    }

    pub fn is_final(self) -> bool {
        self == Cup::Final
    }

    /// Number of pool labels drawn to derive per-pool game counts.
    pub fn secondary_sample_size(self) -> usize {
        match self {
            Cup::Mini => MINI_SECONDARY_SAMPLES,
            _ => DEFAULT_SECONDARY_SAMPLES,
        }
    }

    /// Whether pool 1 gets its extra game
    pub fn has_pool_1_extra(self) -> bool {
        matches!(self, Cup::Mini | Cup::Mikro | Cup::Final)
    }

    /// Whether pool 2 gets its extra game
    pub fn has_pool_2_extra(self) -> bool {
        matches!(self, Cup::Mini | Cup::Final)
    }
}

impl fmt::Display for Cup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cup {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cup::ALL
            .into_iter()
            .find(|cup| cup.name() == s)
            .ok_or_else(|| DrawError::UnknownCup(s.to_string()))
    }
}
