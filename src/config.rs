//! Operation Configuration
//!
//! Knobs for the few operations whose behavior is a policy choice rather
//! than a fixed contract. Stored as JSON.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What a linear shift writes into the positions it vacates
///
/// A shift toward lower indices always zero-fills the trailing positions.
/// This policy only governs the leading positions left behind by a shift
/// toward higher indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftFill {
    /// Leave the old samples in place (compatible behavior)
    Stale,
    /// Overwrite vacated positions with silence
    Zero,
}

impl Default for ShiftFill {
    fn default() -> Self {
        ShiftFill::Stale
    }
}

/// Configuration for buffer operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsConfig {
    /// Fill policy used by [`crate::ops::shift_with`]
    pub shift_fill: ShiftFill,
    /// Seed for reproducible noise; None draws from OS entropy
    pub noise_seed: Option<u64>,
}

impl OpsConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the RNG that [`crate::ops::noise_with_rng`] should draw from
    pub fn noise_rng(&self) -> StdRng {
        match self.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
