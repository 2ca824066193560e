//! Run configuration
//!
//! Read once at startup from environment variables:
//! - `ARMOUR_OUTPUT`: CSV output path (default `out.csv`)
//! - `ARMOUR_WEIGHTS`: optional JSON file `{"poison": 1.0, "plague": 1.0}`

use crate::scorer::ScoreWeights;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "out.csv";
pub const OUTPUT_VAR: &str = "ARMOUR_OUTPUT";
pub const WEIGHTS_VAR: &str = "ARMOUR_WEIGHTS";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub output: PathBuf,
    pub weights: ScoreWeights,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            weights: ScoreWeights::default(),
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output = get(OUTPUT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let weights = match get(WEIGHTS_VAR) {
            Some(path) => load_weights(Path::new(&path))?,
            None => ScoreWeights::default(),
        };

        Ok(Self { output, weights })
    }
}

/// Load score weights from a JSON file; missing keys take their defaults
pub fn load_weights(path: &Path) -> Result<ScoreWeights> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights file: {:?}", path))?;

    let weights: ScoreWeights = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse weights JSON: {:?}", path))?;

    weights
        .validate()
        .with_context(|| format!("Rejected weights from {:?}", path))?;

    Ok(weights)
}
