//! Armour Set Scorer
//!
//! Enumerates every head/torso/arms/legs combination from fixed catalogs,
//! sums their resistances and scores each set against the whole field.
//!
//! Pipeline (strictly sequential):
//! - `combinations`: Cartesian product of the catalogs into unscored candidates
//! - `scorer`: set-wide extrema, then a weighted score per candidate
//! - `export`: CSV output via Polars

pub mod types;
pub mod data;
pub mod combinations;
pub mod utils;
pub mod scorer;
pub mod export;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use types::{Candidate, Item, Resistances, Slot};
pub use data::Catalog;
pub use combinations::{candidate_count, generate_candidates};
pub use scorer::{CandidateScore, ScoreStats, ScoreWeights, SetScorer};
pub use export::{candidates_to_dataframe, write_csv, OUTPUT_COLUMNS};
pub use config::RunConfig;
pub use error::{ArmourError, Result};

/// Generate and score every set from `catalog`
pub fn build_scored_sets(catalog: &Catalog, weights: ScoreWeights) -> Result<Vec<Candidate>> {
    let scorer = SetScorer::new(weights)?;
    let mut candidates = generate_candidates(catalog);
    scorer.score(&mut candidates);
    Ok(candidates)
}
