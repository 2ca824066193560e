//! Combination Generator
//!
//! Enumerates every head × torso × arms × legs set from a catalog. Order is
//! lexicographic over catalog order with head outermost and legs innermost,
//! so output rows are deterministic. Nothing is filtered or deduplicated.

use crate::data::Catalog;
use crate::types::{Candidate, Slot};

/// Number of sets the catalog yields (product of slot sizes)
pub fn candidate_count(catalog: &Catalog) -> usize {
    Slot::ALL
        .iter()
        .map(|&slot| catalog.items(slot).len())
        .product()
}

/// Build the full Cartesian product as unscored candidates
///
/// An empty slot yields an empty product; that is not an error.
pub fn generate_candidates(catalog: &Catalog) -> Vec<Candidate> {
    let expected = candidate_count(catalog);
    tracing::debug!("Generating {} armour set combinations", expected);

    let mut candidates = Vec::with_capacity(expected);

    for head in &catalog.head {
        for torso in &catalog.torso {
            for arms in &catalog.arms {
                for legs in &catalog.legs {
                    candidates.push(Candidate::from_parts([
                        head.clone(),
                        torso.clone(),
                        arms.clone(),
                        legs.clone(),
                    ]));
                }
            }
        }
    }

    debug_assert_eq!(candidates.len(), expected);
    candidates
}
