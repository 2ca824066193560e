//! Set Scorer - second pass over the full candidate list
//!
//! Scores depend on poison/plague/total extrema across every candidate, so
//! they cannot be computed while sets are generated. `SetScorer::score`
//! gathers the extrema once, then fills in each candidate's weighted total:
//!
//! ```text
//! geo            = (norm_poison^w_poison * norm_plague^w_plague)^(1 / (w_poison + w_plague))
//! weighted_total = 0.5 * norm_total + 0.5 * geo
//! ```

use crate::error::{ArmourError, Result};
use crate::types::Candidate;
use crate::utils::normalization::{weighted_geometric_mean, Extrema};
use serde::{Deserialize, Serialize};

/// Share of the final score taken by normalized total resistance
const TOTAL_SHARE: f64 = 0.5;

/// Weights for the poison/plague geometric mean
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub poison: f64,
    pub plague: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { poison: 1.0, plague: 1.0 }
    }
}

impl ScoreWeights {
    /// Reject weights that would make the geometric mean undefined
    pub fn validate(&self) -> Result<()> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        if !valid(self.poison) || !valid(self.plague) || self.poison + self.plague <= 0.0 {
            return Err(ArmourError::InvalidWeight {
                poison: self.poison,
                plague: self.plague,
            });
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.poison + self.plague
    }
}

/// Extrema across the whole candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreStats {
    pub poison: Extrema,
    pub plague: Extrema,
    pub total: Extrema,
}

impl ScoreStats {
    /// `None` for an empty candidate list
    pub fn from_candidates(candidates: &[Candidate]) -> Option<Self> {
        Some(Self {
            poison: Extrema::from_values(candidates.iter().map(|c| c.resistances().poison))?,
            plague: Extrema::from_values(candidates.iter().map(|c| c.resistances().plague))?,
            total: Extrema::from_values(candidates.iter().map(Candidate::total))?,
        })
    }
}

/// Per-candidate score breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub norm_poison: f64,
    pub norm_plague: f64,
    pub norm_total: f64,
    /// Weighted geometric mean of `norm_poison` and `norm_plague`
    pub geo: f64,
    pub weighted_total: f64,
}

/// Main set scorer
#[derive(Debug, Clone)]
pub struct SetScorer {
    weights: ScoreWeights,
}

impl SetScorer {
    /// Fails with `InvalidWeight` before any scoring happens
    pub fn new(weights: ScoreWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score one candidate against precomputed set-wide extrema
    pub fn score_one(&self, candidate: &Candidate, stats: &ScoreStats) -> CandidateScore {
        let r = candidate.resistances();

        let norm_poison = stats.poison.normalise(r.poison);
        let norm_plague = stats.plague.normalise(r.plague);
        let norm_total = stats.total.normalise(candidate.total());

        let geo = weighted_geometric_mean(
            norm_poison,
            self.weights.poison,
            norm_plague,
            self.weights.plague,
        );

        CandidateScore {
            norm_poison,
            norm_plague,
            norm_total,
            geo,
            weighted_total: TOTAL_SHARE * norm_total + (1.0 - TOTAL_SHARE) * geo,
        }
    }

    /// Fill in `weighted_total` for every candidate in place
    ///
    /// Must be given the complete candidate list. Returns the extrema used,
    /// or `None` if there was nothing to score.
    pub fn score(&self, candidates: &mut [Candidate]) -> Option<ScoreStats> {
        let stats = ScoreStats::from_candidates(candidates)?;

        tracing::debug!(
            "Extrema: poison {}..{}, plague {}..{}, total {}..{}",
            stats.poison.min,
            stats.poison.max,
            stats.plague.min,
            stats.plague.max,
            stats.total.min,
            stats.total.max,
        );
        if stats.poison.is_degenerate() || stats.plague.is_degenerate() || stats.total.is_degenerate() {
            tracing::debug!("Degenerate range present; affected axis normalises to 0.0");
        }

        for candidate in candidates.iter_mut() {
            let score = self.score_one(candidate, &stats);
            candidate.set_weighted_total(score.weighted_total);
        }

        if let Some(best) = candidates
            .iter()
            .filter_map(|c| c.weighted_total().map(|s| (c, s)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
        {
            tracing::info!(
                "Scored {} sets; best {:.4}: {}",
                candidates.len(),
                best.1,
                best.0.name()
            );
        }

        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::generate_candidates;
    use crate::data::Catalog;
    use crate::types::{Item, Resistances};
    use approx::assert_relative_eq;

    fn scored_builtin() -> Vec<Candidate> {
        let mut candidates = generate_candidates(&Catalog::builtin());
        SetScorer::new(ScoreWeights::default())
            .unwrap()
            .score(&mut candidates)
            .unwrap();
        candidates
    }

    #[test]
    fn test_weights_validation() {
        assert!(ScoreWeights::default().validate().is_ok());
        assert!(ScoreWeights { poison: 0.0, plague: 2.0 }.validate().is_ok());

        for (poison, plague) in [(0.0, 0.0), (-1.0, 1.0), (1.0, f64::NAN), (f64::INFINITY, 1.0)] {
            let err = SetScorer::new(ScoreWeights { poison, plague }).unwrap_err();
            assert!(matches!(err, ArmourError::InvalidWeight { .. }));
        }
    }

    #[test]
    fn test_builtin_extrema() {
        let candidates = generate_candidates(&Catalog::builtin());
        let stats = ScoreStats::from_candidates(&candidates).unwrap();
        assert_eq!(stats.poison, Extrema { min: 39, max: 160 });
        assert_eq!(stats.plague, Extrema { min: 0, max: 160 });
        assert_eq!(stats.total, Extrema { min: 302, max: 347 });
    }

    #[test]
    fn test_builtin_reference_scores() {
        let candidates = scored_builtin();

        // Highest total, weak poison
        let first = &candidates[0];
        assert_eq!(first.name(), "Gold Mask + Old Ragged Robes + Old Ragged Gloves + Old Ragged Boots");
        assert_relative_eq!(first.weighted_total().unwrap(), 0.6401003182492949, epsilon = 1e-12);

        // Zero plague: geometric term vanishes, norm_total = 9/45
        let last = candidates.last().unwrap();
        assert_relative_eq!(last.weighted_total().unwrap(), 0.1, epsilon = 1e-12);

        let floor = candidates
            .iter()
            .find(|c| c.name() == "Imperial Spy Hood + Imperial Spy Clothes + Black Gloves + Black Boots")
            .unwrap();
        assert_eq!(floor.total(), 302);
        assert_eq!(floor.weighted_total(), Some(0.0));
    }

    #[test]
    fn test_scores_within_unit_interval() {
        for candidate in scored_builtin() {
            let score = candidate.weighted_total().unwrap();
            assert!((0.0..=1.0).contains(&score), "{}: {}", candidate.name(), score);
        }
    }

    #[test]
    fn test_two_head_poison_scenario() {
        let plain = |name: &str, poison: u32| Item::new(name, Resistances::new(5, 5, 5, poison, 5));
        let catalog = Catalog::new(
            vec![plain("Low", 0), plain("High", 10)],
            vec![plain("Torso", 0)],
            vec![plain("Arms", 0)],
            vec![plain("Legs", 0)],
        );
        let mut candidates = generate_candidates(&catalog);
        assert_eq!(candidates.len(), 2);

        let scorer = SetScorer::new(ScoreWeights::default()).unwrap();
        let stats = scorer.score(&mut candidates).unwrap();
        assert!(stats.plague.is_degenerate());

        let low = scorer.score_one(&candidates[0], &stats);
        let high = scorer.score_one(&candidates[1], &stats);
        assert_eq!(low.norm_poison, 0.0);
        assert_eq!(high.norm_poison, 1.0);

        // Flat plague range normalises to 0.0, which zeroes the geometric term
        assert_eq!(high.norm_plague, 0.0);
        assert_eq!(high.geo, 0.0);
        assert_relative_eq!(candidates[0].weighted_total().unwrap(), 0.0);
        assert_relative_eq!(candidates[1].weighted_total().unwrap(), 0.5);
    }

    #[test]
    fn test_zero_weight_ignores_axis() {
        let candidates = generate_candidates(&Catalog::builtin());
        let stats = ScoreStats::from_candidates(&candidates).unwrap();
        let poison_only = SetScorer::new(ScoreWeights { poison: 1.0, plague: 0.0 }).unwrap();

        for candidate in &candidates {
            let score = poison_only.score_one(candidate, &stats);
            assert_relative_eq!(score.geo, score.norm_poison, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_set_is_not_scored() {
        let scorer = SetScorer::new(ScoreWeights::default()).unwrap();
        let mut candidates: Vec<Candidate> = Vec::new();
        assert!(scorer.score(&mut candidates).is_none());
    }
}
