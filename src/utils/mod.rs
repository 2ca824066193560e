//! Utility modules for set scoring
//!
//! - Normalization: min-max rescaling and weighted geometric mean

pub mod normalization;

// Re-export commonly used types
pub use normalization::{normalise, weighted_geometric_mean, Extrema};
