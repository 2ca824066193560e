//! Normalization Utilities
//!
//! Min-max rescaling against extrema observed across the whole candidate set,
//! and the weighted geometric mean used to combine two normalized axes.

/// Min-max normalise `value` into `[0, 1]`
///
/// A degenerate range (`max == min`) returns 0.0 instead of dividing by zero.
pub fn normalise(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Weighted geometric mean of two normalized values
///
/// `(a^wa * b^wb)^(1 / (wa + wb))`. With positive weights a zero on either
/// axis gives 0.0. A zero weight follows `powf` (`0^0 == 1`), leaving the
/// other axis alone. Callers must ensure `wa + wb > 0`.
pub fn weighted_geometric_mean(a: f64, weight_a: f64, b: f64, weight_b: f64) -> f64 {
    let total_weight = weight_a + weight_b;
    (a.powf(weight_a) * b.powf(weight_b)).powf(1.0 / total_weight)
}

/// Observed minimum and maximum of one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extrema {
    pub min: u32,
    pub max: u32,
}

impl Extrema {
    /// Scan values once; `None` when there are no values
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extrema { min: v, max: v }),
            Some(e) => Some(Extrema { min: e.min.min(v), max: e.max.max(v) }),
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn normalise(&self, value: u32) -> f64 {
        normalise(value as f64, self.min as f64, self.max as f64)
    }
}
