//! Bounded scalar newtypes (Immutable Blueprints)

use serde::{Deserialize, Serialize};

/// Fixed per-model confidence, clamped between 0 and 1.
/// A design constant, not a statistically derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// Exponential-smoothing factor, clamped between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for SmoothingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_clamps_to_unit_interval() {
        assert_eq!(Confidence::new(-0.5).value(), 0.0);
        assert_eq!(Confidence::new(1.5).value(), 1.0);
        assert_eq!(Confidence::new(0.8).value(), 0.8);
    }

    #[test]
    fn confidence_displays_as_percent() {
        assert_eq!(Confidence::new(0.75).to_string(), "75%");
    }

    #[test]
    fn smoothing_factor_clamps_to_unit_interval() {
        assert_eq!(SmoothingFactor::new(2.0).value(), 1.0);
        assert_eq!(SmoothingFactor::new(0.3).value(), 0.3);
    }
}
