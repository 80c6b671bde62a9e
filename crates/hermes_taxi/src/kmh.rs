use std::ops::Mul;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub(crate) const MPH_TO_KMH: f64 = 1.609344;
pub(crate) const KNOTS_TO_KMH: f64 = 1.852;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct Kmh(f64);

impl Kmh {
    pub const ZERO: Kmh = Kmh(0.0);

    pub const fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn from_mph(value: f64) -> Self {
        Kmh(value * MPH_TO_KMH)
    }

    pub fn from_knots(value: f64) -> Self {
        Kmh(value * KNOTS_TO_KMH)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    pub fn min(self, other: Kmh) -> Kmh {
        Kmh(self.0.min(other.0))
    }
}

impl Mul<f64> for Kmh {
    type Output = Kmh;

    fn mul(self, factor: f64) -> Kmh {
        Kmh(self.0 * factor)
    }
}

impl std::fmt::Display for Kmh {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert!((Kmh::from_mph(30.0).value() - 48.28032).abs() < 1e-9);
        assert!((Kmh::from_knots(10.0).value() - 18.52).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(Kmh::new(0.5).is_valid());
        assert!(!Kmh::ZERO.is_valid());
        assert!(!Kmh::new(-10.0).is_valid());
        assert!(!Kmh::new(f64::NAN).is_valid());
        assert!(!Kmh::new(f64::INFINITY).is_valid());
    }
}
