use thiserror::Error;

use crate::kmh::Kmh;
use crate::road_class::RoadClass;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("No default speed configured for road class {0}")]
    MissingSpeed(RoadClass),
    #[error("Invalid default speed {speed} for road class {road_class}")]
    InvalidSpeed { road_class: RoadClass, speed: Kmh },
    #[error("Reduction factor {factor} for {group} roads must be in (0, 1]")]
    InvalidReductionFactor { group: &'static str, factor: f64 },
    #[error("Tunnel penalty {0} must be in (0, 1]")]
    InvalidPenalty(f64),
    #[error(
        "Invalid speed bounds: bad surface speed {bad_surface_speed}, max possible speed {max_possible_speed}"
    )]
    InvalidSpeedBounds {
        bad_surface_speed: Kmh,
        max_possible_speed: Kmh,
    },
}

pub(crate) fn is_valid_factor(factor: f64) -> bool {
    factor.is_finite() && factor > 0.0 && factor <= 1.0
}
