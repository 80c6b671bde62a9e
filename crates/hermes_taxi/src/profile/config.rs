use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kmh::Kmh;
use crate::profile::reduction_factors::ReductionFactors;
use crate::road_class::RoadClass;

pub const DEFAULT_TUNNEL_PENALTY: f64 = 0.9;
pub const DEFAULT_BAD_SURFACE_SPEED: Kmh = Kmh::new(30.0);
pub const DEFAULT_MAX_POSSIBLE_SPEED: Kmh = Kmh::new(140.0);

static TAXI_SPEEDS: [(RoadClass, f64); 17] = [
    (RoadClass::Motorway, 100.0),
    (RoadClass::MotorwayLink, 60.0),
    (RoadClass::Trunk, 80.0),
    (RoadClass::TrunkLink, 60.0),
    (RoadClass::Primary, 60.0),
    (RoadClass::PrimaryLink, 50.0),
    (RoadClass::Secondary, 50.0),
    (RoadClass::SecondaryLink, 40.0),
    (RoadClass::Tertiary, 40.0),
    (RoadClass::TertiaryLink, 30.0),
    (RoadClass::Unclassified, 30.0),
    (RoadClass::Residential, 20.0),
    (RoadClass::LivingStreet, 5.0),
    (RoadClass::Service, 15.0),
    (RoadClass::Road, 20.0),
    (RoadClass::Track, 10.0),
    (RoadClass::Path, 5.0),
];

/// Tuning of the taxi profile, fixed at construction time.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct TaxiProfileConfig {
    /// Speeds replacing the car defaults for unposted ways.
    pub speed_overrides: BTreeMap<RoadClass, Kmh>,
    pub reduction_factors: ReductionFactors,
    /// Speed multiplier inside tunnels, `None` disables the penalty.
    pub tunnel_penalty: Option<f64>,
    /// Upper bound on ways with a degraded surface.
    pub bad_surface_speed: Kmh,
    pub max_possible_speed: Kmh,
}

impl Default for TaxiProfileConfig {
    fn default() -> Self {
        Self {
            speed_overrides: TAXI_SPEEDS
                .iter()
                .map(|(road_class, speed)| (*road_class, Kmh::new(*speed)))
                .collect(),
            reduction_factors: ReductionFactors::default(),
            tunnel_penalty: Some(DEFAULT_TUNNEL_PENALTY),
            bad_surface_speed: DEFAULT_BAD_SURFACE_SPEED,
            max_possible_speed: DEFAULT_MAX_POSSIBLE_SPEED,
        }
    }
}

impl TaxiProfileConfig {
    pub fn without_tunnel_penalty(mut self) -> Self {
        self.tunnel_penalty = None;
        self
    }

    pub fn with_speed(mut self, road_class: RoadClass, speed: Kmh) -> Self {
        self.speed_overrides.insert(road_class, speed);
        self
    }

    pub fn with_reduction_factors(mut self, reduction_factors: ReductionFactors) -> Self {
        self.reduction_factors = reduction_factors;
        self
    }
}
