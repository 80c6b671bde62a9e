use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, is_valid_factor};
use crate::road_class::RoadClass;

/// Share of a posted limit a taxi realistically reaches, per group of road classes.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ReductionFactors {
    /// Motorways and trunks, including their links.
    pub fast: f64,
    /// Primary, secondary and tertiary roads, including their links.
    pub arterial: f64,
    pub local: f64,
    /// Service roads, tracks and paths.
    pub minor: f64,
    pub default: f64,
}

impl Default for ReductionFactors {
    fn default() -> Self {
        Self {
            fast: 1.0,
            arterial: 0.8,
            local: 0.6,
            minor: 0.5,
            default: 0.7,
        }
    }
}

impl ReductionFactors {
    pub fn factor(&self, road_class: RoadClass) -> f64 {
        match road_class {
            RoadClass::Motorway
            | RoadClass::MotorwayLink
            | RoadClass::Trunk
            | RoadClass::TrunkLink => self.fast,

            RoadClass::Primary
            | RoadClass::PrimaryLink
            | RoadClass::Secondary
            | RoadClass::SecondaryLink
            | RoadClass::Tertiary
            | RoadClass::TertiaryLink => self.arterial,

            RoadClass::Unclassified | RoadClass::Residential | RoadClass::LivingStreet => {
                self.local
            }

            RoadClass::Service | RoadClass::Track | RoadClass::Path => self.minor,

            RoadClass::Road | RoadClass::Other => self.default,
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        let groups = [
            ("fast", self.fast),
            ("arterial", self.arterial),
            ("local", self.local),
            ("minor", self.minor),
            ("default", self.default),
        ];

        match groups.into_iter().find(|(_, factor)| !is_valid_factor(*factor)) {
            Some((group, factor)) => Err(ProfileError::InvalidReductionFactor { group, factor }),
            None => Ok(()),
        }
    }
}
