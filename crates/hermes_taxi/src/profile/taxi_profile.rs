use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::edge_direction::EdgeDirection;
use crate::error::ProfileError;
use crate::kmh::Kmh;
use crate::osm::osm_way::OsmWay;
use crate::profile::config::TaxiProfileConfig;
use crate::profile::directionality_resolver::TaxiDirectionalityResolver;
use crate::profile::environmental_penalty::EnvironmentalPenalty;
use crate::profile::speed_adjuster::SpeedAdjuster;
use crate::profile::speed_table::SpeedTable;
use crate::profile::way_properties::WayProperties;
use crate::properties::car_access_parser::CarAccessParser;
use crate::properties::car_average_speed_parser::CarAverageSpeedParser;
use crate::properties::max_speed_parser::MaxSpeedParser;
use crate::road_class::RoadClass;

/// Taxi travel profile, layered on the generic car rules.
///
/// Immutable once built, a single instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct TaxiProfile {
    speed_adjuster: SpeedAdjuster,
    bad_surface_speed: Kmh,
    max_possible_speed: Kmh,
}

impl TaxiProfile {
    #[instrument(skip_all, level = "debug")]
    pub fn new(config: TaxiProfileConfig) -> Result<Self, ProfileError> {
        let speed_table = SpeedTable::car().with_overrides(&config.speed_overrides)?;
        config.reduction_factors.validate()?;
        let penalty = config
            .tunnel_penalty
            .map(EnvironmentalPenalty::new)
            .transpose()?;

        if !config.bad_surface_speed.is_valid()
            || !config.max_possible_speed.is_valid()
            || config.bad_surface_speed > config.max_possible_speed
        {
            return Err(ProfileError::InvalidSpeedBounds {
                bad_surface_speed: config.bad_surface_speed,
                max_possible_speed: config.max_possible_speed,
            });
        }

        debug!(
            overrides = config.speed_overrides.len(),
            tunnel_penalty = ?config.tunnel_penalty,
            bad_surface_speed = config.bad_surface_speed.value(),
            max_possible_speed = config.max_possible_speed.value(),
            "Created taxi profile"
        );

        Ok(TaxiProfile {
            speed_adjuster: SpeedAdjuster::new(speed_table, config.reduction_factors, penalty),
            bad_surface_speed: config.bad_surface_speed,
            max_possible_speed: config.max_possible_speed,
        })
    }

    pub fn name(&self) -> &'static str {
        "taxi"
    }

    pub fn speed_adjuster(&self) -> &SpeedAdjuster {
        &self.speed_adjuster
    }

    pub fn max_possible_speed(&self) -> Kmh {
        self.max_possible_speed
    }

    pub fn handle_way(&self, way: &OsmWay) -> WayProperties {
        let directionality =
            TaxiDirectionalityResolver::resolve(way, CarAccessParser::directionality(way));
        let road_class = RoadClass::from_way(way);

        WayProperties {
            road_class,
            directionality,
            forward_speed: self.speed(way, road_class, EdgeDirection::Forward),
            backward_speed: self.speed(way, road_class, EdgeDirection::Backward),
        }
    }

    /// Same as [`TaxiProfile::handle_way`] for a batch of ways, in input order.
    pub fn handle_ways(&self, ways: &[OsmWay]) -> Vec<WayProperties> {
        ways.par_iter().map(|way| self.handle_way(way)).collect()
    }

    fn speed(&self, way: &OsmWay, road_class: RoadClass, direction: EdgeDirection) -> Kmh {
        let posted_limit = MaxSpeedParser::parse_max_speed(way, direction);
        let speed = self
            .speed_adjuster
            .adjusted_speed(way, road_class, posted_limit);

        CarAverageSpeedParser::apply_bad_surface_speed(way, speed, self.bad_surface_speed)
            .min(self.max_possible_speed)
    }
}

impl std::fmt::Display for TaxiProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
