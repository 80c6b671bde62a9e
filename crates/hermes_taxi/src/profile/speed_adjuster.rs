use crate::kmh::Kmh;
use crate::osm::osm_way::OsmWay;
use crate::profile::environmental_penalty::EnvironmentalPenalty;
use crate::profile::reduction_factors::ReductionFactors;
use crate::profile::speed_table::SpeedTable;
use crate::road_class::RoadClass;

/// Usable speed on a way, before the profile-wide surface and ceiling bounds.
#[derive(Clone, Debug)]
pub struct SpeedAdjuster {
    speed_table: SpeedTable,
    reduction_factors: ReductionFactors,
    penalty: Option<EnvironmentalPenalty>,
}

impl SpeedAdjuster {
    pub fn new(
        speed_table: SpeedTable,
        reduction_factors: ReductionFactors,
        penalty: Option<EnvironmentalPenalty>,
    ) -> Self {
        Self {
            speed_table,
            reduction_factors,
            penalty,
        }
    }

    pub fn speed_table(&self) -> &SpeedTable {
        &self.speed_table
    }

    pub fn reduction_factors(&self) -> &ReductionFactors {
        &self.reduction_factors
    }

    /// A posted limit is scaled by the class reduction factor, an unposted
    /// way uses the class default. Both are scaled by the environmental penalty.
    pub fn adjusted_speed(
        &self,
        way: &OsmWay,
        road_class: RoadClass,
        posted_limit: Option<Kmh>,
    ) -> Kmh {
        let penalty = self.penalty.map_or(1.0, |penalty| penalty.factor(way));

        match posted_limit {
            Some(limit) => limit * self.reduction_factors.factor(road_class) * penalty,
            None => self.speed_table.speed(road_class) * penalty,
        }
    }
}
