use crate::directionality::Directionality;
use crate::edge_direction::EdgeDirection;
use crate::kmh::Kmh;
use crate::road_class::RoadClass;

/// Values derived for one way, handed to the graph encoder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WayProperties {
    pub road_class: RoadClass,
    pub directionality: Directionality,
    pub forward_speed: Kmh,
    pub backward_speed: Kmh,
}

impl WayProperties {
    pub fn can_access(&self, direction: EdgeDirection) -> bool {
        self.directionality.allows(direction)
    }

    pub fn speed(&self, direction: EdgeDirection) -> Kmh {
        match direction {
            EdgeDirection::Forward => self.forward_speed,
            EdgeDirection::Backward => self.backward_speed,
        }
    }

    /// Speed in `direction`, or `None` when the way cannot be traversed that way.
    pub fn accessible_speed(&self, direction: EdgeDirection) -> Option<Kmh> {
        self.can_access(direction).then(|| self.speed(direction))
    }
}
