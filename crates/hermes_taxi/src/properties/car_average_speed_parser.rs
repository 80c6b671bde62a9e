use crate::kmh::Kmh;
use crate::osm::osm_way::OsmWay;
use crate::road_class::RoadClass;

// https://wiki.openstreetmap.org/wiki/Key:surface
static BAD_SURFACES: [&str; 10] = [
    "cobblestone",
    "grass_paver",
    "gravel",
    "sand",
    "paving_stones",
    "dirt",
    "ground",
    "grass",
    "unpaved",
    "compacted",
];

pub struct CarAverageSpeedParser;

impl CarAverageSpeedParser {
    pub fn default_speed(road_class: RoadClass) -> Kmh {
        let speed = match road_class {
            RoadClass::Motorway => 120.0,
            RoadClass::MotorwayLink => 70.0,

            RoadClass::Trunk => 70.0,
            RoadClass::TrunkLink => 70.0,

            RoadClass::Primary => 60.0,
            RoadClass::PrimaryLink => 60.0,

            RoadClass::Secondary => 50.0,
            RoadClass::SecondaryLink => 40.0,

            RoadClass::Tertiary => 30.0,
            RoadClass::TertiaryLink => 30.0,

            RoadClass::Unclassified => 30.0,
            RoadClass::Residential => 30.0,
            RoadClass::LivingStreet => 5.0,
            RoadClass::Service => 20.0,

            RoadClass::Road => 20.0,
            RoadClass::Track => 15.0,
            RoadClass::Path => 5.0,

            RoadClass::Other => 30.0,
        };

        Kmh::new(speed)
    }

    pub fn is_bad_surface(way: &OsmWay) -> bool {
        way.has_tag_in("surface", &BAD_SURFACES)
    }

    /// Caps `speed` at `bad_surface_speed` when the way has a degraded surface.
    pub fn apply_bad_surface_speed(way: &OsmWay, speed: Kmh, bad_surface_speed: Kmh) -> Kmh {
        if Self::is_bad_surface(way) {
            speed.min(bad_surface_speed)
        } else {
            speed
        }
    }
}
