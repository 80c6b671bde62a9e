use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::osm::osm_way::OsmWay;

/// Coarse functional class of a way, derived from its `highway` tag.
///
/// <https://wiki.openstreetmap.org/wiki/Key:highway>
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
    Road,
    Track,
    Path,
    Other,
}

impl RoadClass {
    pub const COUNT: usize = 18;

    pub const ALL: [RoadClass; RoadClass::COUNT] = [
        RoadClass::Motorway,
        RoadClass::MotorwayLink,
        RoadClass::Trunk,
        RoadClass::TrunkLink,
        RoadClass::Primary,
        RoadClass::PrimaryLink,
        RoadClass::Secondary,
        RoadClass::SecondaryLink,
        RoadClass::Tertiary,
        RoadClass::TertiaryLink,
        RoadClass::Unclassified,
        RoadClass::Residential,
        RoadClass::LivingStreet,
        RoadClass::Service,
        RoadClass::Road,
        RoadClass::Track,
        RoadClass::Path,
        RoadClass::Other,
    ];

    pub fn from_way(way: &OsmWay) -> Self {
        Self::from_highway(way.tag("highway").unwrap_or(""))
    }

    pub fn from_highway(highway: &str) -> Self {
        match highway {
            "motorway" => RoadClass::Motorway,
            "motorway_link" => RoadClass::MotorwayLink,
            "trunk" => RoadClass::Trunk,
            "trunk_link" => RoadClass::TrunkLink,
            "primary" => RoadClass::Primary,
            "primary_link" => RoadClass::PrimaryLink,
            "secondary" => RoadClass::Secondary,
            "secondary_link" => RoadClass::SecondaryLink,
            "tertiary" => RoadClass::Tertiary,
            "tertiary_link" => RoadClass::TertiaryLink,
            "unclassified" => RoadClass::Unclassified,
            "residential" => RoadClass::Residential,
            "living_street" => RoadClass::LivingStreet,
            "service" => RoadClass::Service,
            "road" => RoadClass::Road,
            "track" => RoadClass::Track,
            "path" => RoadClass::Path,
            _ => RoadClass::Other,
        }
    }

    /// Position of the class in [`RoadClass::ALL`], used to index dense tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadClass::Motorway => "motorway",
            RoadClass::MotorwayLink => "motorway_link",
            RoadClass::Trunk => "trunk",
            RoadClass::TrunkLink => "trunk_link",
            RoadClass::Primary => "primary",
            RoadClass::PrimaryLink => "primary_link",
            RoadClass::Secondary => "secondary",
            RoadClass::SecondaryLink => "secondary_link",
            RoadClass::Tertiary => "tertiary",
            RoadClass::TertiaryLink => "tertiary_link",
            RoadClass::Unclassified => "unclassified",
            RoadClass::Residential => "residential",
            RoadClass::LivingStreet => "living_street",
            RoadClass::Service => "service",
            RoadClass::Road => "road",
            RoadClass::Track => "track",
            RoadClass::Path => "path",
            RoadClass::Other => "other",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ordered_by_index() {
        for (index, road_class) in RoadClass::ALL.iter().enumerate() {
            assert_eq!(road_class.index(), index);
        }
    }

    #[test]
    fn test_from_highway_round_trips_names() {
        for road_class in RoadClass::ALL {
            if road_class == RoadClass::Other {
                continue;
            }
            assert_eq!(RoadClass::from_highway(road_class.as_str()), road_class);
        }
    }

    #[test]
    fn test_unknown_highway_is_other() {
        assert_eq!(RoadClass::from_highway("footway"), RoadClass::Other);
        assert_eq!(RoadClass::from_highway("Motorway"), RoadClass::Other);
        assert_eq!(RoadClass::from_highway(""), RoadClass::Other);
    }

    #[test]
    fn test_missing_highway_tag_is_other() {
        let way = OsmWay::from_tags(1, [("name", "Rue de la Loi")]);
        assert_eq!(RoadClass::from_way(&way), RoadClass::Other);

        let way = OsmWay::from_tags(2, [("highway", "living_street")]);
        assert_eq!(RoadClass::from_way(&way), RoadClass::LivingStreet);
    }
}
