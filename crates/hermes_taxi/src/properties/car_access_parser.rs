use crate::directionality::Directionality;
use crate::osm::osm_way::OsmWay;

pub static HIGHWAY_VALUES: [&str; 16] = [
    "motorway",
    "motorway_link",
    "trunk",
    "trunk_link",
    "primary",
    "primary_link",
    "secondary",
    "secondary_link",
    "tertiary",
    "tertiary_link",
    "unclassified",
    "residential",
    "living_street",
    "service",
    "road",
    "track",
];

// Most specific first
static ACCESS_KEYS: [&str; 4] = ["motorcar", "motor_vehicle", "vehicle", "access"];
static RESTRICTED_VALUES: [&str; 8] = [
    "no",
    "private",
    "agricultural",
    "forestry",
    "delivery",
    "restricted",
    "military",
    "emergency",
];

// Most specific first
static ONEWAY_KEYS: [&str; 3] = ["oneway:motor_vehicle", "oneway:vehicle", "oneway"];
static ONEWAYS: [&str; 3] = ["yes", "true", "1"];
static REVERSE_ONEWAYS: [&str; 2] = ["-1", "reverse"];

pub struct CarAccessParser;

impl CarAccessParser {
    /// Generic car verdict for a way, before any vehicle-specific exception.
    pub fn directionality(way: &OsmWay) -> Directionality {
        if let WayAccess::None = car_access(way) {
            return Directionality::Inaccessible;
        }

        match oneway_value(way) {
            Some(value) if REVERSE_ONEWAYS.contains(&value) => Directionality::Backward,
            Some(value) if ONEWAYS.contains(&value) => Directionality::Forward,
            Some(_) => Directionality::Bidirectional,
            None if is_roundabout(way) || is_implied_oneway(way) => Directionality::Forward,
            None => Directionality::Bidirectional,
        }
    }
}

fn car_access(way: &OsmWay) -> WayAccess {
    let highway = way.tag("highway");

    let access = match highway {
        // https://wiki.openstreetmap.org/wiki/Tag:highway%3Dservice
        Some("service") if way.has_tag("service", "emergency_access") => WayAccess::None,
        Some(value) if HIGHWAY_VALUES.contains(&value) => WayAccess::Way,
        _ => WayAccess::None,
    };

    if let WayAccess::None = access {
        return access;
    }

    // https://wiki.openstreetmap.org/wiki/Key:access
    match ACCESS_KEYS.iter().find_map(|key| way.tag(key)) {
        Some(value) if RESTRICTED_VALUES.contains(&value) => WayAccess::None,
        _ => WayAccess::Way,
    }
}

// https://wiki.openstreetmap.org/wiki/Key:oneway
fn oneway_value(way: &OsmWay) -> Option<&str> {
    ONEWAY_KEYS.iter().find_map(|key| way.tag(key))
}

fn is_implied_oneway(way: &OsmWay) -> bool {
    way.has_tag_in("highway", &["motorway", "motorway_link"])
}

// https://wiki.openstreetmap.org/wiki/Key:junction
fn is_roundabout(way: &OsmWay) -> bool {
    way.has_tag("junction", "roundabout") || way.has_tag("junction", "circular")
}

enum WayAccess {
    Way,
    None,
}
