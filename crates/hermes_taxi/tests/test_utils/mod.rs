use hermes_taxi::osm::osm_way::OsmWay;

pub fn create_way(tags: &[(&str, &str)]) -> OsmWay {
    OsmWay::from_tags(0, tags.iter().copied())
}

/// Ways covering every highway value the classifier knows about, plus a few it does not.
pub fn create_highway_ways() -> Vec<OsmWay> {
    [
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
        "path",
        "footway",
        "bus_guideway",
        "",
    ]
    .into_iter()
    .enumerate()
    .map(|(id, highway)| OsmWay::from_tags(id, [("highway", highway)]))
    .collect()
}
