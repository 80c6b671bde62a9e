use tracing::trace;

use crate::edge_direction::EdgeDirection;
use crate::kmh::Kmh;
use crate::osm::osm_way::OsmWay;

pub(crate) const WALK_SPEED: Kmh = Kmh::new(5.0);
pub(crate) const UNLIMITED_SPEED: Kmh = Kmh::new(150.0);
pub(crate) const MAX_PLAUSIBLE_SPEED: Kmh = Kmh::new(300.0);

pub struct MaxSpeedParser;

impl MaxSpeedParser {
    /// Posted limit for one direction of the way. `maxspeed:forward` and
    /// `maxspeed:backward` win over the plain `maxspeed` tag.
    pub fn parse_max_speed(way: &OsmWay, direction: EdgeDirection) -> Option<Kmh> {
        let directional_key = match direction {
            EdgeDirection::Forward => "maxspeed:forward",
            EdgeDirection::Backward => "maxspeed:backward",
        };

        way.tag(directional_key)
            .and_then(parse_value)
            .or_else(|| way.tag("maxspeed").and_then(parse_value))
    }
}

// https://wiki.openstreetmap.org/wiki/Key:maxspeed
pub fn parse_value(value: &str) -> Option<Kmh> {
    let speed = match value.trim() {
        "walk" => Some(WALK_SPEED),
        "none" => Some(UNLIMITED_SPEED),
        value => parse_numeric(value),
    };

    // Limits above the unlimited-road value are treated as unlimited
    match speed {
        Some(speed) if speed.is_valid() && speed <= MAX_PLAUSIBLE_SPEED => {
            Some(speed.min(UNLIMITED_SPEED))
        }
        _ => {
            trace!(value, "Ignoring implausible maxspeed");
            None
        }
    }
}

fn parse_numeric(value: &str) -> Option<Kmh> {
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number = number.parse::<f64>().ok()?;

    match unit.trim() {
        "" | "kmh" | "kph" | "km/h" | "kmph" => Some(Kmh::new(number)),
        "mph" => Some(Kmh::from_mph(number)),
        "knots" | "knot" | "kn" => Some(Kmh::from_knots(number)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("50"), Some(Kmh::new(50.0)));
        assert_eq!(parse_value(" 50 "), Some(Kmh::new(50.0)));
        assert_eq!(parse_value("50 km/h"), Some(Kmh::new(50.0)));
        assert_eq!(parse_value("3kmh"), Some(Kmh::new(3.0)));
        assert_eq!(parse_value("walk"), Some(WALK_SPEED));
        assert_eq!(parse_value("none"), Some(UNLIMITED_SPEED));
        assert_eq!(parse_value("20 mph"), Some(Kmh::from_mph(20.0)));
        assert_eq!(parse_value("5 knots"), Some(Kmh::from_knots(5.0)));
    }

    #[test]
    fn test_parse_value_rejects_implausible() {
        assert_eq!(parse_value("0"), None);
        assert_eq!(parse_value("301"), None);
        assert_eq!(parse_value("DE:urban"), None);
        assert_eq!(parse_value("signals"), None);
        assert_eq!(parse_value("50;30"), None);
        assert_eq!(parse_value(""), None);
    }

    #[test]
    fn test_high_limits_are_unlimited() {
        assert_eq!(parse_value("150"), Some(UNLIMITED_SPEED));
        assert_eq!(parse_value("151"), Some(UNLIMITED_SPEED));
        assert_eq!(parse_value("300"), Some(UNLIMITED_SPEED));
        assert_eq!(parse_value("120 mph"), Some(UNLIMITED_SPEED));
    }

    #[test]
    fn test_directional_max_speed() {
        let way = OsmWay::from_tags(
            1,
            [
                ("highway", "primary"),
                ("maxspeed", "70"),
                ("maxspeed:backward", "50"),
            ],
        );

        assert_eq!(
            MaxSpeedParser::parse_max_speed(&way, EdgeDirection::Forward),
            Some(Kmh::new(70.0))
        );
        assert_eq!(
            MaxSpeedParser::parse_max_speed(&way, EdgeDirection::Backward),
            Some(Kmh::new(50.0))
        );
    }

    #[test]
    fn test_invalid_directional_max_speed_falls_back() {
        let way = OsmWay::from_tags(1, [("maxspeed", "30"), ("maxspeed:forward", "fast")]);

        assert_eq!(
            MaxSpeedParser::parse_max_speed(&way, EdgeDirection::Forward),
            Some(Kmh::new(30.0))
        );
    }

    #[test]
    fn test_missing_max_speed() {
        let way = OsmWay::from_tags(1, [("highway", "residential")]);

        assert_eq!(
            MaxSpeedParser::parse_max_speed(&way, EdgeDirection::Forward),
            None
        );
    }
}
