use crate::directionality::Directionality;
use crate::osm::osm_way::OsmWay;

// Ways where public service vehicles are exempted from the oneway restriction
// https://wiki.openstreetmap.org/wiki/Key:oneway:psv
static PSV_ONEWAY_EXEMPTION_KEYS: [&str; 2] = ["oneway:psv", "oneway:bus"];

// Contraflow lanes open to buses and taxis
// https://wiki.openstreetmap.org/wiki/Tag:busway%3Dopposite_lane
static OPPOSITE_LANE_KEYS: [&str; 3] = ["busway", "psv", "bus"];

pub struct TaxiDirectionalityResolver;

impl TaxiDirectionalityResolver {
    /// Lifts the base verdict's oneway restriction where taxis are exempted.
    /// An inaccessible way stays inaccessible.
    pub fn resolve(way: &OsmWay, base: Directionality) -> Directionality {
        if !base.is_accessible() {
            return base;
        }

        if is_psv_oneway_exempted(way) || has_opposite_lane(way) {
            return Directionality::Bidirectional;
        }

        base
    }
}

fn is_psv_oneway_exempted(way: &OsmWay) -> bool {
    PSV_ONEWAY_EXEMPTION_KEYS
        .iter()
        .any(|key| way.has_tag(key, "no"))
}

fn has_opposite_lane(way: &OsmWay) -> bool {
    OPPOSITE_LANE_KEYS
        .iter()
        .any(|key| way.has_tag(key, "opposite_lane"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Directionality; 4] = [
        Directionality::Forward,
        Directionality::Backward,
        Directionality::Bidirectional,
        Directionality::Inaccessible,
    ];

    fn way(tags: &[(&str, &str)]) -> OsmWay {
        OsmWay::from_tags(1, tags.iter().copied())
    }

    #[test]
    fn test_psv_exemption() {
        let way = way(&[
            ("highway", "residential"),
            ("oneway", "yes"),
            ("oneway:psv", "no"),
            ("oneway:motor_vehicle", "yes"),
        ]);

        assert_eq!(
            TaxiDirectionalityResolver::resolve(&way, Directionality::Forward),
            Directionality::Bidirectional
        );
        assert_eq!(
            TaxiDirectionalityResolver::resolve(&way, Directionality::Backward),
            Directionality::Bidirectional
        );
    }

    #[test]
    fn test_bus_exemption() {
        let way = way(&[("highway", "primary"), ("oneway", "-1"), ("oneway:bus", "no")]);

        assert_eq!(
            TaxiDirectionalityResolver::resolve(&way, Directionality::Backward),
            Directionality::Bidirectional
        );
    }

    #[test]
    fn test_opposite_lanes() {
        for key in ["busway", "psv", "bus"] {
            let way = way(&[("highway", "secondary"), ("oneway", "yes"), (key, "opposite_lane")]);

            assert_eq!(
                TaxiDirectionalityResolver::resolve(&way, Directionality::Forward),
                Directionality::Bidirectional
            );
        }
    }

    #[test]
    fn test_delegates_without_exception() {
        let ways = [
            way(&[("highway", "residential"), ("oneway", "yes")]),
            way(&[("highway", "residential"), ("oneway:psv", "yes")]),
            way(&[("highway", "residential"), ("busway", "lane")]),
            way(&[]),
        ];

        for way in &ways {
            for base in ALL {
                assert_eq!(TaxiDirectionalityResolver::resolve(way, base), base);
            }
        }
    }

    #[test]
    fn test_inaccessible_is_kept() {
        let way = way(&[("highway", "footway"), ("psv", "opposite_lane")]);

        assert_eq!(
            TaxiDirectionalityResolver::resolve(&way, Directionality::Inaccessible),
            Directionality::Inaccessible
        );
    }
}
