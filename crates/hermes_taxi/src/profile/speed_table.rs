use std::collections::BTreeMap;

use crate::error::ProfileError;
use crate::kmh::Kmh;
use crate::properties::car_average_speed_parser::CarAverageSpeedParser;
use crate::road_class::RoadClass;

/// Default free-flow speed for every road class.
///
/// Always total over [`RoadClass`]: a table can only be built from entries
/// covering every class, and every speed is finite and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedTable {
    speeds: [Kmh; RoadClass::COUNT],
}

impl SpeedTable {
    pub fn from_entries<I>(entries: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (RoadClass, Kmh)>,
    {
        let mut speeds: [Option<Kmh>; RoadClass::COUNT] = [None; RoadClass::COUNT];
        for (road_class, speed) in entries {
            speeds[road_class.index()] = Some(speed);
        }

        let mut table = [Kmh::ZERO; RoadClass::COUNT];
        for road_class in RoadClass::ALL {
            let speed = speeds[road_class.index()].ok_or(ProfileError::MissingSpeed(road_class))?;
            if !speed.is_valid() {
                return Err(ProfileError::InvalidSpeed { road_class, speed });
            }
            table[road_class.index()] = speed;
        }

        Ok(SpeedTable { speeds: table })
    }

    /// The generic car table.
    pub fn car() -> Self {
        SpeedTable {
            speeds: RoadClass::ALL.map(CarAverageSpeedParser::default_speed),
        }
    }

    pub fn with_overrides(&self, overrides: &BTreeMap<RoadClass, Kmh>) -> Result<Self, ProfileError> {
        let entries = RoadClass::ALL.map(|road_class| {
            let speed = overrides
                .get(&road_class)
                .copied()
                .unwrap_or_else(|| self.speed(road_class));
            (road_class, speed)
        });

        SpeedTable::from_entries(entries)
    }

    #[inline(always)]
    pub fn speed(&self, road_class: RoadClass) -> Kmh {
        self.speeds[road_class.index()]
    }
}
