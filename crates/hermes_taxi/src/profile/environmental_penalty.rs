use crate::error::{ProfileError, is_valid_factor};
use crate::osm::osm_way::OsmWay;

// https://wiki.openstreetmap.org/wiki/Key:tunnel
static TUNNEL_VALUES: [&str; 3] = ["yes", "building_passage", "avalanche_protector"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentalPenalty {
    tunnel_factor: f64,
}

impl EnvironmentalPenalty {
    pub fn new(tunnel_factor: f64) -> Result<Self, ProfileError> {
        if !is_valid_factor(tunnel_factor) {
            return Err(ProfileError::InvalidPenalty(tunnel_factor));
        }

        Ok(EnvironmentalPenalty { tunnel_factor })
    }

    pub fn factor(&self, way: &OsmWay) -> f64 {
        if way.has_tag_in("tunnel", &TUNNEL_VALUES) {
            self.tunnel_factor
        } else {
            1.0
        }
    }
}
