pub mod directionality;
pub mod edge_direction;
pub mod error;
pub mod kmh;
pub mod osm;
pub mod profile;
pub mod properties;
pub mod road_class;
