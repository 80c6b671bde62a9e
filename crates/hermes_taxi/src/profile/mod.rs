pub mod config;
pub mod directionality_resolver;
pub mod environmental_penalty;
pub mod reduction_factors;
pub mod speed_adjuster;
pub mod speed_table;
pub mod taxi_profile;
pub mod way_properties;
