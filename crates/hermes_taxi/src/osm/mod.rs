pub mod osm_way;
