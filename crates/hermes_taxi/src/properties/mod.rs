pub mod car_access_parser;
pub mod car_average_speed_parser;
pub mod max_speed_parser;
