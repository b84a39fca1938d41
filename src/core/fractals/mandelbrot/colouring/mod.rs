pub mod errors;
pub mod histogram;
pub mod kinds;
pub mod normalized_speed;
