pub mod algorithm;
pub mod colour_table;
pub mod colouring;
