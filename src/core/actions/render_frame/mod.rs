pub mod ports;
pub mod render_frame;
pub mod sample_grid;
