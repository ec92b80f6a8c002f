pub mod config;
pub mod epoch;
pub mod sample_grid;
pub mod shading;
pub mod state;
pub mod stepper;
