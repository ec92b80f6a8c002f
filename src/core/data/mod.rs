pub mod complex;
pub mod frame;
pub mod grid_dims;
pub mod viewport;
