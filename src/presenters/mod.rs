pub mod file;
pub mod latest_frame;
