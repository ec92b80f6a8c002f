pub mod file_presenter;
pub mod frame_sink;
