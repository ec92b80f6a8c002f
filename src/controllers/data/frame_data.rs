use std::time::Duration;

use crate::core::data::frame::Frame;

/// A published snapshot: one completed iteration of one epoch.
#[derive(Debug, Clone)]
pub struct FrameData {
    /// Which viewport submission this epoch belongs to. Strictly increasing
    /// across submissions; consumers drop anything older than what they
    /// already hold.
    pub generation: u64,
    /// Completed iterations within the epoch when this frame was taken.
    pub iteration: u32,
    /// Whether this is the epoch's terminal frame.
    pub converged: bool,
    /// Wall-clock cost of the iteration that produced this frame.
    pub step_duration: Duration,
    pub frame: Frame,
}
