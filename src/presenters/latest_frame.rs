use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::controllers::data::frame_data::FrameData;
use crate::controllers::ports::frame_sink::FrameSink;

/// Latest-wins hand-off slot between the compute activity and a renderer.
///
/// One writer (the engine worker), one reader (the render loop). The slot
/// write completes under the mutex before the ready flag is set (Release),
/// and the reader clears the flag (Acquire) before taking the snapshot, so
/// a partially written frame is never observable. There is no queue and no
/// backpressure: the writer overwrites unread snapshots and a slow reader
/// simply drops frames.
#[derive(Debug, Default)]
pub struct LatestFrameCell {
    slot: Mutex<Option<FrameData>>,
    ready: AtomicBool,
}

impl LatestFrameCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an unconsumed snapshot is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Consumes the latest snapshot, clearing the ready flag.
    ///
    /// Returns `None` if nothing was published since the last take.
    pub fn take_latest(&self) -> Option<FrameData> {
        if !self.ready.swap(false, Ordering::Acquire) {
            return None;
        }

        self.slot.lock().unwrap().take()
    }
}

impl FrameSink for LatestFrameCell {
    fn publish(&self, frame: FrameData) {
        {
            let mut guard = self.slot.lock().unwrap();
            *guard = Some(frame);
        }

        self.ready.store(true, Ordering::Release);
    }
}
