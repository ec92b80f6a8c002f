use crate::controllers::data::frame_data::FrameData;

/// Renderer-sink capability: the single hand-off point between the compute
/// activity and whatever displays frames.
///
/// `publish` is called once per completed iteration with a whole-frame
/// snapshot; implementations decide what to do with superseded frames
/// (a display sink keeps only the latest, a file sink may keep the last,
/// a test sink may keep them all).
pub trait FrameSink: Send + Sync {
    fn publish(&self, frame: FrameData);
}
