use crate::core::data::grid_dims::GridDims;

/// A completed-iteration snapshot of the continuous-tone buffer.
///
/// One intensity channel per pixel, row-major. The engine owns its frame
/// exclusively while mutating; consumers only ever see clones handed off
/// through a sink after a step completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    dims: GridDims,
    intensities: Vec<u8>,
}

impl Frame {
    #[must_use]
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            intensities: vec![0; dims.pixel_count()],
        }
    }

    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[must_use]
    pub fn intensities(&self) -> &[u8] {
        &self.intensities
    }

    pub(crate) fn intensities_mut(&mut self) -> &mut [u8] {
        &mut self.intensities
    }

    #[must_use]
    pub fn intensity_at(&self, x: u32, y: u32) -> u8 {
        self.intensities[y as usize * self.dims.width() as usize + x as usize]
    }

    /// Replicates the intensity channel to RGB triples for consumers that
    /// blit 3-byte pixels.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.intensities.len() * 3);
        for &value in &self.intensities {
            rgb.extend_from_slice(&[value, value, value]);
        }
        rgb
    }
}
