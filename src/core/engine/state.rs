use crate::core::data::complex::{Complex, COMPLEX_ZERO};

/// Mutable per-pixel escape-time state for one epoch.
///
/// `z` holds the current orbit value, `bounded` whether the pixel has not
/// yet escaped. Newly-escaped pixels are counted transiently during a step
/// (the deviation) rather than stored. Fields are split borrows for the
/// row-parallel step.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationState {
    pub z: Vec<Complex>,
    pub bounded: Vec<bool>,
}

impl IterationState {
    #[must_use]
    pub fn new(pixel_count: usize) -> Self {
        Self {
            z: vec![COMPLEX_ZERO; pixel_count],
            bounded: vec![true; pixel_count],
        }
    }

    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.bounded.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_all_bounded_at_origin() {
        let state = IterationState::new(16);

        assert_eq!(state.z.len(), 16);
        assert_eq!(state.bounded.len(), 16);
        assert_eq!(state.bounded_count(), 16);
        assert!(state.z.iter().all(|&z| z == COMPLEX_ZERO));
    }

    #[test]
    fn test_bounded_count_tracks_flags() {
        let mut state = IterationState::new(4);
        state.bounded[1] = false;
        state.bounded[3] = false;

        assert_eq!(state.bounded_count(), 2);
    }
}
