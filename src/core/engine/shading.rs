//! Continuous-tone shading for escaped pixels.
//!
//! Integer iteration counts band visibly; interpolating with the
//! `ln(ln |z|)` term removes the banding. The term is only evaluated for
//! pixels that just crossed the escape radius, where `|z| > 2` keeps the
//! nested logarithm real and finite.

const CHANNEL_MIDPOINT: f64 = 128.0;
const CHANNEL_SCALE: f64 = 128.0;

/// Fractional escape step for a pixel that escaped on the given
/// (zero-based) iteration with final magnitude `|z|`.
///
/// `steps = iteration + 1 - ln(ln |z|) / ln 2`. For a fixed final
/// magnitude this is strictly increasing in the escape iteration.
#[must_use]
pub fn smooth_escape_value(iteration: u32, magnitude: f64) -> f64 {
    f64::from(iteration) + 1.0 - magnitude.ln().ln() / std::f64::consts::LN_2
}

/// Maps a smoothed escape value to the output channel.
///
/// The normalized value sits near 1.0 for late escapes; `128 * (n - 1)` is
/// offset to the channel midpoint and clamped, so late escapes (interior
/// boundary) render brighter than early ones.
#[must_use]
pub fn intensity_for(smoothed: f64, max_iterations: u32) -> u8 {
    let normalized = smoothed / f64::from(max_iterations);
    let level = CHANNEL_MIDPOINT + (CHANNEL_SCALE * (normalized - 1.0)).floor();

    level.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_value_strictly_increases_with_escape_iteration() {
        // Same final magnitude, later escape => strictly larger value.
        let magnitude = 12.0;

        let mut previous = smooth_escape_value(0, magnitude);
        for iteration in 1..50 {
            let current = smooth_escape_value(iteration, magnitude);
            assert!(
                current > previous,
                "iteration {} value {} not above {}",
                iteration,
                current,
                previous
            );
            previous = current;
        }
    }

    #[test]
    fn test_smooth_value_decreases_with_larger_magnitude() {
        // A pixel that overshoots far past the radius escaped "earlier"
        // within the iteration than one that barely crossed it.
        let barely = smooth_escape_value(10, 10.5);
        let overshoot = smooth_escape_value(10, 1.0e6);

        assert!(overshoot < barely);
    }

    #[test]
    fn test_smooth_value_finite_at_minimum_radius() {
        // escape_radius >= 2 guarantees ln(ln |z|) is finite.
        let value = smooth_escape_value(0, 2.0 + 1.0e-9);

        assert!(value.is_finite());
    }

    #[test]
    fn test_smooth_value_finite_after_overflow_clamp() {
        let value = smooth_escape_value(3, f64::MAX.sqrt());

        assert!(value.is_finite());
    }

    #[test]
    fn test_intensity_monotonic_in_smoothed_value() {
        let max_iterations = 50;

        let mut previous = intensity_for(1.0, max_iterations);
        for step in 2..=50 {
            let current = intensity_for(f64::from(step), max_iterations);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_full_budget_escape_hits_channel_midpoint() {
        // normalized == 1.0 => 128 + floor(0) = 128.
        assert_eq!(intensity_for(50.0, 50), 128);
    }

    #[test]
    fn test_intensity_clamps_below_channel() {
        // Strongly negative smoothed values clamp to black rather than wrap.
        assert_eq!(intensity_for(-1000.0, 50), 0);
    }

    #[test]
    fn test_intensity_clamps_above_channel() {
        assert_eq!(intensity_for(1000.0, 10), 255);
    }
}
