use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

/// The smoothing term `ln(ln |z|)` needs `|z| > escape_radius >= 2` to stay
/// real and finite.
pub const MIN_ESCAPE_RADIUS: f64 = 2.0;

const DEFAULT_ESCAPE_RADIUS: f64 = 10.0;
const DEFAULT_ITERATION_MULTIPLIER: u32 = 30;
const DEFAULT_DEVIATION_THRESHOLD: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EngineConfigError {
    EscapeRadiusTooSmall { escape_radius: f64 },
    ZeroIterationMultiplier,
    ZeroDeviationThreshold,
}

impl fmt::Display for EngineConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EscapeRadiusTooSmall { escape_radius } => {
                write!(
                    f,
                    "escape radius must be at least {}: {}",
                    MIN_ESCAPE_RADIUS, escape_radius
                )
            }
            Self::ZeroIterationMultiplier => {
                write!(f, "iteration multiplier must be greater than zero")
            }
            Self::ZeroDeviationThreshold => {
                write!(f, "deviation threshold must be greater than zero")
            }
        }
    }
}

impl Error for EngineConfigError {}

/// Tunables of the escape-time engine.
///
/// All three knobs change cost/quality trade-offs, never semantics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineConfig {
    escape_radius: f64,
    iteration_multiplier: u32,
    deviation_threshold: usize,
}

impl EngineConfig {
    pub fn new(
        escape_radius: f64,
        iteration_multiplier: u32,
        deviation_threshold: usize,
    ) -> Result<Self, EngineConfigError> {
        if !(escape_radius >= MIN_ESCAPE_RADIUS) {
            return Err(EngineConfigError::EscapeRadiusTooSmall { escape_radius });
        }
        if iteration_multiplier == 0 {
            return Err(EngineConfigError::ZeroIterationMultiplier);
        }
        if deviation_threshold == 0 {
            return Err(EngineConfigError::ZeroDeviationThreshold);
        }

        Ok(Self {
            escape_radius,
            iteration_multiplier,
            deviation_threshold,
        })
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn iteration_multiplier(&self) -> u32 {
        self.iteration_multiplier
    }

    #[must_use]
    pub fn deviation_threshold(&self) -> usize {
        self.deviation_threshold
    }

    /// Iteration budget for one epoch, derived from zoom depth:
    /// `multiplier * max(1, floor(2 - log2(width)))`.
    ///
    /// Deeper zoom (smaller width) earns proportionally more iterations,
    /// which controls banding at high magnification while bounding cost on
    /// wide views.
    #[must_use]
    pub fn max_iterations_for(&self, viewport: &Viewport) -> u32 {
        let depth = (2.0 - viewport.width().log2()).floor().max(1.0);

        self.iteration_multiplier * depth as u32
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_ESCAPE_RADIUS,
            DEFAULT_ITERATION_MULTIPLIER,
            DEFAULT_DEVIATION_THRESHOLD,
        )
        .expect("default engine config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_values() {
        let config = EngineConfig::default();

        assert_eq!(config.escape_radius(), 10.0);
        assert_eq!(config.iteration_multiplier(), 30);
        assert_eq!(config.deviation_threshold(), 10);
    }

    #[test]
    fn test_escape_radius_below_two_rejected() {
        let result = EngineConfig::new(1.5, 30, 10);

        assert_eq!(
            result,
            Err(EngineConfigError::EscapeRadiusTooSmall { escape_radius: 1.5 })
        );
    }

    #[test]
    fn test_nan_escape_radius_rejected() {
        assert!(EngineConfig::new(f64::NAN, 30, 10).is_err());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        assert_eq!(
            EngineConfig::new(10.0, 0, 10),
            Err(EngineConfigError::ZeroIterationMultiplier)
        );
    }

    #[test]
    fn test_zero_threshold_rejected() {
        assert_eq!(
            EngineConfig::new(10.0, 30, 0),
            Err(EngineConfigError::ZeroDeviationThreshold)
        );
    }

    #[test]
    fn test_wide_view_gets_base_budget() {
        // width 2.5 => floor(2 - log2(2.5)) = 0, clamped to 1.
        let config = EngineConfig::default();
        let viewport = Viewport::default();

        assert_eq!(config.max_iterations_for(&viewport), 30);
    }

    #[test]
    fn test_deep_zoom_gets_larger_budget() {
        // width 2^-10 => floor(2 + 10) = 12.
        let config = EngineConfig::default();
        let width = (2.0_f64).powi(-10);
        let viewport = Viewport::new(0.0, width, 0.0, width).unwrap();

        assert_eq!(config.max_iterations_for(&viewport), 30 * 12);
    }

    #[test]
    fn test_budget_grows_monotonically_with_zoom() {
        let config = EngineConfig::default();
        let shallow = Viewport::new(0.0, 1.0, 0.0, 1.0).unwrap();
        let deep = Viewport::new(0.0, 1.0e-6, 0.0, 1.0e-6).unwrap();

        assert!(config.max_iterations_for(&deep) > config.max_iterations_for(&shallow));
    }
}
