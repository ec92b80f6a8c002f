use rayon::prelude::*;

use crate::core::cancellation::{CancelToken, Cancelled};
use crate::core::data::complex::Complex;
use crate::core::data::frame::Frame;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;
use crate::core::engine::config::EngineConfig;
use crate::core::engine::epoch::Epoch;
use crate::core::engine::sample_grid::SampleGrid;
use crate::core::engine::shading::{intensity_for, smooth_escape_value};
use crate::core::engine::state::IterationState;

/// Result of one completed iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The epoch has more work to do.
    Stepping,
    /// The epoch is terminal; no further steps will change the frame enough
    /// to matter.
    Converged(ConvergenceReason),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConvergenceReason {
    /// Fewer pixels than the deviation threshold escaped in the latest step
    /// (but more than zero): the image is visually stable. The remaining
    /// bounded pixels are overwhelmingly interior points that would not
    /// escape within the budget anyway.
    VisuallyStable,
    /// The iteration budget ran out.
    IterationBudgetExhausted,
}

/// The incremental escape-time engine for one epoch.
///
/// Construction resets grid, state and frame for the given viewport; each
/// `step()` advances every still-bounded pixel by one `z := z² + c`
/// iteration and shades the pixels that escaped. The stepper never blocks
/// and never publishes; driving it and handing frames off is the
/// controller's job.
#[derive(Debug)]
pub struct EpochStepper {
    viewport: Viewport,
    grid: SampleGrid,
    state: IterationState,
    frame: Frame,
    epoch: Epoch,
    config: EngineConfig,
}

impl EpochStepper {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        dims: GridDims,
        max_iterations: u32,
        config: EngineConfig,
    ) -> Self {
        Self {
            viewport,
            grid: SampleGrid::new(&viewport, dims),
            state: IterationState::new(dims.pixel_count()),
            frame: Frame::new(dims),
            epoch: Epoch::new(max_iterations),
            config,
        }
    }

    /// Performs one iteration over every still-bounded pixel.
    ///
    /// Rows are independent, so the sweep is parallelised across them; the
    /// deviation is the sum of per-row newly-escaped counts. Convergence is
    /// advisory to the driver: stepping a converged epoch keeps iterating
    /// the remaining bounded pixels.
    pub fn step(&mut self) -> StepOutcome {
        let width = self.frame.dims().width() as usize;
        let radius_squared = self.config.escape_radius() * self.config.escape_radius();
        let iteration = self.epoch.iteration();
        let max_iterations = self.epoch.max_iterations();

        let deviation: usize = self
            .state
            .z
            .par_chunks_mut(width)
            .zip(self.state.bounded.par_chunks_mut(width))
            .zip(self.grid.points().par_chunks(width))
            .zip(self.frame.intensities_mut().par_chunks_mut(width))
            .map(|(((z_row, bounded_row), c_row), intensity_row)| {
                step_row(
                    z_row,
                    bounded_row,
                    c_row,
                    intensity_row,
                    iteration,
                    max_iterations,
                    radius_squared,
                )
            })
            .sum();

        self.epoch.record_step(deviation);
        self.outcome()
    }

    /// Drives the epoch to convergence, checking the cancel token at
    /// iteration boundaries.
    pub fn run<C: CancelToken>(&mut self, cancel: &C) -> Result<ConvergenceReason, Cancelled> {
        loop {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            if let StepOutcome::Converged(reason) = self.step() {
                return Ok(reason);
            }
        }
    }

    fn outcome(&self) -> StepOutcome {
        let deviation = self.epoch.deviation();

        if deviation > 0 && deviation < self.config.deviation_threshold() {
            return StepOutcome::Converged(ConvergenceReason::VisuallyStable);
        }
        if self.epoch.budget_exhausted() {
            return StepOutcome::Converged(ConvergenceReason::IterationBudgetExhausted);
        }

        StepOutcome::Stepping
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[must_use]
    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    #[must_use]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    #[must_use]
    pub fn is_bounded(&self, x: u32, y: u32) -> bool {
        self.state.bounded[y as usize * self.frame.dims().width() as usize + x as usize]
    }

    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.state.bounded_count()
    }
}

fn step_row(
    z_row: &mut [Complex],
    bounded_row: &mut [bool],
    c_row: &[Complex],
    intensity_row: &mut [u8],
    iteration: u32,
    max_iterations: u32,
    radius_squared: f64,
) -> usize {
    let mut newly_escaped = 0;

    for i in 0..z_row.len() {
        if !bounded_row[i] {
            continue;
        }

        let z = z_row[i].squared_plus(c_row[i]);
        z_row[i] = z;

        let magnitude_squared = clamp_overflow(z.magnitude_squared());
        if magnitude_squared > radius_squared {
            let smoothed = smooth_escape_value(iteration, magnitude_squared.sqrt());
            intensity_row[i] = intensity_for(smoothed, max_iterations);
            bounded_row[i] = false;
            newly_escaped += 1;
        }
    }

    newly_escaped
}

/// Deep-zoom orbits can overflow to infinity or NaN; escape detection only
/// needs a threshold comparison, so saturate instead of propagating.
fn clamp_overflow(magnitude_squared: f64) -> f64 {
    if magnitude_squared.is_finite() {
        magnitude_squared
    } else {
        f64::MAX
    }
}
