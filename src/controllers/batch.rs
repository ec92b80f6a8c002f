use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::cancellation::NeverCancel;
use crate::core::data::frame::Frame;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;
use crate::core::engine::config::EngineConfig;
use crate::core::engine::stepper::{ConvergenceReason, EpochStepper};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BatchError {
    NothingGenerated,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingGenerated => {
                write!(f, "no frame generated yet; call generate() before write()")
            }
        }
    }
}

impl Error for BatchError {}

/// Batch front end: runs one epoch to convergence on the reference view and
/// hands the terminal frame to a file presenter.
pub struct BatchController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<Frame>,
}

impl<P: FilePresenterPort> BatchController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let dims = GridDims::new(1024, 768)?;
        let viewport = Viewport::default();
        let config = EngineConfig::default();
        let max_iterations = config.max_iterations_for(&viewport);

        println!("Rendering Mandelbrot set...");
        println!("Grid size: {}x{}", dims.width(), dims.height());
        println!("Iteration budget: {}", max_iterations);

        let mut stepper = EpochStepper::new(viewport, dims, max_iterations, config);
        let start = Instant::now();
        let reason = stepper.run(&NeverCancel)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        println!(
            "Converged after {} iterations ({})",
            stepper.epoch().iteration(),
            match reason {
                ConvergenceReason::VisuallyStable => "visually stable",
                ConvergenceReason::IterationBudgetExhausted => "budget exhausted",
            }
        );

        self.frame = Some(stepper.frame().clone());
        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let frame = self.frame.as_ref().ok_or(BatchError::NothingGenerated)?;

        self.presenter.present(frame, &filepath)?;
        println!("Saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
