mod controllers;
mod core;
mod presenters;

pub use crate::controllers::batch::{BatchController, BatchError};
pub use crate::controllers::data::frame_data::FrameData;
pub use crate::controllers::engine::EngineController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::ports::frame_sink::FrameSink;
pub use crate::controllers::zoom::ZoomController;
pub use crate::core::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::grid_dims::{GridDims, GridDimsError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::engine::config::{EngineConfig, EngineConfigError, MIN_ESCAPE_RADIUS};
pub use crate::core::engine::epoch::Epoch;
pub use crate::core::engine::sample_grid::SampleGrid;
pub use crate::core::engine::stepper::{ConvergenceReason, EpochStepper, StepOutcome};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::latest_frame::LatestFrameCell;
