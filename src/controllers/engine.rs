use crate::controllers::data::frame_data::FrameData;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::core::cancellation::CancelToken;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::viewport::Viewport;
use crate::core::engine::config::EngineConfig;
use crate::core::engine::stepper::{EpochStepper, StepOutcome};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_viewport: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

/// The continuous compute activity.
///
/// Owns a single background worker that turns submitted viewports into
/// epochs and publishes a frame through the sink after every completed
/// iteration. Submissions are latest-wins: a new viewport bumps the
/// generation counter, which cancels the in-flight epoch at its next
/// iteration boundary. The idle wait between epochs is a condvar wait,
/// interrupted immediately by the next submission or by shutdown.
pub struct EngineController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl EngineController {
    #[must_use]
    pub fn new(dims: GridDims, config: EngineConfig, sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_viewport: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, dims, config);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Replaces the rectangle under observation and returns the generation
    /// assigned to it. Any in-flight epoch is abandoned at its next
    /// iteration boundary.
    pub fn submit_viewport(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_viewport.lock().unwrap();
            *guard = Some((generation, viewport));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Stops the worker and joins it. The compute activity is fully
    /// stopped when this returns; callers may then tear down the sink's
    /// display surface.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);

        // The worker checks the flag only while holding this lock before
        // parking; taking it here keeps the store+notify from landing in
        // the window between that check and the park, where the notify
        // would be lost and the join below would hang.
        drop(self.shared.latest_viewport.lock().unwrap());
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    /// Generation of the most recent epoch that ran to convergence.
    /// Cancelled epochs never complete.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, dims: GridDims, config: EngineConfig) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared.latest_viewport.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(submission) = guard.take() {
                        break submission;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            Self::run_epoch(shared, dims, config, job_generation, viewport, &cancel);
        }
    }

    fn run_epoch<C: CancelToken>(
        shared: &Arc<SharedState>,
        dims: GridDims,
        config: EngineConfig,
        generation: u64,
        viewport: Viewport,
        cancel: &C,
    ) {
        let max_iterations = config.max_iterations_for(&viewport);
        let mut stepper = EpochStepper::new(viewport, dims, max_iterations, config);

        loop {
            if cancel.is_cancelled() {
                return;
            }

            let start = Instant::now();
            let outcome = stepper.step();
            let step_duration = start.elapsed();

            // Checked again after the step so a frame computed against a
            // superseded rectangle is never published.
            if cancel.is_cancelled() {
                return;
            }

            let converged = matches!(outcome, StepOutcome::Converged(_));
            shared.sink.publish(FrameData {
                generation,
                iteration: stepper.epoch().iteration(),
                converged,
                step_duration,
                frame: stepper.frame().clone(),
            });

            if converged {
                shared
                    .last_completed_generation
                    .store(generation, Ordering::Release);
                return;
            }
        }
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
