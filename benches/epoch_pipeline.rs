use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_stepper::{
    EngineConfig, EpochStepper, GridDims, NeverCancel, StepOutcome, Viewport,
};

fn fresh_stepper(side: u32, max_iterations: u32) -> EpochStepper {
    let viewport = Viewport::default();
    let dims = GridDims::new(side, side).unwrap();

    EpochStepper::new(viewport, dims, max_iterations, EngineConfig::default())
}

/// Cost of a single iteration over a fully bounded grid (the most
/// expensive step of an epoch: nothing has escaped yet).
fn bench_first_step(c: &mut Criterion) {
    c.bench_function("first_step_256", |b| {
        b.iter_batched(
            || fresh_stepper(256, 50),
            |mut stepper| black_box(stepper.step()),
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Full epoch on the reference view, reset through convergence.
fn bench_full_epoch(c: &mut Criterion) {
    c.bench_function("full_epoch_128", |b| {
        b.iter_batched(
            || fresh_stepper(128, 50),
            |mut stepper| {
                loop {
                    if let StepOutcome::Converged(reason) = stepper.step() {
                        break black_box(reason);
                    }
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Epoch driven through `run`, including the cancellation checks at
/// iteration boundaries.
fn bench_run_with_cancel_checks(c: &mut Criterion) {
    c.bench_function("run_epoch_128", |b| {
        b.iter_batched(
            || fresh_stepper(128, 50),
            |mut stepper| black_box(stepper.run(&NeverCancel)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_first_step,
    bench_full_epoch,
    bench_run_with_cancel_checks
);
criterion_main!(benches);
