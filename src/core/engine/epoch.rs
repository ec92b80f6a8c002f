/// Bookkeeping for one compute cycle over a fixed viewport.
///
/// Tracks completed iterations against the budget and the deviation (count
/// of pixels that escaped in the latest step), the convergence proxy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Epoch {
    iteration: u32,
    max_iterations: u32,
    deviation: usize,
}

impl Epoch {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            iteration: 0,
            max_iterations,
            deviation: 0,
        }
    }

    /// Records one completed iteration and its newly-escaped count.
    pub fn record_step(&mut self, deviation: usize) {
        self.deviation = deviation;
        self.iteration += 1;
    }

    /// Completed iterations so far.
    #[must_use]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn deviation(&self) -> usize {
        self.deviation
    }

    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.iteration >= self.max_iterations
    }
}
