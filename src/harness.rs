//! Wall-clock timing harness.
//!
//! Runs a routine repeatedly against fresh copies of its input, measuring
//! each run with monotonic timestamps and accumulating the elapsed time.
//! Argument cloning happens outside the timed window, and so does
//! deallocation: routines hand their arguments back so the drop lands
//! after the clock stops.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Measure wall-clock time for a single synchronous operation.
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Accumulated timing for one benchmarked routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedRun {
    /// Total time spent inside the timed windows.
    pub total: Duration,
    /// Number of measured repetitions.
    pub repetitions: u32,
}

impl TimedRun {
    /// Truncated-integer mean duration per repetition, in microseconds.
    ///
    /// # Panics
    ///
    /// Divides by the repetition count, so a `TimedRun` with zero
    /// repetitions panics here. [`Harness`] never produces such a value
    /// when constructed with a repetition count of at least 1.
    pub fn mean_micros(&self) -> u64 {
        (self.total.as_micros() / u128::from(self.repetitions)) as u64
    }
}

/// Repeated-measurement driver for a single routine.
///
/// Carries the measured repetition count and an optional warmup count.
/// Warmup iterations run the same setup-and-routine cycle before
/// measurement starts and contribute nothing to the accumulated total.
#[derive(Debug, Clone, Copy)]
pub struct Harness {
    /// Measured repetitions per routine.
    repetitions: u32,
    /// Unmeasured warmup iterations per routine.
    warmup_runs: u32,
}

impl Harness {
    /// Create a harness measuring `repetitions` runs per routine.
    ///
    /// `repetitions` must be at least 1 for the resulting [`TimedRun`] to
    /// yield a mean; see [`TimedRun::mean_micros`].
    pub fn new(repetitions: u32) -> Self {
        Self {
            repetitions,
            warmup_runs: 0,
        }
    }

    /// Set the number of unmeasured warmup iterations.
    pub fn with_warmup(mut self, warmup_runs: u32) -> Self {
        self.warmup_runs = warmup_runs;
        self
    }

    /// Run `routine` against fresh arguments from `setup`, once per
    /// repetition, timing only the routine itself.
    ///
    /// `setup` must deep-copy the input so that no run observes mutations
    /// left by a prior run. The routine returns its arguments, which are
    /// dropped only after the end timestamp is taken.
    pub fn run<A, R>(
        &self,
        mut setup: impl FnMut() -> A,
        mut routine: impl FnMut(A) -> R,
    ) -> TimedRun {
        for _ in 0..self.warmup_runs {
            let args = setup();
            black_box(routine(args));
        }

        let mut total = Duration::ZERO;
        for _ in 0..self.repetitions {
            let args = setup();
            let (result, elapsed) = measure(|| routine(args));
            total += elapsed;
            drop(black_box(result));
        }

        TimedRun {
            total,
            repetitions: self.repetitions,
        }
    }

    /// Time a mutating sequence routine (a sort) against copies of `input`.
    ///
    /// The caller's `input` is never mutated; every repetition sorts its
    /// own fresh copy.
    pub fn time_sort<T, F>(&self, algo: F, input: &[T]) -> TimedRun
    where
        T: Clone,
        F: Fn(&mut [T]),
    {
        self.run(
            || input.to_vec(),
            |mut data| {
                algo(&mut data);
                data
            },
        )
    }

    /// Time a sequence-and-target routine (a search) against copies of
    /// `input` and `target`.
    pub fn time_search<T, F>(&self, algo: F, input: &[T], target: &T) -> TimedRun
    where
        T: Clone,
        F: Fn(&[T], &T) -> Option<usize>,
    {
        self.run(
            || (input.to_vec(), target.clone()),
            |(data, target)| {
                black_box(algo(&data, &target));
                data
            },
        )
    }
}
