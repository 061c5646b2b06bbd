//! This module implements functionality for measuring the wall-clock duration of some task.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Total wall-clock time of `repetitions` back to back invocations of the same task.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Measurement {
    total: Duration,
    repetitions: usize,
}

impl Measurement {
    pub fn new(total: Duration, repetitions: usize) -> Self {
        Self { total, repetitions }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// The total, this is what the charts plot.
    pub fn as_secs_f64(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Mean duration of a single invocation, zero if nothing was invoked.
    pub fn per_call(&self) -> Duration {
        if self.repetitions == 0 {
            return Duration::ZERO;
        }

        // Duration only divides by u32.
        match u32::try_from(self.repetitions) {
            Ok(repetitions) => self.total / repetitions,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.repetitions as f64),
        }
    }
}

/// Measures the time it takes to execute the function `test_fn` once.
#[inline(never)]
pub fn measure_duration<R>(test_fn: impl FnOnce() -> R) -> Duration {
    let start = Instant::now();

    black_box(test_fn());

    start.elapsed()
}

/// Invokes `test_fn` `repetitions` times under a single timer and returns the total, not the mean.
///
/// There is no warmup and no outlier rejection, scheduling noise ends up in the result.
#[inline(never)]
pub fn measure<R>(repetitions: usize, mut test_fn: impl FnMut() -> R) -> Measurement {
    let total = measure_duration(|| {
        for _ in 0..repetitions {
            black_box(test_fn());
        }
    });

    Measurement::new(total, repetitions)
}
