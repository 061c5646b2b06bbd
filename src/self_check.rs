//! A fixed smoke test of every algorithm on one hand picked input.
//!
//! Failures are collected and reported, never propagated. A broken algorithm should not stop the
//! timing runs that follow.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::search::binary::binary_search;
use crate::search::linear::linear_search;
use crate::sort::quicksort::quicksort;
use crate::sort::selection::selection_sort;

const INPUT: [i32; 5] = [3, 1, 4, 2, 5];
const PRESENT: i32 = 4;
const ABSENT: i32 = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfCheckReport {
    failures: Vec<String>,
}

impl SelfCheckReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// One description per failed check, empty if everything passed.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    // A panicking algorithm counts as a failed check.
    fn check<T>(&mut self, what: &str, run: impl FnOnce() -> T, expected: T)
    where
        T: PartialEq + fmt::Debug,
    {
        match panic::catch_unwind(AssertUnwindSafe(run)) {
            Ok(got) if got == expected => {}
            Ok(got) => self
                .failures
                .push(format!("{what}: expected {expected:?}, got {got:?}")),
            Err(_) => self.failures.push(format!("{what}: panicked")),
        }
    }
}

impl fmt::Display for SelfCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "All self-checks passed!");
        }

        write!(f, "Self-check failed, verify the algorithms:")?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }

        Ok(())
    }
}

pub fn self_check() -> SelfCheckReport {
    self_check_with(
        linear_search::<i32>,
        binary_search::<i32>,
        selection_sort::<i32>,
        quicksort::<i32>,
    )
}

/// Runs the checks against the given implementations instead of the built in ones.
pub fn self_check_with(
    linear: fn(&[i32], &i32) -> Option<usize>,
    binary: fn(&[i32], &i32) -> Option<usize>,
    selection: fn(&[i32]) -> Vec<i32>,
    quick: fn(&[i32]) -> Vec<i32>,
) -> SelfCheckReport {
    let mut sorted = INPUT.to_vec();
    sorted.sort();

    let mut report = SelfCheckReport::default();

    report.check(
        "linear_search finds present value",
        || linear(&INPUT, &PRESENT),
        Some(2),
    );
    report.check(
        "linear_search misses absent value",
        || linear(&INPUT, &ABSENT),
        None,
    );
    report.check(
        "binary_search finds present value",
        || binary(&sorted, &PRESENT),
        Some(3),
    );
    report.check(
        "binary_search misses absent value",
        || binary(&sorted, &ABSENT),
        None,
    );
    report.check("selection_sort", || selection(&INPUT), sorted.clone());
    report.check("quicksort", || quick(&INPUT), sorted);

    report
}
