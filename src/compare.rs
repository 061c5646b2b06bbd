use std::hint::black_box;

use rand::Rng;

use crate::measure::{measure, Measurement};
use crate::patterns::{self, DEFAULT_MAX_VALUE};
use crate::render::Render;
use crate::search::{binary, linear};
use crate::sort::{quicksort, selection};
use crate::{Error, Search, Sort};

pub const SEARCH_SIZES: [usize; 5] = [100, 500, 1_000, 2_000, 5_000];
pub const SORT_SIZES: [usize; 5] = [100, 200, 500, 1_000, 2_000];

// Searching is cheap, so it needs more repetitions to rise above the timer resolution.
const SEARCH_REPETITIONS: usize = 100;
const SORT_REPETITIONS: usize = 10;

/// What to sweep and how to present it, for one pair of algorithms.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonConfig {
    pub title: String,
    /// Legend text, in the order the two algorithms are passed to the driver.
    pub labels: [String; 2],
    pub sizes: Vec<usize>,
    /// Repetitions per measurement, one count per algorithm.
    pub repetitions: [usize; 2],
    /// Generated values are drawn from `[0, max_value]`.
    pub max_value: i32,
}

impl ComparisonConfig {
    pub fn search() -> Self {
        Self {
            title: "Linear vs binary search".into(),
            labels: [
                "Linear search (O(n))".into(),
                "Binary search (O(log n))".into(),
            ],
            sizes: SEARCH_SIZES.to_vec(),
            repetitions: [SEARCH_REPETITIONS; 2],
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    pub fn sort() -> Self {
        Self {
            title: "Selection sort vs quicksort".into(),
            labels: [
                "Selection sort (O(n²))".into(),
                "Quicksort (O(n log n))".into(),
            ],
            sizes: SORT_SIZES.to_vec(),
            repetitions: [SORT_REPETITIONS; 2],
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn with_repetitions(mut self, repetitions: [usize; 2]) -> Self {
        self.repetitions = repetitions;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.sizes.contains(&0) {
            return Err(Error::EmptySize);
        }

        if self.max_value < 0 {
            return Err(Error::InvalidRange {
                max_value: self.max_value,
            });
        }

        Ok(())
    }
}

/// The measurements of one algorithm, one point per swept size.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    label: String,
    points: Vec<(usize, Measurement)>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, size: usize, measurement: Measurement) {
        self.points.push((size, measurement));
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[(usize, Measurement)] {
        &self.points
    }

    /// `(size, total seconds)` pairs, ready to plot.
    pub fn secs(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|(size, m)| (*size as f64, m.as_secs_f64()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Two series over the same sizes, everything needed to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    title: String,
    series: [Series; 2],
}

impl Comparison {
    pub fn new(title: impl Into<String>, a: Series, b: Series) -> Self {
        debug_assert!(a
            .points()
            .iter()
            .map(|(size, _)| size)
            .eq(b.points().iter().map(|(size, _)| size)));

        Self {
            title: title.into(),
            series: [a, b],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &[Series; 2] {
        &self.series
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.series[0].points().iter().map(|(size, _)| *size).collect()
    }

    /// Per size, how many times faster the second algorithm was than the first. Negative values
    /// mean the first one was faster, see [`speedup_as_times_x`].
    pub fn speedups(&self) -> Vec<(usize, f64)> {
        self.series[0]
            .points()
            .iter()
            .zip(self.series[1].points())
            .map(|((size, a), (_, b))| (*size, relative_speedup(*b, *a)))
            .collect()
    }
}

/// Times `A` and `B` on the same random sequences, searching for the last generated element.
///
/// An algorithm that [requires sorted input](Search::requires_sorted) gets a sorted copy.
pub fn compare_search<A: Search, B: Search>(
    config: &ComparisonConfig,
    rng: &mut impl Rng,
) -> Result<Comparison, Error> {
    config.validate()?;

    let [label_a, label_b] = &config.labels;
    let mut series_a = Series::new(label_a.as_str());
    let mut series_b = Series::new(label_b.as_str());

    for &size in &config.sizes {
        let seq = patterns::generate_sequence_with(rng, size, config.max_value)?;
        let target = *seq.last().ok_or(Error::EmptySize)?;

        let mut sorted = seq.clone();
        sorted.sort_unstable();

        let input_a: &[i32] = if A::requires_sorted() { &sorted } else { &seq };
        let input_b: &[i32] = if B::requires_sorted() { &sorted } else { &seq };

        let m_a = measure(config.repetitions[0], || {
            A::search(black_box(input_a), black_box(&target))
        });
        let m_b = measure(config.repetitions[1], || {
            B::search(black_box(input_b), black_box(&target))
        });

        report_progress(size, (&A::name(), m_a), (&B::name(), m_b));

        series_a.push(size, m_a);
        series_b.push(size, m_b);
    }

    Ok(Comparison::new(config.title.as_str(), series_a, series_b))
}

/// Times `A` and `B` sorting the same random sequence, once per size.
pub fn compare_sort<A: Sort, B: Sort>(
    config: &ComparisonConfig,
    rng: &mut impl Rng,
) -> Result<Comparison, Error> {
    config.validate()?;

    let [label_a, label_b] = &config.labels;
    let mut series_a = Series::new(label_a.as_str());
    let mut series_b = Series::new(label_b.as_str());

    for &size in &config.sizes {
        let seq = patterns::generate_sequence_with(rng, size, config.max_value)?;

        let m_a = measure(config.repetitions[0], || A::sort(black_box(seq.as_slice())));
        let m_b = measure(config.repetitions[1], || B::sort(black_box(seq.as_slice())));

        report_progress(size, (&A::name(), m_a), (&B::name(), m_b));

        series_a.push(size, m_a);
        series_b.push(size, m_b);
    }

    Ok(Comparison::new(config.title.as_str(), series_a, series_b))
}

/// Linear search against binary search, handed to `renderer` once all sizes are measured.
pub fn run_search_comparison(
    renderer: &mut dyn Render,
    config: &ComparisonConfig,
    rng: &mut impl Rng,
) -> Result<Comparison, Error> {
    let comparison = compare_search::<linear::SearchImpl, binary::SearchImpl>(config, rng)?;

    report_speedups(&comparison);
    renderer.render(&comparison)?;

    Ok(comparison)
}

/// Selection sort against quicksort, handed to `renderer` once all sizes are measured.
pub fn run_sort_comparison(
    renderer: &mut dyn Render,
    config: &ComparisonConfig,
    rng: &mut impl Rng,
) -> Result<Comparison, Error> {
    let comparison = compare_sort::<selection::SortImpl, quicksort::SortImpl>(config, rng)?;

    report_speedups(&comparison);
    renderer.render(&comparison)?;

    Ok(comparison)
}

/// If time_a is faster than time_b -> % faster than time_b
/// If time_b is faster than time_a -> % faster than time_a as negative number
/// 1.0 == time_a 2x faster than time_b
/// -1.0 == time_b 2x faster than time_a
///
/// Compares the per call time, so differing repetition counts don't skew the result.
pub fn relative_speedup(time_a: Measurement, time_b: Measurement) -> f64 {
    let (a, b) = (
        time_a.per_call().as_secs_f64(),
        time_b.per_call().as_secs_f64(),
    );

    if a == b {
        return 0.0;
    }

    if a < b {
        // time_a is faster.
        (b / a) - 1.0
    } else {
        // time_b is faster
        -((a / b) - 1.0)
    }
}

pub fn speedup_as_times_x(relative_speedup: f64) -> f64 {
    relative_speedup + if relative_speedup >= 0.0 { 1.0 } else { -1.0 }
}

// --- Private ---

fn report_progress(
    size: usize,
    (name_a, m_a): (&str, Measurement),
    (name_b, m_b): (&str, Measurement),
) {
    tracing::debug!(
        size,
        a = name_a,
        a_total = ?m_a.total(),
        a_repetitions = m_a.repetitions(),
        b = name_b,
        b_total = ?m_b.total(),
        b_repetitions = m_b.repetitions(),
        "measured"
    );

    println!(
        "n={size:>6}  {name_a}: {:.6} s  {name_b}: {:.6} s",
        m_a.as_secs_f64(),
        m_b.as_secs_f64(),
    );
}

fn report_speedups(comparison: &Comparison) {
    let [a, b] = comparison.series();

    for (size, speedup) in comparison.speedups() {
        // Abs because the direction is indicated by the language.
        let times_x = speedup_as_times_x(speedup).abs();

        if speedup.is_sign_negative() {
            println!("n={size:>6}  {} faster by {times_x:.2}x", a.label());
        } else {
            println!("n={size:>6}  {} faster by {times_x:.2}x", b.label());
        }
    }
}
