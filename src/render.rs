use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::compare::Comparison;
use crate::Error;

/// Something that can present a finished comparison.
pub trait Render {
    fn render(&mut self, comparison: &Comparison) -> Result<(), Error>;
}

impl Render for Vec<Box<dyn Render>> {
    fn render(&mut self, comparison: &Comparison) -> Result<(), Error> {
        for renderer in self.iter_mut() {
            renderer.render(comparison)?;
        }

        Ok(())
    }
}

/// Draws each comparison as a line chart into `<out_dir>/<title>.svg`.
pub struct SvgRenderer {
    out_dir: PathBuf,
    size: (u32, u32),
    written: Vec<PathBuf>,
}

impl SvgRenderer {
    pub const DEFAULT_SIZE: (u32, u32) = (800, 500);

    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            size: Self::DEFAULT_SIZE,
            written: Vec::new(),
        }
    }

    pub fn chart_path(&self, title: &str) -> PathBuf {
        self.out_dir.join(format!("{}.svg", file_stem(title)))
    }

    /// Every chart written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Render for SvgRenderer {
    fn render(&mut self, comparison: &Comparison) -> Result<(), Error> {
        fs::create_dir_all(&self.out_dir)?;

        let path = self.chart_path(comparison.title());
        draw_line_chart(&path, self.size, comparison)
            .map_err(|err| Error::Render(err.to_string()))?;

        tracing::info!(path = %path.display(), "wrote chart");
        println!("Chart written to {}", path.display());

        self.written.push(path);

        Ok(())
    }
}

/// Prints each comparison as a plain text table.
pub struct TableRenderer<W> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TableRenderer<W> {
    fn render(&mut self, comparison: &Comparison) -> Result<(), Error> {
        let [a, b] = comparison.series();

        writeln!(self.out, "\n{}", comparison.title())?;
        writeln!(
            self.out,
            "{:>8}  {:>26}  {:>26}",
            "size",
            a.label(),
            b.label()
        )?;

        for ((size, m_a), (_, m_b)) in a.points().iter().zip(b.points()) {
            writeln!(
                self.out,
                "{size:>8}  {:>26.6}  {:>26.6}",
                m_a.as_secs_f64(),
                m_b.as_secs_f64()
            )?;
        }

        self.out.flush()?;

        Ok(())
    }
}

// --- Private ---

fn draw_line_chart(
    path: &Path,
    size: (u32, u32),
    comparison: &Comparison,
) -> Result<(), Box<dyn std::error::Error>> {
    const COLORS: [RGBColor; 2] = [BLUE, RED];

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let all_points = comparison
        .series()
        .iter()
        .map(|series| series.secs())
        .collect::<Vec<_>>();

    let x_max = comparison.sizes().into_iter().max().unwrap_or(1) as f64;
    let y_max = all_points
        .iter()
        .flatten()
        .map(|(_, secs)| *secs)
        .fold(0.0, f64::max);
    // The axis range must not be empty, even if every measurement rounded down to zero.
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1e-9 };

    let mut chart = ChartBuilder::on(&root)
        .caption(comparison.title(), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..(x_max * 1.05), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Input size")
        .y_desc("Time (s)")
        .y_label_formatter(&|secs| format!("{secs:.1e}"))
        .draw()?;

    for (idx, (series, points)) in comparison.series().iter().zip(&all_points).enumerate() {
        let color = COLORS[idx % COLORS.len()];

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(series.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        // Circles for the first series, squares for the second.
        if idx == 0 {
            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )?;
        } else {
            chart.draw_series(points.iter().map(|&point| {
                EmptyElement::at(point) + Rectangle::new([(-4, -4), (4, 4)], color.filled())
            }))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// "Selection sort vs quicksort" -> "selection_sort_vs_quicksort"
fn file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }

    let stem = stem.trim_matches('_');

    if stem.is_empty() {
        "chart".into()
    } else {
        stem.into()
    }
}
