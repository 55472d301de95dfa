//! Bar and line chart rendering with plotters.
//!
//! Both kinds share the same decorations: a title combining base filename and
//! group column, axis labels, a light gridline mesh, a legend entry for the
//! series, and an integer-rounded value annotation at every bar/vertex. The
//! group axis is categorical: bars and vertices sit at integer positions and
//! only those positions get tick labels.

use crate::aggregate::AggregatedSeries;
use crate::error::JobError;
use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CHART_SIZE: (u32, u32) = (1000, 600);
const SERIES_COLOR: RGBColor = RGBColor(44, 160, 44);
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);

/// The closed set of supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

impl FromStr for ChartKind {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            other => Err(JobError::UnsupportedChartKind(other.to_string())),
        }
    }
}

/// Render `series` into `{output_dir}/{base}_{group_column}_{kind}.png`.
///
/// The name is deterministic, so re-running against identical inputs
/// overwrites the previous artifact. An unknown `kind` fails before anything
/// is drawn; a drawing or save failure is an artifact-write error. Either
/// way the drawing surface is dropped on exit, so a long batch cannot
/// accumulate rendering buffers.
pub fn render_chart(
    series: &AggregatedSeries,
    kind: &str,
    output_dir: &Path,
    base: &str,
    y_label: &str,
) -> Result<PathBuf, JobError> {
    let kind: ChartKind = kind.parse()?;

    let output = output_dir.join(format!(
        "{}_{}_{}.png",
        base,
        series.group_column,
        kind.as_str()
    ));

    draw(series, kind, &output, base, y_label).map_err(|e| JobError::ArtifactWrite {
        path: output.clone(),
        reason: e.to_string(),
    })?;

    info!("generated chart {}", output.display());
    Ok(output)
}

fn draw(
    series: &AggregatedSeries,
    kind: ChartKind,
    output: &Path,
    base: &str,
    y_label: &str,
) -> crate::Result<()> {
    let labels: Vec<String> = series.points.iter().map(|(k, _)| k.to_string()).collect();
    let values: Vec<f64> = series.points.iter().map(|(_, v)| *v).collect();
    let n = values.len();

    let (y_min, y_max) = y_range(&values);
    let x_max = n.max(1) as f64 - 0.5;

    let root = BitMapBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} grouped by {}", base, series.group_column),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(&series.group_column)
        .y_desc(y_label)
        .x_labels(n.max(1))
        .light_line_style(ShapeStyle::from(&GRID_COLOR))
        .x_label_formatter(&|x| {
            // Ticks only at the integer category positions.
            let i = x.round();
            if (x - i).abs() > 0.25 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .draw()?;

    match kind {
        ChartKind::Bar => {
            chart
                .draw_series(values.iter().enumerate().map(|(i, &v)| {
                    let x = i as f64;
                    Rectangle::new([(x - 0.3, 0.0), (x + 0.3, v)], SERIES_COLOR.filled())
                }))?
                .label(y_label)
                .legend(|(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], SERIES_COLOR.filled())
                });
        }
        ChartKind::Line => {
            chart
                .draw_series(LineSeries::new(
                    values.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                    ShapeStyle::from(&SERIES_COLOR).stroke_width(2),
                ))?
                .label(y_label)
                .legend(|(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 10, y)],
                        ShapeStyle::from(&SERIES_COLOR).stroke_width(2),
                    )
                });
            chart.draw_series(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Circle::new((i as f64, v), 4, SERIES_COLOR.filled())),
            )?;
        }
    }

    // Integer-rounded value above each bar/vertex.
    let annotation = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        Text::new(format!("{}", v.round() as i64), (i as f64, v), annotation.clone())
    }))?;

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Y range with headroom for the value annotations. Bars are anchored at
/// zero, so zero stays inside the range even when all sums are positive.
fn y_range(values: &[f64]) -> (f64, f64) {
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo == 0.0 && hi == 0.0 {
        return (0.0, 1.0);
    }
    let pad = (hi - lo).abs().max(1.0) * 0.1;
    (if lo < 0.0 { lo - pad } else { 0.0 }, hi + pad)
}
