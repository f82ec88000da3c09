//! Static SVG chart of mean elapsed time against cell count.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use plotters::prelude::*;

use super::aggregate::Summary;
use crate::error::{BenchError, Result};
use crate::statistic::{Method, Statistic};

const CHART_SIZE: (u32, u32) = (1024, 640);

/// One line per (statistic, method), each with a shaded 95% CI band.
pub fn render_chart(path: impl AsRef<Path>, summaries: &[Summary], title: &str) -> Result<()> {
    if summaries.is_empty() {
        return Err(BenchError::Chart("nothing to plot".into()));
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut series: BTreeMap<(Statistic, Method), Vec<&Summary>> = BTreeMap::new();
    for s in summaries {
        series.entry((s.statistic, s.method)).or_default().push(s);
    }
    for points in series.values_mut() {
        points.sort_by_key(|s| s.cell_count);
    }

    let x_min = summaries.iter().map(|s| s.cell_count).min().unwrap_or(0) as f64;
    let mut x_max = summaries.iter().map(|s| s.cell_count).max().unwrap_or(1) as f64;
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }
    let mut y_max = summaries.iter().map(|s| s.ci_high).fold(0.0, f64::max) * 1.05;
    if y_max <= 0.0 || !y_max.is_finite() {
        y_max = 1.0;
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Cell count (rows × columns)")
        .y_desc("Mean elapsed time (s)")
        .draw()
        .map_err(chart_error)?;

    for (idx, ((statistic, method), points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        // Upper edge left to right, then lower edge back.
        let band: Vec<(f64, f64)> = points
            .iter()
            .map(|s| (s.cell_count as f64, s.ci_high))
            .chain(
                points
                    .iter()
                    .rev()
                    .map(|s| (s.cell_count as f64, s.ci_low.max(0.0))),
            )
            .collect();
        chart
            .draw_series(std::iter::once(Polygon::new(band, color.mix(0.2).filled())))
            .map_err(chart_error)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|s| (s.cell_count as f64, s.mean)),
                color.stroke_width(2),
            ))
            .map_err(chart_error)?
            .label(format!("{statistic} / {method}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

fn chart_error<E: std::fmt::Display>(err: E) -> BenchError {
    BenchError::Chart(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate::aggregate;
    use crate::sweep::TrialResult;

    #[test]
    fn test_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let mut trials = Vec::new();
        for (i, rows) in [2, 4, 8].into_iter().enumerate() {
            for rep in 0..3 {
                let secs = 0.001 * (i + 1) as f64 + 0.0001 * rep as f64;
                trials.push(
                    TrialResult::new(Statistic::Simple, Method::Loop, rows, 10, rep, secs).unwrap(),
                );
                trials.push(
                    TrialResult::new(Statistic::Simple, Method::Apply, rows, 10, rep, secs / 2.0)
                        .unwrap(),
                );
            }
        }

        render_chart(&path, &aggregate(&trials), "loop vs apply").unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("simple / loop"));
        assert!(svg.contains("simple / apply"));
    }

    #[test]
    fn test_single_size_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.svg");
        let trials =
            vec![TrialResult::new(Statistic::Complex, Method::Apply, 5, 5, 0, 0.01).unwrap()];

        render_chart(&path, &aggregate(&trials), "single").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_chart(dir.path().join("x.svg"), &[], "empty").unwrap_err();
        assert!(matches!(err, BenchError::Chart(_)));
    }
}
