//! Delimited output and the console summary.

use std::fs::{self, File};
use std::path::Path;

use serde::Serialize;

use super::aggregate::{Summary, speedups};
use crate::error::Result;
use crate::sweep::TrialResult;

/// Write raw trials as CSV with a header row.
pub fn write_trials_csv(path: impl AsRef<Path>, trials: &[TrialResult]) -> Result<()> {
    write_csv(path.as_ref(), trials)
}

/// Write group summaries as CSV with a header row.
pub fn write_summary_csv(path: impl AsRef<Path>, summaries: &[Summary]) -> Result<()> {
    write_csv(path.as_ref(), summaries)
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_writer(File::create(path)?);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Print one line per group, plus the loop/apply ratio per size.
pub fn print_summary_table(summaries: &[Summary]) {
    println!("\n{}", "=".repeat(86));
    println!("SUMMARY");
    println!("{}", "=".repeat(86));

    println!(
        "\n{:<8} {:<6} {:>10} {:>4} {:>14} {:>14} {:>14}",
        "Stat", "Method", "Cells", "n", "Mean (ms)", "CI low (ms)", "CI high (ms)"
    );
    println!("{}", "-".repeat(86));

    for s in summaries {
        println!(
            "{:<8} {:<6} {:>10} {:>4} {:>14.4} {:>14.4} {:>14.4}",
            s.statistic.to_string(),
            s.method.to_string(),
            s.cell_count,
            s.replicates,
            s.mean * 1000.0,
            s.ci_low * 1000.0,
            s.ci_high * 1000.0
        );
    }

    let ratios = speedups(summaries);
    if !ratios.is_empty() {
        println!("{}", "-".repeat(86));
        println!("\n{:<8} {:>10} {:>14}", "Stat", "Cells", "Loop / Apply");
        for r in &ratios {
            println!(
                "{:<8} {:>10} {:>13.2}×",
                r.statistic.to_string(),
                r.cell_count,
                r.loop_over_apply
            );
        }
    }

    println!("{}", "=".repeat(86));
    println!("\nCI = mean ± 1.96 × standard error.");
    println!("Loop / Apply above 1 means the explicit loop was slower.\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate::aggregate;
    use crate::statistic::{Method, Statistic};

    #[test]
    fn test_trials_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("trials.csv");
        let trials = vec![
            TrialResult::new(Statistic::Complex, Method::Loop, 2, 1000, 0, 0.25).unwrap(),
            TrialResult::new(Statistic::Complex, Method::Apply, 2, 1000, 0, 0.125).unwrap(),
        ];

        write_trials_csv(&path, &trials).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "statistic,method,rows,cols,cell_count,replicate,elapsed_seconds"
        );
        assert_eq!(lines[1], "complex,loop,2,1000,2000,0,0.25");
        assert_eq!(lines[2], "complex,apply,2,1000,2000,0,0.125");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_summary_csv_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let trials =
            vec![TrialResult::new(Statistic::Simple, Method::Loop, 1, 10, 0, 0.5).unwrap()];

        write_summary_csv(&path, &aggregate(&trials)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(
            "statistic,method,cell_count,replicates,mean,std_dev,std_error,ci_low,ci_high\n"
        ));
        assert!(text.contains("simple,loop,10,1,0.5,0.0,0.0,0.5,0.5"));
    }
}
