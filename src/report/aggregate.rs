//! Per-group summary statistics over trial results.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::statistic::{Method, Statistic};
use crate::sweep::TrialResult;

/// z-score for a two-sided 95% interval.
pub const Z_95: f64 = 1.96;

/// Timing summary for one (statistic, method, cell count) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub statistic: Statistic,
    pub method: Method,
    pub cell_count: usize,
    pub replicates: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub std_error: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

/// Mean, sample standard deviation (n - 1) and standard error.
///
/// A single value has zero spread. An empty slice yields NaN for the mean.
pub fn summarize(values: &[f64]) -> (f64, f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0, 0.0);
    }
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();
    (mean, std_dev, std_dev / n.sqrt())
}

/// Group trials and summarize each group.
///
/// Output is ordered by statistic, then method, then cell count.
pub fn aggregate(trials: &[TrialResult]) -> Vec<Summary> {
    let mut groups: BTreeMap<(Statistic, Method, usize), Vec<f64>> = BTreeMap::new();
    for t in trials {
        groups
            .entry((t.statistic(), t.method(), t.cell_count()))
            .or_default()
            .push(t.elapsed_seconds());
    }

    groups
        .into_iter()
        .map(|((statistic, method, cell_count), elapsed)| {
            let (mean, std_dev, std_error) = summarize(&elapsed);
            Summary {
                statistic,
                method,
                cell_count,
                replicates: elapsed.len(),
                mean,
                std_dev,
                std_error,
                ci_low: mean - Z_95 * std_error,
                ci_high: mean + Z_95 * std_error,
            }
        })
        .collect()
}

/// How many times slower the loop was than apply at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Speedup {
    pub statistic: Statistic,
    pub cell_count: usize,
    pub loop_over_apply: f64,
}

/// Loop mean divided by apply mean, for every size where both were measured.
pub fn speedups(summaries: &[Summary]) -> Vec<Speedup> {
    let mut pairs: BTreeMap<(Statistic, usize), (Option<f64>, Option<f64>)> = BTreeMap::new();
    for s in summaries {
        let entry = pairs.entry((s.statistic, s.cell_count)).or_default();
        match s.method {
            Method::Loop => entry.0 = Some(s.mean),
            Method::Apply => entry.1 = Some(s.mean),
        }
    }

    pairs
        .into_iter()
        .filter_map(|((statistic, cell_count), pair)| match pair {
            (Some(looped), Some(applied)) if applied > 0.0 => Some(Speedup {
                statistic,
                cell_count,
                loop_over_apply: looped / applied,
            }),
            _ => None,
        })
        .collect()
}
