//! The timing experiment.
//!
//! Sizes in the outer loop, then replicates, then methods. Each combination
//! gets a freshly generated matrix and one timed run of the statistic.
//! Everything runs on the calling thread, one trial at a time, so trials
//! never compete for the CPU.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SweepConfig;
use crate::error::{BenchError, Result};
use crate::matrix::MatrixGenerator;
use crate::statistic::{Method, Statistic, compute};
use crate::timer;

/// One timed run. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    statistic: Statistic,
    method: Method,
    rows: usize,
    cols: usize,
    cell_count: usize,
    replicate: usize,
    elapsed_seconds: f64,
}

impl TrialResult {
    pub fn new(
        statistic: Statistic,
        method: Method,
        rows: usize,
        cols: usize,
        replicate: usize,
        elapsed_seconds: f64,
    ) -> Result<Self> {
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            return Err(BenchError::InvalidElapsed(elapsed_seconds));
        }
        Ok(Self {
            statistic,
            method,
            rows,
            cols,
            cell_count: rows * cols,
            replicate,
            elapsed_seconds,
        })
    }

    pub fn statistic(&self) -> Statistic {
        self.statistic
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn replicate(&self) -> usize {
        self.replicate
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

/// Generate one matrix and time one statistic over it.
///
/// Generation happens before the clock starts.
pub fn run_trial(
    generator: &mut MatrixGenerator,
    rows: usize,
    cols: usize,
    statistic: Statistic,
    method: Method,
    replicate: usize,
) -> Result<TrialResult> {
    let matrix = generator.generate(rows, cols)?;
    let timed = timer::time(|| compute(&matrix, statistic, method));
    debug_assert_eq!(timed.output.len(), cols);

    TrialResult::new(statistic, method, rows, cols, replicate, timed.seconds())
}

/// Run the whole sweep and return every trial in execution order.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<TrialResult>> {
    config.validate()?;

    let mut generator = MatrixGenerator::new(config.values, config.seed)?;
    let row_counts = config.row_counts();
    let methods = config.distinct_methods();
    let cols = config.fixed_columns;

    info!(
        statistic = %config.statistic,
        sizes = row_counts.len(),
        replicates = config.replicate_count,
        methods = methods.len(),
        columns = cols,
        "starting sweep"
    );

    let mut results =
        Vec::with_capacity(row_counts.len() * config.replicate_count * methods.len());

    for &rows in &row_counts {
        info!(rows, cols, cells = rows * cols, "measuring size");

        for replicate in 0..config.replicate_count {
            for &method in &methods {
                let trial =
                    run_trial(&mut generator, rows, cols, config.statistic, method, replicate)?;
                debug!(
                    %method,
                    rows,
                    replicate,
                    elapsed = trial.elapsed_seconds(),
                    "trial done"
                );
                results.push(trial);
            }
        }
    }

    info!(trials = results.len(), "sweep finished");
    Ok(results)
}
