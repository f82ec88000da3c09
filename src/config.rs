//! Experiment configuration.
//!
//! Defaults match the published experiment: rows 2..=1000 against a fixed
//! 1000 columns, ten replicates, both methods. A TOML file can override any
//! subset of keys; anything it leaves out keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};
use crate::matrix::ValueRange;
use crate::statistic::{Method, Statistic};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub sweep: SweepConfig,
    pub output: OutputConfig,
}

impl BenchConfig {
    /// Read a TOML file on top of the defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.sweep.validate()
    }
}

/// What to measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub min_rows: usize,
    pub max_rows: usize,
    /// Gap between consecutive row counts. The last size is always `max_rows`.
    pub row_step: usize,
    pub fixed_columns: usize,
    /// Replicates per (size, method). The same for every size.
    pub replicate_count: usize,
    pub statistic: Statistic,
    pub methods: Vec<Method>,
    pub values: ValueRange,
    /// Seed for the matrix generator. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            max_rows: 1000,
            row_step: 50,
            fixed_columns: 1000,
            replicate_count: 10,
            statistic: Statistic::Simple,
            methods: Method::ALL.to_vec(),
            values: ValueRange::default(),
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.replicate_count == 0 {
            return Err(BenchError::InvalidConfig(
                "replicate_count must be at least 1".into(),
            ));
        }
        if self.min_rows == 0 {
            return Err(BenchError::InvalidConfig("min_rows must be at least 1".into()));
        }
        if self.fixed_columns == 0 {
            return Err(BenchError::InvalidConfig(
                "fixed_columns must be at least 1".into(),
            ));
        }
        if self.min_rows > self.max_rows {
            return Err(BenchError::InvalidConfig(format!(
                "min_rows ({}) exceeds max_rows ({})",
                self.min_rows, self.max_rows
            )));
        }
        if self.row_step == 0 {
            return Err(BenchError::InvalidConfig("row_step must be at least 1".into()));
        }
        if self.methods.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one method is required".into(),
            ));
        }
        self.values.validate()
    }

    /// Row counts visited by the sweep, ascending.
    pub fn row_counts(&self) -> Vec<usize> {
        let step = self.row_step.max(1);
        let mut rows: Vec<usize> = (self.min_rows..=self.max_rows).step_by(step).collect();
        if rows.last() != Some(&self.max_rows) && self.min_rows <= self.max_rows {
            rows.push(self.max_rows);
        }
        rows
    }

    /// Methods with duplicates removed, in first-seen order.
    pub fn distinct_methods(&self) -> Vec<Method> {
        let mut out = Vec::with_capacity(self.methods.len());
        for &m in &self.methods {
            if !out.contains(&m) {
                out.push(m);
            }
        }
        out
    }
}

/// Where results go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub chart: String,
    pub trials_csv: String,
    pub summary_csv: String,
    pub write_chart: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("results"),
            chart: "timings.svg".into(),
            trials_csv: "trials.csv".into(),
            summary_csv: "summary.csv".into(),
            write_chart: true,
        }
    }
}

impl OutputConfig {
    pub fn chart_path(&self) -> PathBuf {
        self.dir.join(&self.chart)
    }

    pub fn trials_path(&self) -> PathBuf {
        self.dir.join(&self.trials_csv)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(&self.summary_csv)
    }
}
