//! Benchmark runner: loop vs apply over a sweep of matrix sizes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colstat::config::BenchConfig;
use colstat::report::{
    aggregate, print_summary_table, render_chart, write_summary_csv, write_trials_csv,
};
use colstat::sweep::run_sweep;
use colstat::{Method, Statistic};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Time column statistics computed with an explicit loop and with apply.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file; flags below override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Smallest row count in the sweep
    #[arg(long)]
    min_rows: Option<usize>,

    /// Largest row count in the sweep
    #[arg(long)]
    max_rows: Option<usize>,

    /// Gap between consecutive row counts
    #[arg(long)]
    row_step: Option<usize>,

    /// Fixed number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Replicates per size and method
    #[arg(short, long)]
    replicates: Option<usize>,

    /// Column statistic to time
    #[arg(short, long, value_enum)]
    statistic: Option<Statistic>,

    /// Method to time (repeat for several; default is both)
    #[arg(short, long, value_enum)]
    method: Vec<Method>,

    /// Seed for the matrix generator
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for CSV and chart output
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Skip rendering the chart
    #[arg(long)]
    no_chart: bool,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn apply_to(&self, config: &mut BenchConfig) {
        let sweep = &mut config.sweep;
        if let Some(v) = self.min_rows {
            sweep.min_rows = v;
        }
        if let Some(v) = self.max_rows {
            sweep.max_rows = v;
        }
        if let Some(v) = self.row_step {
            sweep.row_step = v;
        }
        if let Some(v) = self.columns {
            sweep.fixed_columns = v;
        }
        if let Some(v) = self.replicates {
            sweep.replicate_count = v;
        }
        if let Some(v) = self.statistic {
            sweep.statistic = v;
        }
        if !self.method.is_empty() {
            sweep.methods.clone_from(&self.method);
        }
        if self.seed.is_some() {
            sweep.seed = self.seed;
        }
        if let Some(dir) = &self.out_dir {
            config.output.dir.clone_from(dir);
        }
        if self.no_chart {
            config.output.write_chart = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &cli.config {
        Some(path) => BenchConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BenchConfig::default(),
    };
    cli.apply_to(&mut config);
    config.validate().context("invalid configuration")?;

    println!("=== Column Statistic Benchmark: loop vs apply ===\n");
    println!(
        "Statistic: {}  Rows: {}..={} (step {})  Columns: {}  Replicates: {}\n",
        config.sweep.statistic,
        config.sweep.min_rows,
        config.sweep.max_rows,
        config.sweep.row_step,
        config.sweep.fixed_columns,
        config.sweep.replicate_count
    );

    let trials = run_sweep(&config.sweep).context("sweep failed")?;
    let summaries = aggregate(&trials);

    print_summary_table(&summaries);

    let output = &config.output;
    fs::create_dir_all(&output.dir)
        .with_context(|| format!("failed to create {}", output.dir.display()))?;

    let trials_path = output.trials_path();
    write_trials_csv(&trials_path, &trials)
        .with_context(|| format!("failed to write {}", trials_path.display()))?;
    info!(path = %trials_path.display(), rows = trials.len(), "wrote trials");

    let summary_path = output.summary_path();
    write_summary_csv(&summary_path, &summaries)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;
    info!(path = %summary_path.display(), rows = summaries.len(), "wrote summary");

    if output.write_chart {
        let chart_path = output.chart_path();
        let title = format!(
            "Column statistic ({}): loop vs apply, {} replicates",
            config.sweep.statistic, config.sweep.replicate_count
        );
        render_chart(&chart_path, &summaries, &title)
            .with_context(|| format!("failed to render {}", chart_path.display()))?;
        info!(path = %chart_path.display(), "wrote chart");
    } else {
        info!("chart output disabled");
    }

    Ok(())
}
