//! Aggregation and output of sweep results.
//!
//! - `aggregate`: mean, standard error and 95% CI per (statistic, method, size)
//! - `table`: CSV files and the console summary
//! - `chart`: SVG line chart with CI bands

pub mod aggregate;
pub mod chart;
pub mod table;

pub use aggregate::{Speedup, Summary, Z_95, aggregate, speedups, summarize};
pub use chart::render_chart;
pub use table::{print_summary_table, write_summary_csv, write_trials_csv};
