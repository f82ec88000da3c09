//! Loop vs apply: how much does the iteration idiom cost?
//!
//! Computes column-wise statistics on matrices of growing size two ways, an
//! explicit index loop into a preallocated result and a single higher-order
//! call mapped over the columns, then times both. The sweep varies the row
//! count against a fixed number of columns and replicates every measurement
//! so the results can be summarized with confidence intervals.
//!
//! ## Usage
//!
//! ```
//! use colstat::{Method, Statistic, compute};
//! use colstat::matrix::{MatrixGenerator, ValueRange};
//!
//! let mut generator = MatrixGenerator::new(ValueRange::default(), Some(1)).unwrap();
//! let m = generator.generate(100, 50).unwrap();
//!
//! let looped = compute(&m, Statistic::Simple, Method::Loop);
//! let applied = compute(&m, Statistic::Simple, Method::Apply);
//! assert_eq!(looped.len(), 50);
//! assert_eq!(looped, applied);
//! ```
//!
//! A full run:
//!
//! ```no_run
//! use colstat::config::SweepConfig;
//! use colstat::report::aggregate;
//! use colstat::sweep::run_sweep;
//!
//! let trials = run_sweep(&SweepConfig::default()).unwrap();
//! let summaries = aggregate(&trials);
//! ```
//!
//! ## What's inside
//!
//! - Column mean and mean-of-six-smallest, each as loop and apply
//! - Seeded matrix generator over a bounded value grid
//! - Sequential sweep with per-trial wall-clock timing
//! - Mean / standard error / 95% CI aggregation, CSV and SVG output

pub mod config;
pub mod error;
pub mod matrix;
pub mod report;
pub mod statistic;
pub mod sweep;
pub mod timer;

pub use error::{BenchError, Result};
pub use matrix::Matrix;
pub use statistic::{Method, Statistic, compute};
pub use sweep::{TrialResult, run_sweep};
