//! Column-wise statistics, each written twice.
//!
//! Every statistic has an explicit-loop form and an apply form (a single
//! higher-order call mapped over the column dimension). The two forms must
//! return the same vector; only the iteration idiom differs, and that is
//! what the sweep times.
//!
//! Available statistics:
//! - `mean`: arithmetic mean of each column
//! - `smallest`: mean of the six smallest values in each column

pub mod mean;
pub mod smallest;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

/// Which column statistic to compute.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Column mean.
    Simple,
    /// Mean of the six smallest values per column.
    Complex,
}

/// How the statistic iterates over columns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Index loop into a preallocated result.
    Loop,
    /// One higher-order call over the columns.
    Apply,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Loop, Method::Apply];
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Simple => f.write_str("simple"),
            Statistic::Complex => f.write_str("complex"),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Loop => f.write_str("loop"),
            Method::Apply => f.write_str("apply"),
        }
    }
}

/// Run `statistic` over every column of `matrix` using `method`.
///
/// Returns one value per column.
pub fn compute(matrix: &Matrix, statistic: Statistic, method: Method) -> Vec<f64> {
    match (statistic, method) {
        (Statistic::Simple, Method::Loop) => mean::column_means_loop(matrix),
        (Statistic::Simple, Method::Apply) => mean::column_means_apply(matrix),
        (Statistic::Complex, Method::Loop) => smallest::column_smallest_mean_loop(matrix),
        (Statistic::Complex, Method::Apply) => smallest::column_smallest_mean_apply(matrix),
    }
}
