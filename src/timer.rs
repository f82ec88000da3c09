//! Wall-clock timing of a single computation.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Output of a timed call plus how long it took.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub output: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `f` once and measure it.
///
/// Only the closure body sits between the two clock reads, so set up inputs
/// (e.g. generate the matrix) before calling this.
pub fn time<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = black_box(f());
    let elapsed = start.elapsed();
    Timed { output, elapsed }
}
