//! Random matrix generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Matrix;
use crate::error::{BenchError, Result};

/// A bounded grid of values: `low, low + step, ..., high`.
///
/// The default is 0.11 to 10.00 in increments of 0.01.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
    pub step: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            low: 0.11,
            high: 10.00,
            step: 0.01,
        }
    }
}

impl ValueRange {
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() || !self.step.is_finite() {
            return Err(BenchError::InvalidConfig(
                "value range bounds and step must be finite".into(),
            ));
        }
        if self.low > self.high {
            return Err(BenchError::InvalidConfig(format!(
                "value range low ({}) exceeds high ({})",
                self.low, self.high
            )));
        }
        if self.step <= 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "value range step must be positive, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Index of the last grid point.
    fn steps(&self) -> u64 {
        ((self.high - self.low) / self.step).round() as u64
    }

    #[inline]
    fn sample<R: Rng>(&self, rng: &mut R, steps: u64) -> f64 {
        let k = rng.gen_range(0..=steps);
        (self.low + k as f64 * self.step).min(self.high)
    }
}

/// Produces fresh matrices with independently drawn values.
///
/// With a seed, the sequence of matrices is reproducible.
pub struct MatrixGenerator {
    range: ValueRange,
    rng: StdRng,
}

impl MatrixGenerator {
    pub fn new(range: ValueRange, seed: Option<u64>) -> Result<Self> {
        range.validate()?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { range, rng })
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Draw a `rows × cols` matrix.
    ///
    /// The whole buffer is reserved before any value is drawn and never
    /// reallocates while filling.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(BenchError::InvalidDimensions { rows, cols });
        }

        let len = rows * cols;
        let steps = self.range.steps();
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(self.range.sample(&mut self.rng, steps));
        }

        Matrix::from_columns(rows, cols, data)
    }
}
