//! Reductions over vectors: dot product, norms and Euclidean distances.
//!
//! Every accumulator starts at `0.0` and sums left to right over
//! `0..dimensions()`, with no fused multiply-add or reassociation, so results
//! are bit-reproducible against any other implementation that does the same.

use crate::error::{check_dimensions, Result};
use crate::vector::Vektor;

impl Vektor {
    /// Dot product: Σ self[i]·other[i].
    pub fn dot(&self, other: &Vektor) -> Result<f64> {
        check_dimensions(self.dimensions(), other.dimensions())?;
        let mut sum = 0.0;
        for (&x, &y) in self.iter().zip(other.iter()) {
            sum += x * y;
        }
        Ok(sum)
    }

    /// Squared Euclidean norm: Σ self[i]².
    pub fn norm2_squared(&self) -> f64 {
        let mut sum = 0.0;
        for &x in self {
            sum += x * x;
        }
        sum
    }

    /// Euclidean (L2) norm.
    pub fn norm2(&self) -> f64 {
        self.norm2_squared().sqrt()
    }

    /// Squared Euclidean distance: Σ (self[i] - other[i])².
    pub fn dist2_squared(&self, other: &Vektor) -> Result<f64> {
        check_dimensions(self.dimensions(), other.dimensions())?;
        let mut sum = 0.0;
        for (&x, &y) in self.iter().zip(other.iter()) {
            let diff = x - y;
            sum += diff * diff;
        }
        Ok(sum)
    }

    /// Euclidean distance.
    pub fn dist2(&self, other: &Vektor) -> Result<f64> {
        Ok(self.dist2_squared(other)?.sqrt())
    }
}

/// Binary reductions a consumer can be parameterized over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Euclidean distance
    Euclidean,
    /// Squared Euclidean distance (monotone in Euclidean, no sqrt)
    SquaredEuclidean,
    /// Raw inner product
    Dot,
}

impl Metric {
    /// Compute the selected reduction of `a` against `b`.
    pub fn compute(self, a: &Vektor, b: &Vektor) -> Result<f64> {
        match self {
            Metric::Euclidean => a.dist2(b),
            Metric::SquaredEuclidean => a.dist2_squared(b),
            Metric::Dot => a.dot(b),
        }
    }

    /// True when lower values mean closer.
    pub fn is_distance(self) -> bool {
        matches!(self, Metric::Euclidean | Metric::SquaredEuclidean)
    }
}
