//! Accumulator: running weighted sums for cluster centroids.
//!
//! Clustering recomputes each centre as the (weighted) mean of the points
//! assigned to it. An [`Accumulator`] keeps the unnormalized sum and the total
//! weight so points can be streamed in, partial results merged, and the mean
//! read out at any time.

use crate::error::{check_dimensions, Result};
use crate::vector::Vektor;

/// A weighted running sum of vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator {
    /// Running sum of all vectors (not divided)
    sums: Vektor,
    /// Total weight added
    weight: f64,
    /// Number of examples accumulated
    count: usize,
}

impl Accumulator {
    /// Create a new empty accumulator.
    pub fn new(dimensions: usize) -> Self {
        Self {
            sums: Vektor::zeros(dimensions),
            weight: 0.0,
            count: 0,
        }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.sums.dimensions()
    }

    /// Get the number of accumulated examples.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total weight of the accumulated examples.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The raw, undivided sum.
    pub fn sums(&self) -> &Vektor {
        &self.sums
    }

    /// Add an example with weight 1.
    pub fn add(&mut self, example: &Vektor) -> Result<()> {
        self.sums.add_assign_checked(example)?;
        self.weight += 1.0;
        self.count += 1;
        Ok(())
    }

    /// Add an example with a specific weight.
    pub fn add_weighted(&mut self, example: &Vektor, weight: f64) -> Result<()> {
        check_dimensions(self.dimensions(), example.dimensions())?;

        let mut scaled = example.clone();
        scaled.mul_scalar(weight);
        self.sums.add_assign_checked(&scaled)?;
        self.weight += weight;
        self.count += 1;
        Ok(())
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: &Accumulator) -> Result<()> {
        self.sums.add_assign_checked(&other.sums)?;
        self.weight += other.weight;
        self.count += other.count;
        tracing::trace!(count = self.count, weight = self.weight, "merged accumulator");
        Ok(())
    }

    /// Weighted mean of everything added, or `None` while the total weight
    /// is zero.
    pub fn mean(&self) -> Option<Vektor> {
        if self.weight == 0.0 {
            return None;
        }
        let mut mean = self.sums.clone();
        mean.div_scalar(self.weight);
        Some(mean)
    }

    /// Clear the accumulator to start fresh.
    pub fn clear(&mut self) {
        self.sums = Vektor::zeros(self.dimensions());
        self.weight = 0.0;
        self.count = 0;
    }
}
