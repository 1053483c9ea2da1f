//! Vector type for the kernel.
//!
//! A [`Vektor`] is a point or displacement in D-dimensional space, stored as
//! an owned buffer of `f64`. The dimension is fixed when the vector is built
//! and no operation changes it.
//!
//! Mutating operations (the "equal" family) work in place and never
//! allocate. Reductions (dot product, norms, distances) live in
//! [`metric`](crate::metric).

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, Result};

/// A fixed-length vector of double-precision scalars.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Vektor {
    coords: Vec<f64>,
}

impl Vektor {
    /// Create a vector holding a copy of `coords`.
    ///
    /// The caller's buffer is not aliased.
    pub fn new(coords: &[f64]) -> Self {
        Self {
            coords: coords.to_vec(),
        }
    }

    /// Create a zero vector of given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            coords: vec![0.0; dimensions],
        }
    }

    /// Get the dimensionality.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// True for the zero-dimensional vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Get the coordinates as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.coords.iter()
    }

    /// Coordinate `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.coords.get(index).copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coords.clone()
    }

    /// Consume the vector and return its coordinates.
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }

    /// Replace this vector's contents element-wise with `source`.
    ///
    /// # Errors
    /// [`DimensionMismatch`](crate::VektorError::DimensionMismatch) if the
    /// lengths differ; `self` is left untouched.
    pub fn update(&mut self, source: &Vektor) -> Result<()> {
        check_dimensions(self.dimensions(), source.dimensions())?;
        self.coords.copy_from_slice(&source.coords);
        Ok(())
    }

    /// `self[i] += addend[i]` for all `i`.
    pub fn add_assign_checked(&mut self, addend: &Vektor) -> Result<()> {
        check_dimensions(self.dimensions(), addend.dimensions())?;
        for (x, &y) in self.coords.iter_mut().zip(addend.coords.iter()) {
            *x += y;
        }
        Ok(())
    }

    /// `self[i] -= subtrahend[i]` for all `i`.
    pub fn sub_assign_checked(&mut self, subtrahend: &Vektor) -> Result<()> {
        check_dimensions(self.dimensions(), subtrahend.dimensions())?;
        for (x, &y) in self.coords.iter_mut().zip(subtrahend.coords.iter()) {
            *x -= y;
        }
        Ok(())
    }

    /// Scale every coordinate by `factor` in place.
    pub fn mul_scalar(&mut self, factor: f64) {
        for x in &mut self.coords {
            *x *= factor;
        }
    }

    /// Divide every coordinate by `divisor` in place.
    ///
    /// A zero divisor is not an error: coordinates become `±inf` or `NaN`
    /// following IEEE-754.
    pub fn div_scalar(&mut self, divisor: f64) {
        if divisor == 0.0 {
            tracing::debug!(
                dimensions = self.dimensions(),
                "dividing vector by zero; coordinates become inf/NaN"
            );
        }
        for x in &mut self.coords {
            *x /= divisor;
        }
    }
}

impl From<Vec<f64>> for Vektor {
    fn from(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl From<&[f64]> for Vektor {
    fn from(coords: &[f64]) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Vektor {
    fn from(coords: [f64; N]) -> Self {
        Self {
            coords: coords.to_vec(),
        }
    }
}

impl FromIterator<f64> for Vektor {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vektor {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl AsRef<[f64]> for Vektor {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

impl Index<usize> for Vektor {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl IndexMut<usize> for Vektor {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coords[index]
    }
}

// Operator forms cannot return a Result, so they panic on a dimension
// mismatch. Prefer the checked methods when lengths are not known to agree.

impl AddAssign<&Vektor> for Vektor {
    fn add_assign(&mut self, rhs: &Vektor) {
        if let Err(err) = self.add_assign_checked(rhs) {
            panic!("{err}");
        }
    }
}

impl SubAssign<&Vektor> for Vektor {
    fn sub_assign(&mut self, rhs: &Vektor) {
        if let Err(err) = self.sub_assign_checked(rhs) {
            panic!("{err}");
        }
    }
}

impl MulAssign<f64> for Vektor {
    fn mul_assign(&mut self, rhs: f64) {
        self.mul_scalar(rhs);
    }
}

impl DivAssign<f64> for Vektor {
    fn div_assign(&mut self, rhs: f64) {
        self.div_scalar(rhs);
    }
}

impl Add for &Vektor {
    type Output = Vektor;

    fn add(self, rhs: &Vektor) -> Vektor {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub for &Vektor {
    type Output = Vektor;

    fn sub(self, rhs: &Vektor) -> Vektor {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Mul<f64> for &Vektor {
    type Output = Vektor;

    fn mul(self, rhs: f64) -> Vektor {
        let mut out = self.clone();
        out.mul_scalar(rhs);
        out
    }
}

impl Div<f64> for &Vektor {
    type Output = Vektor;

    fn div(self, rhs: f64) -> Vektor {
        let mut out = self.clone();
        out.div_scalar(rhs);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VektorError;

    fn bits(v: &Vektor) -> Vec<u64> {
        v.iter().map(|x| x.to_bits()).collect()
    }

    #[test]
    fn test_zeros() {
        let v = Vektor::zeros(100);
        assert_eq!(v.dimensions(), 100);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_new_copies_source() {
        let mut source = vec![1.0, 2.0, 3.0];
        let v = Vektor::new(&source);
        source[0] = 99.0;
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_update_idempotent_and_unaliased() {
        let mut target = Vektor::zeros(3);
        let mut source = Vektor::from([0.1, -2.5, 1e300]);

        target.update(&source).unwrap();
        target.update(&source).unwrap();
        assert_eq!(bits(&target), bits(&source));

        source[1] = 7.0;
        assert_eq!(target[1], -2.5);
    }

    #[test]
    fn test_update_mismatch_leaves_target() {
        let mut target = Vektor::from([1.0, 2.0]);
        let source = Vektor::from([3.0, 4.0, 5.0]);

        let err = target.update(&source).unwrap_err();
        assert_eq!(err, VektorError::DimensionMismatch { expected: 2, got: 3 });
        assert_eq!(target.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_add_sub_in_place() {
        let mut v = Vektor::from([1.0, 2.0, 3.0]);
        let w = Vektor::from([4.0, 5.0, 6.0]);

        v.add_assign_checked(&w).unwrap();
        assert_eq!(v.as_slice(), &[5.0, 7.0, 9.0]);

        v.sub_assign_checked(&w).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_mismatch_leaves_target() {
        let mut v = Vektor::from([1.0, 2.0, 3.0]);
        let w = Vektor::from([1.0]);

        assert!(v.add_assign_checked(&w).is_err());
        assert!(v.sub_assign_checked(&w).is_err());
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scale_in_place() {
        let mut v = Vektor::from([2.0, 4.0]);
        v.div_scalar(2.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);

        v.mul_scalar(-3.0);
        assert_eq!(v.as_slice(), &[-3.0, -6.0]);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let mut v = Vektor::from([1.0, -1.0, 0.0]);
        v.div_scalar(0.0);

        assert_eq!(v[0], f64::INFINITY);
        assert_eq!(v[1], f64::NEG_INFINITY);
        assert!(v[2].is_nan());
    }

    #[test]
    fn test_empty_in_place_noops() {
        let mut v = Vektor::zeros(0);
        let w = Vektor::new(&[]);

        v.update(&w).unwrap();
        v.add_assign_checked(&w).unwrap();
        v.sub_assign_checked(&w).unwrap();
        v.mul_scalar(5.0);
        v.div_scalar(0.0);

        assert!(v.is_empty());
    }

    #[test]
    fn test_operators() {
        let a = Vektor::from([1.0, 2.0]);
        let b = Vektor::from([0.5, 0.5]);

        assert_eq!((&a + &b).as_slice(), &[1.5, 2.5]);
        assert_eq!((&a - &b).as_slice(), &[0.5, 1.5]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0]);
        assert_eq!((&a / 2.0).as_slice(), &[0.5, 1.0]);

        let mut c = a.clone();
        c += &b;
        c *= 2.0;
        c -= &b;
        c /= 0.5;
        assert_eq!(c.as_slice(), &[5.0, 9.0]);
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch")]
    fn test_operator_mismatch_panics() {
        let a = Vektor::from([1.0, 2.0]);
        let b = Vektor::from([1.0]);
        let _ = &a + &b;
    }

    #[test]
    fn test_get_and_accessors() {
        let v: Vektor = (1..=3).map(f64::from).collect();
        assert_eq!(v.get(2), Some(3.0));
        assert_eq!(v.get(3), None);
        assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(v.into_inner(), vec![1.0, 2.0, 3.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_is_plain_sequence() {
        let v = Vektor::from([1.0, 2.5]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5]");

        let back: Vektor = serde_json::from_str("[3.0,4.0]").unwrap();
        assert_eq!(back.as_slice(), &[3.0, 4.0]);
    }
}
