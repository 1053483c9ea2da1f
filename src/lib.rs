//! # Vektor: fixed-dimension f64 vector kernel
//!
//! Numeric primitives over D-dimensional double-precision vectors, as used by
//! point clustering and principal-curve fitting.
//!
//! ## Quick Start
//!
//! ```rust
//! use vektor::Vektor;
//!
//! let a = Vektor::new(&[1.0, 2.0, 3.0]);
//! let b = Vektor::new(&[4.0, 5.0, 6.0]);
//!
//! assert_eq!(a.dot(&b)?, 32.0);
//! assert_eq!(a.dist2_squared(&b)?, 27.0);
//!
//! let mut c = a.clone();
//! c.add_assign_checked(&b)?;
//! c.div_scalar(2.0);
//! assert_eq!(c.as_slice(), &[2.5, 3.5, 4.5]);
//! # Ok::<(), vektor::VektorError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Vektor**: owned, fixed-length `f64` buffer; dimension never changes
//! - **In-place ops**: `update`, `add_assign_checked`, `sub_assign_checked`,
//!   `mul_scalar`, `div_scalar` mutate the receiver without allocating
//! - **Reductions**: `dot`, `norm2`, `norm2_squared`, `dist2`, `dist2_squared`
//!   sum left to right for bit-reproducible results
//! - **Accumulator**: weighted running sum with a centroid `mean`
//!
//! Binary operations on vectors of different lengths return
//! [`VektorError::DimensionMismatch`] and leave the receiver untouched.
//! Division by zero is not an error; it follows IEEE-754 and yields inf/NaN.

pub mod accumulator;
pub mod error;
pub mod metric;
pub mod vector;


// Re-exports for convenience
pub use accumulator::Accumulator;
pub use error::{Result, VektorError};
pub use metric::Metric;
pub use vector::Vektor;
