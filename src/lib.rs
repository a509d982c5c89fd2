//! N-dimensional lookup tables on rectilinear grids, with exact lookup by grid
//! index and multilinear interpolation by value, no-std compatible (with alloc).
//!
//! A table holds two or more strictly increasing axes of breakpoints and one
//! dependent value per grid point. Dependent values are stored flat, with the
//! first axis varying fastest:
//! `z(x0, y0), z(x1, y0), ..., z(xn, y0), z(x0, y1), ...`.
//!
//! Queries outside the grid are reported as errors; there is no extrapolation.
//!
//! # Performance Scalings
//! For a self-consistent multidimensional linear interpolation, there are 2^ndims grid values that contribute
//! to each observation point, and as such, that is the theoretical floor for performance scaling.
//! Each axis also needs a bisection search to find the relevant grid cell, which takes
//! a worst-case number of iterations of log2(axis length).
//!
//! | Operation                     | RAM       | Cost                          |
//! |-------------------------------|-----------|-------------------------------|
//! | Table::lookup_by_indices      | O(1)      | O(ndims)                      |
//! | Table::lookup_by_values       | O(2^ndims)| O(2^ndims) + log2(gridsize)   |
//! | Table::interp (n points)      | O(2^ndims)| n * (O(2^ndims) + log2(gridsize)) |
//!
//! Axes with a single breakpoint are allowed, and do not add corners.
//!
//! # Example
//! ```rust
//! use lutn::{LookupError, Table};
//!
//! // Define a grid
//! let x = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let y = vec![0.0_f64, 1.0, 2.0, 3.0];
//!
//! // Values at grid points, first axis fastest
//! let z: Vec<f64> = (0..16).map(|i| i as f64).collect();
//!
//! let table = Table::from_parts(vec![x, y], z);
//! assert!(table.valid());
//!
//! // Points to interpolate
//! let xobs = [1.5_f64, 4.0];
//! let yobs = [0.5, 3.0];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! // Do interpolation
//! table.interp(&obs, &mut out).unwrap();
//! assert_eq!(out, [2.5, 15.0]);
//!
//! // Out of bounds
//! let err = table.lookup_by_values(&[5.0, 0.0]).unwrap_err();
//! assert!(matches!(err, LookupError::OutOfDomain { axis: 0, .. }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod bracket;
pub use bracket::Bracket;

mod error;
pub use error::{LookupError, SourceDataError};

pub mod fixed;
pub use fixed::{FixedTable, Table2D, Table3D};

pub mod grid;
pub use grid::Grid;

mod index;
mod multilinear;
pub mod numeric;

pub mod table;
pub use table::Table;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
