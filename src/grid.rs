//! Validated table data: axes, dependent values, and the strides that address them.
//!
//! A [`Grid`] can only be obtained through validation, so every query method
//! on it can rely on the axes being strictly increasing and on the values
//! exactly filling the cross product of the axes.
//!
//! ```rust
//! use lutn::{Grid, SourceDataError};
//!
//! let grid = Grid::new(vec![vec![1.0, 2.0], vec![10.0, 20.0, 30.0]], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(grid.lookup_by_indices(&[1, 2]).unwrap(), 6.0);
//!
//! let err = Grid::new(vec![vec![1.0, 3.0, 2.0], vec![0.0]], vec![0.0; 3]).unwrap_err();
//! assert_eq!(err, SourceDataError::NotIncreasing { axis: 0, position: 2 });
//! ```
use alloc::vec::Vec;

use crate::bracket::{self, Bracket};
use crate::{index, multilinear, LookupError, SourceDataError};

/// A validated rectilinear grid of breakpoints with one dependent value per grid point.
///
/// Dependent values are stored with the first axis varying fastest
/// (z(x0, y0), z(x1, y0), ..., z(xn, y0), z(x0, y1), ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// x, y, ... breakpoints, each entry of size dims[i]
    axes: Vec<Vec<f64>>,

    /// Size of each dimension
    dims: Vec<usize>,

    /// Cumulative product of lower dimensions, used for indexing
    dimprod: Vec<usize>,

    /// Values at each point, size prod(dims)
    values: Vec<f64>,
}

impl Grid {
    /// Validate and adopt a set of axes and the dependent values over them.
    ///
    /// # Errors
    /// * If fewer than 2 axes are given
    /// * If any axis is empty
    /// * If the number of values is not the product of the axis lengths
    /// * If any axis is not strictly increasing
    pub fn new(axes: Vec<Vec<f64>>, values: Vec<f64>) -> Result<Self, SourceDataError> {
        validate(&axes, values.len())?;
        let dims: Vec<usize> = axes.iter().map(Vec::len).collect();
        let (dimprod, _) = index::dimprod(&dims).ok_or(SourceDataError::GridTooLarge)?;

        Ok(Self {
            axes,
            dims,
            dimprod,
            values,
        })
    }

    /// Validate and adopt a combined data set: the axes followed by
    /// the dependent values as the final entry.
    ///
    /// # Errors
    /// * Same as [`Grid::new`]
    pub fn from_data_set(mut data_set: Vec<Vec<f64>>) -> Result<Self, SourceDataError> {
        match data_set.pop() {
            Some(values) => Self::new(data_set, values),
            None => Err(SourceDataError::TooFewAxes { found: 0 }),
        }
    }

    /// Number of axes
    #[inline]
    pub fn ndims(&self) -> usize {
        self.axes.len()
    }

    /// Total number of dependent values
    #[inline]
    pub fn nvals(&self) -> usize {
        self.values.len()
    }

    /// Number of breakpoints on each axis
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn axes(&self) -> &[Vec<f64>] {
        &self.axes
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Breakpoints of one axis.
    ///
    /// # Errors
    /// * If the axis does not exist
    pub fn axis(&self, axis: usize) -> Result<&[f64], LookupError> {
        self.axes
            .get(axis)
            .map(Vec::as_slice)
            .ok_or(LookupError::NoSuchAxis {
                axis,
                ndims: self.ndims(),
            })
    }

    /// Flat offset into the dependent values of the grid point at `loc`.
    ///
    /// # Errors
    /// * If `loc` does not have one entry per axis
    /// * If any entry is past the end of its axis
    #[inline]
    pub fn index_at(&self, loc: &[usize]) -> Result<usize, LookupError> {
        index::encode(&self.dims, &self.dimprod, self.values.len(), loc)
    }

    /// The stored value at the grid point `loc`.
    ///
    /// # Errors
    /// * Same as [`Grid::index_at`]
    #[inline]
    pub fn lookup_by_indices(&self, loc: &[usize]) -> Result<f64, LookupError> {
        let i = self.index_at(loc)?;
        self.values
            .get(i)
            .copied()
            .ok_or(LookupError::OffsetOutOfRange {
                offset: i,
                len: self.values.len(),
            })
    }

    /// Bracket enclosing `v` on one axis.
    ///
    /// # Errors
    /// * If the axis does not exist
    /// * If `v` is outside the axis
    pub fn locate(&self, axis: usize, v: f64) -> Result<Bracket, LookupError> {
        bracket::locate(self.axis(axis)?, axis, v)
    }

    /// Multilinear interpolation of the stored values at `x`.
    ///
    /// # Errors
    /// * If `x` does not have one entry per axis
    /// * If any entry of `x` is outside its axis
    #[inline]
    pub fn lookup_by_values(&self, x: &[f64]) -> Result<f64, LookupError> {
        multilinear::interp_one(self, x)
    }
}

/// Check a candidate set of axes against a number of dependent values.
///
/// # Errors
/// * If fewer than 2 axes are given
/// * If any axis is empty
/// * If the product of axis lengths is not `nvals`
/// * If any axis is not strictly increasing
pub(crate) fn validate<A: AsRef<[f64]>>(axes: &[A], nvals: usize) -> Result<(), SourceDataError> {
    let ndims = axes.len();
    if ndims < 2 {
        return Err(SourceDataError::TooFewAxes { found: ndims });
    }

    if let Some(axis) = axes.iter().position(|a| a.as_ref().is_empty()) {
        return Err(SourceDataError::EmptyAxis { axis });
    }

    let expected = axes
        .iter()
        .try_fold(1_usize, |acc, a| acc.checked_mul(a.as_ref().len()))
        .ok_or(SourceDataError::GridTooLarge)?;
    if expected != nvals {
        return Err(SourceDataError::ValueCountMismatch {
            expected,
            found: nvals,
        });
    }

    // Negated comparison so that NaN breakpoints are rejected too
    for (axis, a) in axes.iter().enumerate() {
        let a = a.as_ref();
        if let Some(position) = (1..a.len()).find(|&j| !(a[j - 1] < a[j])) {
            return Err(SourceDataError::NotIncreasing { axis, position });
        }
    }

    Ok(())
}

/// Check a combined data set whose final entry is the dependent values.
pub(crate) fn validate_data_set<A: AsRef<[f64]>>(data_set: &[A]) -> Result<(), SourceDataError> {
    match data_set.split_last() {
        Some((values, axes)) => validate(axes, values.as_ref().len()),
        None => Err(SourceDataError::TooFewAxes { found: 0 }),
    }
}
