//! The lookup table: an owned, possibly-invalid holder of a [`Grid`].
//!
//! ```rust
//! use lutn::{LookupError, Table};
//!
//! // Two axes, with the dependent values laid out first-axis-fastest
//! let x = vec![1.0, 2.0];
//! let y = vec![10.0, 20.0, 30.0];
//! let z = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let table = Table::from_parts(vec![x, y], z);
//! assert!(table.valid());
//!
//! // Exact lookup by grid index
//! assert_eq!(table.lookup_by_indices(&[1, 2]).unwrap(), 6.0);
//!
//! // Interpolated lookup by value
//! assert_eq!(table.lookup_by_values(&[1.5, 15.0]).unwrap(), 2.5);
//!
//! // No extrapolation
//! assert!(matches!(
//!     table.lookup_by_values(&[0.0, 15.0]),
//!     Err(LookupError::OutOfDomain { axis: 0, .. })
//! ));
//! ```
use alloc::vec;
use alloc::vec::Vec;

use crate::grid::{self, Grid};
use crate::{Bracket, LookupError, SourceDataError};

/// An N-dimensional lookup table (N >= 2) on a rectilinear grid.
///
/// A table starts out empty and invalid. Populating it with data that passes
/// validation makes it valid; populating it with anything else resets it to
/// empty, so partially-applied data is never retained. Construction never
/// fails outright; check [`Table::valid`] or the result of
/// [`Table::populate`] before querying.
///
/// Queries never mutate the table, so a populated table can be shared for
/// concurrent reads. Populating or resetting requires exclusive access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    grid: Option<Grid>,
}

impl Table {
    /// An empty, invalid table.
    pub fn new() -> Self {
        Self { grid: None }
    }

    /// Build a table from separate axes and dependent values.
    /// The result is invalid if the data is malformed.
    pub fn from_parts(axes: Vec<Vec<f64>>, values: Vec<f64>) -> Self {
        let mut table = Self::new();
        let _ = table.populate(axes, values);
        table
    }

    /// Build a table from a combined data set whose final entry holds the
    /// dependent values. The result is invalid if the data is malformed.
    pub fn from_data_set(data_set: Vec<Vec<f64>>) -> Self {
        let mut table = Self::new();
        let _ = table.populate_full(data_set);
        table
    }

    /// Whether `axes` and `values` would be accepted as the source for a table.
    pub fn is_valid_source_data<A: AsRef<[f64]>>(axes: &[A], values: &[f64]) -> bool {
        grid::validate(axes, values.len()).is_ok()
    }

    /// Whether a combined data set (axes followed by the dependent values)
    /// would be accepted as the source for a table.
    pub fn is_valid_data_set<A: AsRef<[f64]>>(data_set: &[A]) -> bool {
        grid::validate_data_set(data_set).is_ok()
    }

    /// Replace the contents of the table with new axes and dependent values.
    ///
    /// # Errors
    /// * [`LookupError::MalformedSourceData`] if the data fails validation,
    ///   in which case the table is left empty and invalid
    pub fn populate(&mut self, axes: Vec<Vec<f64>>, values: Vec<f64>) -> Result<(), LookupError> {
        self.adopt(Grid::new(axes, values))
    }

    /// Replace the contents of the table with a combined data set whose final
    /// entry holds the dependent values.
    ///
    /// # Errors
    /// * Same as [`Table::populate`]
    pub fn populate_full(&mut self, data_set: Vec<Vec<f64>>) -> Result<(), LookupError> {
        self.adopt(Grid::from_data_set(data_set))
    }

    fn adopt(&mut self, grid: Result<Grid, SourceDataError>) -> Result<(), LookupError> {
        match grid {
            Ok(grid) => {
                log::trace!(
                    "populated {}-dimensional table with {} values",
                    grid.ndims(),
                    grid.nvals()
                );
                self.grid = Some(grid);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected table source data: {err}");
                self.reset();
                Err(err.into())
            }
        }
    }

    /// Discard all data, leaving the table empty and invalid.
    pub fn reset(&mut self) {
        if self.grid.take().is_some() {
            log::trace!("reset table");
        }
    }

    /// Whether the table currently holds validated data.
    #[inline]
    pub fn valid(&self) -> bool {
        self.grid.is_some()
    }

    /// The validated data held by the table.
    ///
    /// # Errors
    /// * [`LookupError::InvalidTable`] if the table is empty
    #[inline]
    pub fn grid(&self) -> Result<&Grid, LookupError> {
        self.grid.as_ref().ok_or(LookupError::InvalidTable)
    }

    /// Take the validated data out of the table, leaving it empty.
    pub fn into_grid(self) -> Option<Grid> {
        self.grid
    }

    /// Number of axes; zero for an invalid table.
    pub fn dimensions(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::ndims)
    }

    /// Number of dependent values; zero for an invalid table.
    pub fn value_count(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::nvals)
    }

    /// Number of breakpoints on one axis.
    ///
    /// # Errors
    /// * [`LookupError::InvalidTable`] if the table is empty
    /// * [`LookupError::NoSuchAxis`] if the axis does not exist
    pub fn axis_len(&self, axis: usize) -> Result<usize, LookupError> {
        self.grid()?.axis(axis).map(<[f64]>::len)
    }

    /// Flat offset into the dependent values of the grid point at `loc`.
    ///
    /// # Errors
    /// * [`LookupError::InvalidTable`] if the table is empty
    /// * [`LookupError::DimensionMismatch`] if `loc` does not have one entry per axis
    /// * [`LookupError::IndexOutOfBounds`] if any entry is past the end of its axis
    pub fn index_at(&self, loc: &[usize]) -> Result<usize, LookupError> {
        self.grid()?.index_at(loc)
    }

    /// The stored value at the grid point `loc`.
    ///
    /// # Errors
    /// * Same as [`Table::index_at`]
    pub fn lookup_by_indices(&self, loc: &[usize]) -> Result<f64, LookupError> {
        self.grid()?.lookup_by_indices(loc)
    }

    /// Multilinear interpolation of the stored values at `x`.
    /// At grid points, this returns exactly the stored value.
    ///
    /// # Errors
    /// * [`LookupError::InvalidTable`] if the table is empty
    /// * [`LookupError::DimensionMismatch`] if `x` does not have one entry per axis
    /// * [`LookupError::OutOfDomain`] if any entry is outside its axis
    pub fn lookup_by_values(&self, x: &[f64]) -> Result<f64, LookupError> {
        self.grid()?.lookup_by_values(x)
    }

    /// The bracket enclosing `v` on one axis.
    ///
    /// # Errors
    /// * [`LookupError::InvalidTable`] if the table is empty
    /// * [`LookupError::NoSuchAxis`] if the axis does not exist
    /// * [`LookupError::OutOfDomain`] if `v` is outside the axis
    pub fn locate(&self, axis: usize, v: f64) -> Result<Bracket, LookupError> {
        self.grid()?.locate(axis, v)
    }

    /// Interpolate on a contiguous list of observation points,
    /// with one slice of coordinates per axis.
    ///
    /// Stops at the first point that cannot be evaluated; the contents of
    /// `out` are unspecified after an error.
    ///
    /// # Errors
    /// * If the number of coordinate slices does not match the number of axes
    /// * If any coordinate slice length does not match the output length
    /// * Any error from [`Table::lookup_by_values`]
    pub fn interp(&self, obs: &[&[f64]], out: &mut [f64]) -> Result<(), LookupError> {
        let grid = self.grid()?;
        let ndims = grid.ndims();
        if obs.len() != ndims {
            return Err(LookupError::DimensionMismatch {
                expected: ndims,
                found: obs.len(),
            });
        }
        if let Some(xx) = obs.iter().find(|xx| xx.len() != out.len()) {
            return Err(LookupError::LengthMismatch {
                expected: out.len(),
                found: xx.len(),
            });
        }

        let mut tmp = vec![0.0; ndims];
        for i in 0..out.len() {
            (0..ndims).for_each(|j| tmp[j] = obs[j][i]);
            out[i] = grid.lookup_by_values(&tmp)?;
        }

        Ok(())
    }

    /// Interpolate, allocating a new Vec for the output.
    ///
    /// # Errors
    /// * Same as [`Table::interp`]
    pub fn interp_alloc(&self, obs: &[&[f64]]) -> Result<Vec<f64>, LookupError> {
        let n = obs.first().map_or(0, |xx| xx.len());
        let mut out = vec![0.0; n];
        self.interp(obs, &mut out)?;
        Ok(out)
    }

    /// Check whether a list of observation points are inside the grid within
    /// some absolute tolerance, before committing to a batch evaluation.
    ///
    /// Output slice entry `i` is set to `false` if no points on that dimension
    /// are out of bounds, and set to `true` if there is a bounds violation on
    /// that axis.
    ///
    /// # Errors
    /// * If the table is empty
    /// * If the number of coordinate slices or the output length does not
    ///   match the number of axes
    pub fn check_bounds(
        &self,
        obs: &[&[f64]],
        atol: f64,
        out: &mut [bool],
    ) -> Result<(), LookupError> {
        let grid = self.grid()?;
        let ndims = grid.ndims();
        for n in [obs.len(), out.len()] {
            if n != ndims {
                return Err(LookupError::DimensionMismatch {
                    expected: ndims,
                    found: n,
                });
            }
        }

        for (i, axis) in grid.axes().iter().enumerate() {
            let (lo, hi) = (axis[0], axis[axis.len() - 1]);
            out[i] = obs[i]
                .iter()
                .any(|&x| !(x >= lo - atol && x <= hi + atol));
        }

        Ok(())
    }
}

impl From<Grid> for Table {
    fn from(grid: Grid) -> Self {
        Self { grid: Some(grid) }
    }
}
