//! Lookup tables with the number of axes fixed at compile time.
//!
//! [`FixedTable`] wraps a [`Table`] and takes array-typed coordinates, so a
//! query with the wrong number of coordinates is a type error rather than a
//! runtime [`LookupError::DimensionMismatch`].
//!
//! ```rust
//! use lutn::Table2D;
//!
//! let table = Table2D::from_parts(
//!     [vec![1.0, 2.0], vec![10.0, 20.0, 30.0]],
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//! );
//! assert_eq!(table.lookup_by_indices([1, 2]).unwrap(), 6.0);
//! assert_eq!(table.lookup_by_values([1.5, 15.0]).unwrap(), 2.5);
//! ```
use alloc::vec::Vec;

use crate::{LookupError, SourceDataError, Table};

/// A [`Table`] with exactly `N` axes.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTable<const N: usize> {
    table: Table,
}

/// Lookup table over two axes
pub type Table2D = FixedTable<2>;

/// Lookup table over three axes
pub type Table3D = FixedTable<3>;

impl<const N: usize> FixedTable<N> {
    /// An empty, invalid table.
    pub fn new() -> Self {
        const {
            assert!(N >= 2, "A lookup table needs at least 2 axes");
        }
        Self {
            table: Table::new(),
        }
    }

    /// Build a table from `N` axes and the dependent values.
    /// The result is invalid if the data is malformed.
    pub fn from_parts(axes: [Vec<f64>; N], values: Vec<f64>) -> Self {
        let mut table = Self::new();
        let _ = table.populate(axes, values);
        table
    }

    /// Build a table from a combined data set of `N` axes followed by the
    /// dependent values. The result is invalid if the data is malformed.
    pub fn from_data_set(data_set: Vec<Vec<f64>>) -> Self {
        let mut table = Self::new();
        let _ = table.populate_full(data_set);
        table
    }

    /// Whether `N` axes and the dependent values would be accepted as the
    /// source for a table.
    pub fn is_valid_source_data(axes: &[Vec<f64>; N], values: &[f64]) -> bool {
        Table::is_valid_source_data(axes.as_slice(), values)
    }

    /// Whether a combined data set has exactly `N` axes plus the dependent
    /// values, and would be accepted as the source for a table.
    pub fn is_valid_data_set<A: AsRef<[f64]>>(data_set: &[A]) -> bool {
        data_set.len() == N + 1 && Table::is_valid_data_set(data_set)
    }

    /// Replace the contents of the table.
    ///
    /// # Errors
    /// * [`LookupError::MalformedSourceData`] if the data fails validation,
    ///   in which case the table is left empty and invalid
    pub fn populate(&mut self, axes: [Vec<f64>; N], values: Vec<f64>) -> Result<(), LookupError> {
        self.table.populate(Vec::from(axes), values)
    }

    /// Replace the contents of the table with a combined data set.
    ///
    /// # Errors
    /// * [`LookupError::MalformedSourceData`] with
    ///   [`SourceDataError::AxisCountMismatch`] if the data set does not hold
    ///   exactly `N` axes plus the dependent values
    /// * Same as [`FixedTable::populate`]
    pub fn populate_full(&mut self, data_set: Vec<Vec<f64>>) -> Result<(), LookupError> {
        if data_set.len() != N + 1 {
            log::debug!(
                "rejected table source data: expected {} entries, found {}",
                N + 1,
                data_set.len()
            );
            self.table.reset();
            return Err(SourceDataError::AxisCountMismatch {
                expected: N,
                found: data_set.len().saturating_sub(1),
            }
            .into());
        }
        self.table.populate_full(data_set)
    }

    /// Discard all data, leaving the table empty and invalid.
    pub fn reset(&mut self) {
        self.table.reset();
    }

    #[inline]
    pub fn valid(&self) -> bool {
        self.table.valid()
    }

    /// Flat offset into the dependent values of the grid point at `loc`.
    ///
    /// # Errors
    /// * Same as [`Table::index_at`]
    pub fn index_at(&self, loc: [usize; N]) -> Result<usize, LookupError> {
        self.table.index_at(&loc)
    }

    /// The stored value at the grid point `loc`.
    ///
    /// # Errors
    /// * Same as [`Table::lookup_by_indices`]
    pub fn lookup_by_indices(&self, loc: [usize; N]) -> Result<f64, LookupError> {
        self.table.lookup_by_indices(&loc)
    }

    /// Multilinear interpolation of the stored values at `x`.
    ///
    /// # Errors
    /// * Same as [`Table::lookup_by_values`]
    pub fn lookup_by_values(&self, x: [f64; N]) -> Result<f64, LookupError> {
        self.table.lookup_by_values(&x)
    }

    /// The underlying dynamically-dimensioned table.
    pub fn as_table(&self) -> &Table {
        &self.table
    }
}

impl<const N: usize> Default for FixedTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
