//! Location of a query value within one axis.

use crate::numeric::{approx_eq, ilerp};
use crate::LookupError;

/// The pair of adjacent breakpoints enclosing a query value on one axis,
/// and the normalized position of the value between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the lower breakpoint
    pub low: usize,
    /// Index of the upper breakpoint; equal to `low` only on a
    /// single-breakpoint axis
    pub high: usize,
    /// Normalized coordinate from `low` toward `high`.
    /// In `[0, 1)` on the interior, exactly `1` at the last breakpoint.
    pub fraction: f64,
}

impl Bracket {
    /// Floating-point "index" of the query value along the axis.
    #[inline]
    pub fn position(&self) -> f64 {
        self.low as f64 + self.fraction
    }

    /// Whether this axis splits the cell into a low and a high corner.
    #[inline]
    pub(crate) fn is_split(&self) -> bool {
        self.high > self.low
    }
}

/// Find the bracket containing `v` on `axis`, the `dim`'th axis of the grid.
///
/// Values that land on a breakpoint to within a magnitude-scaled tolerance
/// snap to it with zero fraction. A value at the last breakpoint is reported
/// as the top of the final interval (`fraction == 1`) so the upper index of
/// the bracket always exists.
///
/// Assumes `axis` is strictly increasing.
///
/// # Errors
/// * [`LookupError::OutOfDomain`] if `v` is below the first or above the last
///   breakpoint, or is NaN
/// * [`LookupError::InvalidTable`] if the axis is empty
#[inline]
pub(crate) fn locate(axis: &[f64], dim: usize, v: f64) -> Result<Bracket, LookupError> {
    let (Some(&lo), Some(&hi)) = (axis.first(), axis.last()) else {
        return Err(LookupError::InvalidTable);
    };
    if !(v >= lo && v <= hi) {
        return Err(LookupError::OutOfDomain {
            axis: dim,
            value: v,
            lo,
            hi,
        });
    }

    // Bisection search for the first breakpoint at or above the value.
    // Inside the domain this is always a valid index.
    let upper = axis.partition_point(|x| *x < v);

    let exact = if approx_eq(axis[upper], v) {
        Some(upper)
    } else if upper > 0 && approx_eq(axis[upper - 1], v) {
        Some(upper - 1)
    } else {
        None
    };

    let (low, fraction) = match exact {
        Some(i) => (i, 0.0),
        // Not on a breakpoint, so lo < v < hi and 0 < upper < len
        None => (upper - 1, ilerp(axis[upper - 1], axis[upper], v)),
    };

    let last = axis.len() - 1;
    let bracket = if last > 0 && low == last {
        Bracket {
            low: last - 1,
            high: last,
            fraction: fraction + 1.0,
        }
    } else {
        Bracket {
            low,
            high: (low + 1).min(last),
            fraction,
        }
    };

    Ok(bracket)
}
