//! Multilinear interpolation on a rectilinear grid.
//!
//! The value at an observation point is found by repeated linear interpolation:
//! the 2^ndims stored values at the corners of the enclosing grid cell are
//! blended pairwise along one axis at a time until a single value remains.
//!
//! Corners are enumerated as a binary counter over the axes, with axis 0 as
//! the least-significant bit, matching the storage order of the dependent
//! values. Adjacent corners in that enumeration differ only along axis 0, so
//! the first collapse pass blends along axis 0, the next along axis 1, and so on.
//! Enumeration and collapse share this one bit convention; changing either
//! without the other would silently blend the wrong pairs.
//!
//! Operation Complexity
//! * O(ndims * log2(axis length)) for the bracket search
//! * O(2^ndims) corner lookups and 2^ndims - 1 pairwise blends
//!
//! Axes with a single breakpoint do not split the cell, and do not add corners.
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Repeated_linear_interpolation
use alloc::vec::Vec;

use crate::bracket::{self, Bracket};
use crate::numeric::lerp;
use crate::{Grid, LookupError};

/// Interpolate the value at a point.
///
/// Fails fast: any dimension or domain error aborts before blending.
///
/// # Errors
///   * If the dimensionality of the point does not match the grid
///   * If any coordinate is outside its axis
pub(crate) fn interp_one(grid: &Grid, x: &[f64]) -> Result<f64, LookupError> {
    let ndims = grid.ndims();
    if x.len() != ndims {
        return Err(LookupError::DimensionMismatch {
            expected: ndims,
            found: x.len(),
        });
    }

    // Lower corner and normalized position on each dimension
    let brackets = x
        .iter()
        .zip(grid.axes())
        .enumerate()
        .map(|(i, (&v, axis))| bracket::locate(axis, i, v))
        .collect::<Result<Vec<Bracket>, _>>()?;

    // Only dimensions with distinct low and high breakpoints contribute a bit
    // to the corner counter. The others stay pinned at their single index.
    let split: Vec<usize> = (0..ndims).filter(|&i| brackets[i].is_split()).collect();
    let nverts = 1_usize << split.len();

    let mut loc: Vec<usize> = brackets.iter().map(|b| b.low).collect();
    let mut store = Vec::with_capacity(nverts);
    for i in 0..nverts {
        for (k, &dim) in split.iter().enumerate() {
            loc[dim] = brackets[dim].low + ((i >> k) & 1);
        }
        store.push(grid.lookup_by_indices(&loc)?);
    }

    let blends = collapse(&mut store, split.iter().map(|&dim| brackets[dim].fraction));
    log::trace!("interpolated {nverts} corners with {blends} blends");

    Ok(store[0])
}

/// Reduce corner values to one in place, blending adjacent pairs with one
/// fraction per pass, and return the number of blends performed.
///
/// `store` must hold 2^k values for k fractions, ordered so that the pairs
/// blended on each pass differ only along the dimension of that pass's fraction.
fn collapse<I: IntoIterator<Item = f64>>(store: &mut [f64], fractions: I) -> usize {
    let mut n = store.len();
    let mut blends = 0;
    for t in fractions {
        n /= 2;
        // Writes to index j only ever follow reads from 2j and 2j + 1
        for j in 0..n {
            store[j] = lerp(store[2 * j], store[2 * j + 1], t);
        }
        blends += n;
    }
    blends
}
