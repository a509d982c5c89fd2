//! Mixed-radix encoding of a multi-dimensional grid index into a flat offset.
//!
//! Dimension 0 is the least-significant digit, so the dependent values are
//! laid out with the first axis varying fastest:
//! `z(x0, y0), z(x1, y0), ..., z(xn, y0), z(x0, y1), ...`.
//! This is the contract between the flattened storage and every query path,
//! including the corner enumeration of the multilinear interpolator.

use alloc::vec::Vec;

use crate::LookupError;

/// Populate the cumulative product of the sizes of all lower dimensions.
///
/// Each entry is the stride between consecutive indices along that dimension.
/// Returns the strides along with the total number of grid points, or `None`
/// if the total is not representable.
pub(crate) fn dimprod(dims: &[usize]) -> Option<(Vec<usize>, usize)> {
    let mut dimprod = Vec::with_capacity(dims.len());
    let mut acc: usize = 1;
    for &n in dims {
        dimprod.push(acc);
        acc = acc.checked_mul(n)?;
    }
    Some((dimprod, acc))
}

/// Flat offset of the grid point at `loc`, checking every component against
/// its dimension instead of clamping.
///
/// # Errors
/// * [`LookupError::DimensionMismatch`] if `loc` has the wrong number of entries
/// * [`LookupError::IndexOutOfBounds`] if any component is past the end of its axis
/// * [`LookupError::OffsetOutOfRange`] if the result does not address a stored value
#[inline]
pub(crate) fn encode(
    dims: &[usize],
    dimprod: &[usize],
    nvals: usize,
    loc: &[usize],
) -> Result<usize, LookupError> {
    let ndims = dims.len();
    if loc.len() != ndims {
        return Err(LookupError::DimensionMismatch {
            expected: ndims,
            found: loc.len(),
        });
    }

    let mut offset = 0;
    for j in 0..ndims {
        if loc[j] >= dims[j] {
            return Err(LookupError::IndexOutOfBounds {
                axis: j,
                index: loc[j],
                len: dims[j],
            });
        }
        offset += loc[j] * dimprod[j];
    }

    if offset >= nvals {
        return Err(LookupError::OffsetOutOfRange {
            offset,
            len: nvals,
        });
    }

    Ok(offset)
}
