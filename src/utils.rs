//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// Returns an empty Vec for `n == 0` and `[start]` for `n == 1`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return core::iter::repeat(start).take(n).collect();
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates a meshgrid in the table's storage order, with the first axis
/// varying fastest: (x0, y0, z0), (x1, y0, z0), ..., (xn, y0, z0), (x0, y1, z0), ...
///
/// Evaluating a function at each point of the output, in order, produces
/// a dependent value array laid out the way a [`Table`](crate::Table) expects.
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .rev()
        .multi_cartesian_product()
        .map(|xx| xx.iter().rev().map(|y| **y).collect())
        .collect()
}
