extern crate nalgebra as na;
extern crate num_traits;

use na::DMatrix;
use crate::Float;

/// Pascal triangle up to row n. C(r,k) is stored at (r,k), entries with k > r are zero.
pub fn binomial_table(n: usize) -> DMatrix<Float> {
    let mut table = DMatrix::<Float>::zeros(n+1,n+1);
    for r in 0..=n {
        table[(r,0)] = 1.0;
        for k in 1..=r {
            table[(r,k)] = table[(r-1,k-1)] + match k < r {
                true => table[(r-1,k)],
                false => 0.0
            };
        }
    }
    table
}

/// A scale reference is degenerate if it is not finite or not strictly above eps.
pub fn is_degenerate<F: num_traits::Float>(value: F, eps: F) -> bool {
    !value.is_finite() || value <= eps
}
