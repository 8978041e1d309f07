/// Computes the dot product of two vectors.
///
/// This is the sum of the elementwise products of `a` and `b`. Callers must pass slices of equal
/// length; if they differ, the extra elements of the longer slice are ignored.
///
/// # Examples
///
/// ```
/// # use gridmat::*;
/// assert_eq!(dot_product(&[1.0, 3.0, -5.0], &[4.0, -2.0, -1.0]), 3.0);
/// assert_eq!(dot_product(&[], &[]), 0.0);
/// ```
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot product of vectors with different lengths");
    a.iter().zip(b).fold(0.0, |acc, (a, b)| acc + a * b)
}
