//! Implementations of `std::ops` and approximate equality.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Result};

/// Returns the row at the given index as a slice.
impl Index<usize> for Matrix {
    type Output = [f64];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        assert!(
            row < self.height,
            "row index {row} out of bounds for matrix with {} rows",
            self.height
        );
        let start = row * self.width;
        &self.data[start..start + self.width]
    }
}

impl IndexMut<usize> for Matrix {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        assert!(
            row < self.height,
            "row index {row} out of bounds for matrix with {} rows",
            self.height
        );
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self[row][col]
    }
}

/// Matrix + Matrix.
impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Add for Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: Matrix) -> Self::Output {
        Matrix::add(&self, &rhs)
    }
}

/// Matrix - Matrix.
impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &Matrix) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Sub for Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: Matrix) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Self::Output {
        self.data.iter_mut().for_each(|x| *x = -*x);
        self
    }
}

/// Matrix * Matrix.
impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul for Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Matrix) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Matrix * Scalar.
impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.data.iter_mut().for_each(|x| *x *= rhs);
        self
    }
}

/// Scalar * Matrix.
impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        rhs * self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        rhs * self
    }
}

// Matrices of different shapes are never approximately equal.

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
