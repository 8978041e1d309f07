use std::{fmt, slice::ChunksExact};

use log::trace;

use crate::{dot_product, Axis, MatrixError, Result};

mod ops;
mod parse;

/// Creates a `height` x `width` [`Matrix`] with every element set to 0.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimension`] if either dimension is zero.
///
/// # Examples
///
/// ```
/// # use gridmat::*;
/// let mat = zeroes(2, 3)?;
/// assert_eq!(mat.shape(), (2, 3));
/// assert!(mat.as_slice().iter().all(|&x| x == 0.0));
///
/// assert!(zeroes(0, 3).is_err());
/// # Ok::<_, MatrixError>(())
/// ```
pub fn zeroes(height: usize, width: usize) -> Result<Matrix> {
    Matrix::zeroes(height, width)
}

/// Creates an `n` x `n` identity [`Matrix`].
///
/// The matrix has the value 1 on its diagonal and 0 everywhere else.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimension`] if `n` is zero.
///
/// # Examples
///
/// ```
/// # use gridmat::*;
/// assert_eq!(identity(2)?, Matrix::new(vec![
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
/// ])?);
/// # Ok::<_, MatrixError>(())
/// ```
pub fn identity(n: usize) -> Result<Matrix> {
    Matrix::identity(n)
}

/// A dense, row-major matrix of [`f64`] values.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::new`] takes a grid of rows, which must all have the same, non-zero length.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`zeroes`] and [`identity`] create all-zero and identity matrices.
/// - Matrices can be parsed from text via [`str::parse`], see the [`FromStr`] impl.
///
/// Every matrix has at least one row and one column, and its shape never changes after
/// construction. Operations like [`Matrix::transpose`] or [`Matrix::add`] always allocate a new
/// matrix and leave their operands untouched.
///
/// # Element Access
///
/// Indexing a matrix with a `usize` yields the row at that index as a slice, so the familiar
/// `mat[row][col]` syntax works for reading and writing elements. [`Matrix`] can also be indexed
/// with a `(row, col)` tuple.
///
/// ```
/// # use gridmat::*;
/// let mut mat = Matrix::new(vec![vec![0.0, 1.0]])?;
/// mat[0][0] = 4.0;
/// assert_eq!(mat[0], [4.0, 1.0]);
/// assert_eq!(mat[(0, 1)], 1.0);
/// # Ok::<_, MatrixError>(())
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`],
/// [`Matrix::get_row`] and [`Matrix::get_column`] perform checked access instead.
///
/// # Arithmetic
///
/// The `+`, `-` and `*` operators are implemented for references and owned matrices. Since the
/// operand shapes are only known at runtime, `matrix + matrix`, `matrix - matrix` and
/// `matrix * matrix` return a [`Result`], just like [`Matrix::add`], [`Matrix::subtract`] and
/// [`Matrix::multiply`]. Negation and multiplication with a scalar (on either side) cannot fail.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Clone, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    /// Row-major elements, `height * width` in total.
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a [`Matrix`] from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if `grid` or its first row is empty, or if the rows
    /// don't all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::new(vec![
    ///     vec![1.0, 2.0, 3.0],
    ///     vec![4.0, 5.0, 6.0],
    /// ])?;
    /// assert_eq!(mat.shape(), (2, 3));
    ///
    /// assert!(Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn new(grid: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = grid.first() else {
            return Err(MatrixError::InvalidShape {
                reason: "grid has no rows".into(),
            });
        };
        let width = first.len();
        if width == 0 {
            return Err(MatrixError::InvalidShape {
                reason: "grid has no columns".into(),
            });
        }
        if let Some((i, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(MatrixError::InvalidShape {
                reason: format!("row {i} has {} elements, expected {width}", row.len()),
            });
        }

        Ok(Self {
            height: grid.len(),
            width,
            data: grid.into_iter().flatten().collect(),
        })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::from_fn(2, 3, |row, col| (row * 10 + col) as f64)?;
    /// assert_eq!(mat, Matrix::new(vec![
    ///     vec![ 0.0,  1.0,  2.0],
    ///     vec![10.0, 11.0, 12.0],
    /// ])?);
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn from_fn<F>(height: usize, width: usize, mut cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if height == 0 || width == 0 {
            return Err(MatrixError::InvalidDimension { height, width });
        }

        let data = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| cb(row, col))
            .collect();
        Ok(Self::from_parts(height, width, data))
    }

    /// Creates a `height` x `width` matrix with every element set to 0.
    ///
    /// Also available as the free function [`zeroes`].
    pub fn zeroes(height: usize, width: usize) -> Result<Self> {
        Self::from_fn(height, width, |_, _| 0.0)
    }

    /// Creates an `n` x `n` identity matrix.
    ///
    /// Also available as the free function [`identity`].
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// Assembles a matrix from parts already known to be consistent.
    fn from_parts(height: usize, width: usize, data: Vec<f64>) -> Self {
        debug_assert!(height > 0 && width > 0);
        debug_assert_eq!(data.len(), height * width);
        Self {
            height,
            width,
            data,
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the shape of the matrix as `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Returns whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Returns the elements of the matrix in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns an iterator over the rows of the matrix.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.width)
    }

    /// Copies the elements into a list of rows.
    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::new(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![3.0, 4.0, 5.0],
    /// ])?;
    /// assert_eq!(mat.get(1, 0), Some(&3.0));
    /// assert_eq!(mat.get(2, 0), None);
    /// assert_eq!(mat.get(0, 3), None);
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.height && col < self.width {
            self.data.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.height && col < self.width {
            self.data.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// Returns the row at index `row`.
    ///
    /// The returned slice borrows the matrix storage; this is the checked equivalent of
    /// `mat[row]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row` is not less than the height.
    pub fn get_row(&self, row: usize) -> Result<&[f64]> {
        if row >= self.height {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Row,
                index: row,
                len: self.height,
            });
        }
        Ok(&self[row])
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `col` is not less than the width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::new(vec![
    ///     vec![1.0, 2.0],
    ///     vec![3.0, 4.0],
    /// ])?;
    /// assert_eq!(mat.get_column(1)?, [2.0, 4.0]);
    /// assert!(mat.get_column(2).is_err());
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn get_column(&self, col: usize) -> Result<Vec<f64>> {
        if col >= self.width {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: col,
                len: self.width,
            });
        }
        Ok(self.column(col))
    }

    fn column(&self, col: usize) -> Vec<f64> {
        self.rows().map(|row| row[col]).collect()
    }

    /// Returns the elements on the diagonal of a square matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonSquare`] if the matrix is not square.
    pub fn diagonal(&self) -> Result<Vec<f64>> {
        let n = self.square_size("diagonal")?;
        Ok((0..n).map(|i| self[(i, i)]).collect())
    }

    /// Applies a closure to each element, returning a new matrix of the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::new(vec![vec![0.0, 1.0, 2.0]])?;
    /// assert_eq!(mat.map(|x| x * x), Matrix::new(vec![vec![0.0, 1.0, 4.0]])?);
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::from_parts(
            self.height,
            self.width,
            self.data.iter().copied().map(f).collect(),
        )
    }

    /// Combines the elements of two equally-shaped matrices.
    fn zip_with<F>(&self, other: &Self, op: &'static str, mut f: F) -> Result<Self>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_parts(self.height, self.width, data))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::new(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![3.0, 4.0, 5.0],
    /// ])?;
    /// assert_eq!(mat.transpose(), Matrix::new(vec![
    ///     vec![0.0, 3.0],
    ///     vec![1.0, 4.0],
    ///     vec![2.0, 5.0],
    /// ])?);
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn transpose(&self) -> Self {
        let data = (0..self.width).flat_map(|col| self.column(col)).collect();
        Self::from_parts(self.width, self.height, data)
    }

    /// Adds `other` to `self` elementwise. Equivalent to `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Subtracts `other` from `self` elementwise. Equivalent to `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Flips the sign of every element. Equivalent to `-self`.
    pub fn negate(&self) -> Self {
        self.map(|x| -x)
    }

    /// Multiplies every element with `scalar`. Equivalent to `self * scalar` and `scalar * self`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|x| x * scalar)
    }

    /// Computes the matrix product `self * other`.
    ///
    /// Each element `(i, j)` of the result is the [`dot_product`] of row `i` of `self` and
    /// column `j` of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if the width of `self` differs from the height
    /// of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let a = Matrix::new(vec![vec![1.0, 2.0, 3.0]])?;
    /// let b = Matrix::new(vec![vec![4.0], vec![5.0], vec![6.0]])?;
    /// assert_eq!(a.multiply(&b)?, Matrix::new(vec![vec![32.0]])?);
    /// assert_eq!(b.multiply(&a)?.shape(), (3, 3));
    /// assert!(a.multiply(&a).is_err());
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.width != other.height {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        trace!(
            "multiplying {}x{} and {}x{} matrices",
            self.height,
            self.width,
            other.height,
            other.width
        );

        let columns = (0..other.width)
            .map(|col| other.column(col))
            .collect::<Vec<_>>();
        let data = self
            .rows()
            .flat_map(|row| columns.iter().map(move |col| dot_product(row, col)))
            .collect();
        Ok(Self::from_parts(self.height, other.width, data))
    }

    /// Returns the size of a square matrix, or a [`MatrixError::NonSquare`] error for `op`.
    fn square_size(&self, op: &'static str) -> Result<usize> {
        if self.is_square() {
            Ok(self.height)
        } else {
            Err(MatrixError::NonSquare {
                op,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonSquare`] if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// assert_eq!(identity(3)?.trace()?, 3.0);
    /// assert!(zeroes(2, 3)?.trace().is_err());
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn trace(&self) -> Result<f64> {
        let n = self.square_size("trace")?;
        Ok((0..n).fold(0.0, |acc, i| acc + self[(i, i)]))
    }

    /// Returns the [determinant] of a 1x1 or 2x2 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonSquare`] if the matrix is not square, and
    /// [`MatrixError::UnsupportedSize`] if it is larger than 2x2.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Result<f64> {
        match self.square_size("determinant")? {
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            n => Err(MatrixError::UnsupportedSize {
                op: "determinant",
                n,
            }),
        }
    }

    /// Inverts a 1x1 or 2x2 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonSquare`] if the matrix is not square,
    /// [`MatrixError::UnsupportedSize`] if it is larger than 2x2, and [`MatrixError::Singular`]
    /// if its [`determinant`][Self::determinant] is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridmat::*;
    /// let mat = Matrix::new(vec![
    ///     vec![1.0, 2.0],
    ///     vec![3.0, 4.0],
    /// ])?;
    /// assert_eq!(mat.inverse()?, Matrix::new(vec![
    ///     vec![-2.0, 1.0],
    ///     vec![1.5, -0.5],
    /// ])?);
    ///
    /// assert_eq!(
    ///     Matrix::new(vec![vec![0.0]])?.inverse(),
    ///     Err(MatrixError::Singular { det: 0.0 }),
    /// );
    /// # Ok::<_, MatrixError>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let n = self.square_size("inverse")?;
        if n > 2 {
            return Err(MatrixError::UnsupportedSize { op: "inverse", n });
        }

        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::Singular { det });
        }
        trace!("inverting {n}x{n} matrix with determinant {det}");

        let adjugate = if n == 1 {
            vec![1.0]
        } else {
            vec![self[(1, 1)], -self[(0, 1)], -self[(1, 0)], self[(0, 0)]]
        };
        Ok(Self::from_parts(n, n, adjugate).scale(1.0 / det))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(grid: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(grid)
    }
}

/// Prints one row per line, with elements separated by a single space.
///
/// Formatting options like precision are applied to every element.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, elem) in row.iter().enumerate() {
                if col != 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(elem, f)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps each row on a single line, even with `{:#?}`.
        struct FormatRow<'a>(&'a [f64]);
        impl fmt::Debug for FormatRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.rows().map(FormatRow))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(grid: &[&[f64]]) -> Matrix {
        Matrix::new(grid.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn construction() {
        let m = mat(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(m.height(), 2);
        assert_eq!(m.width(), 3);
        assert_eq!(m.as_slice(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.to_grid(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(!m.is_square());
    }

    #[test]
    fn invalid_shapes() {
        for grid in [vec![], vec![vec![]], vec![vec![1.0], vec![2.0, 3.0]]] {
            assert!(
                matches!(Matrix::new(grid), Err(MatrixError::InvalidShape { .. })),
                "ragged or empty grid was accepted"
            );
        }
        assert_eq!(
            Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]),
            Err(MatrixError::InvalidShape {
                reason: "row 2 has 1 elements, expected 2".into(),
            }),
        );
    }

    #[test]
    fn factories() {
        assert_eq!(
            identity(3).unwrap(),
            mat(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]),
        );
        assert_eq!(zeroes(2, 3).unwrap(), mat(&[&[0.0; 3], &[0.0; 3]]));

        assert_eq!(
            zeroes(0, 1),
            Err(MatrixError::InvalidDimension {
                height: 0,
                width: 1,
            }),
        );
        assert_eq!(
            zeroes(1, 0),
            Err(MatrixError::InvalidDimension {
                height: 1,
                width: 0,
            }),
        );
        assert!(matches!(
            identity(0),
            Err(MatrixError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn rows_and_columns() {
        let m = mat(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(m.get_row(2).unwrap(), [5.0, 6.0]);
        assert_eq!(m.get_column(0).unwrap(), [1.0, 3.0, 5.0]);
        assert_eq!(m.rows().count(), 3);

        assert_eq!(
            m.get_row(3),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Row,
                index: 3,
                len: 3,
            }),
        );
        assert_eq!(
            m.get_column(2),
            Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 2,
                len: 2,
            }),
        );
    }

    #[test]
    fn get_mut() {
        let mut m = zeroes(2, 2).unwrap();
        *m.get_mut(1, 0).unwrap() = 7.0;
        assert!(m.get_mut(0, 2).is_none());
        assert_eq!(m, mat(&[&[0.0, 0.0], &[7.0, 0.0]]));
    }

    #[test]
    fn column_is_a_copy() {
        let mut m = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let mut col = m.get_column(0).unwrap();
        col[0] = 100.0;
        assert_eq!(m[0][0], 1.0);

        m[0][0] = 9.0;
        assert_eq!(col, [100.0, 3.0]);
        assert_eq!(m.get_row(0).unwrap(), [9.0, 2.0]);
    }

    #[test]
    fn transpose() {
        let m = mat(&[&[1.0, 2.0, 3.0]]);
        let t = m.transpose();
        assert_eq!(t, mat(&[&[1.0], &[2.0], &[3.0]]));
        assert_eq!(t.transpose(), m);
        assert_eq!(m.shape(), (1, 3));
    }

    #[test]
    fn trace() {
        assert_eq!(mat(&[&[1.0, 2.0], &[3.0, 4.0]]).trace(), Ok(5.0));
        assert_eq!(mat(&[&[-3.0]]).trace(), Ok(-3.0));
        assert_eq!(
            mat(&[&[1.0, 2.0]]).trace(),
            Err(MatrixError::NonSquare {
                op: "trace",
                height: 1,
                width: 2,
            }),
        );
    }

    #[test]
    fn diagonal() {
        let m = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(m.diagonal().unwrap(), [1.0, 4.0]);
        assert!(mat(&[&[1.0, 2.0]]).diagonal().is_err());
    }

    #[test]
    fn determinant() {
        assert_eq!(mat(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant(), Ok(-2.0));
        assert_eq!(mat(&[&[5.0]]).determinant(), Ok(5.0));
        assert_eq!(identity(2).unwrap().determinant(), Ok(1.0));
        assert_eq!(zeroes(2, 2).unwrap().determinant(), Ok(0.0));

        assert_eq!(
            identity(3).unwrap().determinant(),
            Err(MatrixError::UnsupportedSize {
                op: "determinant",
                n: 3,
            }),
        );
        assert!(matches!(
            zeroes(2, 3).unwrap().determinant(),
            Err(MatrixError::NonSquare { .. })
        ));
    }

    #[test]
    fn inverse() {
        assert_eq!(
            mat(&[&[1.0, 2.0], &[3.0, 4.0]]).inverse().unwrap(),
            mat(&[&[-2.0, 1.0], &[1.5, -0.5]]),
        );
        assert_eq!(mat(&[&[4.0]]).inverse().unwrap(), mat(&[&[0.25]]));
        assert_eq!(identity(2).unwrap().inverse().unwrap(), identity(2).unwrap());
    }

    #[test]
    fn inverse_errors() {
        assert_eq!(
            mat(&[&[1.0, 2.0], &[2.0, 4.0]]).inverse(),
            Err(MatrixError::Singular { det: 0.0 }),
        );
        assert_eq!(
            mat(&[&[0.0]]).inverse(),
            Err(MatrixError::Singular { det: 0.0 }),
        );
        assert!(matches!(
            mat(&[&[-0.0]]).inverse(),
            Err(MatrixError::Singular { .. })
        ));
        assert!(matches!(
            mat(&[&[0.0, -1.0], &[0.0, 2.0]]).inverse(),
            Err(MatrixError::Singular { .. })
        ));
        assert_eq!(
            identity(4).unwrap().inverse(),
            Err(MatrixError::UnsupportedSize { op: "inverse", n: 4 }),
        );
        assert_eq!(
            zeroes(3, 2).unwrap().inverse(),
            Err(MatrixError::NonSquare {
                op: "inverse",
                height: 3,
                width: 2,
            }),
        );
    }

    #[test]
    fn elementwise() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = mat(&[&[0.5, -1.0], &[2.0, 0.0]]);
        assert_eq!(a.add(&b).unwrap(), mat(&[&[1.5, 1.0], &[5.0, 4.0]]));
        assert_eq!(a.subtract(&b).unwrap(), mat(&[&[0.5, 3.0], &[1.0, 4.0]]));
        assert_eq!(a.negate(), mat(&[&[-1.0, -2.0], &[-3.0, -4.0]]));
        assert_eq!(a.scale(0.5), mat(&[&[0.5, 1.0], &[1.5, 2.0]]));

        // Operands are left untouched.
        assert_eq!(a, mat(&[&[1.0, 2.0], &[3.0, 4.0]]));
    }

    #[test]
    fn elementwise_mismatch() {
        let a = zeroes(2, 2).unwrap();
        let b = zeroes(2, 3).unwrap();
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                op: "add",
                lhs: (2, 2),
                rhs: (2, 3),
            }),
        );
        assert_eq!(
            b.subtract(&a),
            Err(MatrixError::DimensionMismatch {
                op: "subtract",
                lhs: (2, 3),
                rhs: (2, 2),
            }),
        );
    }

    #[test]
    fn multiply() {
        let a = mat(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = mat(&[&[2.0, 0.0], &[1.0, 2.0]]);
        assert_eq!(a.multiply(&b).unwrap(), mat(&[&[4.0, 4.0], &[10.0, 8.0]]));

        #[rustfmt::skip]
        let a = mat(&[
            &[1.0, 2.0],
            &[3.0, 4.0],
            &[5.0, 6.0],
            &[7.0, 8.0],
        ]);
        #[rustfmt::skip]
        let b = mat(&[
            &[9.0, 10.0, 11.0],
            &[12.0, 13.0, 14.0],
        ]);
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (4, 3));
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);

        assert_eq!(
            b.multiply(&b),
            Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: (2, 3),
                rhs: (2, 3),
            }),
        );
    }

    #[test]
    fn fmt() {
        let m = mat(&[&[0.0, 1.5], &[2.0, -3.0]]);

        assert_eq!(m.to_string(), "0 1.5\n2 -3\n");
        assert_eq!(format!("{:.1}", m), "0.0 1.5\n2.0 -3.0\n");

        assert_eq!(format!("{:?}", m), "[[0.0, 1.5], [2.0, -3.0]]");
        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", m),
            "
[
    [0.0, 1.5],
    [2.0, -3.0],
]
"
            .trim()
        );
    }
}
