use std::str::FromStr;

use crate::{Matrix, MatrixError, Result};

/// Parses a matrix from text.
///
/// Rows are separated by `;` or line breaks, and the elements of a row by whitespace or `,`.
/// Blank rows are ignored.
///
/// # Examples
///
/// ```
/// # use gridmat::*;
/// let mat: Matrix = "1 2; 3 4".parse()?;
/// assert_eq!(mat, Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?);
///
/// let mat: Matrix = "
///     1.5, -2
///     0,    1e3
/// ".parse()?;
/// assert_eq!(mat[1][1], 1000.0);
///
/// assert!("1 2; 3".parse::<Matrix>().is_err());
/// assert!("1 x".parse::<Matrix>().is_err());
/// # Ok::<_, MatrixError>(())
/// ```
impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let grid = s
            .split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .enumerate()
            .map(|(row, cells)| parse_row(row, cells))
            .collect::<Result<Vec<_>>>()?;
        Matrix::new(grid)
    }
}

fn parse_row(row: usize, cells: &str) -> Result<Vec<f64>> {
    cells
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            cell.parse().map_err(|_| MatrixError::Parse {
                row,
                cell: cell.to_string(),
            })
        })
        .collect()
}
