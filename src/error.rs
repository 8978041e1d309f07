use thiserror::Error;

/// Errors returned by [`Matrix`][crate::Matrix] construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The input grid was empty, had an empty first row, or had rows of differing lengths.
    #[error("invalid matrix shape: {reason}")]
    InvalidShape { reason: String },

    /// A factory was asked for a matrix with a zero dimension.
    #[error("invalid matrix dimensions {height}x{width}: both must be at least 1")]
    InvalidDimension { height: usize, width: usize },

    /// A row or column index was outside of the matrix.
    #[error("{axis} index {index} out of bounds for matrix with {len} {axis}s")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        len: usize,
    },

    /// The operand shapes are incompatible for the requested operation.
    #[error("cannot {op} a {} matrix and a {} matrix", shape(.lhs), shape(.rhs))]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A square-only operation was invoked on a non-square matrix.
    #[error("cannot compute the {op} of a non-square {height}x{width} matrix")]
    NonSquare {
        op: &'static str,
        height: usize,
        width: usize,
    },

    /// `determinant` or `inverse` was invoked on a square matrix larger than 2x2.
    #[error("{op} is not implemented for matrices larger than 2x2 (got {n}x{n})")]
    UnsupportedSize { op: &'static str, n: usize },

    /// The matrix has a zero determinant and cannot be inverted.
    #[error("cannot invert a singular matrix (determinant is {det})")]
    Singular { det: f64 },

    /// A cell of a textual matrix could not be parsed as a number.
    #[error("invalid matrix cell {cell:?} in row {row}")]
    Parse { row: usize, cell: String },
}

/// Selects a row or column, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

fn shape(&(height, width): &(usize, usize)) -> String {
    format!("{height}x{width}")
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;
