//! Coefficient storage for dense matrices.
//!
//! Newly created coefficients are built through [`crate::numeric::fresh_element`],
//! so scalars flagged with `REQUIRE_INITIALIZATION` stay unwritten instead of
//! being zeroed.

mod dim;
mod dynamic;
mod fixed;

pub use dim::{Const, Dim, Dyn};
pub use dynamic::DynamicStorage;
pub use fixed::{FixedStorage, NullStorage};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("row"),
            Axis::Cols => f.write_str("column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("fixed {axis} count is {expected}, cannot change it to {requested}")]
    FixedDimension {
        axis: Axis,
        expected: usize,
        requested: usize,
    },

    #[error("{rows}x{cols} coefficients exceed the fixed capacity of {capacity}")]
    CapacityExceeded {
        rows: usize,
        cols: usize,
        capacity: usize,
    },

    #[error("{rows}x{cols} coefficients overflow usize")]
    SizeOverflow { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage of `rows * cols` coefficients in a flat buffer.
pub trait DenseStorage: Sized {
    type Scalar;
    type Rows: Dim;
    type Cols: Dim;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    fn data(&self) -> &[Self::Scalar];

    fn data_mut(&mut self) -> &mut [Self::Scalar];

    /// Changes the shape. Coefficients are not preserved when the size changes.
    fn resize(&mut self, rows: usize, cols: usize) -> Result<()>;

    /// Changes the shape, keeping the leading `min(old, new)` coefficients.
    fn conservative_resize(&mut self, rows: usize, cols: usize) -> Result<()>;

    fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

/// Validates a requested shape against the dimension types `R` and `C`.
pub(crate) fn checked_shape<R: Dim, C: Dim>(rows: usize, cols: usize) -> Result<(R, C, usize)> {
    let row_dim = R::try_from_usize(rows).ok_or(StorageError::FixedDimension {
        axis: Axis::Rows,
        expected: R::FIXED.unwrap_or(rows),
        requested: rows,
    })?;
    let col_dim = C::try_from_usize(cols).ok_or(StorageError::FixedDimension {
        axis: Axis::Cols,
        expected: C::FIXED.unwrap_or(cols),
        requested: cols,
    })?;
    let size = rows
        .checked_mul(cols)
        .ok_or(StorageError::SizeOverflow { rows, cols })?;

    Ok((row_dim, col_dim, size))
}
