use super::{DenseStorage, Dim, Result, StorageError, checked_shape};
use crate::numeric::{NumTraits, fresh_element};
use num_traits::Zero;

/// Inline storage with room for `SIZE` coefficients.
///
/// Resizing only changes the visible shape, the buffer itself never moves or
/// gets rebuilt.
#[derive(Debug, Clone)]
pub struct FixedStorage<T, const SIZE: usize, R: Dim, C: Dim> {
    data: [T; SIZE],
    rows: R,
    cols: C,
}

/// Storage that can never hold a coefficient.
pub type NullStorage<T, R, C> = FixedStorage<T, 0, R, C>;

/// A `limit` of `0` disables the check.
const fn fits_on_stack(bytes: usize, limit: usize) -> bool {
    limit == 0 || bytes <= limit
}

impl<T, const SIZE: usize, R: Dim, C: Dim> FixedStorage<T, SIZE, R, C> {
    const STACK_CHECK: () = assert!(
        fits_on_stack(
            SIZE * std::mem::size_of::<T>(),
            crate::STACK_ALLOCATION_LIMIT
        ),
        "object allocated on stack is too big"
    );

    fn checked_capacity(rows: usize, cols: usize) -> Result<(R, C)> {
        let (row_dim, col_dim, size) = checked_shape::<R, C>(rows, cols)?;
        if size > SIZE {
            return Err(StorageError::CapacityExceeded {
                rows,
                cols,
                capacity: SIZE,
            });
        }
        Ok((row_dim, col_dim))
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }
}

impl<T, const SIZE: usize, R: Dim, C: Dim> FixedStorage<T, SIZE, R, C>
where
    T: NumTraits + Default + Zero,
{
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let () = Self::STACK_CHECK;

        let (rows, cols) = Self::checked_capacity(rows, cols)?;
        Ok(Self {
            data: std::array::from_fn(|_| fresh_element::<T>()),
            rows,
            cols,
        })
    }
}

impl<T, const SIZE: usize, R: Dim, C: Dim> DenseStorage for FixedStorage<T, SIZE, R, C> {
    type Scalar = T;
    type Rows = R;
    type Cols = C;

    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows.value()
    }

    #[inline(always)]
    fn cols(&self) -> usize {
        self.cols.value()
    }

    #[inline(always)]
    fn data(&self) -> &[T] {
        &self.data[..self.size()]
    }

    #[inline(always)]
    fn data_mut(&mut self) -> &mut [T] {
        let size = self.size();
        &mut self.data[..size]
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let (rows, cols) = Self::checked_capacity(rows, cols)?;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    fn conservative_resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.resize(rows, cols)
    }
}
