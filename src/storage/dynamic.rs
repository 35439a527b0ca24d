use super::{DenseStorage, Dim, Result, checked_shape};
use crate::numeric::{NumTraits, fresh_element, fresh_elements};
use num_traits::Zero;

/// Heap storage, sized exactly to its shape.
#[derive(Debug, Clone)]
pub struct DynamicStorage<T, R: Dim, C: Dim> {
    data: Vec<T>,
    rows: R,
    cols: C,
}

impl<T, R: Dim, C: Dim> DynamicStorage<T, R, C>
where
    T: NumTraits + Default + Zero,
{
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let (rows, cols, size) = checked_shape::<R, C>(rows, cols)?;
        Ok(Self {
            data: fresh_elements(size),
            rows,
            cols,
        })
    }
}

impl<T, R: Dim, C: Dim> DenseStorage for DynamicStorage<T, R, C>
where
    T: NumTraits + Default + Zero,
{
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
        &self.data
    }

    #[inline(always)]
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let (rows, cols, size) = checked_shape::<R, C>(rows, cols)?;
        if size != self.data.len() {
            tracing::debug!(old_size = self.data.len(), size, "reallocating dense storage");
            self.data = fresh_elements(size);
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    fn conservative_resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let (rows, cols, size) = checked_shape::<R, C>(rows, cols)?;
        tracing::trace!(old_size = self.data.len(), size, "conservative resize");
        if size < self.data.len() {
            self.data.truncate(size);
        } else {
            self.data.resize_with(size, fresh_element::<T>);
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }
}
