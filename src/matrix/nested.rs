use std::ops::{Index, IndexMut};

use crate::alloc;
use crate::array::DynamicArray;
use crate::container::Container;
use crate::error::{ContainerError, Result};

/// Matrix stored as an array of independently owned row arrays.
///
/// Each row lives behind its own `Box`, so the ownership tree is
/// matrix -> row handles -> row buffer, with nothing shared between
/// matrices. Dropping the matrix drops every row before the handle buffer.
///
/// Invariant: every row has length [`NestedMatrix::columns`]. A row handle is
/// never absent; a matrix only exists once all of its rows have been built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedMatrix<T> {
    rows: DynamicArray<Box<DynamicArray<T>>>,
}

impl<T> NestedMatrix<T> {
    /// `rows` x `cols` matrix of default values.
    pub fn new(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::build(rows, |_| DynamicArray::new(cols))
    }

    /// `rows` x `cols` matrix with every cell a copy of `fill`.
    pub fn filled(rows: usize, cols: usize, fill: &T) -> Result<Self>
    where
        T: Clone,
    {
        Self::build(rows, |_| DynamicArray::filled(cols, fill))
    }

    /// Adopt caller-built rows. Ragged input is rejected with
    /// `InvalidDimension`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(ContainerError::InvalidDimension {
                rows: rows.len(),
                cols,
            });
        }

        let mut handles = alloc::try_buffer(rows.len())?;
        handles.extend(
            rows.into_iter()
                .map(|row| Box::new(DynamicArray::from_vec(row))),
        );
        Ok(Self {
            rows: DynamicArray::from_vec(handles),
        })
    }

    /// Rows are collected in a local buffer: if `make_row` fails part way,
    /// returning early drops every row built so far.
    fn build<F>(rows: usize, mut make_row: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<DynamicArray<T>>,
    {
        let mut handles = alloc::try_buffer(rows)?;
        for i in 0..rows {
            handles.push(Box::new(make_row(i)?));
        }
        log::trace!("built nested matrix with {} rows", rows);
        Ok(Self {
            rows: DynamicArray::from_vec(handles),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows.size()
    }

    /// Length of the first row, or 0 for a matrix without rows.
    pub fn columns(&self) -> usize {
        self.rows.as_slice().first().map_or(0, |row| row.size())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    pub fn row(&self, k: usize) -> Result<&DynamicArray<T>> {
        self.rows.get(k).map(|handle| &**handle)
    }

    pub fn row_mut(&mut self, k: usize) -> Result<&mut DynamicArray<T>> {
        self.rows.get_mut(k).map(|handle| &mut **handle)
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.row(i)?.get(j)
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        self.row_mut(i)?.get_mut(j)
    }

    /// Deep copy of every row into freshly acquired rows.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        log::trace!("deep-copying nested matrix {}x{}", self.rows(), self.columns());
        let source = self.rows.as_slice();
        Self::build(source.len(), |i| source[i].try_clone())
    }

    /// Replace every row with a deep copy of the rows of `source`.
    ///
    /// The old rows are released only after the full copy exists; on
    /// failure `self` is left untouched.
    pub fn assign(&mut self, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        *self = source.try_clone()?;
        Ok(())
    }
}

impl<T: Default> Default for NestedMatrix<T> {
    /// 1x1 matrix holding a default value.
    fn default() -> Self {
        Self {
            rows: DynamicArray::from_vec(vec![Box::new(DynamicArray::default())]),
        }
    }
}

impl<T> Container for NestedMatrix<T> {
    type Item = DynamicArray<T>;

    fn size(&self) -> usize {
        self.rows()
    }

    fn at(&self, k: usize) -> Result<&DynamicArray<T>> {
        self.row(k)
    }

    fn at_mut(&mut self, k: usize) -> Result<&mut DynamicArray<T>> {
        self.row_mut(k)
    }
}

impl<T> Index<usize> for NestedMatrix<T> {
    type Output = DynamicArray<T>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.row(index) {
            Ok(row) => row,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for NestedMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.row_mut(index) {
            Ok(row) => row,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::alloc::fault;

    /// Counts live instances through a shared counter.
    #[derive(Debug)]
    struct Tracked {
        live: Rc<Cell<usize>>,
    }

    impl Tracked {
        fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Tracked { live: Rc::clone(live) }
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            Tracked::new(&self.live)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn drop_releases_every_cell() {
        let live = Rc::new(Cell::new(0));
        let fill = Tracked::new(&live);
        {
            let m = NestedMatrix::filled(5, 4, &fill).unwrap();
            assert_eq!(m.shape(), (5, 4));
            assert_eq!(live.get(), 1 + 20);
        }
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn failed_row_allocation_releases_built_rows() {
        let live = Rc::new(Cell::new(0));
        let fill = Tracked::new(&live);

        // handle buffer + rows 0 and 1 succeed, row 2 fails
        let _guard = fault::fail_after(3);
        let err = NestedMatrix::filled(5, 4, &fill).unwrap_err();

        assert_eq!(err, ContainerError::AllocationFailure { elements: 4 });
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn failed_handle_allocation_builds_nothing() {
        let live = Rc::new(Cell::new(0));
        let fill = Tracked::new(&live);

        let _guard = fault::fail_after(0);
        let err = NestedMatrix::filled(3, 3, &fill).unwrap_err();

        assert_eq!(err, ContainerError::AllocationFailure { elements: 3 });
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn failed_copy_releases_partial_copy_and_keeps_source() {
        let live = Rc::new(Cell::new(0));
        let fill = Tracked::new(&live);
        let source = NestedMatrix::filled(4, 2, &fill).unwrap();
        assert_eq!(live.get(), 1 + 8);

        let _guard = fault::fail_after(2);
        assert!(source.try_clone().unwrap_err().is_allocation_failure());

        assert_eq!(live.get(), 1 + 8);
        assert_eq!(source.shape(), (4, 2));
    }

    #[test]
    fn failed_assign_leaves_destination_unchanged() {
        let mut dest = NestedMatrix::filled(2, 2, &'a').unwrap();
        let source = NestedMatrix::filled(3, 3, &'b').unwrap();

        let _guard = fault::fail_after(1);
        assert!(dest.assign(&source).unwrap_err().is_allocation_failure());

        assert_eq!(dest.shape(), (2, 2));
        assert_eq!(*dest.get(1, 1).unwrap(), 'a');
    }

    #[test]
    fn assign_replaces_rows_and_releases_old_ones() {
        let live = Rc::new(Cell::new(0));
        let fill = Tracked::new(&live);
        let mut dest = NestedMatrix::filled(3, 3, &fill).unwrap();
        let source = NestedMatrix::filled(1, 2, &fill).unwrap();
        assert_eq!(live.get(), 1 + 9 + 2);

        dest.assign(&source).unwrap();

        assert_eq!(dest.shape(), (1, 2));
        assert_eq!(live.get(), 1 + 2 + 2);
    }

    #[test]
    fn zero_rows_reports_zero_columns() {
        let m = NestedMatrix::<u8>::new(0, 5).unwrap();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.columns(), 0);
        assert!(m.row(0).unwrap_err().is_index_out_of_bounds());
    }
}
