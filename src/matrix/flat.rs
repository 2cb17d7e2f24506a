use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::array::DynamicArray;
use crate::error::{ContainerError, Result};

/// Order in which a [`FlatMatrix`] lays cells out in its single buffer.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Cells of one row are contiguous: `i * cols + j`.
    #[default]
    RowMajor,
    /// Cells of one column are contiguous: `j * rows + i`.
    ColumnMajor,
}

impl Layout {
    /// Linear slot of `(i, j)` in a `rows` x `cols` buffer. Callers check
    /// bounds first.
    #[inline]
    fn offset(self, i: usize, j: usize, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => i * cols + j,
            Layout::ColumnMajor => j * rows + i,
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "row-major" | "row_major" | "rowmajor" | "row" => Ok(Layout::RowMajor),
            "column-major" | "column_major" | "columnmajor" | "col-major" | "col_major"
            | "column" | "col" => Ok(Layout::ColumnMajor),
            _ => Err(format!(
                "Unknown layout: {}. Expected `row-major` or `column-major`",
                s
            )),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::RowMajor => write!(f, "row-major"),
            Layout::ColumnMajor => write!(f, "column-major"),
        }
    }
}

/// Matrix stored in one [`DynamicArray`] of `rows * cols` cells.
///
/// Rows cannot be reallocated independently; in exchange traversal along the
/// contiguous axis of the layout is cache friendly. `(i, j)` is checked
/// against `(rows, cols)` before the linear address is computed, so an
/// out-of-range column can never land inside a neighbouring row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatMatrix<T> {
    data: DynamicArray<T>,
    rows: usize,
    cols: usize,
    layout: Layout,
}

impl<T> FlatMatrix<T> {
    pub fn new(rows: usize, cols: usize, layout: Layout) -> Result<Self>
    where
        T: Default,
    {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            data: DynamicArray::new(len)?,
            rows,
            cols,
            layout,
        })
    }

    pub fn filled(rows: usize, cols: usize, layout: Layout, fill: &T) -> Result<Self>
    where
        T: Clone,
    {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            data: DynamicArray::filled(len, fill)?,
            rows,
            cols,
            layout,
        })
    }

    pub fn row_major(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::new(rows, cols, Layout::RowMajor)
    }

    pub fn column_major(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        Self::new(rows, cols, Layout::ColumnMajor)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of cells, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Buffer slot holding `(i, j)`.
    pub fn address(&self, i: usize, j: usize) -> Result<usize> {
        ContainerError::check_index(i, self.rows)?;
        ContainerError::check_index(j, self.cols)?;
        Ok(self.layout.offset(i, j, self.rows, self.cols))
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        let slot = self.address(i, j)?;
        self.data.get(slot)
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let slot = self.address(i, j)?;
        self.data.get_mut(slot)
    }

    /// Backing buffer in layout order.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self {
            data: self.data.try_clone()?,
            rows: self.rows,
            cols: self.cols,
            layout: self.layout,
        })
    }

    /// Replace shape, layout and cells with a deep copy of `source`. On
    /// failure `self` is left untouched.
    pub fn assign(&mut self, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        *self = source.try_clone()?;
        Ok(())
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(ContainerError::AllocationFailure {
            elements: usize::MAX,
        })
}

impl<T> Index<(usize, usize)> for FlatMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.get(index.0, index.1) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for FlatMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.get_mut(index.0, index.1) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
