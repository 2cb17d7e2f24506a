use std::ops::{Index, IndexMut};

use crate::alloc;
use crate::container::Container;
use crate::error::{ContainerError, Result};

/// Number of elements held by a default-constructed [`DynamicArray`].
pub const DEFAULT_SIZE: usize = 1;

/// Fixed-size, bounds-checked array that exclusively owns one buffer.
///
/// Copies are always deep: [`Clone`], [`DynamicArray::try_clone`] and
/// [`DynamicArray::assign`] all duplicate every element into a new buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// `n` default-valued elements.
    pub fn new(n: usize) -> Result<Self>
    where
        T: Default,
    {
        Ok(Self {
            data: alloc::try_default_buffer(n)?,
        })
    }

    /// `n` copies of `fill`.
    pub fn filled(n: usize, fill: &T) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self {
            data: alloc::try_filled_buffer(n, fill)?,
        })
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, k: usize) -> Result<&T> {
        ContainerError::check_index(k, self.data.len())?;
        Ok(&self.data[k])
    }

    pub fn get_mut(&mut self, k: usize) -> Result<&mut T> {
        ContainerError::check_index(k, self.data.len())?;
        Ok(&mut self.data[k])
    }

    /// Deep copy into a freshly acquired buffer.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        log::trace!("deep-copying array of {} elements", self.data.len());
        Ok(Self {
            data: alloc::try_copy_buffer(&self.data)?,
        })
    }

    /// Replace the contents with a deep copy of `source`.
    ///
    /// The copy is built before the current buffer is released, so on
    /// failure `self` is left untouched.
    pub fn assign(&mut self, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        *self = source.try_clone()?;
        Ok(())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        let mut data = Vec::with_capacity(DEFAULT_SIZE);
        data.resize_with(DEFAULT_SIZE, T::default);
        Self { data }
    }
}

impl<T> Container for DynamicArray<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.data.len()
    }

    fn at(&self, k: usize) -> Result<&T> {
        self.get(k)
    }

    fn at_mut(&mut self, k: usize) -> Result<&mut T> {
        self.get_mut(k)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(value: Vec<T>) -> Self {
        DynamicArray::from_vec(value)
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(value: DynamicArray<T>) -> Self {
        value.data
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
