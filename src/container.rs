//! Capability interface shared by containers with different storage strategies.

use crate::error::Result;

/// Sized, bounds-checked indexed access.
///
/// Implemented independently by [`DynamicArray`](crate::DynamicArray) (one
/// element per slot) and [`NestedMatrix`](crate::NestedMatrix) (one row per
/// slot). The trait is object safe, so callers may work through
/// `&mut dyn Container<Item = T>`.
pub trait Container {
    type Item;

    /// Number of addressable slots.
    fn size(&self) -> usize;

    /// Slot `k`, or `IndexOutOfBounds` when `k >= size()`.
    fn at(&self, k: usize) -> Result<&Self::Item>;

    /// Mutable slot `k`, or `IndexOutOfBounds` when `k >= size()`.
    fn at_mut(&mut self, k: usize) -> Result<&mut Self::Item>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn in_bounds(&self, k: usize) -> bool {
        k < self.size()
    }
}
