//! matrix-containers: bounds-checked arrays and matrices with deep-copy value semantics.
//!
//! This crate provides a fixed-size [`DynamicArray`], a [`NestedMatrix`] whose
//! rows are independently owned arrays, and a single-buffer [`FlatMatrix`] in
//! row-major or column-major [`Layout`]. Every indexed access is checked and
//! reports [`ContainerError::IndexOutOfBounds`]; every buffer is acquired
//! fallibly and reports [`ContainerError::AllocationFailure`].
//!
//! Copies never share storage: `Clone`, `try_clone` and `assign` all duplicate
//! the full ownership tree.
mod alloc;
pub mod array;
pub mod config;
pub mod container;
pub mod error;
pub mod matrix;

pub use array::{DynamicArray, DEFAULT_SIZE};
pub use config::{DimensionPolicy, MatrixConfig};
pub use container::Container;
pub use error::{ContainerError, Result};
pub use matrix::{FlatMatrix, Layout, NestedMatrix};
