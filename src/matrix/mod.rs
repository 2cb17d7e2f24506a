//! Two-dimensional containers.
//!
//! [`NestedMatrix`] owns one independently allocated row per handle;
//! [`FlatMatrix`] packs every cell into a single buffer in either
//! [`Layout`].
pub mod flat;
pub mod nested;

pub use flat::{FlatMatrix, Layout};
pub use nested::NestedMatrix;
