use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ContainerError, Result};
use crate::matrix::{FlatMatrix, Layout, NestedMatrix};

/// How matrix construction treats a zero row or column count.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionPolicy {
    /// Zero-sized dimensions produce an empty matrix.
    #[default]
    Permissive,
    /// Zero-sized dimensions fail with `InvalidDimension`.
    Strict,
}

impl FromStr for DimensionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(DimensionPolicy::Permissive),
            "strict" => Ok(DimensionPolicy::Strict),
            _ => Err(format!(
                "Unknown dimension policy: {}. Expected `permissive` or `strict`",
                s
            )),
        }
    }
}

/// Shape and storage options for building a matrix.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MatrixConfig {
    pub rows: usize,
    pub cols: usize,

    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub dimension_policy: DimensionPolicy,
}

impl MatrixConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_policy(mut self, dimension_policy: DimensionPolicy) -> Self {
        self.dimension_policy = dimension_policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.dimension_policy == DimensionPolicy::Strict && (self.rows == 0 || self.cols == 0)
        {
            return Err(ContainerError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn build_nested<T: Default>(&self) -> Result<NestedMatrix<T>> {
        self.validate()?;
        NestedMatrix::new(self.rows, self.cols)
    }

    pub fn build_nested_filled<T: Clone>(&self, fill: &T) -> Result<NestedMatrix<T>> {
        self.validate()?;
        NestedMatrix::filled(self.rows, self.cols, fill)
    }

    pub fn build_flat<T: Default>(&self) -> Result<FlatMatrix<T>> {
        self.validate()?;
        FlatMatrix::new(self.rows, self.cols, self.layout)
    }

    pub fn build_flat_filled<T: Clone>(&self, fill: &T) -> Result<FlatMatrix<T>> {
        self.validate()?;
        FlatMatrix::filled(self.rows, self.cols, self.layout, fill)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            layout: Layout::RowMajor,
            dimension_policy: DimensionPolicy::Permissive,
        }
    }
}
