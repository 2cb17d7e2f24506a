use std::error::Error;
use std::fmt;

/// Failure kinds shared by every container in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Index (element, row or column) is not below the valid count
    IndexOutOfBounds { index: usize, len: usize },
    /// Storage for the requested number of elements could not be obtained
    AllocationFailure { elements: usize },
    /// Operands have shapes the operation cannot combine. Reserved, never raised.
    IncompatibleOperation,
    /// Rejected row/column counts
    InvalidDimension { rows: usize, cols: usize },
}

impl ContainerError {
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }

    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. })
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Self::IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            Self::AllocationFailure { elements } if *elements == usize::MAX => {
                write!(f, "requested capacity overflows the address space")
            }
            Self::AllocationFailure { elements } => {
                write!(f, "failed to allocate storage for {} elements", elements)
            }
            Self::IncompatibleOperation => {
                write!(f, "operation cannot be performed on matrices of these shapes")
            }
            Self::InvalidDimension { rows, cols } => {
                write!(f, "invalid matrix dimensions {}x{}", rows, cols)
            }
        }
    }
}

impl Error for ContainerError {}

/// Result type for container operations
pub type Result<T> = std::result::Result<T, ContainerError>;
