//! Fallible buffer acquisition.
//!
//! Every buffer owned by a container is obtained through [`try_buffer`], so an
//! allocator refusal surfaces as [`ContainerError::AllocationFailure`] instead
//! of aborting the process. Test builds can force refusals through
//! `fault::fail_after`.

use crate::error::{ContainerError, Result};

/// Empty vector with capacity for exactly `len` elements.
pub(crate) fn try_buffer<T>(len: usize) -> Result<Vec<T>> {
    #[cfg(test)]
    fault::consume(len)?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ContainerError::AllocationFailure { elements: len })?;
    log::trace!("acquired buffer for {} elements", len);
    Ok(buffer)
}

pub(crate) fn try_default_buffer<T: Default>(len: usize) -> Result<Vec<T>> {
    let mut buffer = try_buffer(len)?;
    buffer.resize_with(len, T::default);
    Ok(buffer)
}

pub(crate) fn try_filled_buffer<T: Clone>(len: usize, fill: &T) -> Result<Vec<T>> {
    let mut buffer = try_buffer(len)?;
    buffer.resize(len, fill.clone());
    Ok(buffer)
}

pub(crate) fn try_copy_buffer<T: Clone>(source: &[T]) -> Result<Vec<T>> {
    let mut buffer = try_buffer(source.len())?;
    buffer.extend_from_slice(source);
    Ok(buffer)
}

#[cfg(test)]
pub(crate) mod fault {
    use std::cell::Cell;

    use crate::error::{ContainerError, Result};

    thread_local! {
        static REMAINING: Cell<Option<usize>> = Cell::new(None);
    }

    /// Restores normal acquisition on drop.
    pub(crate) struct FaultGuard {
        _private: (),
    }

    impl Drop for FaultGuard {
        fn drop(&mut self) {
            REMAINING.with(|remaining| remaining.set(None));
        }
    }

    /// Let `successes` acquisitions through on this thread, then refuse every
    /// following one until the guard is dropped.
    pub(crate) fn fail_after(successes: usize) -> FaultGuard {
        REMAINING.with(|remaining| remaining.set(Some(successes)));
        FaultGuard { _private: () }
    }

    pub(super) fn consume(len: usize) -> Result<()> {
        REMAINING.with(|remaining| match remaining.get() {
            None => Ok(()),
            Some(0) => {
                log::debug!("injected allocation failure for {} elements", len);
                Err(ContainerError::AllocationFailure { elements: len })
            }
            Some(n) => {
                remaining.set(Some(n - 1));
                Ok(())
            }
        })
    }
}
