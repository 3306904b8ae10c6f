//! Errors reported by [`RtArray`][crate::RtArray] construction and checked access.

use thiserror::Error;

/// A checked access asked for an index at or past the end of the array.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<u8> = RtArray::from_elem(3, 7);
/// let err = arr.at(5).unwrap_err();
/// assert_eq!(err, OutOfRange { index: 5, len: 3 });
/// assert_eq!(err.to_string(), "index 5 out of range for array of length 3");
/// ```
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("index {index} out of range for array of length {len}")]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// The length of the array that was indexed.
    pub len: usize,
}

/// Failure to obtain storage from an [`ArrayAllocator`][crate::ArrayAllocator].
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// `len` elements do not fit in a single allocation (`isize::MAX` bytes).
    #[error("capacity overflow: {len} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// Requested element count.
        len: usize,
    },

    /// The allocator had no memory for the request.
    #[error("allocator exhausted: could not allocate {size} bytes aligned to {align}")]
    Exhausted {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}

/// Failure to build an [`RtArray`][crate::RtArray] from an initializer.
///
/// By the time this error is returned, every element that had already been
/// constructed has been dropped and the storage has been released.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InitError<E> {
    /// Storage could not be allocated. No element was constructed.
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// The initializer failed to produce the element at `index`.
    #[error("initializer failed at index {index}")]
    Initializer {
        /// Index of the slot that could not be produced.
        index: usize,
        /// The initializer's own error.
        error: E,
    },
}

impl<E> InitError<E> {
    /// Index of the slot that failed, if the failure came from the initializer.
    pub fn index(&self) -> Option<usize> {
        match self {
            InitError::Alloc(_) => None,
            InitError::Initializer { index, .. } => Some(*index),
        }
    }
}

/// The source an initializer copies or moves from ran out before every slot was filled.
///
/// Reported when an iterator yields fewer items than its reported length, or a source slice is
/// shorter than the array being built.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("initializer source ended early")]
pub struct SourceExhausted;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            AllocError::CapacityOverflow { len: 9 }.to_string(),
            "capacity overflow: 9 elements exceed the maximum allocation size"
        );
        let e: InitError<SourceExhausted> = InitError::Initializer {
            index: 4,
            error: SourceExhausted,
        };
        assert_eq!(e.to_string(), "initializer failed at index 4");
        assert_eq!(e.index(), Some(4));
    }

    #[test]
    fn alloc_error_converts_into_init_error() {
        let e: InitError<core::convert::Infallible> =
            AllocError::Exhausted { size: 8, align: 4 }.into();
        assert_eq!(e.index(), None);
        assert_eq!(e.to_string(), "allocator exhausted: could not allocate 8 bytes aligned to 4");
    }
}
