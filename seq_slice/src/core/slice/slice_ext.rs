// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Method syntax for the entry points in [`slice_api`](super::slice_api).
//!
//! - [`IteratorSliceExt`] is implemented for every [`Iterator`] and always takes the
//!   forward-only path, consuming the iterator.
//! - [`RandomAccessSliceExt`] is implemented for `[T]` (and so, through deref, for
//!   [`Vec`] and arrays) and always takes the random access path.

use crate::{ForwardSlice, Index, IndexRange, RandomAccessSlice, SliceResult,
            element_at_range, forward_element_at, forward_only,
            random_access_element_at};

pub trait IteratorSliceExt: Iterator + Sized {
    /// Lazily slice this iterator in a single pass. See [`ForwardSlice`].
    fn slice(self, range: impl Into<IndexRange>) -> ForwardSlice<Self> {
        ForwardSlice::new(self, range.into())
    }

    /// # Errors
    ///
    /// [`crate::SliceError::IndexOutOfRange`] if `index` does not resolve to an element.
    fn element_at(self, index: impl Into<Index>) -> SliceResult<Self::Item> {
        forward_element_at(self, index.into())
    }

    /// # Errors
    ///
    /// See [`crate::element_at_range()`].
    fn element_at_range(self, range: impl Into<IndexRange>) -> SliceResult<Self::Item> {
        element_at_range(forward_only(self), range)
    }
}

impl<I: Iterator> IteratorSliceExt for I {}

pub trait RandomAccessSliceExt<T> {
    fn slice(&self, range: impl Into<IndexRange>) -> RandomAccessSlice<&[T]>;

    /// # Errors
    ///
    /// [`crate::SliceError::IndexOutOfRange`] if `index` does not resolve to an element.
    fn element_at(&self, index: impl Into<Index>) -> SliceResult<&T>;

    /// # Errors
    ///
    /// See [`crate::element_at_range()`].
    fn element_at_range(&self, range: impl Into<IndexRange>) -> SliceResult<&T>;
}

impl<T> RandomAccessSliceExt<T> for [T] {
    fn slice(&self, range: impl Into<IndexRange>) -> RandomAccessSlice<&[T]> {
        RandomAccessSlice::new(self, range.into())
    }

    fn element_at(&self, index: impl Into<Index>) -> SliceResult<&T> {
        random_access_element_at(&self, index.into())
    }

    fn element_at_range(&self, range: impl Into<IndexRange>) -> SliceResult<&T> {
        element_at_range(self, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SliceError, assert_eq2, from_end, idx};

    #[test]
    fn test_iterator_slice_ext() {
        let words = "the quick brown fox jumps over the lazy dog";

        let middle: Vec<_> = words.split(' ').slice(idx(2)..from_end(2)).collect();
        assert_eq2!(middle, vec!["brown", "fox", "jumps", "over", "the"]);

        let last = words.split(' ').element_at(from_end(1)).unwrap();
        assert_eq2!(last, "dog");

        let second = words.split(' ').element_at_range(1..2).unwrap();
        assert_eq2!(second, "quick");

        assert!(matches!(
            words.split(' ').element_at_range(1..3),
            Err(SliceError::NotSingleElement { .. })
        ));
    }

    #[test]
    fn test_random_access_slice_ext() {
        let numbers: Vec<u32> = (0..10).collect();

        let tail: Vec<_> = numbers.slice(from_end(3)..).copied().collect();
        assert_eq2!(tail, vec![7, 8, 9]);
        assert_eq2!(numbers.slice(..).len(), 10);

        assert_eq2!(numbers.element_at(from_end(10)).unwrap(), &0);
        assert_eq2!(numbers.element_at_range(idx(9)..from_end(0)).unwrap(), &9);
        assert!(numbers.element_at(10).is_err());

        let array = ['x', 'y', 'z'];
        assert_eq2!(array.slice(1..).rev().collect::<String>(), "zy");
    }
}
