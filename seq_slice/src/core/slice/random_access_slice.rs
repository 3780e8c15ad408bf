// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fast path for sources that know their count and can read any position.

use crate::{ArrayBoundsCheck, ArrayOverflowResult, Index, IndexRange, RandomAccess,
            SliceError, SliceResult};
use std::{iter::FusedIterator, ops::Range};

/// Lazy view over `source[first..last]`, where both positions are resolved once against
/// the source count when the view is created.
#[derive(Debug, Clone)]
pub struct RandomAccessSlice<R> {
    source: R,
    count: usize,
    front: usize,
    back: usize,
}

impl<R: RandomAccess> RandomAccessSlice<R> {
    #[must_use]
    pub fn new(source: R, range: IndexRange) -> Self {
        let count = source.count();
        let Range { start, end } = range.clamp_to(count);
        Self {
            source,
            count,
            front: start,
            back: end,
        }
    }

    /// Count of the whole source, not of this view.
    #[must_use]
    pub fn source_count(&self) -> usize { self.count }
}

impl<R: RandomAccess> Iterator for RandomAccessSlice<R> {
    type Item = R::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.source.get_at(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<R: RandomAccess> DoubleEndedIterator for RandomAccessSlice<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.source.get_at(self.back)
    }
}

impl<R: RandomAccess> ExactSizeIterator for RandomAccessSlice<R> {}

impl<R: RandomAccess> FusedIterator for RandomAccessSlice<R> {}

/// Read the element at `index` directly.
///
/// # Errors
///
/// [`SliceError::IndexOutOfRange`] if `index` resolves outside `[0, count)`.
pub fn random_access_element_at<R: RandomAccess>(
    source: &R,
    index: Index,
) -> SliceResult<R::Item> {
    let count = source.count();
    let out_of_range = || SliceError::IndexOutOfRange {
        index,
        available: Some(count),
    };

    let position = index.resolve(count).ok_or_else(out_of_range)?;
    match position.overflows(count) {
        ArrayOverflowResult::Within => source.get_at(position).ok_or_else(out_of_range),
        ArrayOverflowResult::Overflowed => Err(out_of_range()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, from_end, idx};
    use test_case::test_case;

    #[test_case(idx(2)..idx(7), &[2, 3, 4, 5, 6] ; "forward")]
    #[test_case(from_end(3)..from_end(0), &[7, 8, 9] ; "last three")]
    #[test_case(idx(2)..from_end(3), &[2, 3, 4, 5, 6] ; "mixed")]
    #[test_case(from_end(4)..idx(8), &[6, 7] ; "from end start forward end")]
    #[test_case(idx(3)..idx(2), &[] ; "inverted is empty")]
    #[test_case(idx(3)..idx(3), &[] ; "equal bounds is empty")]
    #[test_case(idx(8)..idx(50), &[8, 9] ; "end past length clamped")]
    #[test_case(from_end(15)..from_end(8), &[0, 1] ; "start before first clamped")]
    #[test_case(idx(20)..from_end(0), &[] ; "start past length")]
    fn test_random_access_slice(range: std::ops::Range<Index>, expected: &[u32]) {
        let source: Vec<u32> = (0..10).collect();
        let actual: Vec<u32> =
            RandomAccessSlice::new(&source, range.into()).copied().collect();
        assert_eq2!(actual, expected);
    }

    #[test]
    fn test_random_access_slice_is_double_ended_and_exact() {
        let source = ['a', 'b', 'c', 'd', 'e'];
        let mut slice = RandomAccessSlice::new(&source, (idx(1)..from_end(1)).into());
        assert_eq2!(slice.len(), 3);
        assert_eq2!(slice.next_back(), Some(&'d'));
        assert_eq2!(slice.next(), Some(&'b'));
        assert_eq2!(slice.len(), 1);
        assert_eq2!(slice.next(), Some(&'c'));
        assert_eq2!(slice.next(), None);
        assert_eq2!(slice.next_back(), None);
        assert_eq2!(slice.source_count(), 5);
    }

    #[test]
    fn test_random_access_slice_nth() {
        let source: Vec<u32> = (0..10).collect();
        let mut slice = RandomAccessSlice::new(&source, (2..6).into());
        assert_eq2!(slice.nth(2), Some(&4));
        assert_eq2!(slice.nth(5), None);
        assert_eq2!(slice.next(), None);
    }

    #[test]
    fn test_random_access_element_at() {
        let source: Vec<u32> = (0..100).collect();
        let source = &source;
        assert_eq2!(random_access_element_at(&source, idx(0)).unwrap(), &0);
        assert_eq2!(random_access_element_at(&source, from_end(1)).unwrap(), &99);
        assert_eq2!(random_access_element_at(&source, from_end(100)).unwrap(), &0);

        for index in [idx(100), from_end(0), from_end(101)] {
            let result = random_access_element_at(&source, index);
            assert!(matches!(
                result,
                Err(SliceError::IndexOutOfRange { index: it, available: Some(100) })
                    if it == index
            ));
        }
    }
}
