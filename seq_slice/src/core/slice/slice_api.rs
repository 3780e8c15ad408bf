// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Public entry points. Each call resolves the source capability once, through
//! [`IntoSliceSource`], and then runs exactly one strategy:
//!
//! ```text
//!  slice(source, range)
//!       │
//!       ├── into_source() ── None ───────────────▶ Err(NullSource)
//!       │
//!       ├── RandomAccess(r) ──▶ RandomAccessSlice  (resolve once, read in place)
//!       │
//!       └── ForwardOnly(i) ───▶ ForwardSlice       (one pass, bounded window)
//! ```

use crate::{DEBUG_SLICE_ENGINE, ForwardSlice, Index, IndexRange, InlineVec,
            IntoSliceSource, RandomAccess, RandomAccessSlice, SliceError, SliceResult,
            Source, forward_element_at, random_access_element_at};
use std::iter::FusedIterator;

/// Lazy slice of any source. Yields elements in source order.
#[derive(Debug)]
pub enum Slice<R: RandomAccess, I: Iterator<Item = R::Item>> {
    RandomAccess(RandomAccessSlice<R>),
    ForwardOnly(ForwardSlice<I>),
}

impl<R: RandomAccess, I: Iterator<Item = R::Item>> Slice<R, I> {
    /// Element count of the underlying source, when it is known without enumerating it.
    #[must_use]
    pub fn source_count(&self) -> Option<usize> {
        match self {
            Slice::RandomAccess(it) => Some(it.source_count()),
            Slice::ForwardOnly(_) => None,
        }
    }
}

impl<R: RandomAccess, I: Iterator<Item = R::Item>> Iterator for Slice<R, I> {
    type Item = R::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Slice::RandomAccess(it) => it.next(),
            Slice::ForwardOnly(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Slice::RandomAccess(it) => it.size_hint(),
            Slice::ForwardOnly(it) => it.size_hint(),
        }
    }
}

impl<R: RandomAccess, I: Iterator<Item = R::Item>> FusedIterator for Slice<R, I> {}

/// Lazily slice `source` by `range`.
///
/// An inverted range, or one that lies outside the source, yields nothing. That is not
/// an error.
///
/// ```
/// use seq_slice::{forward_only, from_end, idx, slice};
///
/// let names = vec!["ann", "bob", "cy", "dee"];
/// let picked: Vec<_> = slice(&names, idx(1)..from_end(1)).unwrap().collect();
/// assert_eq!(picked, vec![&"bob", &"cy"]);
///
/// let picked: Vec<_> = slice(forward_only(names.iter()), from_end(2)..).unwrap().collect();
/// assert_eq!(picked, vec![&"cy", &"dee"]);
///
/// assert_eq!(slice(&names, 3..2).unwrap().count(), 0);
/// assert!(slice(None::<&Vec<&str>>, ..).is_err());
/// ```
///
/// # Errors
///
/// [`SliceError::NullSource`] if `source` is absent.
pub fn slice<S: IntoSliceSource>(
    source: S,
    range: impl Into<IndexRange>,
) -> SliceResult<Slice<S::RandomAccess, S::ForwardOnly>> {
    let range = range.into();
    Ok(match source.into_source()? {
        Source::RandomAccess(it) => {
            if DEBUG_SLICE_ENGINE {
                tracing::debug!(
                    message = "random access slice",
                    range = %range,
                    count = it.count()
                );
            }
            Slice::RandomAccess(RandomAccessSlice::new(it, range))
        }
        Source::ForwardOnly(it) => Slice::ForwardOnly(ForwardSlice::new(it, range)),
    })
}

/// The single element at `index`.
///
/// # Errors
///
/// - [`SliceError::NullSource`] if `source` is absent.
/// - [`SliceError::IndexOutOfRange`] if `index` does not resolve to an element.
pub fn element_at<S: IntoSliceSource>(
    source: S,
    index: impl Into<Index>,
) -> SliceResult<S::Item> {
    let index = index.into();
    match source.into_source()? {
        Source::RandomAccess(it) => {
            if DEBUG_SLICE_ENGINE {
                tracing::debug!(
                    message = "random access element at",
                    index = %index,
                    count = it.count()
                );
            }
            random_access_element_at(&it, index)
        }
        Source::ForwardOnly(it) => forward_element_at(it, index),
    }
}

/// The single element denoted by a range of length one, such as `idx(4)..idx(5)` or
/// `from_end(1)..from_end(0)`.
///
/// At most two elements are pulled out of the slice, enough to tell "exactly one" apart
/// from "more than one".
///
/// # Errors
///
/// - [`SliceError::NullSource`] if `source` is absent.
/// - [`SliceError::IndexOutOfRange`] for the range start, if the range denotes nothing.
/// - [`SliceError::NotSingleElement`] if the range denotes more than one element.
pub fn element_at_range<S: IntoSliceSource>(
    source: S,
    range: impl Into<IndexRange>,
) -> SliceResult<S::Item> {
    let range = range.into();
    let slice = slice(source, range)?;
    let available = slice.source_count();

    let mut found: InlineVec<S::Item> = slice.take(2).collect();
    if found.len() > 1 {
        return Err(SliceError::NotSingleElement { range });
    }
    found.pop().ok_or(SliceError::IndexOutOfRange {
        index: range.start,
        available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, forward_only, from_end, idx};
    use std::collections::VecDeque;

    #[test]
    fn test_slice_dispatches_by_capability() {
        let source: Vec<u32> = (0..10).collect();

        let it = slice(&source, 2..5).unwrap();
        assert!(matches!(it, Slice::RandomAccess(_)));
        assert_eq2!(it.source_count(), Some(10));
        assert_eq2!(it.copied().collect::<Vec<_>>(), vec![2, 3, 4]);

        let it = slice(forward_only(source.iter()), 2..5).unwrap();
        assert!(matches!(it, Slice::ForwardOnly(_)));
        assert_eq2!(it.source_count(), None);
        assert_eq2!(it.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_slice_over_every_random_access_collection() {
        let vec: Vec<u32> = (0..6).collect();
        let deque: VecDeque<u32> = vec.iter().copied().collect();
        let array = [0_u32, 1, 2, 3, 4, 5];
        let range = from_end(4)..from_end(1);

        let expected = vec![&2, &3, &4];
        assert_eq2!(slice(&vec, range.clone()).unwrap().collect::<Vec<_>>(), expected);
        assert_eq2!(slice(&deque, range.clone()).unwrap().collect::<Vec<_>>(), expected);
        assert_eq2!(slice(&array, range.clone()).unwrap().collect::<Vec<_>>(), expected);
        assert_eq2!(
            slice(vec.as_slice(), range).unwrap().collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_absent_source() {
        assert!(matches!(
            slice(None::<&Vec<u8>>, ..),
            Err(SliceError::NullSource { .. })
        ));
        assert!(matches!(
            element_at(None::<&Vec<u8>>, idx(0)),
            Err(SliceError::NullSource { .. })
        ));
        assert!(matches!(
            element_at_range(None::<&Vec<u8>>, 0..1),
            Err(SliceError::NullSource { .. })
        ));
    }

    #[test]
    fn test_element_at_both_strategies() {
        let source: Vec<u32> = (0..100).collect();
        assert_eq2!(element_at(&source, from_end(1)).unwrap(), &99);
        assert_eq2!(element_at(forward_only(0..100_u32), from_end(1)).unwrap(), 99);
        assert_eq2!(element_at(&source, 7).unwrap(), &7);
        assert_eq2!(element_at(forward_only(0..100_u32), 7).unwrap(), 7);

        assert!(matches!(
            element_at(&source, 100),
            Err(SliceError::IndexOutOfRange { available: Some(100), .. })
        ));
        assert!(matches!(
            element_at(forward_only(0..100_u32), from_end(101)),
            Err(SliceError::IndexOutOfRange { available: Some(100), .. })
        ));
    }

    #[test]
    fn test_element_at_range() {
        let source: Vec<u32> = (0..10).collect();

        assert_eq2!(element_at_range(&source, 4..5).unwrap(), &4);
        assert_eq2!(element_at_range(&source, 4..=4).unwrap(), &4);
        assert_eq2!(
            element_at_range(forward_only(0..10_u32), from_end(1)..from_end(0)).unwrap(),
            9
        );
        assert_eq2!(
            element_at_range(forward_only(0..10_u32), idx(3)..from_end(6)).unwrap(),
            3
        );

        match element_at_range(&source, 4..6) {
            Err(SliceError::NotSingleElement { range }) => {
                assert_eq2!(range, IndexRange::from(4..6));
            }
            other => panic!("expected NotSingleElement, got {other:?}"),
        }

        match element_at_range(&source, 12..13) {
            Err(SliceError::IndexOutOfRange { index, available }) => {
                assert_eq2!(index, idx(12));
                assert_eq2!(available, Some(10));
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }

        assert!(matches!(
            element_at_range(forward_only(0..10_u32), 3..3),
            Err(SliceError::IndexOutOfRange { available: None, .. })
        ));
    }
}
