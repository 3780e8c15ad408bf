// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Positions denoted by an [`IndexRange`], without any source - see [`positions()`].
//!
//! Unlike slicing a source, which quietly yields nothing for an inverted or out of range
//! interval, generating positions treats those as usage errors, the same way indexing a
//! native slice with `&v[3..2]` panics. Only the error is returned instead of panicking.
//!
//! | Range          | `domain_max = 10`         |
//! |----------------|---------------------------|
//! | `2..5`         | `2, 3, 4`                 |
//! | `^3..^0`       | `7, 8, 9`                 |
//! | `^1..^0`       | `9`                       |
//! | `^0..^0`       | nothing                   |
//! | `3..3`         | nothing                   |
//! | `3..2`         | [`SliceError::InvalidInterval`] |
//! | `^11..^0`      | [`SliceError::InvalidInterval`] |
//! | `0..11`        | [`SliceError::InvalidInterval`] |
//!
//! [`SliceError::InvalidInterval`]: crate::SliceError::InvalidInterval

use crate::{IndexRange, SliceResult};
use std::{iter::FusedIterator, ops::Range};

/// Ascending, finite sequence of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positions {
    inner: Range<usize>,
}

impl Positions {
    /// The resolved half-open range of positions still to be yielded.
    #[must_use]
    pub fn as_range(&self) -> Range<usize> { self.inner.clone() }
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> { self.inner.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }

    fn nth(&mut self, n: usize) -> Option<usize> { self.inner.nth(n) }
}

impl DoubleEndedIterator for Positions {
    fn next_back(&mut self) -> Option<usize> { self.inner.next_back() }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}

/// Generate the positions `range` denotes, resolving from-end endpoints against
/// `domain_max`, so `^k` is `domain_max - k` and `^0` is one past the last position.
///
/// ```
/// use seq_slice::{from_end, idx, positions};
///
/// let last: Vec<_> = positions(from_end(1)..from_end(0), 10).unwrap().collect();
/// assert_eq!(last, vec![9]);
///
/// assert_eq!(positions(idx(3)..idx(3), 10).unwrap().count(), 0);
/// assert!(positions(idx(3)..idx(2), 10).is_err());
/// ```
///
/// # Errors
///
/// [`crate::SliceError::InvalidInterval`] if either endpoint resolves outside
/// `[0, domain_max]`, or if the resolved end precedes the resolved start.
pub fn positions(range: impl Into<IndexRange>, domain_max: usize) -> SliceResult<Positions> {
    let (offset, count) = range.into().offset_and_length(domain_max)?;
    Ok(Positions {
        inner: offset..offset + count,
    })
}

impl IndexRange {
    /// [`positions()`] over the whole of [`usize`], so `^0` is [`usize::MAX`].
    ///
    /// # Errors
    ///
    /// [`crate::SliceError::InvalidInterval`] if the range is inverted.
    pub fn positions(&self) -> SliceResult<Positions> { positions(*self, usize::MAX) }
}
