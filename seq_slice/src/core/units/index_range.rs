// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Half-open interval of two [`Index`] values - see [`IndexRange`] type.

use super::{Index, Length, from_end, idx};
use crate::{RangeBoundsExt, RangeValidityStatus, SliceError, SliceResult};
use serde::{Deserialize, Serialize};
use std::{fmt::{Debug, Display, Formatter, Result as FmtResult},
          ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo}};

/// A half-open interval `[start, end)` where either endpoint may count from the end.
///
/// Rust's own range syntax builds these directly, since [`From`] is implemented for the
/// [`std::ops`] range types over both [`Index`] and [`usize`]:
///
/// | Written as                    | Denotes                 |
/// |-------------------------------|-------------------------|
/// | `2..7`                        | `2..7`                  |
/// | `idx(2)..from_end(3)`         | `2..^3`                 |
/// | `from_end(10)..from_end(0)`   | `^10..^0` (last ten)    |
/// | `..`                          | `0..^0` (everything)    |
/// | `3..`                         | `3..^0`                 |
/// | `2..=4`                       | `2..5`                  |
///
/// Nothing is resolved until a length is known: see [`clamp_to()`] (lenient, used when
/// slicing a source) and [`offset_and_length()`] (strict, used when generating positions
/// without a source).
///
/// ```text
/// 2..^3 over a sequence of length 10
///
///       start=2                   end=^3 → 7
///           ↓                       ↓
/// Index: 0   1   2   3   4   5   6   7   8   9
///      ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
///      │   │   │ ▓ │ ▓ │ ▓ │ ▓ │ ▓ │   │   │   │
///      └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
///              ╰──── yields 2..7 ────╯
/// ```
///
/// [`clamp_to()`]: Self::clamp_to
/// [`offset_and_length()`]: Self::offset_and_length
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: Index,
    pub end: Index,
}

impl IndexRange {
    /// `0..^0`, every element.
    pub const ALL: IndexRange = IndexRange::new(Index::START, Index::END);

    #[must_use]
    pub const fn new(start: Index, end: Index) -> Self { Self { start, end } }

    /// `start..^0`.
    #[must_use]
    pub const fn start_at(start: Index) -> Self { Self::new(start, Index::END) }

    /// `0..end`.
    #[must_use]
    pub const fn end_at(end: Index) -> Self { Self::new(Index::START, end) }

    /// The look-behind needed to slice this range in a single forward pass: the larger
    /// of the two from-end offsets, or `0` when neither endpoint counts from the end.
    #[must_use]
    pub fn window(&self) -> usize {
        let offset = |index: Index| if index.is_from_end() { index.value() } else { 0 };
        offset(self.start).max(offset(self.end))
    }

    /// Resolve both endpoints against `length`, clamping into `[0, length]`.
    ///
    /// This is lenient: an interval that is inverted or lies outside the sequence after
    /// clamping becomes an empty range, never an error.
    ///
    /// ```
    /// use seq_slice::{IndexRange, from_end, idx};
    ///
    /// assert_eq!(IndexRange::from(idx(48)..from_end(51)).clamp_to(100), 48..49);
    /// assert_eq!(IndexRange::from(idx(48)..from_end(52)).clamp_to(100), 48..48);
    /// assert_eq!(IndexRange::from(idx(3)..idx(2)).clamp_to(10), 3..3);
    /// assert_eq!(IndexRange::from(from_end(15)..from_end(5)).clamp_to(10), 0..5);
    /// ```
    #[must_use]
    pub fn clamp_to(&self, length: impl Into<Length>) -> Range<usize> {
        let length = length.into();
        let start = self.start.resolve_clamped(length);
        let end = self.end.resolve_clamped(length);
        (start..end).clamp_range_to(length)
    }

    /// Whether the end resolves before the start against `length`, judged on the
    /// unclamped positions. A from-end offset larger than `length` resolves before the
    /// first element, so `^15..^20` is inverted over any length.
    ///
    /// ```
    /// use seq_slice::{IndexRange, from_end, idx};
    ///
    /// assert!(IndexRange::from(idx(20)..idx(15)).is_inverted_for(10));
    /// assert!(IndexRange::from(from_end(15)..from_end(20)).is_inverted_for(10));
    /// assert!(!IndexRange::from(from_end(15)..from_end(5)).is_inverted_for(10));
    /// ```
    #[must_use]
    pub fn is_inverted_for(&self, length: impl Into<Length>) -> bool {
        let length = length.into().as_usize();
        let (start, end) = (self.start.value(), self.end.value());
        match (self.start.is_from_end(), self.end.is_from_end()) {
            (false, false) => end < start,
            (true, true) => end > start,
            // `length - end < start`.
            (false, true) => start.checked_add(end).is_none_or(|sum| sum > length),
            // `end < length - start`.
            (true, false) => end.checked_add(start).is_some_and(|sum| sum < length),
        }
    }

    /// Resolve both endpoints against `length`, strictly.
    ///
    /// Returns `(offset, count)` of the denoted positions. Fails with
    /// [`SliceError::InvalidInterval`] when either endpoint can't be resolved inside
    /// `[0, length]`, or when the resolved end precedes the resolved start. Equal
    /// endpoints are valid and denote nothing.
    ///
    /// # Errors
    ///
    /// [`SliceError::InvalidInterval`] as described above.
    pub fn offset_and_length(
        &self,
        length: impl Into<Length>,
    ) -> SliceResult<(usize, usize)> {
        let length = length.into();
        let invalid_interval = || SliceError::InvalidInterval {
            range: *self,
            length: length.as_usize(),
        };

        let start = self.start.resolve(length).ok_or_else(invalid_interval)?;
        let end = self.end.resolve(length).ok_or_else(invalid_interval)?;

        match (start..end).check_range_is_valid_for_length(length) {
            RangeValidityStatus::Valid => Ok((start, end - start)),
            RangeValidityStatus::Inverted
            | RangeValidityStatus::StartOutOfBounds
            | RangeValidityStatus::EndOutOfBounds => Err(invalid_interval()),
        }
    }
}

impl Default for IndexRange {
    fn default() -> Self { Self::ALL }
}

impl From<Range<Index>> for IndexRange {
    fn from(range: Range<Index>) -> Self { Self::new(range.start, range.end) }
}

impl From<RangeFrom<Index>> for IndexRange {
    fn from(range: RangeFrom<Index>) -> Self { Self::start_at(range.start) }
}

impl From<RangeTo<Index>> for IndexRange {
    fn from(range: RangeTo<Index>) -> Self { Self::end_at(range.end) }
}

impl From<Range<usize>> for IndexRange {
    fn from(range: Range<usize>) -> Self { Self::new(idx(range.start), idx(range.end)) }
}

impl From<RangeFrom<usize>> for IndexRange {
    fn from(range: RangeFrom<usize>) -> Self { Self::start_at(idx(range.start)) }
}

impl From<RangeTo<usize>> for IndexRange {
    fn from(range: RangeTo<usize>) -> Self { Self::end_at(idx(range.end)) }
}

/// Inclusive ranges are converted to exclusive ones by adding `1` to the end. The end
/// saturates at [`usize::MAX`], so `n..=usize::MAX` loses its last position.
impl From<RangeInclusive<usize>> for IndexRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(idx(start), idx(end.saturating_add(1)))
    }
}

impl From<RangeFull> for IndexRange {
    fn from(_: RangeFull) -> Self { Self::ALL }
}

impl From<Index> for IndexRange {
    /// The single-element range `index..index+1`, keeping the direction of `index`.
    /// `^0` has no element after it and becomes the empty range `^0..^0`.
    fn from(index: Index) -> Self {
        if index.is_from_end() {
            Self::new(index, from_end(index.value().saturating_sub(1)))
        } else {
            Self::new(index, idx(index.value().saturating_add(1)))
        }
    }
}

impl Display for IndexRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Debug for IndexRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "IndexRange({self})") }
}
