// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module provides result enums for the bounds checking scenarios:
//! - [`ArrayOverflowResult`] - Results for element access bounds checking (within,
//!   overflow)
//! - [`RangeValidityStatus`] - Results for validating range structure and bounds
//!   correctness

/// Result of element access bounds checking `[0, length)`.
///
/// Used with [`overflows()`] to determine if a resolved position can be read. There is
/// no "underflow" variant because resolved positions are unsigned; a from-end index
/// that would land before `0` never resolves in the first place (see
/// [`Index::resolve()`]).
///
/// ## Examples
///
/// ```
/// use seq_slice::{ArrayBoundsCheck, ArrayOverflowResult, len};
///
/// assert_eq!(5_usize.overflows(len(10)), ArrayOverflowResult::Within);
/// assert_eq!(10_usize.overflows(len(10)), ArrayOverflowResult::Overflowed);
/// ```
///
/// [`overflows()`]: crate::ArrayBoundsCheck::overflows
/// [`Index::resolve()`]: crate::Index::resolve
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayOverflowResult {
    /// Position is within valid bounds for element access.
    Within,

    /// Position has overflowed (is at or beyond the length).
    Overflowed,
}

/// Result of range structure validation operations.
///
/// Used with [`check_range_is_valid_for_length`] to determine if a resolved range is
/// well-formed and valid for a given length. This captures WHY a range is invalid, so
/// callers can report it precisely without re-checking.
///
/// # Examples
///
/// ```
/// use seq_slice::{RangeBoundsExt, RangeValidityStatus, len};
/// use std::ops::Range;
///
/// let length = len(10);
///
/// assert_eq!((2_usize..7).check_range_is_valid_for_length(length), RangeValidityStatus::Valid);
/// assert_eq!((Range { start: 8_usize, end: 3 }).check_range_is_valid_for_length(length), RangeValidityStatus::Inverted);
/// assert_eq!((11_usize..12).check_range_is_valid_for_length(length), RangeValidityStatus::StartOutOfBounds);
/// assert_eq!((5_usize..15).check_range_is_valid_for_length(length), RangeValidityStatus::EndOutOfBounds);
/// ```
///
/// [`check_range_is_valid_for_length`]: crate::RangeBoundsExt::check_range_is_valid_for_length
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeValidityStatus {
    /// Range is well-formed and valid for the given length.
    Valid,

    /// Range is inverted (start > end).
    Inverted,

    /// Start is out of bounds (start > length).
    StartOutOfBounds,

    /// End is out of bounds (end > length).
    EndOutOfBounds,
}
