// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One-based element count - see [`Length`] type.

use std::ops::Deref;

/// Represents a count of elements.
///
/// A `Length` is a 1-based measurement (as opposed to 0-based positions). The relationship
/// between a `Length` and the positions it contains is:
/// - positions `0..length` are valid for element access.
/// - position `length` itself is the exclusive end (where `^0` resolves to).
/// - the last valid position in a sequence with length L is L-1.
///
/// # Examples
///
/// ```
/// use seq_slice::{Length, len};
///
/// let length = len(10);
/// assert_eq!(length, Length::new(10));
/// assert_eq!(length.convert_to_index(), 9);
/// assert_eq!(length.remaining_from(4), len(6));
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default, Debug)]
pub struct Length(pub usize);

impl Length {
    #[must_use]
    pub const fn new(value: usize) -> Self { Self(value) }

    #[must_use]
    pub const fn as_usize(&self) -> usize { self.0 }

    #[must_use]
    pub const fn is_zero(&self) -> bool { self.0 == 0 }

    /// The last valid position for this length. A zero length has no valid position,
    /// and this saturates to `0`.
    #[must_use]
    pub const fn convert_to_index(&self) -> usize { self.0.saturating_sub(1) }

    /// How many elements are left from `position` (inclusive) to the end.
    #[must_use]
    pub const fn remaining_from(&self, position: usize) -> Length {
        Length(self.0.saturating_sub(position))
    }
}

/// Make a [`Length`].
#[must_use]
pub const fn len(value: usize) -> Length { Length(value) }

impl From<usize> for Length {
    fn from(value: usize) -> Self { Length(value) }
}

impl From<Length> for usize {
    fn from(length: Length) -> Self { length.0 }
}

impl Deref for Length {
    type Target = usize;

    fn deref(&self) -> &Self::Target { &self.0 }
}
