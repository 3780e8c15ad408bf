// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Position descriptor that counts either from the start or from the end of a sequence -
//! see [`Index`] type.

use super::Length;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Represents a position in a sequence, counted from the start or from the end.
///
/// - `from_end == false`: the absolute zero-based position `value`.
/// - `from_end == true`: the position `length - value`, where `length` is only known
///   once the sequence is measured (or exhausted). `^0` is the exclusive end sentinel,
///   one past the last element.
///
/// ```text
/// Forward positions vs from-end positions for a sequence of length 6
///
///   idx:  0    1    2    3    4    5    (6)
///       ┌────┬────┬────┬────┬────┬────┐
///       │ a  │ b  │ c  │ d  │ e  │ f  │
///       └────┴────┴────┴────┴────┴────┘
///   ^n:  ^6   ^5   ^4   ^3   ^2   ^1   (^0)
/// ```
///
/// `Index` values are immutable and have no identity. Create them with the [`idx`] and
/// [`from_end`] functions, or convert from [`usize`] (which counts from the start).
///
/// # Examples
///
/// ```
/// use seq_slice::{Index, from_end, idx, len};
///
/// assert_eq!(idx(2).resolve(len(6)), Some(2));
/// assert_eq!(from_end(2).resolve(len(6)), Some(4));
/// assert_eq!(from_end(0).resolve(len(6)), Some(6));
///
/// // A from-end offset larger than the length can't be resolved.
/// assert_eq!(from_end(7).resolve(len(6)), None);
///
/// assert_eq!(Index::from(3_usize), idx(3));
/// assert_eq!(from_end(1).to_string(), "^1");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Index {
    value: usize,
    from_end: bool,
}

impl Index {
    /// The first position, `0`.
    pub const START: Index = Index::from_start(0);

    /// The exclusive end sentinel, `^0`.
    pub const END: Index = Index::from_end(0);

    #[must_use]
    pub const fn from_start(value: usize) -> Self {
        Self {
            value,
            from_end: false,
        }
    }

    #[must_use]
    pub const fn from_end(value: usize) -> Self {
        Self {
            value,
            from_end: true,
        }
    }

    /// The raw offset, without its direction.
    #[must_use]
    pub const fn value(&self) -> usize { self.value }

    #[must_use]
    pub const fn is_from_end(&self) -> bool { self.from_end }

    /// Resolve this index to an absolute position against `length`.
    ///
    /// Uses checked arithmetic: returns [`None`] when a from-end offset is larger than
    /// `length`. Forward indices are returned as is, even when they lie beyond
    /// `length`; callers decide whether that is an overflow (see
    /// [`crate::ArrayBoundsCheck`]) or something to clamp.
    #[must_use]
    pub fn resolve(&self, length: impl Into<Length>) -> Option<usize> {
        let length = length.into().as_usize();
        if self.from_end {
            length.checked_sub(self.value)
        } else {
            Some(self.value)
        }
    }

    /// Resolve this index and clamp the result into `[0, length]`.
    #[must_use]
    pub fn resolve_clamped(&self, length: impl Into<Length>) -> usize {
        let length = length.into().as_usize();
        if self.from_end {
            length.saturating_sub(self.value)
        } else {
            self.value.min(length)
        }
    }
}

/// Make an [`Index`] counted from the start.
#[must_use]
pub const fn idx(value: usize) -> Index { Index::from_start(value) }

/// Make an [`Index`] counted from the end, written `^value`.
#[must_use]
pub const fn from_end(value: usize) -> Index { Index::from_end(value) }

impl From<usize> for Index {
    fn from(value: usize) -> Self { idx(value) }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.from_end {
            write!(f, "^{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl Debug for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "Index({self})") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, len};

    #[test]
    fn test_index_constructors() {
        assert_eq2!(idx(5), Index::from_start(5));
        assert_eq2!(from_end(5), Index::from_end(5));
        assert_eq2!(Index::from(5_usize), idx(5));
        assert_eq2!(Index::default(), Index::START);
        assert_ne!(idx(0), from_end(0));
    }

    #[test]
    fn test_index_accessors() {
        let index = from_end(3);
        assert_eq2!(index.value(), 3);
        assert!(index.is_from_end());
        assert!(!idx(3).is_from_end());
    }

    #[test]
    fn test_index_resolve_forward() {
        assert_eq2!(idx(0).resolve(len(10)), Some(0));
        assert_eq2!(idx(9).resolve(len(10)), Some(9));
        // Forward indices are never rejected here, only reported as is.
        assert_eq2!(idx(15).resolve(len(10)), Some(15));
    }

    #[test]
    fn test_index_resolve_from_end() {
        assert_eq2!(from_end(0).resolve(len(10)), Some(10));
        assert_eq2!(from_end(1).resolve(len(10)), Some(9));
        assert_eq2!(from_end(10).resolve(len(10)), Some(0));
        assert_eq2!(from_end(11).resolve(len(10)), None);
        assert_eq2!(from_end(1).resolve(len(0)), None);
    }

    #[test]
    fn test_index_resolve_at_usize_boundary() {
        assert_eq2!(from_end(usize::MAX).resolve(len(usize::MAX)), Some(0));
        assert_eq2!(from_end(0).resolve(len(usize::MAX)), Some(usize::MAX));
        assert_eq2!(from_end(usize::MAX).resolve(len(usize::MAX - 1)), None);
    }

    #[test]
    fn test_index_resolve_clamped() {
        assert_eq2!(idx(3).resolve_clamped(len(10)), 3);
        assert_eq2!(idx(30).resolve_clamped(len(10)), 10);
        assert_eq2!(from_end(3).resolve_clamped(len(10)), 7);
        assert_eq2!(from_end(30).resolve_clamped(len(10)), 0);
        assert_eq2!(from_end(0).resolve_clamped(len(0)), 0);
    }

    #[test]
    fn test_index_display_and_debug() {
        assert_eq2!(idx(42).to_string(), "42");
        assert_eq2!(from_end(7).to_string(), "^7");
        assert_eq2!(format!("{:?}", from_end(7)), "Index(^7)");
        assert_eq2!(format!("{:?}", Index::START), "Index(0)");
        assert_eq2!(format!("{:?}", Index::END), "Index(^0)");
    }
}
