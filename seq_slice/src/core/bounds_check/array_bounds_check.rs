// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Element access bounds checking - see [`ArrayBoundsCheck`] trait.

use crate::{ArrayOverflowResult, Length};

/// Checks whether a resolved position can be used to read an element.
///
/// ```text
/// Checking position against length=5
///
///                      length=5 (1-based)
///                           ↓
/// Position:   0   1   2   3   4   5   6
///           ┌───┬───┬───┬───┬───┼───┬───┐
///           │ ▓ │ ▓ │ ▓ │ ▓ │ ▓ │ O │ O │
///           └───┴───┴───┴───┴───┼───┴───┘
///           ╰─ valid positions ─╯
///
/// ▓ = Within (position < length)
/// O = Overflowed (position >= length)
/// ```
pub trait ArrayBoundsCheck {
    /// Answers the question: "Does this position overflow `length`?"
    fn overflows(&self, length: impl Into<Length>) -> ArrayOverflowResult;
}

impl ArrayBoundsCheck for usize {
    fn overflows(&self, length: impl Into<Length>) -> ArrayOverflowResult {
        if *self < length.into().as_usize() {
            ArrayOverflowResult::Within
        } else {
            ArrayOverflowResult::Overflowed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, len};

    #[test]
    fn test_overflows() {
        assert_eq2!(0_usize.overflows(len(10)), ArrayOverflowResult::Within);
        assert_eq2!(9_usize.overflows(len(10)), ArrayOverflowResult::Within);
        assert_eq2!(10_usize.overflows(len(10)), ArrayOverflowResult::Overflowed);
        assert_eq2!(20_usize.overflows(len(10)), ArrayOverflowResult::Overflowed);
    }

    #[test]
    fn test_overflows_zero_length() {
        // Empty collections have no valid positions.
        assert_eq2!(0_usize.overflows(len(0)), ArrayOverflowResult::Overflowed);
        assert_eq2!(1_usize.overflows(len(0)), ArrayOverflowResult::Overflowed);
    }

    #[test]
    fn test_overflows_max_values() {
        assert_eq2!(
            (usize::MAX - 1).overflows(len(usize::MAX)),
            ArrayOverflowResult::Within
        );
        assert_eq2!(
            usize::MAX.overflows(len(usize::MAX)),
            ArrayOverflowResult::Overflowed
        );
    }
}
