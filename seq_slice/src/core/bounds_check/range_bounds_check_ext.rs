// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validation and clamping of resolved ranges - see [`RangeBoundsExt`] trait.

use crate::{Length, RangeValidityStatus};
use std::ops::Range;

/// Range validation and clamping against a length.
///
/// > <div class="warning">
/// >
/// > We cannot add inherent methods to [`Range`] (orphan rule, since it is in [`std`]),
/// > so we use an extension trait that can be implemented on foreign types.
/// >
/// > </div>
///
/// Both endpoints of a resolved range are checked as *endpoints*, in `[0, length]`, not
/// as element positions in `[0, length)`. An empty range sitting right at the end
/// (`length..length`) is valid; it is what `^0..^0` resolves to.
///
/// ```text
/// clamp_range_to(len(10))
///
///   2..7    →  2..7     (unchanged)
///   2..70   →  2..10    (end clamped to length)
///   20..70  →  10..10   (start clamped to length, empty)
///   8..3    →  8..8     (inverted, collapses to empty at start)
/// ```
pub trait RangeBoundsExt {
    /// Check if this range is valid for the given length.
    ///
    /// # Returns
    ///
    /// [`RangeValidityStatus`] indicating validity or specific failure reason.
    fn check_range_is_valid_for_length(
        &self,
        length: impl Into<Length>,
    ) -> RangeValidityStatus;

    /// Clamp this range to fit within `[0, length]`. Inverted ranges become empty.
    ///
    /// # Returns
    ///
    /// A new range guaranteed to be valid for the given length.
    #[must_use]
    fn clamp_range_to(self, length: impl Into<Length>) -> Self;
}

impl RangeBoundsExt for Range<usize> {
    fn check_range_is_valid_for_length(
        &self,
        length: impl Into<Length>,
    ) -> RangeValidityStatus {
        let length = length.into().as_usize();

        // Check for inverted ranges (start > end).
        if self.start > self.end {
            return RangeValidityStatus::Inverted;
        }

        if self.start > length {
            return RangeValidityStatus::StartOutOfBounds;
        }

        if self.end > length {
            return RangeValidityStatus::EndOutOfBounds;
        }

        RangeValidityStatus::Valid
    }

    fn clamp_range_to(self, length: impl Into<Length>) -> Range<usize> {
        let length = length.into().as_usize();
        let clamped_start = self.start.min(length);
        let clamped_end = self.end.min(length);

        // Ensure range is not inverted (start >= end).
        if clamped_start >= clamped_end {
            clamped_start..clamped_start // Empty range.
        } else {
            clamped_start..clamped_end
        }
    }
}
