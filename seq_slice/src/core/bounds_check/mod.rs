// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds checking for resolved positions and ranges.
//!
//! Once an [`Index`] or [`IndexRange`] is resolved against a known length it becomes a
//! plain [`usize`] position or a [`Range<usize>`]. This module answers the two questions
//! every strategy asks about those:
//!
//! | Task                          | Trait                | Key Methods                                                   |
//! |-------------------------------|----------------------|---------------------------------------------------------------|
//! | Validate element access       | [`ArrayBoundsCheck`] | [`overflows()`]                                               |
//! | Validate or clamp an interval | [`RangeBoundsExt`]   | [`check_range_is_valid_for_length()`], [`clamp_range_to()`]   |
//!
//! ## Interval Notation
//!
//! - `[0, length)`: positions valid for element access (`0 <= position < length`).
//! - `[0, length]`: positions valid as range endpoints (`0 <= position <= length`),
//!   since an exclusive end may sit one past the last element.
//!
//! The two kinds of callers treat a failed check differently. Slicing a source clamps
//! (an interval outside the sequence is just empty), while generating positions without
//! a source rejects (an inverted interval is a usage error).
//!
//! [`Index`]: crate::Index
//! [`IndexRange`]: crate::IndexRange
//! [`Range<usize>`]: std::ops::Range
//! [`overflows()`]: ArrayBoundsCheck::overflows
//! [`check_range_is_valid_for_length()`]: RangeBoundsExt::check_range_is_valid_for_length
//! [`clamp_range_to()`]: RangeBoundsExt::clamp_range_to

// Attach sources.
pub mod array_bounds_check;
pub mod range_bounds_check_ext;
pub mod result_enums;

// Re-export.
pub use array_bounds_check::*;
pub use range_bounds_check_ext::*;
pub use result_enums::*;
