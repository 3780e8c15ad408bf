// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Enough inline slots to tell "exactly one element" apart from "more than one" without
/// touching the heap.
pub const INLINE_VEC_SIZE: usize = 2;

/// Stack allocated list for the handful of elements a single-element lookup collects.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
