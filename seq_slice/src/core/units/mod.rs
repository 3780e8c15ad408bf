// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The coordinate system used everywhere else: [`Index`] (a position counted from the
//! start or from the end), [`IndexRange`] (a half-open interval of two of them), and
//! [`Length`] (a one-based count they resolve against).

// Attach sources.
pub mod index;
pub mod index_range;
pub mod length;

// Re-export.
pub use index::*;
pub use index_range::*;
pub use length::*;
