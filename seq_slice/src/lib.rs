// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # seq_slice
//!
//! Slice any sequence by [`Index`] or [`IndexRange`], including positions counted from
//! the end (`^n`), whether or not the sequence knows its length up front.
//!
//! Two execution strategies are picked once per call, by source capability:
//!
//! | Source capability                 | Strategy                                      | Cost                    |
//! |-----------------------------------|-----------------------------------------------|-------------------------|
//! | [`RandomAccess`] (count + `get`)  | resolve both endpoints once, read in place    | O(1) setup, O(k) yield  |
//! | [`ForwardOnly`] (single pass)     | one forward pass with a bounded FIFO window   | O(n) time, O(window)    |
//!
//! ```rust
//! use seq_slice::{IteratorSliceExt, from_end, idx, slice};
//!
//! // Random access: positions are resolved against the known length.
//! let numbers: Vec<u32> = (0..100).collect();
//! let tail: Vec<_> = slice(&numbers, from_end(3)..from_end(0)).unwrap().copied().collect();
//! assert_eq!(tail, vec![97, 98, 99]);
//!
//! // Forward only: the same range over a single pass of an iterator.
//! let tail: Vec<_> = (0..100_u32).slice(from_end(3)..from_end(0)).collect();
//! assert_eq!(tail, vec![97, 98, 99]);
//!
//! // Mixed endpoints work too: `48..^51` over 100 elements is just `{48}`.
//! let middle: Vec<_> = (0..100_u32).slice(idx(48)..from_end(51)).collect();
//! assert_eq!(middle, vec![48]);
//! ```
//!
//! Besides slicing, the crate generates the positions a range denotes without any
//! source ([`positions()`]) and rewrites slicing calls into [`QueryExpr`] trees for
//! deferred query providers ([`Query`]).

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
