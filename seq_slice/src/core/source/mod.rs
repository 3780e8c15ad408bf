// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Source capability model. A call resolves what a source can do exactly once, through
//! [`IntoSliceSource`], and then commits to one strategy:
//!
//! | Capability      | Trait / wrapper    | Provided by                                      |
//! |-----------------|--------------------|--------------------------------------------------|
//! | Random access   | [`RandomAccess`]   | `&[T]`, `&[T; N]`, `&Vec<T>`, `&VecDeque<T>`     |
//! | Forward only    | [`ForwardOnly`]    | any [`Iterator`], wrapped with [`forward_only()`] |
//! | Absent          | `None`             | [`Option`] of any of the above                   |

// Attach sources.
pub mod into_slice_source;
pub mod random_access;

// Re-export.
pub use into_slice_source::*;
pub use random_access::*;
