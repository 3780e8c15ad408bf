// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for strategy selection in the [`slice`] module.
///
/// If set to `true`, every call to [`crate::slice()`], [`crate::element_at()`] and the
/// extension traits reports which strategy (and which forward-only rule) was picked,
/// along with the window capacity it needs.
pub const DEBUG_SLICE_ENGINE: bool = false;

/// Enable or disable debug logging for the [`query`] module (expression construction
/// and operation descriptor cache misses).
pub const DEBUG_QUERY_ADAPTER: bool = false;

// Attach sources.
pub mod bounds_check;
pub mod common;
pub mod log;
pub mod positions;
pub mod query;
pub mod slice;
pub mod source;
pub mod units;

mod decl_macros;

// Re-export.
pub use bounds_check::*;
pub use common::*;
pub use log::*;
pub use positions::*;
pub use query::*;
pub use slice::*;
pub use source::*;
pub use units::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn test_debug_logging_is_off_by_default() {
        assert!(!DEBUG_SLICE_ENGINE);
        assert!(!DEBUG_QUERY_ADAPTER);
    }
}
