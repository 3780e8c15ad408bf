// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deferred queries. Instead of slicing elements, slicing calls on a [`Query`] are
//! recorded as [`QueryExpr`] nodes, for a [`QueryProvider`] to translate and execute
//! later (typically as count, skip, and take). Nothing here iterates a source.
//!
//! ```text
//!  Query::new(provider, "numbers")      numbers
//!      .slice(from_end(10)..)      ──▶  numbers.Take(^10..^0)
//!      .slice(2..4)                ──▶  numbers.Take(^10..^0).Take(2..4)
//!      .execute()                  ──▶  provider.execute(&expression)
//! ```

// Attach sources.
pub mod in_memory_provider;
pub mod operation_descriptor;
pub mod query_adapter;
pub mod query_expr;

// Re-export.
pub use in_memory_provider::*;
pub use operation_descriptor::*;
pub use query_adapter::*;
pub use query_expr::*;
