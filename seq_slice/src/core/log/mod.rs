// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in log output for the `tracing` events this crate emits (strategy selection,
//! window sizes, query expressions). The crate never installs a subscriber by itself;
//! call [`try_initialize_logging_global()`] or build layers with [`try_create_layers()`]
//! and add them to a subscriber of your own.

// Attach sources.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
