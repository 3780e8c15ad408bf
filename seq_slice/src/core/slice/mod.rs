// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod forward_element_at;
pub mod forward_slice;
pub mod random_access_slice;
pub mod slice_api;
pub mod slice_ext;

// Re-export.
pub use forward_element_at::*;
pub use forward_slice::*;
pub use random_access_slice::*;
pub use slice_api::*;
pub use slice_ext::*;
