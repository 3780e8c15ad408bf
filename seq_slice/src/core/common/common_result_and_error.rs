// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type shared by every strategy - see [`SliceError`].

use crate::{Index, IndexRange};

/// Type alias to make it easy to work with [`Result`]s that fail with [`SliceError`].
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors raised while slicing, looking up elements, or generating positions.
///
/// All failures are raised synchronously at first detection: at construction time when
/// the length is known up front, and at first pull when it only becomes known by
/// exhausting a forward-only source. An empty slice is **not** an error.
///
/// | Variant               | Cause                                                                   |
/// | :-------------------- | :---------------------------------------------------------------------- |
/// | [`NullSource`]        | The source is absent                                                    |
/// | [`InvalidInterval`]   | A source-free range can't be resolved, or resolves inverted             |
/// | [`IndexOutOfRange`]   | A single-element lookup resolved outside the available elements         |
/// | [`NotSingleElement`]  | A single-element lookup by range found more than one element            |
/// | [`QueryProvider`]     | A deferred query provider failed to execute an expression               |
///
/// [`NullSource`]: Self::NullSource
/// [`InvalidInterval`]: Self::InvalidInterval
/// [`IndexOutOfRange`]: Self::IndexOutOfRange
/// [`NotSingleElement`]: Self::NotSingleElement
/// [`QueryProvider`]: Self::QueryProvider
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SliceError {
    #[error("Source `{argument}` is absent")]
    #[diagnostic(
        code(seq_slice::null_source),
        help("Pass a source (or bind the named query source in the provider) before slicing.")
    )]
    NullSource { argument: String },

    #[error("Range {range} is not a valid interval within [0, {length}]")]
    #[diagnostic(
        code(seq_slice::invalid_interval),
        help("Both endpoints must resolve inside the source and the end must not precede the start.")
    )]
    InvalidInterval { range: IndexRange, length: usize },

    #[error("Index {index} is out of range ({})", describe_available(.available))]
    #[diagnostic(code(seq_slice::index_out_of_range))]
    IndexOutOfRange {
        index: Index,
        /// How many elements the source had, when that is known.
        available: Option<usize>,
    },

    #[error("Range {range} resolves to more than one element")]
    #[diagnostic(
        code(seq_slice::not_single_element),
        help("Use `slice()` to get every element in a range.")
    )]
    NotSingleElement { range: IndexRange },

    #[error("Query provider failed: {0}")]
    #[diagnostic(code(seq_slice::query_provider))]
    QueryProvider(miette::Report),
}

fn describe_available(available: &Option<usize>) -> String {
    match available {
        Some(count) => format!("{count} elements available"),
        None => "source length unknown".to_string(),
    }
}
