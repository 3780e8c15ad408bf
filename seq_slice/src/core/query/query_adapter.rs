// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_QUERY_ADAPTER, Index, IndexRange, OperationKind, QueryArg, QueryExpr,
            SliceError, SliceResult};
use std::{fmt::{Debug, Formatter, Result as FmtResult},
          marker::PhantomData,
          ops::Range,
          sync::Arc};

/// Executes [`QueryExpr`] trees. A provider decides how each operation is carried out,
/// usually by lowering ranges with [`lower_to_skip_take()`].
pub trait QueryProvider {
    /// Evaluate `expression`, producing elements of type `T`.
    ///
    /// Single-element operations produce exactly one element.
    ///
    /// # Errors
    ///
    /// Whatever the provider fails with. Providers report their own failures as
    /// [`SliceError::QueryProvider`].
    fn execute<T: Clone + 'static>(&self, expression: &QueryExpr) -> SliceResult<Vec<T>>;
}

/// Count, skip, and take form of a range, for providers that can't resolve from-end
/// positions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SkipTake {
    pub skip: usize,
    pub take: usize,
}

/// Lower `range` to skip and take, given the `count` of the sequence it applies to.
///
/// Inversion is judged on the unclamped endpoints. Only then are endpoints past either
/// end clamped, so `^15..^5` over 10 elements is skip 0, take 5.
///
/// ```
/// use seq_slice::{SkipTake, from_end, idx, lower_to_skip_take};
///
/// let lowered = lower_to_skip_take(idx(48)..from_end(51), 100).unwrap();
/// assert_eq!(lowered, SkipTake { skip: 48, take: 1 });
///
/// assert!(lower_to_skip_take(idx(3)..idx(2), 10).is_err());
/// assert!(lower_to_skip_take(idx(20)..idx(15), 10).is_err());
/// ```
///
/// # Errors
///
/// [`SliceError::InvalidInterval`] if the resolved end precedes the resolved start.
pub fn lower_to_skip_take(
    range: impl Into<IndexRange>,
    count: usize,
) -> SliceResult<SkipTake> {
    let range = range.into();
    if range.is_inverted_for(count) {
        return Err(SliceError::InvalidInterval {
            range,
            length: count,
        });
    }

    // Clamping is monotonic, so a range that is not inverted stays in order.
    let Range { start, end } = range.clamp_to(count);
    Ok(SkipTake {
        skip: start,
        take: end - start,
    })
}

/// A deferred query over elements of type `T`, backed by a shared provider `P`.
///
/// Slicing only records a new node. Nothing runs until [`execute()`], or until one of
/// the single-element lookups, which execute immediately.
///
/// [`execute()`]: Self::execute
pub struct Query<T, P> {
    provider: Arc<P>,
    expression: QueryExpr,
    _element: PhantomData<fn() -> T>,
}

impl<T: Clone + 'static, P: QueryProvider> Query<T, P> {
    /// A query over the provider's source called `source_name`.
    #[must_use]
    pub fn new(provider: Arc<P>, source_name: impl Into<String>) -> Self {
        Self {
            provider,
            expression: QueryExpr::source(source_name),
            _element: PhantomData,
        }
    }

    #[must_use]
    pub fn expression(&self) -> &QueryExpr { &self.expression }

    /// Record a slice. Does not touch the provider.
    #[must_use]
    pub fn slice(&self, range: impl Into<IndexRange>) -> Self {
        let argument = QueryArg::Range(range.into());
        self.wrap(OperationKind::SliceRange, argument)
    }

    /// # Errors
    ///
    /// - [`SliceError::IndexOutOfRange`] if `index` does not resolve to an element.
    /// - Any provider failure.
    pub fn element_at(&self, index: impl Into<Index>) -> SliceResult<T> {
        let index = index.into();
        let query = self.wrap(OperationKind::ElementAtIndex, QueryArg::Index(index));
        single_element(query.execute()?, index, IndexRange::from(index))
    }

    /// # Errors
    ///
    /// - [`SliceError::IndexOutOfRange`] if `range` denotes nothing.
    /// - [`SliceError::NotSingleElement`] if `range` denotes more than one element.
    /// - [`SliceError::InvalidInterval`] if `range` is inverted.
    /// - Any provider failure.
    pub fn element_at_range(&self, range: impl Into<IndexRange>) -> SliceResult<T> {
        let range = range.into();
        let query = self.wrap(OperationKind::ElementAtRange, QueryArg::Range(range));
        single_element(query.execute()?, range.start, range)
    }

    /// Hand the expression to the provider.
    ///
    /// # Errors
    ///
    /// Any provider failure.
    pub fn execute(&self) -> SliceResult<Vec<T>> {
        if DEBUG_QUERY_ADAPTER {
            tracing::debug!(message = "execute query", expression = %self.expression);
        }
        self.provider.execute::<T>(&self.expression)
    }

    fn wrap(&self, kind: OperationKind, argument: QueryArg) -> Self {
        let expression = QueryExpr::call::<T>(self.expression.clone(), kind, argument);
        if DEBUG_QUERY_ADAPTER {
            tracing::debug!(message = "record query operation", expression = %expression);
        }
        Self {
            provider: self.provider.clone(),
            expression,
            _element: PhantomData,
        }
    }
}

fn single_element<T>(mut found: Vec<T>, index: Index, range: IndexRange) -> SliceResult<T> {
    if found.len() > 1 {
        return Err(SliceError::NotSingleElement { range });
    }
    found.pop().ok_or(SliceError::IndexOutOfRange {
        index,
        available: None,
    })
}

impl<T, P> Clone for Query<T, P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            expression: self.expression.clone(),
            _element: PhantomData,
        }
    }
}

impl<T, P> Debug for Query<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Query")
            .field("expression", &format_args!("{}", self.expression))
            .finish_non_exhaustive()
    }
}

/// Record a slice on a query that may be absent.
///
/// # Errors
///
/// [`SliceError::NullSource`] if `query` is [`None`].
pub fn query_slice<T: Clone + 'static, P: QueryProvider>(
    query: Option<&Query<T, P>>,
    range: impl Into<IndexRange>,
) -> SliceResult<Query<T, P>> {
    Ok(require_query(query)?.slice(range))
}

/// Look up one element of a query that may be absent.
///
/// # Errors
///
/// [`SliceError::NullSource`] if `query` is [`None`], otherwise see
/// [`Query::element_at()`].
pub fn query_element_at<T: Clone + 'static, P: QueryProvider>(
    query: Option<&Query<T, P>>,
    index: impl Into<Index>,
) -> SliceResult<T> {
    require_query(query)?.element_at(index)
}

fn require_query<Q>(query: Option<&Q>) -> SliceResult<&Q> {
    query.ok_or_else(|| SliceError::NullSource {
        argument: "query".to_string(),
    })
}
