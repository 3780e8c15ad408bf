// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reference [`QueryProvider`] over named in-memory tables - see [`InMemoryProvider`].

use crate::{ArrayBoundsCheck, ArrayOverflowResult, OperationKind, QueryArg, QueryExpr,
            QueryProvider, SliceError, SliceResult, lower_to_skip_take};
use rustc_hash::FxHashMap;
use std::any::{Any, type_name};

/// Executes query expressions against tables of rows held in memory.
///
/// This plays the part a remote provider would: every range is lowered to skip and take
/// with [`lower_to_skip_take()`], against the row count of the table it applies to.
///
/// | Expression                 | Execution                                        |
/// |----------------------------|--------------------------------------------------|
/// | `name`                     | every row of table `name`                        |
/// | `expr.Take(range)`         | skip, then take, over the rows of `expr`         |
/// | `expr.ElementAt(index)`    | the one row at `index`                           |
/// | `expr.ElementAt(range)`    | the one row `range` denotes                      |
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    tables: FxHashMap<String, Box<dyn Any + Send + Sync>>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_table<T: Send + Sync + 'static>(
        mut self,
        name: impl Into<String>,
        rows: Vec<T>,
    ) -> Self {
        self.insert_table(name, rows);
        self
    }

    /// Add or replace the table called `name`.
    pub fn insert_table<T: Send + Sync + 'static>(
        &mut self,
        name: impl Into<String>,
        rows: Vec<T>,
    ) {
        self.tables.insert(name.into(), Box::new(rows));
    }

    fn table<T: 'static>(&self, name: &str) -> SliceResult<&Vec<T>> {
        let table = self.tables.get(name).ok_or_else(|| SliceError::NullSource {
            argument: name.to_string(),
        })?;
        table.downcast_ref::<Vec<T>>().ok_or_else(|| {
            SliceError::QueryProvider(miette::miette!(
                "table `{name}` does not hold rows of type `{}`",
                type_name::<T>()
            ))
        })
    }
}

impl QueryProvider for InMemoryProvider {
    fn execute<T: Clone + 'static>(&self, expression: &QueryExpr) -> SliceResult<Vec<T>> {
        match expression {
            QueryExpr::Source { name } => Ok(self.table::<T>(name)?.clone()),
            QueryExpr::Call {
                operation,
                receiver,
                argument,
            } => {
                let rows = self.execute::<T>(receiver)?;
                apply(operation.kind, *argument, rows)
            }
        }
    }
}

fn apply<T>(kind: OperationKind, argument: QueryArg, rows: Vec<T>) -> SliceResult<Vec<T>> {
    let count = rows.len();

    match (kind, argument) {
        (OperationKind::SliceRange, QueryArg::Range(range)) => {
            let lowered = lower_to_skip_take(range, count)?;
            Ok(rows.into_iter().skip(lowered.skip).take(lowered.take).collect())
        }

        (OperationKind::ElementAtIndex, QueryArg::Index(index)) => {
            let out_of_range = || SliceError::IndexOutOfRange {
                index,
                available: Some(count),
            };
            let position = index.resolve(count).ok_or_else(out_of_range)?;
            if position.overflows(count) == ArrayOverflowResult::Overflowed {
                return Err(out_of_range());
            }
            Ok(rows.into_iter().skip(position).take(1).collect())
        }

        (OperationKind::ElementAtRange, QueryArg::Range(range)) => {
            let lowered = lower_to_skip_take(range, count)?;
            match lowered.take {
                0 => Err(SliceError::IndexOutOfRange {
                    index: range.start,
                    available: Some(count),
                }),
                1 => Ok(rows.into_iter().skip(lowered.skip).take(1).collect()),
                _ => Err(SliceError::NotSingleElement { range }),
            }
        }

        (kind, argument) => Err(SliceError::QueryProvider(miette::miette!(
            "operation `{kind:?}` does not take argument `{argument}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndexRange, Query, assert_eq2, from_end, idx, operation_descriptor};
    use std::sync::Arc;

    fn numbers() -> Query<u32, InMemoryProvider> {
        let provider = InMemoryProvider::new().with_table("numbers", (0..100).collect::<Vec<u32>>());
        Query::new(Arc::new(provider), "numbers")
    }

    #[test]
    fn test_execute_slices() {
        let query = numbers();
        assert_eq2!(
            query.slice(from_end(10)..from_end(0)).execute().unwrap(),
            (90..100).collect::<Vec<_>>()
        );
        assert_eq2!(query.slice(2..7).execute().unwrap(), vec![2, 3, 4, 5, 6]);
        assert_eq2!(query.slice(3..3).execute().unwrap(), Vec::<u32>::new());
        assert_eq2!(query.slice(idx(48)..from_end(51)).execute().unwrap(), vec![48]);
        assert_eq2!(
            query.slice(idx(48)..from_end(52)).execute().unwrap(),
            Vec::<u32>::new()
        );
        assert_eq2!(
            query.slice(from_end(10)..).slice(2..4).execute().unwrap(),
            vec![92, 93]
        );
    }

    #[test]
    fn test_execute_element_lookups() {
        let query = numbers();
        assert_eq2!(query.element_at(from_end(1)).unwrap(), 99);
        assert_eq2!(query.element_at(0).unwrap(), 0);
        assert_eq2!(query.slice(10..20).element_at(from_end(1)).unwrap(), 19);
        assert_eq2!(query.element_at_range(from_end(1)..from_end(0)).unwrap(), 99);

        assert!(matches!(
            query.element_at(100),
            Err(SliceError::IndexOutOfRange { available: Some(100), .. })
        ));
        assert!(matches!(
            query.element_at(from_end(0)),
            Err(SliceError::IndexOutOfRange { available: Some(100), .. })
        ));
        assert!(matches!(
            query.element_at_range(4..6),
            Err(SliceError::NotSingleElement { .. })
        ));
        assert!(matches!(
            query.element_at_range(150..151),
            Err(SliceError::IndexOutOfRange { available: Some(100), .. })
        ));
    }

    #[test]
    fn test_inverted_range_is_an_invalid_interval() {
        let result = numbers().slice(idx(3)..idx(2)).execute();
        match result {
            Err(SliceError::InvalidInterval { range, length }) => {
                assert_eq2!(range, IndexRange::from(idx(3)..idx(2)));
                assert_eq2!(length, 100);
            }
            other => panic!("expected InvalidInterval, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_range_past_either_end_is_an_invalid_interval() {
        for range in [
            IndexRange::from(idx(200)..idx(150)),
            IndexRange::from(from_end(150)..from_end(200)),
        ] {
            assert!(matches!(
                numbers().slice(range).execute(),
                Err(SliceError::InvalidInterval { length: 100, .. })
            ));
        }
    }

    #[test]
    fn test_missing_and_mistyped_tables() {
        let provider = Arc::new(InMemoryProvider::new().with_table("words", vec!["a", "b"]));

        let missing: Query<u32, _> = Query::new(provider.clone(), "numbers");
        assert!(matches!(
            missing.execute(),
            Err(SliceError::NullSource { argument }) if argument == "numbers"
        ));

        let mistyped: Query<u32, _> = Query::new(provider.clone(), "words");
        let Err(SliceError::QueryProvider(report)) = mistyped.execute() else {
            panic!("expected a provider error");
        };
        assert!(report.to_string().contains("does not hold rows of type `u32`"));

        let words: Query<&'static str, _> = Query::new(provider, "words");
        assert_eq2!(words.element_at(from_end(1)).unwrap(), "b");
    }

    #[test]
    fn test_mismatched_argument_is_a_provider_error() {
        let provider = InMemoryProvider::new().with_table("numbers", vec![1_u32, 2, 3]);
        let expression = QueryExpr::Call {
            operation: operation_descriptor::<u32>(OperationKind::SliceRange),
            receiver: Box::new(QueryExpr::source("numbers")),
            argument: QueryArg::Index(idx(1)),
        };
        assert!(matches!(
            provider.execute::<u32>(&expression),
            Err(SliceError::QueryProvider(_))
        ));
    }
}
