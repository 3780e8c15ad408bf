// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Index, IndexRange, OperationDescriptor, OperationKind, operation_descriptor};
use serde::{Deserialize, Serialize};
use std::{fmt::{Display, Formatter, Result as FmtResult},
          sync::Arc};

/// The argument of one recorded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryArg {
    Index(Index),
    Range(IndexRange),
}

impl Display for QueryArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            QueryArg::Index(index) => write!(f, "{index}"),
            QueryArg::Range(range) => write!(f, "{range}"),
        }
    }
}

/// Expression tree of a deferred query. The root is always a named [`Source`], and
/// each [`Call`] wraps the expression it is applied to.
///
/// [`Source`]: QueryExpr::Source
/// [`Call`]: QueryExpr::Call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryExpr {
    Source {
        name: String,
    },
    Call {
        operation: Arc<OperationDescriptor>,
        receiver: Box<QueryExpr>,
        argument: QueryArg,
    },
}

impl QueryExpr {
    #[must_use]
    pub fn source(name: impl Into<String>) -> Self { QueryExpr::Source { name: name.into() } }

    /// Wrap `receiver` in a call to `kind`, over elements of type `T`.
    #[must_use]
    pub fn call<T: 'static>(receiver: QueryExpr, kind: OperationKind, argument: QueryArg) -> Self {
        QueryExpr::Call {
            operation: operation_descriptor::<T>(kind),
            receiver: Box::new(receiver),
            argument,
        }
    }

    /// Name of the source at the root of this tree.
    #[must_use]
    pub fn source_name(&self) -> &str {
        match self {
            QueryExpr::Source { name } => name,
            QueryExpr::Call { receiver, .. } => receiver.source_name(),
        }
    }

    /// Number of calls between this node and the root source.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            QueryExpr::Source { .. } => 0,
            QueryExpr::Call { receiver, .. } => 1 + receiver.depth(),
        }
    }
}

/// Renders as method call chains, such as `numbers.Take(2..^3).ElementAt(^1)`.
impl Display for QueryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            QueryExpr::Source { name } => write!(f, "{name}"),
            QueryExpr::Call {
                operation,
                receiver,
                argument,
            } => write!(f, "{receiver}.{}({argument})", operation.method_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, from_end, idx};
    use serde_json::json;

    fn sample_expression() -> QueryExpr {
        let take = QueryExpr::call::<u32>(
            QueryExpr::source("numbers"),
            OperationKind::SliceRange,
            QueryArg::Range((idx(2)..from_end(3)).into()),
        );
        QueryExpr::call::<u32>(
            take,
            OperationKind::ElementAtIndex,
            QueryArg::Index(from_end(1)),
        )
    }

    #[test]
    fn test_query_expr_display() {
        let expression = sample_expression();
        assert_eq2!(expression.to_string(), "numbers.Take(2..^3).ElementAt(^1)");
        assert_eq2!(expression.source_name(), "numbers");
        assert_eq2!(expression.depth(), 2);
    }

    #[test]
    fn test_query_expr_serializes_for_a_remote_provider() {
        let value = serde_json::to_value(sample_expression()).unwrap();

        let call = &value["Call"];
        assert_eq2!(call["operation"]["method_name"], json!("ElementAt"));
        assert_eq2!(call["operation"]["kind"], json!("ElementAtIndex"));
        assert_eq2!(call["operation"]["element_type"], json!("u32"));
        assert_eq2!(
            call["argument"],
            json!({ "Index": { "value": 1, "from_end": true } })
        );

        let receiver = &call["receiver"]["Call"];
        assert_eq2!(receiver["operation"]["method_name"], json!("Take"));
        assert_eq2!(
            receiver["argument"]["Range"]["end"],
            json!({ "value": 3, "from_end": true })
        );
        assert_eq2!(receiver["receiver"], json!({ "Source": { "name": "numbers" } }));
    }

    #[test]
    fn test_query_arg_round_trips_through_json() {
        let arg = QueryArg::Range((from_end(10)..from_end(0)).into());
        let json = serde_json::to_string(&arg).unwrap();
        let back: QueryArg = serde_json::from_str(&json).unwrap();
        assert_eq2!(back, arg);
    }
}
