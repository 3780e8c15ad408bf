// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DEBUG_QUERY_ADAPTER;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{any::{TypeId, type_name},
          sync::{Arc, LazyLock, PoisonError, RwLock}};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The slicing operations a query expression can carry. The display name is the
/// method name a provider sees, so both single-element lookups share a name and are
/// told apart by their argument.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum OperationKind {
    #[strum(serialize = "ElementAt")]
    ElementAtIndex,
    #[strum(serialize = "ElementAt")]
    ElementAtRange,
    #[strum(serialize = "Take")]
    SliceRange,
}

impl OperationKind {
    #[must_use]
    pub fn returns_sequence(&self) -> bool { matches!(self, OperationKind::SliceRange) }

    #[must_use]
    pub fn argument_type(&self) -> &'static str {
        match self {
            OperationKind::ElementAtIndex => "Index",
            OperationKind::ElementAtRange | OperationKind::SliceRange => "IndexRange",
        }
    }
}

/// Everything a provider needs to know about one operation for one element type.
/// Built once per shape by [`operation_descriptor()`] and then shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    pub kind: OperationKind,
    pub method_name: &'static str,
    pub element_type: &'static str,
    pub argument_type: &'static str,
    pub returns_sequence: bool,
}

impl OperationDescriptor {
    fn new<T: 'static>(kind: OperationKind) -> Self {
        Self {
            kind,
            method_name: kind.into(),
            element_type: type_name::<T>(),
            argument_type: kind.argument_type(),
            returns_sequence: kind.returns_sequence(),
        }
    }
}

type DescriptorKey = (OperationKind, TypeId);

/// Entries are write-once per key, so readers never observe a descriptor change.
static OPERATION_DESCRIPTOR_CACHE: LazyLock<
    RwLock<FxHashMap<DescriptorKey, Arc<OperationDescriptor>>>,
> = LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// The descriptor for `kind` over elements of type `T`. The first request for a shape
/// builds it; every later request gets the same [`Arc`].
#[must_use]
pub fn operation_descriptor<T: 'static>(kind: OperationKind) -> Arc<OperationDescriptor> {
    let key = (kind, TypeId::of::<T>());

    let cached = OPERATION_DESCRIPTOR_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();
    if let Some(descriptor) = cached {
        return descriptor;
    }

    let mut cache = OPERATION_DESCRIPTOR_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(key)
        .or_insert_with(|| {
            if DEBUG_QUERY_ADAPTER {
                tracing::debug!(
                    message = "operation descriptor cache miss",
                    kind = ?kind,
                    element_type = type_name::<T>()
                );
            }
            Arc::new(OperationDescriptor::new::<T>(kind))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::IntoEnumIterator;

    #[test]
    fn test_operation_kind_names() {
        let names: Vec<String> = OperationKind::iter().map(|it| it.to_string()).collect();
        assert_eq2!(names, vec!["ElementAt", "ElementAt", "Take"]);

        let name: &'static str = OperationKind::SliceRange.into();
        assert_eq2!(name, "Take");
    }

    #[test]
    fn test_descriptor_is_built_once_per_shape() {
        type Row = (u8, char);

        let first = operation_descriptor::<Row>(OperationKind::SliceRange);
        let second = operation_descriptor::<Row>(OperationKind::SliceRange);
        assert!(Arc::ptr_eq(&first, &second));

        let other_kind = operation_descriptor::<Row>(OperationKind::ElementAtIndex);
        assert!(!Arc::ptr_eq(&first, &other_kind));

        let other_type = operation_descriptor::<u64>(OperationKind::SliceRange);
        assert!(!Arc::ptr_eq(&first, &other_type));
    }

    #[test]
    fn test_descriptor_contents() {
        let descriptor = operation_descriptor::<u32>(OperationKind::ElementAtRange);
        assert_eq2!(
            *descriptor,
            OperationDescriptor {
                kind: OperationKind::ElementAtRange,
                method_name: "ElementAt",
                element_type: "u32",
                argument_type: "IndexRange",
                returns_sequence: false,
            }
        );
        assert!(operation_descriptor::<u32>(OperationKind::SliceRange).returns_sequence);
    }

    #[test]
    fn test_descriptor_cache_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| operation_descriptor::<i16>(OperationKind::SliceRange))
            })
            .collect();
        let descriptors: Vec<_> = handles.into_iter().map(|it| it.join().unwrap()).collect();
        for it in &descriptors {
            assert!(Arc::ptr_eq(it, &descriptors[0]));
        }
    }
}
