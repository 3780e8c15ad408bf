// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, convert::Infallible, marker::PhantomData};

/// A source that knows its element count and can read any position directly.
///
/// Implemented for shared borrows of the standard contiguous collections, so items are
/// handed out as references and the collection is never consumed.
pub trait RandomAccess {
    type Item;

    /// Number of elements in the source.
    fn count(&self) -> usize;

    /// The element at zero-based `position`, or [`None`] past the end.
    fn get_at(&self, position: usize) -> Option<Self::Item>;
}

impl<'a, T> RandomAccess for &'a [T] {
    type Item = &'a T;

    fn count(&self) -> usize { self.len() }

    fn get_at(&self, position: usize) -> Option<Self::Item> { self.get(position) }
}

impl<'a, T, const N: usize> RandomAccess for &'a [T; N] {
    type Item = &'a T;

    fn count(&self) -> usize { N }

    fn get_at(&self, position: usize) -> Option<Self::Item> { self.get(position) }
}

impl<'a, T> RandomAccess for &'a Vec<T> {
    type Item = &'a T;

    fn count(&self) -> usize { self.len() }

    fn get_at(&self, position: usize) -> Option<Self::Item> { self.get(position) }
}

impl<'a, T> RandomAccess for &'a VecDeque<T> {
    type Item = &'a T;

    fn count(&self) -> usize { self.len() }

    fn get_at(&self, position: usize) -> Option<Self::Item> { self.get(position) }
}

/// Stands in for the random access half of [`crate::Source`] when a source can only be
/// enumerated forward. It has no values, so that half of the dispatch is unreachable.
#[derive(Debug)]
pub struct NoRandomAccess<T>(Infallible, PhantomData<T>);

impl<T> RandomAccess for NoRandomAccess<T> {
    type Item = T;

    fn count(&self) -> usize { match self.0 {} }

    fn get_at(&self, _position: usize) -> Option<Self::Item> { match self.0 {} }
}
