// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{NoRandomAccess, RandomAccess};
use crate::{SliceError, SliceResult};
use std::{collections::VecDeque, iter::Empty};

/// A source whose capability has been resolved, ready for one strategy to run over it.
#[derive(Debug)]
pub enum Source<R, I> {
    RandomAccess(R),
    ForwardOnly(I),
}

/// Marks any [`Iterator`] as a single-pass, forward-only source, with no count and no
/// positional access. Use [`forward_only()`] to make one.
#[derive(Debug, Clone)]
pub struct ForwardOnly<I>(pub I);

#[must_use]
pub fn forward_only<I: IntoIterator>(source: I) -> ForwardOnly<I::IntoIter> {
    ForwardOnly(source.into_iter())
}

/// Resolve the capability of a source, exactly once per call.
///
/// Both associated strategy types are always named. The one that a given source never
/// uses is a type that can't produce any items ([`Empty`] or [`NoRandomAccess`]).
pub trait IntoSliceSource {
    type Item;
    type RandomAccess: RandomAccess<Item = Self::Item>;
    type ForwardOnly: Iterator<Item = Self::Item>;

    /// # Errors
    ///
    /// [`SliceError::NullSource`] if the source is absent.
    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>>;
}

impl<'a, T> IntoSliceSource for &'a [T] {
    type Item = &'a T;
    type RandomAccess = Self;
    type ForwardOnly = Empty<&'a T>;

    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>> {
        Ok(Source::RandomAccess(self))
    }
}

impl<'a, T> IntoSliceSource for &'a Vec<T> {
    type Item = &'a T;
    type RandomAccess = Self;
    type ForwardOnly = Empty<&'a T>;

    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>> {
        Ok(Source::RandomAccess(self))
    }
}

impl<'a, T> IntoSliceSource for &'a VecDeque<T> {
    type Item = &'a T;
    type RandomAccess = Self;
    type ForwardOnly = Empty<&'a T>;

    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>> {
        Ok(Source::RandomAccess(self))
    }
}

impl<'a, T, const N: usize> IntoSliceSource for &'a [T; N] {
    type Item = &'a T;
    type RandomAccess = Self;
    type ForwardOnly = Empty<&'a T>;

    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>> {
        Ok(Source::RandomAccess(self))
    }
}

impl<I: Iterator> IntoSliceSource for ForwardOnly<I> {
    type Item = I::Item;
    type RandomAccess = NoRandomAccess<I::Item>;
    type ForwardOnly = I;

    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>> {
        Ok(Source::ForwardOnly(self.0))
    }
}

/// An absent source is [`None`].
impl<S: IntoSliceSource> IntoSliceSource for Option<S> {
    type Item = S::Item;
    type RandomAccess = S::RandomAccess;
    type ForwardOnly = S::ForwardOnly;

    fn into_source(self) -> SliceResult<Source<Self::RandomAccess, Self::ForwardOnly>> {
        match self {
            Some(source) => source.into_source(),
            None => Err(SliceError::NullSource {
                argument: "source".to_string(),
            }),
        }
    }
}
