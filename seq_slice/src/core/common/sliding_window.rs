// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounded FIFO buffer used by the forward-only strategy to hold "the last `k` elements
//! seen so far" - see [`SlidingWindow`].

use crate::{Length, len};

/// Slots that are reserved up front. Larger windows grow lazily as elements arrive, so
/// that a huge from-end count over a short source does not allocate for the count.
const MAX_PREALLOCATED_SLOTS: usize = 256;

/// A ring buffer with a capacity that is fixed at construction time (but only known at
/// runtime). Pushing into a full window evicts the oldest element and hands it back to
/// the caller.
///
/// ```text
///  capacity = 3
///
///  push(a) push(b) push(c)   push(d) -> evicts a
///  ┌───┬───┬───┐            ┌───┬───┬───┐
///  │ a │ b │ c │            │ d │ b │ c │
///  └───┴───┴───┘            └───┴───┴───┘
///    ▲                            ▲
///    tail (oldest)                tail (oldest)
///
///  pop_front order: b, c, d
/// ```
///
/// A window with capacity `0` stores nothing: every pushed element is handed straight
/// back, which is exactly what "exclude the last 0 elements" needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SlidingWindow<T> {
    internal_storage: Vec<Option<T>>,
    capacity: usize,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> SlidingWindow<T> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        SlidingWindow {
            internal_storage: Vec::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS)),
            capacity,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Insert at head (ie, insert the newest item). When the window is already full the
    /// oldest item is evicted and returned.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }

        let evicted = if self.count == self.capacity {
            self.pop_front()
        } else {
            None
        };

        if self.internal_storage.len() < self.capacity {
            self.internal_storage.push(Some(value));
        } else {
            self.internal_storage[self.head] = Some(value);
        }
        self.head = (self.head + 1) % self.capacity;
        self.count += 1;

        evicted
    }

    /// Remove from tail (ie, remove the oldest item).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let value = self.internal_storage[self.tail].take();
        self.tail = (self.tail + 1) % self.capacity;
        self.count -= 1;
        value
    }

    /// Drop the `n` oldest items.
    pub fn skip_front(&mut self, n: usize) {
        for _ in 0..n.min(self.count) {
            self.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> Length { len(self.count) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[must_use]
    pub fn is_full(&self) -> bool { self.count == self.capacity }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }
}
