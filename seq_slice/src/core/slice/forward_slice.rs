// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single-pass slicing for sources that can only be enumerated forward, without a count
//! or positional access - see [`ForwardSlice`].
//!
//! # Rules
//!
//! The rule is picked once, from which endpoints count from the end:
//!
//! | Start      | End        | Rule                | Look-behind window   | Stops early? |
//! |------------|------------|---------------------|----------------------|--------------|
//! | forward    | forward    | skip, then take     | none                 | yes          |
//! | forward    | from end   | skip, then delay    | `end.value`          | no           |
//! | from end   | either     | capture the tail    | `start.value`        | no           |
//!
//! Delaying by `k` means every element is held back in a FIFO until `k` newer ones have
//! arrived. Whatever is still held back when the source runs out is the excluded tail:
//!
//! ```text
//! 1..^2 over a b c d e f
//!
//!  pulled:   a   b   c   d   e   f   (end)
//!  skipped:  a
//!  window:      [b] [b c] [c d] [d e] [e f]
//!  yielded:              b     c     d
//!                                         e f are discarded
//! ```
//!
//! Capturing the tail keeps only the most recent `start.value` elements while counting
//! every element seen. Once the source runs out the count is known, both endpoints are
//! resolved against it, and the result is read out of the window. The resolved start is
//! always the oldest element the window still holds.

use crate::{DEBUG_SLICE_ENGINE, Index, IndexRange, SlidingWindow};
use std::{fmt::{Debug, Formatter, Result as FmtResult},
          iter::FusedIterator,
          mem,
          ops::Range};

/// Lazy, single-pass slice of a forward-only source.
///
/// Nothing is pulled from the source until the first call to [`Iterator::next()`]. The
/// source is dropped as soon as no more elements are needed from it: on exhaustion,
/// when a forward end is reached, or when this iterator itself is dropped.
pub struct ForwardSlice<I: Iterator> {
    source: Option<I>,
    state: ForwardSliceState<I::Item>,
}

enum ForwardSliceState<T> {
    /// Both endpoints forward.
    SkipThenTake { skip: usize, remaining: usize },
    /// Forward start, from-end end.
    SkipThenDelay {
        skip: usize,
        window: SlidingWindow<T>,
    },
    /// From-end start, not exhausted yet.
    CaptureTail {
        range: IndexRange,
        window: SlidingWindow<T>,
    },
    /// From-end start, source exhausted, reading the result out of the window.
    DrainTail {
        window: SlidingWindow<T>,
        remaining: usize,
    },
    Done,
}

impl<T> ForwardSliceState<T> {
    fn name(&self) -> &'static str {
        match self {
            Self::SkipThenTake { .. } => "SkipThenTake",
            Self::SkipThenDelay { .. } => "SkipThenDelay",
            Self::CaptureTail { .. } => "CaptureTail",
            Self::DrainTail { .. } => "DrainTail",
            Self::Done => "Done",
        }
    }
}

impl<I: Iterator> ForwardSlice<I> {
    #[must_use]
    pub fn new(source: I, range: IndexRange) -> Self {
        let IndexRange { start, end } = range;

        let state = match (start.is_from_end(), end.is_from_end()) {
            (false, false) => ForwardSliceState::SkipThenTake {
                skip: start.value(),
                remaining: end.value().saturating_sub(start.value()),
            },
            (false, true) => ForwardSliceState::SkipThenDelay {
                skip: start.value(),
                window: SlidingWindow::new(end.value()),
            },
            (true, _) if is_empty_from_end_start(start, end) => ForwardSliceState::Done,
            (true, _) => ForwardSliceState::CaptureTail {
                range,
                window: SlidingWindow::new(start.value()),
            },
        };

        let is_empty = matches!(
            state,
            ForwardSliceState::Done
                | ForwardSliceState::SkipThenTake { remaining: 0, .. }
        );

        if DEBUG_SLICE_ENGINE {
            tracing::debug!(
                message = "forward-only slice",
                range = %range,
                rule = state.name(),
                window = range.window(),
                is_empty = is_empty
            );
        }

        let mut it = Self {
            source: Some(source),
            state,
        };
        if is_empty {
            it.finish();
        }
        it
    }

    /// Release the source and any buffered elements. Every later call to
    /// [`Iterator::next()`] returns [`None`].
    fn finish(&mut self) {
        self.source = None;
        self.state = ForwardSliceState::Done;
    }

    fn next_skip_then_take(&mut self) -> Option<I::Item> {
        let ForwardSliceState::SkipThenTake { skip, remaining } = &mut self.state else {
            return None;
        };
        let source = self.source.as_mut()?;

        let item = source.nth(mem::take(skip));
        match item {
            Some(_) => {
                *remaining -= 1;
                if *remaining == 0 {
                    self.finish();
                }
            }
            None => self.finish(),
        }
        item
    }

    fn next_skip_then_delay(&mut self) -> Option<I::Item> {
        let ForwardSliceState::SkipThenDelay { skip, window } = &mut self.state else {
            return None;
        };
        let source = self.source.as_mut()?;

        let skip = mem::take(skip);
        if skip > 0 && source.nth(skip - 1).is_none() {
            self.finish();
            return None;
        }

        loop {
            let Some(item) = source.next() else {
                // Whatever the window still holds is the excluded tail.
                self.finish();
                return None;
            };
            if let Some(evicted) = window.push(item) {
                return Some(evicted);
            }
        }
    }

    fn next_capture_tail(&mut self) -> Option<I::Item> {
        let ForwardSliceState::CaptureTail { range, window } = &mut self.state else {
            return None;
        };
        let source = self.source.take()?;

        let mut seen = 0_usize;
        for item in source {
            seen += 1;
            // Evicted elements are older than any resolvable start.
            window.push(item);
        }

        let Range { start, end } = range.clamp_to(seen);
        let buffered_from = seen - window.len().as_usize();
        debug_assert_eq!(start, buffered_from);

        let mut window = mem::replace(window, SlidingWindow::new(0));
        window.skip_front(start - buffered_from);
        self.state = ForwardSliceState::DrainTail {
            window,
            remaining: end - start,
        };

        self.next_drain_tail()
    }

    fn next_drain_tail(&mut self) -> Option<I::Item> {
        let ForwardSliceState::DrainTail { window, remaining } = &mut self.state else {
            return None;
        };

        if *remaining == 0 {
            self.finish();
            return None;
        }
        *remaining -= 1;
        window.pop_front()
    }
}

/// A from-end start with nothing after it, `^0..`, or a from-end end that is not after
/// a from-end start, `^s..^e` with `e >= s`, denotes nothing for every length.
fn is_empty_from_end_start(start: Index, end: Index) -> bool {
    start.value() == 0 || (end.is_from_end() && end.value() >= start.value())
}

impl<I: Iterator> Iterator for ForwardSlice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            ForwardSliceState::SkipThenTake { .. } => self.next_skip_then_take(),
            ForwardSliceState::SkipThenDelay { .. } => self.next_skip_then_delay(),
            ForwardSliceState::CaptureTail { .. } => self.next_capture_tail(),
            ForwardSliceState::DrainTail { .. } => self.next_drain_tail(),
            ForwardSliceState::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let source_upper = || self.source.as_ref().and_then(|it| it.size_hint().1);
        match &self.state {
            ForwardSliceState::SkipThenTake { skip, remaining } => {
                let upper = source_upper()
                    .map_or(*remaining, |it| it.saturating_sub(*skip).min(*remaining));
                (0, Some(upper))
            }
            ForwardSliceState::SkipThenDelay { window, .. } => {
                (0, source_upper().and_then(|it| it.checked_add(window.len().as_usize())))
            }
            // The start is never further back than the window capacity.
            ForwardSliceState::CaptureTail { window, .. } => {
                (0, Some(window.capacity()))
            }
            ForwardSliceState::DrainTail { remaining, .. } => (*remaining, Some(*remaining)),
            ForwardSliceState::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for ForwardSlice<I> {}

impl<I: Iterator> Debug for ForwardSlice<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ForwardSlice")
            .field("state", &self.state.name())
            .field("holds_source", &self.source.is_some())
            .finish()
    }
}
