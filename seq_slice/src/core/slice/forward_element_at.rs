// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_SLICE_ENGINE, Index, SliceError, SliceResult, SlidingWindow};

/// Find the single element at `index` in one forward pass.
///
/// - A forward index skips to the position and takes one element, so the rest of the
///   source is never pulled.
/// - A from-end index `^k` keeps the last `k` elements seen in a window. When the source
///   runs out, the oldest element in a full window is the answer.
///
/// # Errors
///
/// [`SliceError::IndexOutOfRange`] when the source runs out before the position, when a
/// from-end window never fills, or for `^0` (which is past the last element of any
/// source, so the source is not pulled at all).
pub fn forward_element_at<I: Iterator>(source: I, index: Index) -> SliceResult<I::Item> {
    if DEBUG_SLICE_ENGINE {
        tracing::debug!(
            message = "forward-only element at",
            index = %index,
            window = if index.is_from_end() { index.value() } else { 0 }
        );
    }

    if index == Index::END {
        return Err(SliceError::IndexOutOfRange {
            index,
            available: None,
        });
    }

    let mut seen = 0_usize;

    if !index.is_from_end() {
        for item in source {
            if seen == index.value() {
                return Ok(item);
            }
            seen += 1;
        }
        return Err(SliceError::IndexOutOfRange {
            index,
            available: Some(seen),
        });
    }

    let mut window = SlidingWindow::new(index.value());
    for item in source {
        seen += 1;
        window.push(item);
    }

    if !window.is_full() {
        return Err(SliceError::IndexOutOfRange {
            index,
            available: Some(seen),
        });
    }
    window.pop_front().ok_or(SliceError::IndexOutOfRange {
        index,
        available: Some(seen),
    })
}
