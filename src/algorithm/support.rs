//! Support-box arithmetic on per-axis integer ranges
//!
//! Supports are half-open `Range<i64>` per axis. Public entry points that take
//! inclusive bounds convert at the boundary.

use std::ops::{Range, RangeInclusive};

/// Minimal covering box of a family of per-axis range tuples.
///
/// Axis `k` of the result is `[min start, max stop)` over every tuple that has
/// an axis `k`; shorter tuples contribute nothing on their missing axes. An
/// empty family yields an empty tuple.
pub fn minimal_covering_range(boxes: &[Vec<Range<i64>>]) -> Vec<Range<i64>> {
    let ndim = boxes.iter().map(Vec::len).max().unwrap_or(0);
    (0..ndim)
        .map(|axis| {
            let column = boxes.iter().filter_map(|b| b.get(axis));
            let start = column.clone().map(|r| r.start).min().unwrap_or(0);
            let end = column.map(|r| r.end).max().unwrap_or(0);
            start..end
        })
        .collect()
}

/// Covering range of two ranges, ignoring empty ones.
pub fn union_range(a: &Range<i64>, b: &Range<i64>) -> Range<i64> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => a.start.min(b.start)..a.start.min(b.start),
        (true, false) => b.clone(),
        (false, true) => a.clone(),
        (false, false) => a.start.min(b.start)..a.end.max(b.end),
    }
}

/// Number of integers in a half-open range (zero when reversed).
#[inline]
pub fn range_len(r: &Range<i64>) -> usize {
    (r.end - r.start).max(0) as usize
}

/// Convert an inclusive range to the equivalent half-open one.
#[inline]
pub fn half_open(r: &RangeInclusive<i64>) -> Range<i64> {
    let start = *r.start();
    start..(*r.end() + 1).max(start)
}
