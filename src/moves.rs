//! Bounds-checked path moves.
//!
//! Every move works on an owned tour and leaves index 0 (the fixed
//! start) untouched as long as callers draw indices from `1..n`.
//!
//! - [`reverse_segment`]: reverse an inclusive sub-range (2-opt move), O(n)
//! - [`relocate`]: remove one element and reinsert it elsewhere, O(n)
//! - [`distinct_pair`]: two distinct sorted indices from a range, O(1)

use std::ops::Range;

use rand::Rng;

// ============================================================================
// Moves
// ============================================================================

/// Reverses `tour[i..=j]` in place.
///
/// # Panics
/// Panics if `i > j` or `j >= tour.len()`.
pub fn reverse_segment<T>(tour: &mut [T], i: usize, j: usize) {
    assert!(i <= j, "segment start {i} is past its end {j}");
    assert!(
        j < tour.len(),
        "segment end {j} out of bounds for length {}",
        tour.len()
    );
    tour[i..=j].reverse();
}

/// Removes the element at `from` and reinserts it at `to`, where `to`
/// indexes the shortened tour (so `to == tour.len() - 1` appends).
///
/// # Panics
/// Panics if `from >= tour.len()` or `to >= tour.len()`.
pub fn relocate<T>(tour: &mut Vec<T>, from: usize, to: usize) {
    let n = tour.len();
    assert!(from < n, "relocate source {from} out of bounds for length {n}");
    assert!(to < n, "relocate target {to} out of bounds for length {n}");
    let item = tour.remove(from);
    tour.insert(to, item);
}

// ============================================================================
// Sampling
// ============================================================================

/// Draws two distinct indices from `range` and returns them sorted.
///
/// # Panics
/// Panics if `range` holds fewer than two indices.
pub fn distinct_pair<R: Rng>(range: Range<usize>, rng: &mut R) -> (usize, usize) {
    assert!(
        range.len() >= 2,
        "need at least two indices, got {range:?}"
    );
    let a = rng.random_range(range.start..range.end);
    let mut b = rng.random_range(range.start..range.end - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
