//! Merge utilities over strictly ascending, duplicate-free `u32` slices.
//!
//! Points of the permutation domain and raw permutation identifiers are
//! both represented as `u32`, so one family of merge routines serves both.
//! Every input slice must be sorted ascending with unique values; outputs
//! uphold the same contract.

/// Returns whether `x` occurs in the ascending slice `xs`.
pub fn contains(xs: &[u32], x: u32) -> bool {
    xs.binary_search(&x).is_ok()
}

/// Merges two ascending unique slices into their ascending unique union.
pub fn union(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Intersects two ascending unique slices.
pub fn intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Returns the elements of `a` that do not occur in `b`.
pub fn difference(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() {
        return Vec::new();
    }
    if b.is_empty() {
        return a.to_vec();
    }
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out
}

/// Sorts the vector ascending, removes duplicates in place, and returns it.
pub fn sort_unique(mut xs: Vec<u32>) -> Vec<u32> {
    xs.sort_unstable();
    xs.dedup();
    xs
}
