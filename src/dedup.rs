//! Order-preserving deduplication
//!
//! Accumulated pages can overlap (the backing data set may shift between
//! fetches), so the assembled item list is collapsed to the first occurrence
//! of each key. Pure functions, no engine state involved.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove later duplicates from `items`, keeping the first element bearing
/// each key in its original relative position. Runs in O(n) using a seen-key
/// set.
pub fn dedupe_by<T, K, F>(items: Vec<T>, key_of: F) -> Vec<T>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(key_of(item)))
        .collect()
}

/// Remove later duplicates from `items`, keyed by the items themselves
pub fn dedupe<T>(items: Vec<T>) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    dedupe_by(items, Clone::clone)
}
