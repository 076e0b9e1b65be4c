//! Small shared helpers.

use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicate, preserving first-occurrence order.
pub fn dedup_stable<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}
