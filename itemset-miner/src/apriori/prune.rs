use crate::itemset::{Item, Itemset};
use std::collections::HashSet;

/// Drops every candidate that has an infrequent size-`k - 1` subset.
///
/// Only consults `frequent_at_level`; nothing is counted here. At `k <= 2`
/// the subsets are single frequent items by construction and the
/// candidates pass through untouched.
pub fn prune<T: Item>(
    candidates: Vec<Itemset<T>>,
    frequent_at_level: &[Itemset<T>],
    k: usize,
) -> Vec<Itemset<T>> {
    if k <= 2 {
        return candidates;
    }

    let known: HashSet<&Itemset<T>> = frequent_at_level.iter().collect();

    candidates
        .into_iter()
        .filter(|candidate| has_frequent_subsets(candidate, &known))
        .collect()
}

fn has_frequent_subsets<T: Item>(candidate: &Itemset<T>, known: &HashSet<&Itemset<T>>) -> bool {
    candidate
        .immediate_subsets()
        .all(|subset| known.contains(&subset))
}
