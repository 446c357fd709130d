use crate::itemset::{Item, Itemset, Transaction};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Number of transactions containing every item of `itemset`.
///
/// The empty itemset is contained in every transaction.
pub fn count<T: Item>(itemset: &Itemset<T>, transactions: &[Transaction<T>]) -> usize {
    transactions
        .iter()
        .filter(|tx| tx.contains_itemset(itemset))
        .count()
}

/// Supports of a whole level, in candidate order.
///
/// Candidates are independent of each other, so with `parallel` set they
/// are spread over the rayon pool and joined before returning.
pub fn count_all<T: Item>(
    candidates: &[Itemset<T>],
    transactions: &[Transaction<T>],
    parallel: bool,
) -> Vec<usize> {
    if parallel {
        candidates
            .par_iter()
            .map(|candidate| count(candidate, transactions))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| count(candidate, transactions))
            .collect()
    }
}

/// Per-item tally for the first level, in ascending item order.
pub fn count_items<T: Item>(transactions: &[Transaction<T>]) -> BTreeMap<T, usize> {
    let mut item_counts = BTreeMap::new();

    for transaction in transactions {
        for item in transaction.items() {
            *item_counts.entry(item.clone()).or_insert(0) += 1;
        }
    }

    item_counts
}
