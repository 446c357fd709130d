//! Caller-owned support cache.
//!
//! The engine keeps no state between runs. A caller re-analysing the same
//! transactions with different thresholds can hand a [`SupportMemo`] to
//! [`crate::Miner::mine_with_memo`] so supports computed in earlier runs are
//! reused. A memo remembers a stamp of the collection it was filled from
//! and empties itself when it is used with a different one, so a cached
//! support always belongs to the transactions being mined.

use crate::apriori::support;
use crate::itemset::{Item, Itemset, Transaction};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Identifies a transaction collection: its size, total item count and a
/// digest of its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CollectionStamp {
    transactions: usize,
    items: usize,
    digest: u64,
}

impl CollectionStamp {
    fn of<T: Hash>(transactions: &[Transaction<T>]) -> Self {
        let mut hasher = DefaultHasher::new();
        let mut items = 0;
        for transaction in transactions {
            transaction.hash(&mut hasher);
            items += transaction.len();
        }

        Self {
            transactions: transactions.len(),
            items,
            digest: hasher.finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SupportMemo<T> {
    supports: HashMap<Itemset<T>, usize>,
    filled_from: Option<CollectionStamp>,
    hits: usize,
    misses: usize,
}

impl<T> Default for SupportMemo<T> {
    fn default() -> Self {
        Self {
            supports: HashMap::new(),
            filled_from: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<T: Item> SupportMemo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, itemset: &Itemset<T>) -> Option<usize> {
        self.supports.get(itemset).copied()
    }

    /// Only valid after `bind` for the collection `support` was counted on.
    pub(crate) fn insert(&mut self, itemset: Itemset<T>, support: usize) {
        self.supports.insert(itemset, support);
    }

    /// Ties the memo to `transactions`, dropping every cached support if it
    /// was filled from another collection.
    pub fn bind(&mut self, transactions: &[Transaction<T>]) {
        let stamp = CollectionStamp::of(transactions);
        if self.filled_from == Some(stamp) {
            return;
        }

        if !self.supports.is_empty() {
            debug!(
                cached = self.supports.len(),
                transactions = transactions.len(),
                "support memo was filled from another collection, clearing"
            );
        }
        self.clear();
        self.filled_from = Some(stamp);
    }

    /// Cached support of `itemset`, counted against `transactions` on a miss.
    pub fn support(&mut self, itemset: &Itemset<T>, transactions: &[Transaction<T>]) -> usize {
        self.bind(transactions);

        if let Some(support) = self.get(itemset) {
            self.hits += 1;
            return support;
        }

        self.misses += 1;
        let support = support::count(itemset, transactions);
        self.supports.insert(itemset.clone(), support);
        support
    }

    /// Supports of a whole level; only the misses are counted.
    pub fn count_all(
        &mut self,
        candidates: &[Itemset<T>],
        transactions: &[Transaction<T>],
        parallel: bool,
    ) -> Vec<usize> {
        self.bind(transactions);
        self.count_all_bound(candidates, transactions, parallel)
    }

    /// `count_all` for a memo already bound to `transactions`.
    pub(crate) fn count_all_bound(
        &mut self,
        candidates: &[Itemset<T>],
        transactions: &[Transaction<T>],
        parallel: bool,
    ) -> Vec<usize> {
        let mut supports: Vec<Option<usize>> =
            candidates.iter().map(|candidate| self.get(candidate)).collect();

        let missing: Vec<Itemset<T>> = candidates
            .iter()
            .zip(&supports)
            .filter(|(_, cached)| cached.is_none())
            .map(|(candidate, _)| candidate.clone())
            .collect();

        self.hits += candidates.len() - missing.len();
        self.misses += missing.len();

        let counted = support::count_all(&missing, transactions, parallel);
        let mut fresh = missing.into_iter().zip(counted);

        for slot in supports.iter_mut().filter(|slot| slot.is_none()) {
            if let Some((itemset, support)) = fresh.next() {
                *slot = Some(support);
                self.supports.insert(itemset, support);
            }
        }

        supports.into_iter().map(|support| support.unwrap_or(0)).collect()
    }
}

impl<T> SupportMemo<T> {
    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.supports.clear();
        self.filled_from = None;
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transactions() -> Vec<Transaction<&'static str>> {
        vec![
            Transaction::new(vec!["a", "b"]),
            Transaction::new(vec!["b", "c"]),
            Transaction::new(vec!["a", "b", "c"]),
        ]
    }

    #[test]
    fn test_support_is_cached() {
        let transactions = transactions();
        let mut memo = SupportMemo::new();
        let ab = Itemset::new(vec!["a", "b"]);

        assert_eq!(memo.support(&ab, &transactions), 2);
        assert_eq!(memo.support(&ab, &transactions), 2);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_count_all_mixes_cached_and_fresh() {
        let transactions = transactions();
        let mut memo = SupportMemo::new();
        memo.bind(&transactions);
        memo.insert(Itemset::new(vec!["b", "c"]), 2);

        let candidates = vec![
            Itemset::new(vec!["a", "b"]),
            Itemset::new(vec!["b", "c"]),
            Itemset::new(vec!["a", "c"]),
        ];

        assert_eq!(memo.count_all(&candidates, &transactions, false), vec![2, 2, 1]);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 2);
        assert_eq!(memo.get(&Itemset::new(vec!["a", "c"])), Some(1));

        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.hits(), 0);
    }

    #[test]
    fn test_switching_collections_drops_cached_supports() {
        let paired = vec![Transaction::new(vec!["a", "b"]), Transaction::new(vec!["a", "b"])];
        let split = vec![Transaction::new(vec!["a"]), Transaction::new(vec!["b"])];
        let ab = Itemset::new(vec!["a", "b"]);

        let mut memo = SupportMemo::new();
        assert_eq!(memo.support(&ab, &paired), 2);

        // Same length and item count, different contents
        assert_eq!(memo.support(&ab, &split), 0);
        assert_eq!(memo.count_all(&[ab.clone()], &split, false), vec![0]);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);

        assert_eq!(memo.support(&ab, &paired), 2);
        assert_eq!(memo.misses(), 1);
    }
}
