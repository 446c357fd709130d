use super::{candidates, prune, support};
use crate::itemset::{Item, Itemset, Transaction};
use crate::memo::SupportMemo;
use crate::storage::FrequentLevel;
use std::iter::FusedIterator;
use tracing::debug;

enum Phase<T> {
    /// Level 1 has not been counted yet.
    Seed,
    /// Holds the frequent itemsets of the last level yielded.
    Extend(Vec<Itemset<T>>),
    Done,
}

/// Lazily mined levels: each call to `next` runs one generate, prune,
/// count and filter pass and yields the frequent itemsets of that size.
///
/// Iteration ends at the first empty level or once `max_len` is reached.
/// Dropping the iterator early simply skips the remaining levels.
pub struct Levels<'a, T> {
    transactions: &'a [Transaction<T>],
    memo: Option<&'a mut SupportMemo<T>>,
    min_count: usize,
    max_len: Option<usize>,
    parallel: bool,
    phase: Phase<T>,
}

impl<'a, T: Item> Levels<'a, T> {
    pub(crate) fn new(
        transactions: &'a [Transaction<T>],
        min_count: usize,
        max_len: Option<usize>,
        parallel: bool,
    ) -> Self {
        Self {
            transactions,
            memo: None,
            min_count,
            max_len,
            parallel,
            phase: Phase::Seed,
        }
    }

    pub(crate) fn with_memo(mut self, memo: &'a mut SupportMemo<T>) -> Self {
        memo.bind(self.transactions);
        self.memo = Some(memo);
        self
    }

    /// Threshold this run filters against, as an absolute count.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    fn first_level(&mut self) -> FrequentLevel<T> {
        let item_counts = support::count_items(self.transactions);
        let mut level = FrequentLevel::with_capacity(1, item_counts.len());

        for (item, count) in item_counts {
            if count < self.min_count {
                continue;
            }

            let itemset = Itemset::singleton(item);
            if let Some(memo) = self.memo.as_deref_mut() {
                memo.insert(itemset.clone(), count);
            }
            level.add_itemset_with_support(itemset, count);
        }

        debug!(
            level = 1,
            transactions = self.transactions.len(),
            frequent = level.len(),
            "counted single items"
        );
        level
    }

    fn next_level(&mut self, previous: &[Itemset<T>]) -> FrequentLevel<T> {
        let k = previous.first().map_or(1, |itemset| itemset.len()) + 1;

        let generated = candidates::generate(previous, k);
        let num_generated = generated.len();
        let survivors = prune::prune(generated, previous, k);
        let num_pruned = num_generated - survivors.len();

        let supports = match self.memo.as_deref_mut() {
            Some(memo) => memo.count_all_bound(&survivors, self.transactions, self.parallel),
            None => support::count_all(&survivors, self.transactions, self.parallel),
        };

        let mut level = FrequentLevel::new(k);
        for (candidate, support) in survivors.into_iter().zip(supports) {
            if support >= self.min_count {
                level.add_itemset_with_support(candidate, support);
            }
        }

        debug!(
            level = k,
            candidates = num_generated,
            pruned = num_pruned,
            frequent = level.len(),
            "mined level"
        );
        level
    }
}

impl<'a, T: Item> Iterator for Levels<'a, T> {
    type Item = FrequentLevel<T>;

    fn next(&mut self) -> Option<FrequentLevel<T>> {
        let level = match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Done => return None,
            Phase::Seed => self.first_level(),
            Phase::Extend(previous) => self.next_level(&previous),
        };

        if level.is_empty() {
            debug!(level = level.itemset_size, "no frequent itemsets left");
            return None;
        }

        let reached_cap = self.max_len.is_some_and(|max_len| level.itemset_size >= max_len);
        if !reached_cap {
            self.phase = Phase::Extend(level.itemsets().to_vec());
        }

        Some(level)
    }
}

impl<'a, T: Item> FusedIterator for Levels<'a, T> {}
