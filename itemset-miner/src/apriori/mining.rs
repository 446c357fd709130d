use super::levels::Levels;
use crate::config::{MinSupport, MinerConfig};
use crate::error::Result;
use crate::itemset::{Item, Itemset, Transaction};
use crate::memo::SupportMemo;
use crate::storage::{FrequentItemset, FrequentLevel};
use tracing::debug;

/// Level-wise frequent itemset miner.
///
/// Holds only its configuration; every call mines from scratch.
#[derive(Debug, Clone)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Lazily mined levels, smallest itemsets first.
    pub fn levels<'a, T: Item>(&self, transactions: &'a [Transaction<T>]) -> Levels<'a, T> {
        let min_count = self.config.min_support.min_count(transactions.len());
        Levels::new(
            transactions,
            min_count,
            self.config.max_len,
            self.config.parallel,
        )
    }

    /// Like [`Miner::levels`], reading and filling a caller-owned support cache.
    pub fn levels_with_memo<'a, T: Item>(
        &self,
        transactions: &'a [Transaction<T>],
        memo: &'a mut SupportMemo<T>,
    ) -> Levels<'a, T> {
        self.levels(transactions).with_memo(memo)
    }

    pub fn mine_levels<T: Item>(&self, transactions: &[Transaction<T>]) -> Vec<FrequentLevel<T>> {
        let levels: Vec<FrequentLevel<T>> = self.levels(transactions).collect();
        log_summary(&levels);
        levels
    }

    /// Frequent itemsets with their supports, size-ascending.
    pub fn mine_with_support<T: Item>(
        &self,
        transactions: &[Transaction<T>],
    ) -> Vec<FrequentItemset<T>> {
        flatten_with_support(self.mine_levels(transactions))
    }

    pub fn mine<T: Item>(&self, transactions: &[Transaction<T>]) -> Vec<Itemset<T>> {
        self.mine_levels(transactions)
            .into_iter()
            .flat_map(FrequentLevel::into_itemsets)
            .collect()
    }

    pub fn mine_with_memo<T: Item>(
        &self,
        transactions: &[Transaction<T>],
        memo: &mut SupportMemo<T>,
    ) -> Vec<FrequentItemset<T>> {
        let levels: Vec<FrequentLevel<T>> = self.levels_with_memo(transactions, memo).collect();
        log_summary(&levels);
        flatten_with_support(levels)
    }
}

/// Every itemset contained in at least `min_support` transactions.
///
/// Output is size-ascending; within a size, itemsets come in ascending
/// canonical order. An empty result means no pattern reached the threshold.
pub fn mine<T: Item>(transactions: &[Transaction<T>], min_support: usize) -> Vec<Itemset<T>> {
    count_miner(min_support).mine(transactions)
}

pub fn mine_with_support<T: Item>(
    transactions: &[Transaction<T>],
    min_support: usize,
) -> Vec<FrequentItemset<T>> {
    count_miner(min_support).mine_with_support(transactions)
}

fn count_miner(min_support: usize) -> Miner {
    // An absolute count with no size cap is always a valid config.
    Miner {
        config: MinerConfig::new(MinSupport::Count(min_support)),
    }
}

fn flatten_with_support<T>(levels: Vec<FrequentLevel<T>>) -> Vec<FrequentItemset<T>> {
    levels
        .into_iter()
        .flat_map(FrequentLevel::into_frequent_itemsets)
        .collect()
}

fn log_summary<T>(levels: &[FrequentLevel<T>]) {
    let total: usize = levels.iter().map(FrequentLevel::len).sum();
    debug!(levels = levels.len(), itemsets = total, "mining finished");
}
