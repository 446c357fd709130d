use crate::itemset::Itemset;
use serde::{Deserialize, Serialize};

/// A frequent itemset together with its verified support count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de> + Ord"))]
pub struct FrequentItemset<T> {
    pub itemset: Itemset<T>,
    pub support: usize,
}

impl<T> FrequentItemset<T> {
    /// Support as a share of `num_transactions`; zero for an empty collection.
    pub fn relative_support(&self, num_transactions: usize) -> f64 {
        if num_transactions == 0 {
            return 0.0;
        }
        self.support as f64 / num_transactions as f64
    }
}

/// All frequent itemsets of one size, in generation order, with supports
/// stored alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel<T> {
    itemsets: Vec<Itemset<T>>,
    supports: Vec<usize>,
    pub itemset_size: usize,
}

impl<T> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self::with_capacity(itemset_size, 0)
    }

    pub fn with_capacity(itemset_size: usize, estimated_itemsets: usize) -> Self {
        Self {
            itemsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
            itemset_size,
        }
    }

    pub fn add_itemset_with_support(&mut self, itemset: Itemset<T>, support: usize) -> usize {
        debug_assert_eq!(itemset.len(), self.itemset_size);
        self.itemsets.push(itemset);
        self.supports.push(support);
        self.itemsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &Itemset<T> {
        &self.itemsets[idx]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn itemsets(&self) -> &[Itemset<T>] {
        &self.itemsets
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<T>, usize)> {
        self.itemsets.iter().zip(self.supports.iter().copied())
    }

    pub fn into_itemsets(self) -> Vec<Itemset<T>> {
        self.itemsets
    }

    pub fn into_frequent_itemsets(self) -> impl Iterator<Item = FrequentItemset<T>> {
        self.itemsets
            .into_iter()
            .zip(self.supports)
            .map(|(itemset, support)| FrequentItemset { itemset, support })
    }
}
