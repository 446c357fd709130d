use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Anything that can be mined: totally ordered, hashable and shareable
/// across the rayon pool.
pub trait Item: Ord + Hash + Clone + Send + Sync {}

impl<T> Item for T where T: Ord + Hash + Clone + Send + Sync {}

/// A set of distinct items, kept sorted ascending.
///
/// The canonical order is established once at construction, so equality,
/// hashing and ordering are plain comparisons of the sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de> + Ord")
)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T: Ord> Itemset<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// True when every item of `self` also appears in `other`.
    pub fn is_subset_of(&self, other: &Itemset<T>) -> bool {
        is_sorted_subset(&self.items, &other.items)
    }
}

impl<T> Itemset<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// All items but the last one; the join key of the candidate generator.
    pub fn prefix(&self) -> &[T] {
        match self.items.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }
}

impl<T: Ord + Clone> Itemset<T> {
    /// Appends `item`, which must sort after every item already present.
    pub(crate) fn extended_with(&self, item: T) -> Self {
        debug_assert!(self.items.last().map_or(true, |last| *last < item));
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Self { items }
    }

    /// The itemset with the item at `idx` removed.
    pub fn without(&self, idx: usize) -> Self {
        let mut items = self.items.clone();
        items.remove(idx);
        Self { items }
    }

    /// Every subset one item smaller, in order of the removed position.
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset<T>> + '_ {
        (0..self.items.len()).map(move |idx| self.without(idx))
    }
}

impl<T: Ord> From<Vec<T>> for Itemset<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<Itemset<T>> for Vec<T> {
    fn from(itemset: Itemset<T>) -> Self {
        itemset.items
    }
}

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Itemset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

/// One group of items, e.g. the keywords of a single conversation turn.
///
/// Duplicates collapse on construction and items are stored sorted, so the
/// subset test against an itemset is a single linear merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de> + Ord")
)]
pub struct Transaction<T> {
    items: Vec<T>,
}

impl<T: Ord> Transaction<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn contains_itemset(&self, itemset: &Itemset<T>) -> bool {
        is_sorted_subset(itemset.items(), &self.items)
    }
}

impl<T> Transaction<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord> From<Vec<T>> for Transaction<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<Transaction<T>> for Vec<T> {
    fn from(transaction: Transaction<T>) -> Self {
        transaction.items
    }
}

impl<T: Ord> FromIterator<T> for Transaction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Both slices must be strictly ascending.
fn is_sorted_subset<T: Ord>(needles: &[T], haystack: &[T]) -> bool {
    if needles.len() > haystack.len() {
        return false;
    }

    let mut rest = haystack.iter();
    'needles: for needle in needles {
        for item in rest.by_ref() {
            match item.cmp(needle) {
                Ordering::Less => continue,
                Ordering::Equal => continue 'needles,
                Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
