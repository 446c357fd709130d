use crate::itemset::{Item, Itemset};

/// Size-`k` candidates from the frequent itemsets of size `k - 1`.
///
/// Two itemsets join when they agree on everything but their last item;
/// the candidate is the smaller one followed by the other's last item. At
/// `k = 2` every prefix is empty, so every pair of frequent items joins.
///
/// The input is sorted first, which makes itemsets sharing a prefix
/// contiguous and orders their last items, so each candidate is produced
/// exactly once and the output comes out in ascending order.
pub fn generate<T: Item>(frequent_at_level: &[Itemset<T>], k: usize) -> Vec<Itemset<T>> {
    if k < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<&Itemset<T>> = frequent_at_level
        .iter()
        .filter(|itemset| itemset.len() == k - 1)
        .collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut candidates = Vec::new();

    for (i, &left) in sorted.iter().enumerate() {
        for &right in &sorted[i + 1..] {
            if left.prefix() != right.prefix() {
                break;
            }

            if let Some(last) = right.last() {
                candidates.push(left.extended_with(last.clone()));
            }
        }
    }

    candidates
}
