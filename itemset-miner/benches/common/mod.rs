//! Synthetic conversation turns shared by the bench binaries.
#![allow(dead_code)]

use itemset_miner::Transaction;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Turns over `num_items` item ids. Low ids are drawn far more often than
/// high ones, and with probability `topic_share` a turn also carries one of
/// a few fixed item bundles, so longer patterns actually occur.
pub fn item_turns(
    seed: u64,
    num_turns: usize,
    num_items: usize,
    per_turn: usize,
    topic_share: f64,
) -> Vec<Transaction<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_topics = (num_items / 4).max(1);

    (0..num_turns)
        .map(|_| {
            let mut items: Vec<usize> = (0..per_turn)
                .map(|_| {
                    let skew: f64 = rng.gen();
                    ((skew * skew) * num_items as f64) as usize
                })
                .collect();

            if rng.gen_bool(topic_share) {
                let topic = rng.gen_range(0..num_topics);
                items.extend((topic * 3..topic * 3 + 3).map(|item| item % num_items));
            }

            Transaction::new(items)
        })
        .collect()
}

/// Same shape as [`item_turns`], with each id rendered as a keyword.
pub fn keyword_turns(
    seed: u64,
    num_turns: usize,
    vocabulary: usize,
    per_turn: usize,
) -> Vec<Transaction<String>> {
    item_turns(seed, num_turns, vocabulary, per_turn, 0.3)
        .into_iter()
        .map(|turn| turn.items().iter().map(|id| format!("kw{}", id)).collect::<Transaction<String>>())
        .collect()
}

/// One row per turn, one column per item id.
pub fn one_hot(turns: &[Transaction<usize>], num_items: usize) -> Array2<i32> {
    let mut matrix = Array2::zeros((turns.len(), num_items));
    for (row, turn) in turns.iter().enumerate() {
        for &item in turn.items() {
            matrix[[row, item]] = 1;
        }
    }
    matrix
}
