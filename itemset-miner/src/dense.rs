//! One-hot matrix input: rows are transactions, columns are items, and any
//! non-zero cell marks the column's item as present.

use crate::apriori::Miner;
use crate::config::{MinSupport, MinerConfig};
use crate::error::Result;
use crate::itemset::Transaction;
use crate::storage::FrequentLevel;
use ndarray::ArrayView2;

/// Column indices of the non-zero cells of each row.
pub fn transactions_from_dense(matrix: ArrayView2<i32>) -> Vec<Transaction<usize>> {
    matrix
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect::<Transaction<usize>>()
        })
        .collect()
}

/// Mines a one-hot matrix with a fractional threshold, one level per size.
pub fn apriori_dense(matrix: ArrayView2<i32>, min_support: f64) -> Result<Vec<FrequentLevel<usize>>> {
    let miner = Miner::new(MinerConfig::new(MinSupport::Fraction(min_support)))?;
    let transactions = transactions_from_dense(matrix);
    Ok(miner.mine_levels(&transactions))
}
