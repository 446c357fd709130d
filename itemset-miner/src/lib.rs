//! Frequent itemset mining with the level-wise Apriori search.
//!
//! Given transactions (sets of symbols, e.g. the keywords of each
//! conversation turn) and a minimum support, finds every combination of
//! symbols that co-occurs in at least that many transactions.
//!
//! ```
//! use itemset_miner::{mine, Itemset, Transaction};
//!
//! let transactions = vec![
//!     Transaction::new(vec!["a", "b"]),
//!     Transaction::new(vec!["b", "c"]),
//!     Transaction::new(vec!["a", "b", "c"]),
//! ];
//!
//! let frequent = mine(&transactions, 2);
//! assert!(frequent.contains(&Itemset::new(vec!["a", "b"])));
//! assert!(!frequent.contains(&Itemset::new(vec!["a", "c"])));
//! ```

pub mod apriori;
pub mod config;
pub mod dense;
pub mod error;
pub mod itemset;
pub mod memo;
pub mod storage;

pub use apriori::{mine, mine_with_support, Levels, Miner};
pub use config::{MinSupport, MinerConfig};
pub use dense::{apriori_dense, transactions_from_dense};
pub use error::{MineError, Result};
pub use itemset::{Item, Itemset, Transaction};
pub use memo::SupportMemo;
pub use storage::{FrequentItemset, FrequentLevel};
