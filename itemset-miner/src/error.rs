//! Errors raised while setting up a mining run.
//!
//! Mining itself is total; only configuration can be rejected.

/// Errors that can occur when validating a [`crate::MinerConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MineError {
    #[error("Invalid support fraction: {0} (expected a value in [0, 1])")]
    InvalidFraction(f64),

    #[error("Invalid max_len: itemsets must be allowed at least one item")]
    InvalidMaxLen,
}

pub type Result<T> = std::result::Result<T, MineError>;
