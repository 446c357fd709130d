pub mod candidates;
pub mod levels;
pub mod mining;
pub mod prune;
pub mod support;

pub use levels::Levels;
pub use mining::{mine, mine_with_support, Miner};
