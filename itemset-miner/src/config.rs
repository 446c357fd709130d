use crate::error::{MineError, Result};
use serde::{Deserialize, Serialize};

/// Float products such as `0.3 * 10.0` land a few ulps above the integer.
const ROUNDING_ULPS: f64 = 4.0;

/// Minimum number of transactions an itemset must appear in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinSupport {
    /// Absolute transaction count.
    Count(usize),
    /// Share of all transactions, in `[0, 1]`; rounded up to a count.
    Fraction(f64),
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(1)
    }
}

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        MinSupport::Count(count)
    }
}

impl MinSupport {
    pub fn validate(&self) -> Result<()> {
        match *self {
            MinSupport::Count(_) => Ok(()),
            MinSupport::Fraction(f) if (0.0..=1.0).contains(&f) => Ok(()),
            MinSupport::Fraction(f) => Err(MineError::InvalidFraction(f)),
        }
    }

    /// Absolute count threshold for a collection of `num_transactions`.
    pub fn resolve(&self, num_transactions: usize) -> Result<usize> {
        self.validate()?;
        Ok(self.min_count(num_transactions))
    }

    /// Assumes `validate` already passed.
    pub(crate) fn min_count(&self, num_transactions: usize) -> usize {
        match *self {
            MinSupport::Count(count) => count,
            MinSupport::Fraction(f) => {
                let scaled = f * num_transactions as f64;
                let nearest = scaled.round();
                let tolerance = scaled.abs() * ROUNDING_ULPS * f64::EPSILON;
                let count = if (scaled - nearest).abs() <= tolerance {
                    nearest
                } else {
                    scaled.ceil()
                };
                count.max(0.0) as usize
            }
        }
    }
}

/// Settings for one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    pub min_support: MinSupport,
    /// Largest itemset size to explore; `None` runs until a level is empty.
    pub max_len: Option<usize>,
    /// Count supports of one level across the rayon pool.
    pub parallel: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::default(),
            max_len: None,
            parallel: true,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_count(count: usize) -> Self {
        Self::new(MinSupport::Count(count))
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.min_support.validate()?;
        if self.max_len == Some(0) {
            return Err(MineError::InvalidMaxLen);
        }
        Ok(())
    }
}
