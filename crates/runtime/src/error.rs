use core_sim::ConfigError;
use strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("numerical degeneracy in round {round} (price index {price_index}): {source}")]
    NumericalDegeneracy {
        round: usize,
        price_index: usize,
        #[source]
        source: StrategyError,
    },
    #[error("{rounds} recorded rounds need at least {} prices, got {prices}", .rounds + 2)]
    HistoryPriceMismatch { rounds: usize, prices: usize },
}

impl RunError {
    /// 1-based round that aborted the run, if the failure happened mid-loop.
    pub fn round(&self) -> Option<usize> {
        match self {
            Self::NumericalDegeneracy { round, .. } => Some(*round),
            Self::InvalidConfiguration(_) | Self::HistoryPriceMismatch { .. } => None,
        }
    }
}
