use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("simulation length must be at least 2, got {0}")]
    LengthTooShort(usize),
    #[error("starting cash must be finite and positive, got {0}")]
    InvalidStartingCash(f64),
    #[error("seed prices must be finite and positive, got ({0}, {1})")]
    InvalidSeedPrices(f64, f64),
    #[error("price series needs at least 2 prices, got {0}")]
    PriceSeriesTooShort(usize),
    #[error("price at index {index} must be finite and non-negative, got {price}")]
    InvalidPrice { index: usize, price: f64 },
    #[error("trend range must satisfy 0 < low < high, got [{low}, {high})")]
    InvalidTrendRange { low: f64, high: f64 },
    #[error("shock standard deviation must be finite and non-negative, got {0}")]
    InvalidShockStdDev(f64),
    #[error("price floor must be finite and non-negative, got {0}")]
    InvalidPriceFloor(f64),
    #[error("policy rule `{name}` is out of range: {value}")]
    InvalidPolicyRule { name: &'static str, value: f64 },
}
