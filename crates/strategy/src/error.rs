use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StrategyError {
    #[error("cannot fit coefficients: prev2={prev2} and prev1={prev1} are both zero")]
    DegenerateFit { prev2: f64, prev1: f64 },
    #[error("gain ratio is undefined at current price {current_price}")]
    DegenerateGainRatio { current_price: f64 },
    #[error("current price must be finite and non-negative, got {0}")]
    InvalidCurrentPrice(f64),
    #[error("predicted price must be finite, got {0}")]
    NonFinitePrediction(f64),
}
