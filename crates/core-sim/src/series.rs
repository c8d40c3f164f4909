use serde::Serialize;

use crate::error::ConfigError;

/// Append-only price path. Every price is finite and non-negative and there
/// are always at least two of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self, ConfigError> {
        if prices.len() < 2 {
            return Err(ConfigError::PriceSeriesTooShort(prices.len()));
        }
        if let Some((index, &price)) = prices
            .iter()
            .enumerate()
            .find(|(_, price)| !price.is_finite() || **price < 0.0)
        {
            return Err(ConfigError::InvalidPrice { index, price });
        }

        Ok(Self { prices })
    }

    pub(crate) fn from_seed(first: f64, second: f64, capacity: usize) -> Self {
        let mut prices = Vec::with_capacity(capacity.max(2));
        prices.push(first);
        prices.push(second);
        Self { prices }
    }

    pub(crate) fn push(&mut self, price: f64) {
        self.prices.push(price);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.prices.get(index).copied()
    }

    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Number of trading rounds this path supports; the two seed prices are
    /// never traded.
    pub fn round_count(&self) -> usize {
        self.prices.len() - 2
    }
}
