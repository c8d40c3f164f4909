use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::series::PriceSeries;

pub const DEFAULT_SEED_PRICES: (f64, f64) = (100.0, 102.0);

/// Multiplicative-trend random walk with additive Gaussian shocks:
/// `next = trend * previous + shock`, floored at `price_floor`.
///
/// The random source is owned by the generator, so a fixed seed always
/// reproduces the same path.
#[derive(Debug, Clone)]
pub struct PriceGenerator<R> {
    rng: R,
    trend: Uniform<f64>,
    shock: Normal<f64>,
    price_floor: f64,
}

impl PriceGenerator<StdRng> {
    pub fn seeded(seed: u64, config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::new(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> PriceGenerator<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let shock = Normal::new(0.0, config.shock_std_dev)
            .map_err(|_| ConfigError::InvalidShockStdDev(config.shock_std_dev))?;

        Ok(Self {
            rng,
            trend: Uniform::new(config.trend_low, config.trend_high),
            shock,
            price_floor: config.price_floor,
        })
    }

    pub fn next_price(&mut self, previous: f64) -> f64 {
        // Trend is drawn before the shock; reordering changes every seeded path.
        let trend_factor = self.trend.sample(&mut self.rng);
        let shock = self.shock.sample(&mut self.rng);
        (trend_factor * previous + shock).max(self.price_floor)
    }

    pub fn generate(&mut self, length: usize) -> Result<PriceSeries, ConfigError> {
        self.generate_from(DEFAULT_SEED_PRICES, length)
    }

    pub fn generate_from(
        &mut self,
        seed_prices: (f64, f64),
        length: usize,
    ) -> Result<PriceSeries, ConfigError> {
        if length < 2 {
            return Err(ConfigError::LengthTooShort(length));
        }
        let (first, second) = seed_prices;
        if !first.is_finite() || !second.is_finite() || first <= 0.0 || second <= 0.0 {
            return Err(ConfigError::InvalidSeedPrices(first, second));
        }

        let mut series = PriceSeries::from_seed(first, second, length);
        let mut previous = second;
        for _ in 2..length {
            previous = self.next_price(previous);
            series.push(previous);
        }

        Ok(series)
    }
}
