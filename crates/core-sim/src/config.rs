use serde::Serialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub trend_low: f64,
    pub trend_high: f64,
    pub shock_std_dev: f64,
    pub price_floor: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trend_low: 0.95,
            trend_high: 1.05,
            shock_std_dev: 3.0,
            price_floor: 1.0,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range_ok = self.trend_low.is_finite()
            && self.trend_high.is_finite()
            && self.trend_low > 0.0
            && self.trend_low < self.trend_high;
        if !range_ok {
            return Err(ConfigError::InvalidTrendRange {
                low: self.trend_low,
                high: self.trend_high,
            });
        }
        if !self.shock_std_dev.is_finite() || self.shock_std_dev < 0.0 {
            return Err(ConfigError::InvalidShockStdDev(self.shock_std_dev));
        }
        if !self.price_floor.is_finite() || self.price_floor < 0.0 {
            return Err(ConfigError::InvalidPriceFloor(self.price_floor));
        }

        Ok(())
    }
}

/// Thresholds of the trading rule cascade. Ratios are relative to the
/// current price; fractions are of cash on hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyRules {
    pub hold_band: f64,
    pub stop_loss_ratio: f64,
    pub strong_buy_threshold: f64,
    pub strong_buy_fraction: f64,
    pub buy_threshold: f64,
    pub buy_fraction: f64,
    pub sell_threshold: f64,
}

impl Default for PolicyRules {
    fn default() -> Self {
        Self {
            hold_band: 2.0,
            stop_loss_ratio: 0.95,
            strong_buy_threshold: 0.02,
            strong_buy_fraction: 0.75,
            buy_threshold: 0.01,
            buy_fraction: 0.30,
            sell_threshold: -0.01,
        }
    }
}

impl PolicyRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rule("hold_band", self.hold_band, |v| v >= 0.0)?;
        check_rule("stop_loss_ratio", self.stop_loss_ratio, unit_interval)?;
        check_rule("strong_buy_threshold", self.strong_buy_threshold, |_| true)?;
        check_rule("strong_buy_fraction", self.strong_buy_fraction, unit_interval)?;
        check_rule("buy_threshold", self.buy_threshold, |_| true)?;
        check_rule("buy_fraction", self.buy_fraction, unit_interval)?;
        check_rule("sell_threshold", self.sell_threshold, |_| true)?;
        Ok(())
    }
}

fn unit_interval(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

fn check_rule(
    name: &'static str,
    value: f64,
    in_range: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if !value.is_finite() || !in_range(value) {
        return Err(ConfigError::InvalidPolicyRule { name, value });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimConfig {
    pub length: usize,
    pub starting_cash: f64,
    pub seed_prices: (f64, f64),
    pub seed: u64,
    pub generator: GeneratorConfig,
    pub policy: PolicyRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            length: 30,
            starting_cash: 10_000.0,
            seed_prices: (100.0, 102.0),
            seed: 42,
            generator: GeneratorConfig::default(),
            policy: PolicyRules::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length < 2 {
            return Err(ConfigError::LengthTooShort(self.length));
        }
        if !self.starting_cash.is_finite() || self.starting_cash <= 0.0 {
            return Err(ConfigError::InvalidStartingCash(self.starting_cash));
        }
        let (first, second) = self.seed_prices;
        if !first.is_finite() || !second.is_finite() || first <= 0.0 || second <= 0.0 {
            return Err(ConfigError::InvalidSeedPrices(first, second));
        }
        self.generator.validate()?;
        self.policy.validate()
    }
}
