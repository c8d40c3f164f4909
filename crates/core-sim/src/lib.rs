mod config;
mod error;
mod generators;
mod series;
mod state;

pub use config::{GeneratorConfig, PolicyRules, SimConfig};
pub use error::ConfigError;
pub use generators::{PriceGenerator, DEFAULT_SEED_PRICES};
pub use series::PriceSeries;
pub use state::TraderState;

/// Generates the configured price path with a generator seeded from
/// `config.seed`.
pub fn generate_prices(config: &SimConfig) -> Result<PriceSeries, ConfigError> {
    config.validate()?;
    let mut generator = PriceGenerator::seeded(config.seed, config.generator)?;
    generator.generate_from(config.seed_prices, config.length)
}
