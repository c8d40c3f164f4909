use std::env;

use core_sim::SimConfig;
use thiserror::Error;

const ENV_LENGTH: &str = "SIM_LENGTH";
const ENV_STARTING_CASH: &str = "SIM_STARTING_CASH";
const ENV_SEED: &str = "SIM_SEED";
const ENV_OUTPUT: &str = "SIM_OUTPUT";
const DEFAULT_OUTPUT: OutputMode = OutputMode::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
    Csv,
}

impl OutputMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub length: usize,
    pub starting_cash: f64,
    /// `None` means the binary picks a fresh seed and logs it.
    pub seed: Option<u64>,
    pub output: OutputMode,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SIM_LENGTH must be an integer of at least 2")]
    InvalidLength,
    #[error("SIM_STARTING_CASH must be a finite number greater than 0")]
    InvalidStartingCash,
    #[error("SIM_SEED must be an unsigned 64-bit integer")]
    InvalidSeed,
    #[error("SIM_OUTPUT must be one of: table, json, csv")]
    InvalidOutput,
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = SimConfig::default();

        let length = match read_env(ENV_LENGTH)? {
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|length| *length >= 2)
                .ok_or(ConfigError::InvalidLength)?,
            None => defaults.length,
        };

        let starting_cash = match read_env(ENV_STARTING_CASH)? {
            Some(value) => value
                .parse::<f64>()
                .ok()
                .filter(|cash| cash.is_finite() && *cash > 0.0)
                .ok_or(ConfigError::InvalidStartingCash)?,
            None => defaults.starting_cash,
        };

        let seed = match read_env(ENV_SEED)? {
            Some(value) => Some(value.parse::<u64>().map_err(|_| ConfigError::InvalidSeed)?),
            None => None,
        };

        let output = match read_env(ENV_OUTPUT)? {
            Some(value) => OutputMode::parse(value.as_str()).ok_or(ConfigError::InvalidOutput)?,
            None => DEFAULT_OUTPUT,
        };

        Ok(Self {
            length,
            starting_cash,
            seed,
            output,
        })
    }

    pub fn sim_config(&self, seed: u64) -> SimConfig {
        SimConfig {
            length: self.length,
            starting_cash: self.starting_cash,
            seed,
            ..SimConfig::default()
        }
    }
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}
