use core_sim::{ConfigError, PolicyRules, PriceSeries, SimConfig, TraderState};
use serde::Serialize;
use strategy::{Coefficients, RecurrencePredictor, RoundRecord, StrategyError, TradingPolicy};
use tracing::{debug, info};

use crate::error::RunError;
use crate::events::{RuntimeEvent, RuntimeStage};
use crate::logging::RunLogWriter;
use crate::portfolio::{worth_by_round, RunSummary};

/// What a single round saw and did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    pub round: usize,
    pub price_index: usize,
    pub record: RoundRecord,
    pub coefficients: Coefficients,
}

/// Sequences predictor and policy over a fixed price path, one round per
/// price index from 2 onwards.
#[derive(Debug, Clone)]
pub struct SimEngine {
    prices: PriceSeries,
    predictor: RecurrencePredictor,
    policy: TradingPolicy,
    starting_cash: f64,
    next_index: usize,
    failed: Option<RunError>,
}

impl SimEngine {
    pub fn new(
        prices: PriceSeries,
        starting_cash: f64,
        rules: PolicyRules,
    ) -> Result<Self, RunError> {
        if !starting_cash.is_finite() || starting_cash <= 0.0 {
            return Err(ConfigError::InvalidStartingCash(starting_cash).into());
        }
        let policy = TradingPolicy::new(starting_cash, rules)?;

        Ok(Self {
            prices,
            predictor: RecurrencePredictor::new(),
            policy,
            starting_cash,
            next_index: 2,
            failed: None,
        })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, RunError> {
        let prices = core_sim::generate_prices(config)?;
        info!(
            length = config.length,
            seed = config.seed,
            starting_cash = config.starting_cash,
            "price path generated"
        );
        Self::new(prices, config.starting_cash, config.policy)
    }

    pub fn policy(&self) -> &TradingPolicy {
        &self.policy
    }

    pub fn is_finished(&self) -> bool {
        self.next_index >= self.prices.len()
    }

    /// Runs the next round, or returns `None` once the path is exhausted.
    ///
    /// A failed round is terminal: every later call returns the same error
    /// without touching the policy or the predictor.
    pub fn step_once(
        &mut self,
        log: &mut dyn RunLogWriter,
    ) -> Result<Option<RoundReport>, RunError> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }
        if self.is_finished() {
            return Ok(None);
        }

        self.advance(log).map_err(|error| {
            self.failed = Some(error.clone());
            error
        })
    }

    fn advance(&mut self, log: &mut dyn RunLogWriter) -> Result<Option<RoundReport>, RunError> {
        let price_index = self.next_index;
        let round = price_index - 1;
        let prices = self.prices.as_slice();
        let (prev2, prev1, actual) = (
            prices[price_index - 2],
            prices[price_index - 1],
            prices[price_index],
        );
        let degeneracy = |source: StrategyError| RunError::NumericalDegeneracy {
            round,
            price_index,
            source,
        };

        log.write(RuntimeEvent::new(round, RuntimeStage::RoundStarted));
        let predicted = self.predictor.predict(prev2, prev1);
        log.write(RuntimeEvent::new(round, RuntimeStage::PredictionMade));

        let action = self.policy.decide(actual, predicted).map_err(degeneracy)?;
        log.write(RuntimeEvent::new(round, RuntimeStage::DecisionApplied));

        // The fit must follow the decision, otherwise round i would trade on
        // a model that has already seen price i.
        let coefficients = self.predictor.fit(prev2, prev1, actual).map_err(degeneracy)?;
        log.write(RuntimeEvent::new(round, RuntimeStage::PredictorRefit));

        self.next_index += 1;
        let report = self.policy.history().last().map(|record| RoundReport {
            round,
            price_index,
            record: *record,
            coefficients,
        });
        debug!(
            round,
            price = actual,
            predicted,
            %action,
            cash = self.policy.state().cash,
            shares = self.policy.state().shares,
            "round complete"
        );

        Ok(report)
    }

    pub fn run(mut self, log: &mut dyn RunLogWriter) -> Result<SimulationOutcome, RunError> {
        while self.step_once(log)?.is_some() {}

        let outcome = self.into_outcome();
        info!(
            rounds = outcome.history.len(),
            final_net_worth = outcome.final_net_worth(),
            "simulation finished"
        );
        Ok(outcome)
    }

    fn into_outcome(self) -> SimulationOutcome {
        let (final_state, history) = self.policy.into_parts();
        SimulationOutcome {
            prices: self.prices,
            starting_cash: self.starting_cash,
            final_state,
            history,
        }
    }
}

/// A completed run: the price path, every round record and the final
/// trader state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub prices: PriceSeries,
    pub starting_cash: f64,
    pub final_state: TraderState,
    pub history: Vec<RoundRecord>,
}

impl SimulationOutcome {
    pub fn final_price(&self) -> f64 {
        self.prices.last()
    }

    pub fn final_net_worth(&self) -> f64 {
        self.final_state.net_worth(self.final_price())
    }

    pub fn net_worth_series(&self) -> Vec<f64> {
        worth_by_round(&self.history, &self.prices.as_slice()[2..])
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::new(
            &self.history,
            self.starting_cash,
            self.final_price(),
            self.final_net_worth(),
        )
    }
}
