use core_sim::{ConfigError, PolicyRules, TraderState};
use tracing::warn;

use crate::action::{Action, RoundRecord};
use crate::error::StrategyError;

/// Rule-based trader reacting to the gap between predicted and actual price.
///
/// Rules are tried in order and the first match wins:
/// hold band, stop-loss, strong buy, buy, sell, hold.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingPolicy {
    state: TraderState,
    rules: PolicyRules,
    history: Vec<RoundRecord>,
}

impl TradingPolicy {
    pub fn new(starting_cash: f64, rules: PolicyRules) -> Result<Self, ConfigError> {
        rules.validate()?;

        Ok(Self {
            state: TraderState::new(starting_cash)?,
            rules,
            history: Vec::new(),
        })
    }

    pub fn with_default_rules(starting_cash: f64) -> Result<Self, ConfigError> {
        Self::new(starting_cash, PolicyRules::default())
    }

    pub fn state(&self) -> TraderState {
        self.state
    }

    pub fn rules(&self) -> PolicyRules {
        self.rules
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn into_parts(self) -> (TraderState, Vec<RoundRecord>) {
        (self.state, self.history)
    }

    pub fn net_worth(&self, current_price: f64) -> f64 {
        self.state.net_worth(current_price)
    }

    /// Applies the first matching rule, mutates the trader state and appends
    /// a history record. A failed call leaves state and history untouched.
    pub fn decide(
        &mut self,
        current_price: f64,
        predicted_price: f64,
    ) -> Result<Action, StrategyError> {
        if !current_price.is_finite() || current_price < 0.0 {
            return Err(StrategyError::InvalidCurrentPrice(current_price));
        }
        if !predicted_price.is_finite() {
            return Err(StrategyError::NonFinitePrediction(predicted_price));
        }

        let action = self.apply_rules(current_price, predicted_price)?;
        self.history.push(RoundRecord {
            price: current_price,
            predicted_price,
            cash_after: self.state.cash,
            shares_after: self.state.shares,
            action,
        });

        Ok(action)
    }

    fn apply_rules(
        &mut self,
        current_price: f64,
        predicted_price: f64,
    ) -> Result<Action, StrategyError> {
        let rules = self.rules;

        if (predicted_price - current_price).abs() < rules.hold_band {
            return Ok(Action::Hold);
        }

        // Computed ahead of the stop-loss check, so a zero price fails even
        // when the stop-loss would have fired.
        let gain_ratio = gain_ratio(predicted_price, current_price)?;

        if let Some(buy_price) = self.state.average_buy_price {
            if current_price < rules.stop_loss_ratio * buy_price {
                let quantity = self.state.liquidate(current_price);
                warn!(quantity, current_price, buy_price, "stop-loss triggered");
                return Ok(Action::StopLossSell { quantity });
            }
        }

        let action = if gain_ratio > rules.strong_buy_threshold {
            self.buy_with_fraction(rules.strong_buy_fraction, current_price)
        } else if gain_ratio > rules.buy_threshold {
            self.buy_with_fraction(rules.buy_fraction, current_price)
        } else if gain_ratio < rules.sell_threshold {
            Action::Sell {
                quantity: self.state.liquidate(current_price),
            }
        } else {
            Action::Hold
        };

        Ok(action)
    }

    fn buy_with_fraction(&mut self, fraction: f64, current_price: f64) -> Action {
        let quantity = affordable_shares(fraction, self.state.cash, current_price);
        self.state.buy(quantity, current_price);
        Action::Buy { quantity }
    }
}

pub fn gain_ratio(predicted_price: f64, current_price: f64) -> Result<f64, StrategyError> {
    if current_price == 0.0 {
        return Err(StrategyError::DegenerateGainRatio { current_price });
    }
    Ok((predicted_price - current_price) / current_price)
}

/// Whole shares purchasable with `fraction` of `cash`; never fractional and
/// never more than the cash covers.
fn affordable_shares(fraction: f64, cash: f64, price: f64) -> u64 {
    let raw = fraction * cash / price;
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw.floor() as u64
}
