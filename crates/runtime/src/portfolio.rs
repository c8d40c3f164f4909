use serde::Serialize;
use strategy::{Action, RoundRecord};

use crate::error::RunError;

/// Net worth after each round, valuing the post-trade position at that
/// round's price. Round `k` trades at `prices[k + 2]`.
pub fn net_worth_series(history: &[RoundRecord], prices: &[f64]) -> Result<Vec<f64>, RunError> {
    if prices.len() < history.len() + 2 {
        return Err(RunError::HistoryPriceMismatch {
            rounds: history.len(),
            prices: prices.len(),
        });
    }

    Ok(worth_by_round(history, &prices[2..]))
}

pub(crate) fn worth_by_round(history: &[RoundRecord], traded_prices: &[f64]) -> Vec<f64> {
    history
        .iter()
        .zip(traded_prices)
        .map(|(record, price)| record.net_worth(*price))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub rounds: usize,
    pub starting_cash: f64,
    pub final_price: f64,
    pub final_net_worth: f64,
    pub total_return: f64,
    pub buys: usize,
    pub sells: usize,
    pub stop_losses: usize,
    pub holds: usize,
}

impl RunSummary {
    pub fn new(
        history: &[RoundRecord],
        starting_cash: f64,
        final_price: f64,
        final_net_worth: f64,
    ) -> Self {
        let mut summary = Self {
            rounds: history.len(),
            starting_cash,
            final_price,
            final_net_worth,
            total_return: (final_net_worth - starting_cash) / starting_cash,
            buys: 0,
            sells: 0,
            stop_losses: 0,
            holds: 0,
        };

        for record in history {
            match record.action {
                Action::Hold => summary.holds += 1,
                Action::Buy { .. } => summary.buys += 1,
                Action::Sell { .. } => summary.sells += 1,
                Action::StopLossSell { .. } => summary.stop_losses += 1,
            }
        }

        summary
    }
}
