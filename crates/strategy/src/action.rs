use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Hold,
    Buy { quantity: u64 },
    Sell { quantity: u64 },
    StopLossSell { quantity: u64 },
}

impl Action {
    pub fn quantity(self) -> u64 {
        match self {
            Self::Hold => 0,
            Self::Buy { quantity }
            | Self::Sell { quantity }
            | Self::StopLossSell { quantity } => quantity,
        }
    }

    pub fn is_liquidation(self) -> bool {
        matches!(self, Self::Sell { .. } | Self::StopLossSell { .. })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hold => write!(f, "Hold"),
            Self::Buy { quantity } => write!(f, "Buy {quantity}"),
            Self::Sell { quantity } => write!(f, "Sell {quantity}"),
            Self::StopLossSell { quantity } => write!(f, "Stop-loss: Sell {quantity}"),
        }
    }
}

/// One row of the decision history, captured after the action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundRecord {
    pub price: f64,
    pub predicted_price: f64,
    pub cash_after: f64,
    pub shares_after: u64,
    pub action: Action,
}

impl RoundRecord {
    pub fn net_worth(&self, price: f64) -> f64 {
        self.cash_after + self.shares_after as f64 * price
    }
}

#[cfg(test)]
mod tests {
    use super::Action;

    #[test]
    fn labels_match_history_table_text() {
        assert_eq!(Action::Hold.to_string(), "Hold");
        assert_eq!(Action::Buy { quantity: 8 }.to_string(), "Buy 8");
        assert_eq!(Action::Sell { quantity: 0 }.to_string(), "Sell 0");
        assert_eq!(
            Action::StopLossSell { quantity: 12 }.to_string(),
            "Stop-loss: Sell 12"
        );
    }

    #[test]
    fn serializes_as_tagged_variant() {
        let json = serde_json::to_string(&Action::StopLossSell { quantity: 3 }).unwrap();

        assert_eq!(json, r#"{"kind":"stop_loss_sell","quantity":3}"#);
    }

    #[test]
    fn quantity_is_zero_for_hold() {
        assert_eq!(Action::Hold.quantity(), 0);
        assert_eq!(Action::Buy { quantity: 4 }.quantity(), 4);
        assert!(Action::StopLossSell { quantity: 1 }.is_liquidation());
        assert!(!Action::Buy { quantity: 1 }.is_liquidation());
    }
}
