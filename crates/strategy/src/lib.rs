pub mod action;
pub mod error;
pub mod policy;
pub mod predictor;

pub use action::{Action, RoundRecord};
pub use error::StrategyError;
pub use policy::{gain_ratio, TradingPolicy};
pub use predictor::{Coefficients, RecurrencePredictor};

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Action, RecurrencePredictor, TradingPolicy};

    #[test]
    fn predictor_and_policy_walk_reference_path() {
        let prices = [100.0, 102.0, 105.0, 90.0, 95.0];
        let mut predictor = RecurrencePredictor::new();
        let mut trader = TradingPolicy::with_default_rules(1_000.0).unwrap();
        let mut actions = Vec::new();

        for i in 2..prices.len() {
            let predicted = predictor.predict(prices[i - 2], prices[i - 1]);
            actions.push(trader.decide(prices[i], predicted).unwrap());
            predictor.fit(prices[i - 2], prices[i - 1], prices[i]).unwrap();
        }

        assert_eq!(
            actions,
            vec![
                Action::Sell { quantity: 0 },
                Action::Buy { quantity: 8 },
                Action::Sell { quantity: 8 },
            ]
        );
        assert_relative_eq!(trader.history()[1].predicted_price, 107.604, epsilon = 1e-3);
        assert_relative_eq!(trader.history()[2].predicted_price, 84.670, epsilon = 1e-3);
        assert_eq!(trader.net_worth(95.0), 1_040.0);
    }
}
