use serde::Serialize;

use crate::error::ConfigError;

/// Cash, whole shares and the price of the most recent buy.
///
/// `average_buy_price` is set by a buy of at least one share and cleared by
/// any full liquidation, so it is only ever `Some` while shares are held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraderState {
    pub cash: f64,
    pub shares: u64,
    pub average_buy_price: Option<f64>,
}

impl TraderState {
    pub fn new(starting_cash: f64) -> Result<Self, ConfigError> {
        if !starting_cash.is_finite() || starting_cash < 0.0 {
            return Err(ConfigError::InvalidStartingCash(starting_cash));
        }

        Ok(Self {
            cash: starting_cash,
            shares: 0,
            average_buy_price: None,
        })
    }

    pub fn net_worth(&self, price: f64) -> f64 {
        self.cash + self.shares as f64 * price
    }

    /// Buys `quantity` shares at `price`. The recorded buy price is
    /// overwritten, not averaged, and only when shares were actually bought.
    pub fn buy(&mut self, quantity: u64, price: f64) {
        self.shares += quantity;
        self.cash -= quantity as f64 * price;
        if quantity > 0 {
            self.average_buy_price = Some(price);
        }
    }

    /// Sells every share at `price` and returns the quantity sold.
    pub fn liquidate(&mut self, price: f64) -> u64 {
        let quantity = self.shares;
        self.cash += quantity as f64 * price;
        self.shares = 0;
        self.average_buy_price = None;
        quantity
    }
}

#[cfg(test)]
mod tests {
    use super::TraderState;
    use crate::ConfigError;

    #[test]
    fn starts_flat_with_all_cash() {
        let state = TraderState::new(1_000.0).unwrap();

        assert_eq!(state.cash, 1_000.0);
        assert_eq!(state.shares, 0);
        assert_eq!(state.average_buy_price, None);
    }

    #[test]
    fn accepts_zero_cash_but_rejects_negative_cash() {
        assert!(TraderState::new(0.0).is_ok());
        assert_eq!(
            TraderState::new(-1.0),
            Err(ConfigError::InvalidStartingCash(-1.0))
        );
    }

    #[test]
    fn buy_overwrites_previous_buy_price() {
        let mut state = TraderState::new(10_000.0).unwrap();

        state.buy(10, 100.0);
        state.buy(5, 110.0);

        assert_eq!(state.shares, 15);
        assert_eq!(state.cash, 10_000.0 - 1_000.0 - 550.0);
        assert_eq!(state.average_buy_price, Some(110.0));
    }

    #[test]
    fn zero_quantity_buy_keeps_previous_buy_price() {
        let mut state = TraderState::new(10_000.0).unwrap();
        state.buy(3, 90.0);

        state.buy(0, 120.0);

        assert_eq!(state.average_buy_price, Some(90.0));
    }

    #[test]
    fn liquidate_clears_shares_and_buy_price() {
        let mut state = TraderState::new(1_000.0).unwrap();
        state.buy(8, 90.0);

        let sold = state.liquidate(95.0);

        assert_eq!(sold, 8);
        assert_eq!(state.cash, 1_040.0);
        assert_eq!(state.shares, 0);
        assert_eq!(state.average_buy_price, None);
        assert_eq!(state.net_worth(200.0), 1_040.0);
    }
}
