use serde::Serialize;

use crate::error::StrategyError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    pub w0: f64,
    pub w1: f64,
}

/// Two-lag linear predictor `w0 * prev2 + w1 * prev1`, refit from a single
/// observation each round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecurrencePredictor {
    coefficients: Option<Coefficients>,
}

impl RecurrencePredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coefficients(&self) -> Option<Coefficients> {
        self.coefficients
    }

    /// Falls back to `prev1` until the first fit.
    pub fn predict(&self, prev2: f64, prev1: f64) -> f64 {
        match self.coefficients {
            Some(Coefficients { w0, w1 }) => w0 * prev2 + w1 * prev1,
            None => prev1,
        }
    }

    /// Minimum-norm solution of `w0 * prev2 + w1 * prev1 = actual`.
    ///
    /// Earlier coefficients are discarded, not blended. On error the previous
    /// coefficients are left untouched.
    pub fn fit(
        &mut self,
        prev2: f64,
        prev1: f64,
        actual: f64,
    ) -> Result<Coefficients, StrategyError> {
        let denom = prev2 * prev2 + prev1 * prev1;
        if denom == 0.0 {
            return Err(StrategyError::DegenerateFit { prev2, prev1 });
        }

        let coefficients = Coefficients {
            w0: prev2 * actual / denom,
            w1: prev1 * actual / denom,
        };
        self.coefficients = Some(coefficients);
        Ok(coefficients)
    }
}
