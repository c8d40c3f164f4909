use core_sim::PriceSeries;
use serde::Serialize;
use strategy::RoundRecord;

pub const MOVING_AVERAGE_WINDOW: usize = 5;

/// Actual vs predicted price with a trailing moving average. Rounds are
/// 1-based price indices; seed rounds carry no prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChartSeries {
    pub rounds: Vec<usize>,
    pub actual: Vec<f64>,
    pub predicted: Vec<Option<f64>>,
    pub moving_average: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthChartSeries {
    pub rounds: Vec<usize>,
    pub net_worth: Vec<f64>,
}

pub fn price_chart_series(prices: &PriceSeries, history: &[RoundRecord]) -> PriceChartSeries {
    let actual = prices.as_slice().to_vec();
    let predicted = (0..actual.len())
        .map(|index| {
            index
                .checked_sub(2)
                .and_then(|round| history.get(round))
                .map(|record| record.predicted_price)
        })
        .collect();

    PriceChartSeries {
        rounds: (1..=actual.len()).collect(),
        moving_average: moving_average(&actual, MOVING_AVERAGE_WINDOW),
        predicted,
        actual,
    }
}

/// Pairs each net-worth point with its price index, counting from 1; the
/// first traded round is 3.
pub fn net_worth_chart_series(net_worth: Vec<f64>) -> NetWorthChartSeries {
    NetWorthChartSeries {
        rounds: (3..3 + net_worth.len()).collect(),
        net_worth,
    }
}

pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|end| {
            let start = (end + 1).checked_sub(window)?;
            let slice = &values[start..=end];
            Some(slice.iter().sum::<f64>() / window as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use core_sim::PriceSeries;
    use strategy::{Action, RoundRecord};

    use super::{moving_average, net_worth_chart_series, price_chart_series};

    #[test]
    fn moving_average_starts_after_full_window() {
        let averages = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 5);

        assert_eq!(averages[..4], [None, None, None, None]);
        assert_relative_eq!(averages[4].unwrap(), 3.0);
        assert_relative_eq!(averages[5].unwrap(), 4.0);
    }

    #[test]
    fn moving_average_shorter_than_window_is_all_none() {
        assert_eq!(moving_average(&[1.0, 2.0], 5), vec![None, None]);
        assert_eq!(moving_average(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn price_chart_leaves_seed_rounds_unpredicted() {
        let prices = PriceSeries::new(vec![100.0, 102.0, 105.0]).unwrap();
        let history = [RoundRecord {
            price: 105.0,
            predicted_price: 102.0,
            cash_after: 1_000.0,
            shares_after: 0,
            action: Action::Sell { quantity: 0 },
        }];

        let chart = price_chart_series(&prices, &history);

        assert_eq!(chart.rounds, vec![1, 2, 3]);
        assert_eq!(chart.predicted, vec![None, None, Some(102.0)]);
        assert_eq!(chart.moving_average, vec![None, None, None]);
    }

    #[test]
    fn net_worth_chart_starts_at_round_three() {
        let chart = net_worth_chart_series(vec![1_000.0, 1_000.0, 1_040.0]);

        assert_eq!(chart.rounds, vec![3, 4, 5]);
    }
}
