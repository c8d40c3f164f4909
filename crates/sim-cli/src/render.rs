use std::io::Write;

use core_sim::SimConfig;
use runtime::chart::{
    net_worth_chart_series, price_chart_series, NetWorthChartSeries, PriceChartSeries,
};
use runtime::logging::RunLogWriter;
use runtime::replay::HistoryCsvWriter;
use runtime::{RunSummary, SimulationOutcome};
use serde::Serialize;
use strategy::RoundRecord;
use tabled::{Table, Tabled};

use crate::config::OutputMode;

#[derive(Debug, Tabled)]
struct HistoryRow {
    #[tabled(rename = "Round")]
    round: usize,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Predicted")]
    predicted: String,
    #[tabled(rename = "Cash")]
    cash: String,
    #[tabled(rename = "Shares")]
    shares: u64,
    #[tabled(rename = "Action")]
    action: String,
}

impl HistoryRow {
    fn new(index: usize, record: &RoundRecord) -> Self {
        Self {
            round: index + 1,
            price: format!("{:.2}", record.price),
            predicted: format!("{:.2}", record.predicted_price),
            cash: format!("{:.2}", record.cash_after),
            shares: record.shares_after,
            action: record.action.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    config: &'a SimConfig,
    summary: RunSummary,
    history: &'a [RoundRecord],
    price_chart: PriceChartSeries,
    net_worth_chart: NetWorthChartSeries,
}

pub fn history_table(history: &[RoundRecord]) -> String {
    let rows: Vec<HistoryRow> = history
        .iter()
        .enumerate()
        .map(|(index, record)| HistoryRow::new(index, record))
        .collect();
    Table::new(rows).to_string()
}

pub fn final_net_worth_line(net_worth: f64) -> String {
    format!("Final net worth: {net_worth:.2}")
}

pub fn json_report(outcome: &SimulationOutcome, config: &SimConfig) -> serde_json::Result<String> {
    let report = JsonReport {
        config,
        summary: outcome.summary(),
        history: &outcome.history,
        price_chart: price_chart_series(&outcome.prices, &outcome.history),
        net_worth_chart: net_worth_chart_series(outcome.net_worth_series()),
    };
    serde_json::to_string_pretty(&report)
}

/// Writes a completed run in the requested format. Failed runs never reach
/// this point, so nothing partial is ever rendered.
pub fn render(
    outcome: &SimulationOutcome,
    config: &SimConfig,
    mode: OutputMode,
    out: &mut dyn Write,
    log: &mut dyn RunLogWriter,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => {
            writeln!(out, "{}", history_table(&outcome.history))?;
            writeln!(out)?;
            writeln!(out, "{}", final_net_worth_line(outcome.final_net_worth()))?;
        }
        OutputMode::Json => {
            writeln!(out, "{}", json_report(outcome, config)?)?;
        }
        OutputMode::Csv => {
            HistoryCsvWriter::new(out).write_history_and_log(&outcome.history, log)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use core_sim::{PolicyRules, PriceSeries, SimConfig};
    use runtime::events::RuntimeStage;
    use runtime::logging::{InMemoryRunLogWriter, NullRunLogWriter};
    use runtime::{SimEngine, SimulationOutcome};

    use super::{final_net_worth_line, history_table, json_report, render};
    use crate::config::OutputMode;

    fn reference_outcome() -> SimulationOutcome {
        let prices = PriceSeries::new(vec![100.0, 102.0, 105.0, 90.0, 95.0]).unwrap();
        SimEngine::new(prices, 1_000.0, PolicyRules::default())
            .unwrap()
            .run(&mut NullRunLogWriter)
            .unwrap()
    }

    #[test]
    fn table_has_history_columns_and_labels() {
        let table = history_table(&reference_outcome().history);

        for column in ["Round", "Price", "Predicted", "Cash", "Shares", "Action"] {
            assert!(table.contains(column), "missing column {column}");
        }
        assert!(table.contains("Sell 0"));
        assert!(table.contains("Buy 8"));
        assert!(table.contains("Sell 8"));
        assert!(table.contains("280.00"));
        assert!(table.contains("107.60"));
    }

    #[test]
    fn final_line_rounds_to_cents() {
        assert_eq!(final_net_worth_line(1_040.0), "Final net worth: 1040.00");
        assert_eq!(final_net_worth_line(99.999), "Final net worth: 100.00");
    }

    #[test]
    fn table_mode_ends_with_final_net_worth() {
        let outcome = reference_outcome();
        let mut out = Vec::new();

        render(
            &outcome,
            &SimConfig::default(),
            OutputMode::Table,
            &mut out,
            &mut NullRunLogWriter,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Final net worth: 1040.00\n"));
    }

    #[test]
    fn json_report_carries_summary_and_charts() {
        let outcome = reference_outcome();

        let json = json_report(&outcome, &SimConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["final_net_worth"], 1040.0);
        assert_eq!(value["summary"]["buys"], 1);
        assert_eq!(value["history"][1]["action"]["kind"], "buy");
        assert_eq!(value["history"][1]["action"]["quantity"], 8);
        assert_eq!(value["price_chart"]["predicted"][0], serde_json::Value::Null);
        assert_eq!(value["net_worth_chart"]["rounds"][0], 3);
        assert_eq!(value["net_worth_chart"]["net_worth"][2], 1040.0);
    }

    #[test]
    fn csv_mode_logs_export() {
        let outcome = reference_outcome();
        let mut out = Vec::new();
        let mut log = InMemoryRunLogWriter::new();

        render(
            &outcome,
            &SimConfig::default(),
            OutputMode::Csv,
            &mut out,
            &mut log,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("round,price,predicted,cash,shares,action\n"));
        assert_eq!(log.events()[0].stage, RuntimeStage::HistoryExported);
    }
}
