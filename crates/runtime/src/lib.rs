pub mod chart;
pub mod engine;
pub mod error;
pub mod events;
pub mod logging;
pub mod portfolio;
pub mod replay;

pub use engine::{RoundReport, SimEngine, SimulationOutcome};
pub use error::RunError;
pub use portfolio::{net_worth_series, RunSummary};

use core_sim::SimConfig;
use logging::RunLogWriter;

/// Generates the configured price path and runs every round to completion.
pub fn run_simulation(
    config: &SimConfig,
    log: &mut dyn RunLogWriter,
) -> Result<SimulationOutcome, RunError> {
    SimEngine::from_config(config)?.run(log)
}

#[cfg(test)]
mod tests {
    use core_sim::SimConfig;

    use crate::events::RuntimeStage;
    use crate::logging::InMemoryRunLogWriter;
    use crate::{run_simulation, RunError};

    #[test]
    fn default_run_records_one_round_per_traded_price() {
        let mut log = InMemoryRunLogWriter::new();

        let outcome = run_simulation(&SimConfig::default(), &mut log).unwrap();

        assert_eq!(outcome.history.len(), 28);
        assert_eq!(outcome.net_worth_series().len(), 28);
        assert_eq!(log.events().len(), 28 * 4);
        assert_eq!(log.events()[0].stage, RuntimeStage::RoundStarted);
        assert_eq!(log.events()[111].stage, RuntimeStage::PredictorRefit);
    }

    #[test]
    fn final_net_worth_matches_last_tracker_point() {
        let outcome = run_simulation(&SimConfig::default(), &mut InMemoryRunLogWriter::new())
            .unwrap();

        let series = outcome.net_worth_series();

        assert_eq!(series.last().copied(), Some(outcome.final_net_worth()));
        assert_eq!(outcome.summary().final_net_worth, outcome.final_net_worth());
    }

    #[test]
    fn invalid_config_fails_before_any_round() {
        let mut log = InMemoryRunLogWriter::new();
        let config = SimConfig {
            starting_cash: -10.0,
            ..SimConfig::default()
        };

        let error = run_simulation(&config, &mut log).unwrap_err();

        assert!(matches!(error, RunError::InvalidConfiguration(_)));
        assert_eq!(error.round(), None);
        assert!(log.events().is_empty());
    }
}
