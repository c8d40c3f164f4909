use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeStage {
    RoundStarted,
    PredictionMade,
    DecisionApplied,
    PredictorRefit,
    HistoryExported,
}

/// `round` is 1-based and matches the Round column of the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeEvent {
    pub round: usize,
    pub stage: RuntimeStage,
}

impl RuntimeEvent {
    pub fn new(round: usize, stage: RuntimeStage) -> Self {
        Self { round, stage }
    }
}
