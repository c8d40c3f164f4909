use tracing::{debug, info};

use crate::events::{RuntimeEvent, RuntimeStage};

pub trait RunLogWriter {
    fn write(&mut self, event: RuntimeEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RuntimeEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RuntimeEvent] {
        &self.events
    }

    pub fn stages_for_round(&self, round: usize) -> Vec<RuntimeStage> {
        self.events
            .iter()
            .filter(|event| event.round == round)
            .map(|event| event.stage)
            .collect()
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RuntimeEvent) {
        self.events.push(event);
    }
}

/// Forwards run-log events to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRunLogWriter;

impl RunLogWriter for TracingRunLogWriter {
    fn write(&mut self, event: RuntimeEvent) {
        match event.stage {
            RuntimeStage::HistoryExported => info!(round = event.round, "history exported"),
            stage => debug!(round = event.round, ?stage, "run log"),
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRunLogWriter;

impl RunLogWriter for NullRunLogWriter {
    fn write(&mut self, _event: RuntimeEvent) {}
}
