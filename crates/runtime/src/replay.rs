use std::io::{self, Write};

use strategy::RoundRecord;

use crate::events::{RuntimeEvent, RuntimeStage};
use crate::logging::RunLogWriter;

pub const HISTORY_CSV_HEADER: &str = "round,price,predicted,cash,shares,action\n";

pub struct HistoryCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> HistoryCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(HISTORY_CSV_HEADER.as_bytes())
    }

    pub fn append_rounds(&mut self, history: &[RoundRecord]) -> io::Result<()> {
        for (index, record) in history.iter().enumerate() {
            writeln!(
                self.writer,
                "{},{},{},{},{},{}",
                index + 1,
                record.price,
                record.predicted_price,
                record.cash_after,
                record.shares_after,
                record.action,
            )?;
        }
        Ok(())
    }

    /// Writes the whole history and logs the export only after the writer
    /// has flushed successfully.
    pub fn write_history_and_log(
        &mut self,
        history: &[RoundRecord],
        run_log_writer: &mut dyn RunLogWriter,
    ) -> io::Result<()> {
        self.write_header()?;
        self.append_rounds(history)?;
        self.writer.flush()?;
        run_log_writer.write(RuntimeEvent::new(
            history.len(),
            RuntimeStage::HistoryExported,
        ));
        Ok(())
    }
}
