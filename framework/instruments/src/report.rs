mod in_memory_reporter;
mod summary_report;

pub use in_memory_reporter::{InMemoryReporter, RecordedOutcomes};
pub use summary_report::{SummaryReportCollector, ZeroRunsError};

use crate::OutcomeRecord;

pub trait ReportCollector {
    fn add_outcome(&mut self, outcome: &OutcomeRecord);

    /// Publish whatever this collector has gathered. Called once, after the
    /// last run has been drained.
    fn finalize(&self) -> anyhow::Result<()>;
}

/// Selects which collectors a [`Reporter`] is built with.
#[derive(Default)]
pub struct ReportConfig {
    enable_summary: bool,
    extra_collectors: Vec<Box<dyn ReportCollector>>,
}

impl ReportConfig {
    pub fn enable_summary(mut self) -> Self {
        self.enable_summary = true;
        self
    }

    /// Add a custom collector alongside the built-in ones. Used by tests and
    /// by matchups that want an extra sink for outcomes.
    pub fn with_collector(mut self, collector: Box<dyn ReportCollector>) -> Self {
        self.extra_collectors.push(collector);
        self
    }

    pub fn init(self) -> Reporter {
        let mut collectors = self.extra_collectors;
        if self.enable_summary {
            collectors.push(Box::new(SummaryReportCollector::new()));
        }

        Reporter { collectors }
    }
}

/// Fans each outcome out to the configured collectors.
pub struct Reporter {
    collectors: Vec<Box<dyn ReportCollector>>,
}

impl Reporter {
    pub fn add_outcome(&mut self, outcome: &OutcomeRecord) {
        for collector in &mut self.collectors {
            collector.add_outcome(outcome);
        }
    }

    pub fn finalize(&self) -> anyhow::Result<()> {
        for collector in &self.collectors {
            collector.finalize()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn outcome(run_index: usize, won: bool) -> OutcomeRecord {
        OutcomeRecord {
            run_index,
            first_mover: "subject".to_string(),
            won,
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn outcomes_fan_out_to_every_collector() {
        let first = InMemoryReporter::new();
        let first_records = first.records();
        let second = InMemoryReporter::new();
        let second_records = second.records();

        let mut reporter = ReportConfig::default()
            .with_collector(Box::new(first))
            .with_collector(Box::new(second))
            .init();

        reporter.add_outcome(&outcome(0, true));
        reporter.add_outcome(&outcome(1, false));

        assert_eq!(2, first_records.snapshot().len());
        assert_eq!(2, second_records.snapshot().len());
        reporter.finalize().unwrap();
    }
}
