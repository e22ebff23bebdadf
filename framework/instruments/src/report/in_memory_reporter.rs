use std::cell::RefCell;
use std::rc::Rc;

use crate::report::ReportCollector;
use crate::OutcomeRecord;

/// Keeps every outcome in memory. Useful while developing a matchup and in
/// tests that need to inspect exactly what the runner recorded.
pub struct InMemoryReporter {
    outcome_records: Rc<RefCell<Vec<OutcomeRecord>>>,
}

impl InMemoryReporter {
    pub fn new() -> Self {
        Self {
            outcome_records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A handle onto the recorded outcomes that stays readable after the
    /// reporter has been handed to a [`crate::Reporter`].
    ///
    /// The batch is single-threaded, so a shared `Rc` is all the handle
    /// needs.
    pub fn records(&self) -> RecordedOutcomes {
        RecordedOutcomes(Rc::clone(&self.outcome_records))
    }
}

impl Default for InMemoryReporter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecordedOutcomes(Rc<RefCell<Vec<OutcomeRecord>>>);

impl RecordedOutcomes {
    pub fn snapshot(&self) -> Vec<OutcomeRecord> {
        self.0.borrow().clone()
    }
}

impl ReportCollector for InMemoryReporter {
    fn add_outcome(&mut self, outcome: &OutcomeRecord) {
        self.outcome_records.borrow_mut().push(outcome.clone());
    }

    fn finalize(&self) -> anyhow::Result<()> {
        log::debug!(
            "Recorded {} outcomes in memory",
            self.outcome_records.borrow().len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn snapshot_sees_outcomes_added_after_the_handle_was_taken() {
        let mut reporter = InMemoryReporter::new();
        let records = reporter.records();

        reporter.add_outcome(&OutcomeRecord {
            run_index: 0,
            first_mover: "subject".to_string(),
            won: false,
            elapsed: Duration::from_millis(1),
        });

        let snapshot = records.snapshot();
        assert_eq!(1, snapshot.len());
        assert_eq!(0, snapshot[0].run_index);
    }
}
