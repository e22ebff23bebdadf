mod first_mover_table;

use itertools::Itertools;
use tabled::settings::Style;
use tabled::Table;

use crate::report::summary_report::first_mover_table::FirstMoverRow;
use crate::report::ReportCollector;
use crate::OutcomeRecord;

/// Failure to compute a win rate because the batch contained no runs.
///
/// Raised after the win-count line has been printed, so a zero-run batch
/// terminates at exactly the point where the percentage would have appeared.
#[derive(derive_more::Error, derive_more::Display, Debug)]
pub struct ZeroRunsError {
    msg: String,
}

impl Default for ZeroRunsError {
    fn default() -> Self {
        Self {
            msg: "cannot compute a win rate over zero runs".to_string(),
        }
    }
}

/// Prints the batch result: the win count, the win rate, and a breakdown of
/// the runs by which side opened.
pub struct SummaryReportCollector {
    outcome_records: Vec<OutcomeRecord>,
}

impl SummaryReportCollector {
    pub fn new() -> Self {
        Self {
            outcome_records: Vec::new(),
        }
    }

    fn print_win_summary(&self) -> anyhow::Result<()> {
        let runs = self.outcome_records.len();
        let wins = self
            .outcome_records
            .iter()
            .filter(|record| record.won)
            .count();

        println!("Won {} games out of {}", wins, runs);

        if runs == 0 {
            return Err(ZeroRunsError::default().into());
        }

        println!("{}%", (wins as f64 / runs as f64) * 100.0);

        Ok(())
    }

    fn print_summary_by_first_mover(&self) {
        println!("\nSummary of runs by first mover");

        let rows = self
            .outcome_records
            .iter()
            .into_group_map_by(|record| record.first_mover.clone())
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(first_mover, outcomes)| FirstMoverRow::from_outcomes(first_mover, &outcomes))
            .collect::<Vec<_>>();

        let mut table = Table::new(rows);
        table.with(Style::modern());

        println!("{table}");
    }
}

impl ReportCollector for SummaryReportCollector {
    fn add_outcome(&mut self, outcome: &OutcomeRecord) {
        self.outcome_records.push(outcome.clone());
    }

    fn finalize(&self) -> anyhow::Result<()> {
        self.print_win_summary()?;
        self.print_summary_by_first_mover();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn outcome(run_index: usize, first_mover: &str, won: bool) -> OutcomeRecord {
        OutcomeRecord {
            run_index,
            first_mover: first_mover.to_string(),
            won,
            elapsed: Duration::from_millis(10),
        }
    }

    #[test]
    fn finalize_succeeds_with_at_least_one_run() {
        let mut collector = SummaryReportCollector::new();
        collector.add_outcome(&outcome(0, "subject", true));
        collector.add_outcome(&outcome(1, "opponent", false));

        collector.finalize().unwrap();
    }

    #[test]
    fn finalize_fails_on_an_empty_batch() {
        let collector = SummaryReportCollector::new();

        let err = collector.finalize().unwrap_err();
        assert!(err.is::<ZeroRunsError>());
    }
}
