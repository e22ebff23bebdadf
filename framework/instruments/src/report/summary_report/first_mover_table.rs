use tabled::Tabled;

use crate::OutcomeRecord;

#[derive(Tabled)]
pub struct FirstMoverRow {
    pub first_mover: String,
    pub runs: usize,
    pub wins: usize,
    #[tabled(display = "percent1")]
    pub win_rate: f64,
    #[tabled(display = "float2")]
    pub avg_run_ms: f64,
}

impl FirstMoverRow {
    pub fn from_outcomes(first_mover: String, outcomes: &[&OutcomeRecord]) -> Self {
        let runs = outcomes.len();
        let wins = outcomes.iter().filter(|record| record.won).count();
        let total_duration_micro = outcomes
            .iter()
            .map(|record| record.elapsed.as_micros())
            .sum::<u128>();

        Self {
            first_mover,
            runs,
            wins,
            win_rate: (wins as f64 / runs as f64) * 100.0,
            avg_run_ms: (total_duration_micro as f64 / runs as f64) / 1000.0,
        }
    }
}

fn percent1(n: &f64) -> String {
    format!("{:.1}%", n)
}

fn float2(n: &f64) -> String {
    format!("{:.2}", n)
}
