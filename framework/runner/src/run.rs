use anyhow::Context;
use gauntlet_instruments::{ReportConfig, Reporter, RunRecord};

use crate::definition::{FirstMover, MatchupDefinition, MatchupDefinitionBuilder};
use crate::init::init;
use crate::process::GameProcess;
use crate::progress::batch_progress;
use crate::prompt::read_run_count;

/// Entry point for a matchup binary: initialise logging, ask for the run
/// count, execute the batch and print the summary.
pub fn run(definition: MatchupDefinitionBuilder) -> anyhow::Result<()> {
    init();

    let definition = definition.build()?;
    let batch_id = nanoid::nanoid!();

    log::info!("Running matchup: {} (batch {})", definition.name, batch_id);

    let number_of_runs = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        read_run_count(stdin.lock(), stdout.lock())?
    };

    let mut reporter = ReportConfig::default().enable_summary().init();
    run_batch(&definition, number_of_runs, &mut reporter)?;

    log::info!("Batch {batch_id} complete");

    reporter.finalize()
}

/// Execute `number_of_runs` games sequentially, alternating which side opens,
/// passing every engine output line through to stdout and reporting one
/// outcome per run. Returns the number of runs the subject won.
///
/// Each engine is spawned, fully drained and reaped before the next run
/// starts. The drain is a blocking read, so a hung engine hangs the batch.
pub fn run_batch(
    definition: &MatchupDefinition,
    number_of_runs: usize,
    reporter: &mut Reporter,
) -> anyhow::Result<usize> {
    let progress = batch_progress(number_of_runs as u64);
    let mut counter = 0;

    for run_index in 0..number_of_runs {
        let first_mover = FirstMover::for_run(run_index);
        let command = definition.command(first_mover);

        log::debug!("Run {run_index}: {first_mover} opens");

        let record = RunRecord::new(run_index, first_mover.to_string());
        let mut process = GameProcess::spawn(command)?;
        let mut won = false;

        while let Some(raw) = process.next_raw_line() {
            let raw = raw?;

            // Byte-exact, terminator included. Near matches are not wins.
            if raw.as_slice() == definition.win_marker() {
                won = true;
            }

            let text =
                String::from_utf8(raw).context("Game engine output was not valid UTF-8")?;
            println!("{}", text.trim_end_matches(['\r', '\n']));
        }

        let status = process.reap()?;
        if !status.success() {
            log::debug!("Run {run_index} engine exited with {status}");
        }

        if won {
            counter += 1;
        }
        reporter.add_outcome(&record.finish(won));
        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(counter)
}
