use indicatif::{ProgressBar, ProgressStyle};

/// A progress bar over completed runs, drawn on stderr so the engine's
/// pass-through output on stdout is left untouched. Advanced once per
/// completed run from the batch thread itself.
pub(crate) fn batch_progress(total_runs: u64) -> ProgressBar {
    let progress = ProgressBar::new(total_runs);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} runs")
            .expect("Failed to set progress style")
            .progress_chars("#>-"),
    );

    progress
}
