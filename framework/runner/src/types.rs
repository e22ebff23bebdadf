/// Recommended result type for a matchup binary's `main` function. Compatible
/// with the errors produced by the runner so `?` propagates them.
pub type GauntletResult<T> = anyhow::Result<T>;
