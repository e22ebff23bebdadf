use gauntlet_runner::prelude::*;

/// The victory line the Network engine prints when the machine player wins.
/// Matched byte-exact, trailing newline included.
const WIN_MARKER: &[u8] = b">>>> MachinePlayer <<<< WINS!\n";

fn main() -> GauntletResult<()> {
    let definition = MatchupDefinitionBuilder::new(env!("CARGO_PKG_NAME"))
        .use_subject_first_command("java Network -q machine random")
        .use_opponent_first_command("java Network -q random machine")
        .use_win_marker(WIN_MARKER.to_vec());

    run(definition)?;

    Ok(())
}
