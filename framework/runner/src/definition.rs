use anyhow::ensure;

/// Which player opens the game in a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FirstMover {
    /// The player under test, whose wins the batch counts.
    #[display("subject")]
    Subject,
    /// The built-in opponent.
    #[display("opponent")]
    Opponent,
}

impl FirstMover {
    /// Runs alternate who opens, starting with the subject on run 0.
    pub fn for_run(run_index: usize) -> Self {
        if run_index % 2 == 0 {
            FirstMover::Subject
        } else {
            FirstMover::Opponent
        }
    }
}

/// The builder for a matchup definition.
///
/// This must be used by a matchup binary to describe the engine command pair
/// to run and the victory line to look for.
pub struct MatchupDefinitionBuilder {
    /// The name of the matchup, which should be unique within the workspace.
    ///
    /// Recommended value is `env!("CARGO_PKG_NAME")`.
    name: String,
    subject_first_command: Option<String>,
    opponent_first_command: Option<String>,
    win_marker: Option<Vec<u8>>,
}

impl MatchupDefinitionBuilder {
    /// Initialise a new matchup definition from the matchup name. See
    /// [MatchupDefinitionBuilder::name] for more information about the name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subject_first_command: None,
            opponent_first_command: None,
            win_marker: None,
        }
    }

    /// The shell command line that starts a game with the subject moving
    /// first. Used for even-indexed runs.
    pub fn use_subject_first_command(mut self, command: &str) -> Self {
        self.subject_first_command = Some(command.to_string());
        self
    }

    /// The shell command line that starts a game with the opponent moving
    /// first. Used for odd-indexed runs.
    pub fn use_opponent_first_command(mut self, command: &str) -> Self {
        self.opponent_first_command = Some(command.to_string());
        self
    }

    /// The exact victory line, trailing newline included. A run only counts
    /// as won when a raw output line matches these bytes exactly.
    pub fn use_win_marker(mut self, marker: impl Into<Vec<u8>>) -> Self {
        self.win_marker = Some(marker.into());
        self
    }

    pub fn build(self) -> anyhow::Result<MatchupDefinition> {
        let subject_first_command = self
            .subject_first_command
            .ok_or(anyhow::anyhow!("No subject-first command specified"))?;
        let opponent_first_command = self
            .opponent_first_command
            .ok_or(anyhow::anyhow!("No opponent-first command specified"))?;
        let win_marker = self
            .win_marker
            .ok_or(anyhow::anyhow!("No win marker specified"))?;

        ensure!(
            !subject_first_command.trim().is_empty(),
            "Subject-first command is empty"
        );
        ensure!(
            !opponent_first_command.trim().is_empty(),
            "Opponent-first command is empty"
        );
        ensure!(!win_marker.is_empty(), "Win marker is empty");

        warn_if_unresolvable(&subject_first_command);
        warn_if_unresolvable(&opponent_first_command);

        Ok(MatchupDefinition {
            name: self.name,
            subject_first_command,
            opponent_first_command,
            win_marker,
        })
    }
}

/// An immutable matchup definition, built with a [MatchupDefinitionBuilder].
pub struct MatchupDefinition {
    pub name: String,
    subject_first_command: String,
    opponent_first_command: String,
    win_marker: Vec<u8>,
}

impl MatchupDefinition {
    pub fn command(&self, first_mover: FirstMover) -> &str {
        match first_mover {
            FirstMover::Subject => &self.subject_first_command,
            FirstMover::Opponent => &self.opponent_first_command,
        }
    }

    pub fn win_marker(&self) -> &[u8] {
        &self.win_marker
    }
}

/// Warn ahead of the batch when a command's program does not resolve in
/// `PATH`. The runs still proceed; the shell's own diagnostic is part of the
/// pass-through output.
fn warn_if_unresolvable(command: &str) {
    if let Some(program) = command.split_whitespace().next() {
        if which::which(program).is_err() {
            log::warn!("Program '{program}' for command '{command}' was not found in PATH");
        }
    }
}
