use std::io::{BufRead, BufReader};
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};

use anyhow::Context;

/// A spawned game engine whose merged output is consumed line by line.
///
/// The command is a single shell command line, run via `sh -c` with the
/// engine's stderr redirected into the captured stream, so the harness sees
/// one merged, ordered stream.
pub struct GameProcess {
    child: Child,
    reader: BufReader<ChildStdout>,
}

impl GameProcess {
    pub fn spawn(command: &str) -> anyhow::Result<Self> {
        log::debug!("Spawning game engine: {command}");

        let mut child = Command::new("sh")
            .arg("-c")
            // `exec 2>&1` before the command merges stderr into the pipe.
            .arg(format!("exec 2>&1\n{command}"))
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn game engine '{command}'"))?;

        let stdout = child
            .stdout
            .take()
            .context("Failed to get stdout for the running game engine")?;

        Ok(Self {
            child,
            reader: BufReader::new(stdout),
        })
    }

    /// The next raw output line, terminator included. Returns `None` once the
    /// engine closes its output stream.
    ///
    /// The terminator is kept so a final unterminated line stays
    /// distinguishable from a complete one.
    pub fn next_raw_line(&mut self) -> Option<anyhow::Result<Vec<u8>>> {
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => None,
            Ok(_) => Some(Ok(raw)),
            Err(e) => {
                Some(Err(anyhow::Error::new(e).context("Failed to read from the game engine")))
            }
        }
    }

    /// Reap the engine once its output is drained. The exit status is
    /// surfaced for logging only; an abnormal exit is not an error at the
    /// batch level.
    pub fn reap(mut self) -> anyhow::Result<ExitStatus> {
        self.child
            .wait()
            .context("Failed to wait for the game engine to exit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(unix)]
    #[test]
    fn raw_lines_keep_their_terminators() {
        let mut process = GameProcess::spawn("printf 'one\\ntwo'").unwrap();

        assert_eq!(b"one\n".to_vec(), process.next_raw_line().unwrap().unwrap());
        assert_eq!(b"two".to_vec(), process.next_raw_line().unwrap().unwrap());
        assert!(process.next_raw_line().is_none());

        process.reap().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn stderr_is_merged_into_the_stream() {
        let mut process = GameProcess::spawn("echo oops >&2").unwrap();

        assert_eq!(b"oops\n".to_vec(), process.next_raw_line().unwrap().unwrap());
        assert!(process.next_raw_line().is_none());

        process.reap().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn a_missing_program_is_not_a_spawn_error() {
        // The shell's diagnostic is ordinary output; the spawn itself succeeds.
        let mut process = GameProcess::spawn("definitely-not-a-real-program-0b1c").unwrap();

        let mut saw_output = false;
        while let Some(line) = process.next_raw_line() {
            line.unwrap();
            saw_output = true;
        }
        let status = process.reap().unwrap();

        assert!(saw_output);
        assert!(!status.success());
    }
}
