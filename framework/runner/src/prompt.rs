use std::io::{BufRead, Write};

use anyhow::Context;

/// Ask the user how many runs to execute.
///
/// The count is the batch's sole runtime parameter and is gathered
/// interactively; the runner has no flag parsing. Zero is accepted here and
/// fails later, at the win-rate computation.
pub(crate) fn read_run_count(
    mut input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<usize> {
    write!(output, "Enter the number of runs: ").context("Failed to write the run count prompt")?;
    output
        .flush()
        .context("Failed to flush the run count prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read the number of runs from stdin")?;

    let raw = line.trim();
    raw.parse::<usize>()
        .with_context(|| format!("'{raw}' is not a valid number of runs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn parses_a_plain_integer() {
        let mut prompt = Vec::new();
        let count = read_run_count(Cursor::new("12\n"), &mut prompt).unwrap();

        assert_eq!(12, count);
        assert_eq!(b"Enter the number of runs: ".as_slice(), prompt.as_slice());
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        let count = read_run_count(Cursor::new("  3 \n"), Vec::new()).unwrap();

        assert_eq!(3, count);
    }

    #[test]
    fn zero_is_accepted_at_the_prompt() {
        let count = read_run_count(Cursor::new("0\n"), Vec::new()).unwrap();

        assert_eq!(0, count);
    }

    #[test]
    fn rejects_a_non_integer() {
        assert!(read_run_count(Cursor::new("abc\n"), Vec::new()).is_err());
    }

    #[test]
    fn rejects_a_negative_count() {
        assert!(read_run_count(Cursor::new("-2\n"), Vec::new()).is_err());
    }

    #[test]
    fn rejects_an_empty_line() {
        assert!(read_run_count(Cursor::new("\n"), Vec::new()).is_err());
    }
}
