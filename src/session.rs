//! Terminal session: walks the pairs in order and shows each answer.
//!
//! Test modes print the prompt, block on one line of input, then reveal the
//! answer. An empty line marks the answer as not attempted and the reveal is
//! highlighted. Train modes print every pair straight away.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::drill_engine::models::{ModeKind, Pair};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const YELLOW: &'static str = "\x1b[33m";
}

/// Counts reported once a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub shown: usize,
    pub attempted: usize,
    pub interrupted: bool,
}

/// Run a session over `pairs` reading answers from `input`.
pub fn run<R: BufRead, W: Write>(
    pairs: &[Pair],
    kind: ModeKind,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let summary = match kind {
        ModeKind::Test => run_test(pairs, input, output)?,
        ModeKind::Train => run_train(pairs, output)?,
    };
    info!(
        shown = summary.shown,
        attempted = summary.attempted,
        total = pairs.len(),
        "session finished"
    );
    Ok(summary)
}

fn run_test<R: BufRead, W: Write>(
    pairs: &[Pair],
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let total = pairs.len();
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    for (i, pair) in pairs.iter().enumerate() {
        write!(output, "[{}/{}] {}: ", i + 1, total, pair.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            warn!(shown = summary.shown, total, "input closed, ending session early");
            summary.interrupted = true;
            break;
        }

        let attempted = !line.trim().is_empty();
        debug!(index = i + 1, attempted, "answer entered");
        if attempted {
            summary.attempted += 1;
            writeln!(output, "\t{pair}")?;
        } else {
            writeln!(output, "\t{}{pair}{}", Color::YELLOW, Color::RESET)?;
        }
        summary.shown += 1;
    }
    Ok(summary)
}

fn run_train<W: Write>(pairs: &[Pair], output: &mut W) -> io::Result<SessionSummary> {
    let total = pairs.len();
    for (i, pair) in pairs.iter().enumerate() {
        writeln!(output, "{}/{} {pair}", i + 1, total)?;
    }
    Ok(SessionSummary { shown: total, attempted: 0, interrupted: false })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<Pair> {
        vec![Pair::new("der Tisch", "table"), Pair::new("das Haus", "house")]
    }

    fn run_to_string(kind: ModeKind, input: &str) -> (String, SessionSummary) {
        let mut out = Vec::new();
        let summary = run(&pairs(), kind, &mut input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_mode_reveals_each_answer_in_order() {
        let (out, summary) = run_to_string(ModeKind::Test, "table\nhouse\n");
        assert!(out.contains("[1/2] der Tisch: \tder Tisch -> table\n"));
        assert!(out.contains("[2/2] das Haus: \tdas Haus -> house\n"));
        assert!(out.find("der Tisch").unwrap() < out.find("das Haus").unwrap());
        assert_eq!(summary, SessionSummary { shown: 2, attempted: 2, interrupted: false });
    }

    #[test]
    fn empty_answer_is_highlighted() {
        let (out, summary) = run_to_string(ModeKind::Test, "\nhouse\n");
        assert!(out.contains(&format!("\t{}der Tisch -> table{}", Color::YELLOW, Color::RESET)));
        assert!(out.contains("\tdas Haus -> house\n"));
        assert_eq!(summary.attempted, 1);
    }

    #[test]
    fn closed_input_ends_session_early() {
        let (out, summary) = run_to_string(ModeKind::Test, "table\n");
        assert!(!out.contains("das Haus -> house"));
        assert!(summary.interrupted);
        assert_eq!(summary.shown, 1);
    }

    #[test]
    fn train_mode_prints_without_reading() {
        let (out, summary) = run_to_string(ModeKind::Train, "");
        assert_eq!(out, "1/2 der Tisch -> table\n2/2 das Haus -> house\n");
        assert_eq!(summary.shown, 2);
        assert!(!summary.interrupted);
    }
}
