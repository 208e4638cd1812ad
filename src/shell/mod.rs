//! Presentation shells
//!
//! Thin wrappers that forward user text to the interpreter and render the
//! answer. Both reject empty input themselves; the interpreter never sees it.
//!
//! - `PromptLoop`: line-based question/answer loop over any reader/writer
//! - `Transcript`: the append-only log behind the form-style shell

pub mod transcript;

pub use transcript::{Transcript, LIST_ALL_PLANETS, SEPARATOR};

use std::io::{self, BufRead, Write};

use crate::core::QueryInterpreter;

/// Question shown before each read
pub const PROMPT: &str = "What would you like to know? ";

/// Example questions listed in the banner
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "Tell me everything about Saturn",
    "How massive is Neptune?",
    "Is Pluto in the list of planets?",
    "How many moons does Earth have?",
];

const RULE_WIDTH: usize = 50;

/// Render the welcome banner
pub fn banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", rule));
    out.push_str("Welcome to the Solar System Information Program\n");
    out.push_str(&format!("{}\n", rule));
    out.push_str("\nYou can ask questions like:\n");
    for example in EXAMPLE_QUESTIONS {
        out.push_str(&format!("- {}\n", example));
    }
    out.push_str("\nType 'exit' to quit the program.\n");
    out.push_str(&format!("{}\n", rule));
    out
}

/// Summary of a finished prompt session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Questions answered
    pub answered: usize,
    /// Blank lines skipped
    pub skipped: usize,
    /// Whether the user typed `exit` (false when input simply ended)
    pub exited: bool,
}

/// Interactive prompt loop
pub struct PromptLoop<'a, R, W> {
    interpreter: QueryInterpreter<'a>,
    input: R,
    output: W,
    show_banner: bool,
}

impl<'a, R: BufRead, W: Write> PromptLoop<'a, R, W> {
    pub fn new(interpreter: QueryInterpreter<'a>, input: R, output: W) -> Self {
        Self {
            interpreter,
            input,
            output,
            show_banner: true,
        }
    }

    /// Builder pattern: toggle the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run until `exit` or end of input
    pub fn run(mut self) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();

        if self.show_banner {
            write!(self.output, "{}", banner())?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "\n{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let query = line.trim();
            if query.eq_ignore_ascii_case("exit") {
                writeln!(
                    self.output,
                    "Thank you for using the Solar System Information Program!"
                )?;
                stats.exited = true;
                break;
            }

            if query.is_empty() {
                stats.skipped += 1;
                continue;
            }

            let answer = self.interpreter.answer(query);
            writeln!(self.output, "\n{}", answer)?;
            stats.answered += 1;
        }

        self.output.flush()?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::default_catalog;
    use std::io::Cursor;

    fn run_session(input: &str) -> (SessionStats, String) {
        let catalog = default_catalog();
        let mut output = Vec::new();
        let stats = PromptLoop::new(
            QueryInterpreter::new(&catalog),
            Cursor::new(input.to_string()),
            &mut output,
        )
        .with_banner(false)
        .run()
        .unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_banner_lists_examples() {
        let text = banner();
        assert!(text.contains("Welcome to the Solar System Information Program"));
        for example in EXAMPLE_QUESTIONS {
            assert!(text.contains(example));
        }
        assert!(text.contains("Type 'exit' to quit the program."));
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        let (stats, output) = run_session("EXIT\nHow massive is Jupiter?\n");
        assert!(stats.exited);
        assert_eq!(stats.answered, 0);
        assert!(output.contains("Thank you for using"));
        assert!(!output.contains("1898"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (stats, output) = run_session("\n   \nHow massive is Jupiter?\nexit\n");
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.answered, 1);
        assert_eq!(output.matches(PROMPT).count(), 4);
        assert!(output.contains("\nJupiter has a mass of 1898 × 10^24 kg.\n"));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (stats, _) = run_session("List all planets\n");
        assert!(!stats.exited);
        assert_eq!(stats.answered, 1);
    }
}
