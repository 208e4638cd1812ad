//! Form-style transcript
//!
//! Headless model of the form shell: a single-line question is submitted,
//! answered, and appended to a read-only log as
//!
//! ```text
//! Q: <query>
//!
//! <answer>
//!
//! --------------------------------------------------
//!
//! ```

use crate::core::{AlmanacError, Interpretation, QueryInterpreter, Result};

/// Line drawn between transcript entries
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Query submitted by the "List All Planets" shortcut
pub const LIST_ALL_PLANETS: &str = "List all planets";

/// Append-only question/answer log
#[derive(Debug, Clone)]
pub struct Transcript<'a> {
    interpreter: QueryInterpreter<'a>,
    log: String,
    entries: usize,
}

impl<'a> Transcript<'a> {
    pub fn new(interpreter: QueryInterpreter<'a>) -> Self {
        Self {
            interpreter,
            log: String::new(),
            entries: 0,
        }
    }

    /// Answer `query` and append it to the log.
    ///
    /// Empty or whitespace-only input is rejected with
    /// `AlmanacError::EmptyQuery` and leaves the log untouched.
    pub fn submit(&mut self, query: &str) -> Result<Interpretation<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AlmanacError::EmptyQuery);
        }

        let result = self.interpreter.interpret(query);
        self.log.push_str(&format!(
            "Q: {}\n\n{}\n\n{}\n\n",
            query, result.answer, SEPARATOR
        ));
        self.entries += 1;
        Ok(result)
    }

    /// Shortcut: submit the fixed "List all planets" query
    pub fn list_all_planets(&mut self) -> Result<Interpretation<'a>> {
        self.submit(LIST_ALL_PLANETS)
    }

    pub fn clear(&mut self) {
        self.log.clear();
        self.entries = 0;
    }

    /// Full log text
    pub fn text(&self) -> &str {
        &self.log
    }

    /// Number of entries since the last clear
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
