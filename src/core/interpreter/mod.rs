//! Query Interpreter
//!
//! Turns a free-text question into a templated answer using substring
//! keyword matching against a read-only catalog.
//!
//! # Architecture
//!
//! ```text
//! raw text → ParsedQuery (normalized text + subject body) → rule table → answer
//! ```
//!
//! - `ParsedQuery`: lowercased, trimmed text and the first catalog body whose
//!   name occurs in it (catalog order wins ties)
//! - `rules`: ordered (predicate, handler) pairs, first match wins
//! - `phrasing`: answer templates
//!
//! Substring matching is imprecise on purpose: "mars" inside "marshmallow"
//! still selects Mars. Interpretation never fails; every path ends in a
//! string, including the catch-all fallback.
//!
//! # Example
//!
//! ```rust
//! use solar_almanac::core::{default_catalog, QueryInterpreter};
//!
//! let catalog = default_catalog();
//! let interpreter = QueryInterpreter::new(&catalog);
//! let answer = interpreter.answer("How massive is Jupiter?");
//! assert!(answer.contains("1898"));
//! ```

pub mod phrasing;
pub mod rules;

pub use rules::{rules, Intent, Rule};

use crate::core::models::{Body, Catalog};

/// A normalized query bound to the catalog it is asked against
#[derive(Debug, Clone)]
pub struct ParsedQuery<'a> {
    /// Lowercased, trimmed query text
    pub text: String,
    /// First body whose name appears in the text
    pub subject: Option<&'a Body>,
    /// Catalog being queried
    pub catalog: &'a Catalog,
}

impl<'a> ParsedQuery<'a> {
    /// Normalize `raw` and detect its subject body
    pub fn parse(raw: &str, catalog: &'a Catalog) -> Self {
        let mut query = Self {
            text: raw.trim().to_lowercase(),
            subject: None,
            catalog,
        };
        query.subject = query.detect_subject();
        query
    }

    /// Scan catalog names in order for one contained in the text
    pub fn detect_subject(&self) -> Option<&'a Body> {
        let catalog: &'a Catalog = self.catalog;
        catalog
            .iter()
            .find(|body| self.text.contains(&body.name.to_lowercase()))
    }

    /// Whether the text contains `needle` (already lowercase)
    pub fn mentions(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.mentions(n))
    }
}

/// Outcome of interpreting one query
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation<'a> {
    /// Which rule produced the answer
    pub intent: Intent,
    /// Detected subject body, if any
    pub subject: Option<&'a Body>,
    pub answer: String,
}

/// Rule-based interpreter holding a shared borrow of the catalog
#[derive(Debug, Clone, Copy)]
pub struct QueryInterpreter<'a> {
    catalog: &'a Catalog,
    rules: &'static [Rule],
}

impl<'a> QueryInterpreter<'a> {
    /// Create an interpreter over the standard rule table
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            rules: rules(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Answer a query, reporting which intent matched
    pub fn interpret(&self, query: &str) -> Interpretation<'a> {
        let parsed = ParsedQuery::parse(query, self.catalog);

        let matched = self
            .rules
            .iter()
            .find_map(|rule| rule.fire(&parsed).map(|answer| (rule.intent, answer)));

        let (intent, answer) = matched
            .unwrap_or_else(|| (Intent::Unknown, phrasing::FALLBACK_ANSWER.to_string()));

        log::debug!(
            "query {:?} -> intent={} subject={}",
            parsed.text,
            intent,
            parsed.subject.map(|b| b.name.as_str()).unwrap_or("-")
        );

        Interpretation {
            intent,
            subject: parsed.subject,
            answer,
        }
    }

    /// Answer a query
    pub fn answer(&self, query: &str) -> String {
        self.interpret(query).answer
    }
}

/// Answer `query` against `catalog`
pub fn answer(query: &str, catalog: &Catalog) -> String {
    QueryInterpreter::new(catalog).answer(query)
}
