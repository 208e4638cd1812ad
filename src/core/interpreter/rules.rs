//! Ordered rule table for query interpretation
//!
//! Each rule pairs a predicate with a handler. Rules are evaluated top to
//! bottom and the first one whose predicate holds *and* whose handler
//! produces an answer wins. A handler returning `None` lets evaluation fall
//! through to the next rule.
//!
//! ```text
//! with subject:    Mass → Distance → Moons → Membership → Summary
//! without subject: Membership → EarthMoonCount → Enumeration
//! always:          Unknown (fallback)
//! ```
//!
//! Membership sits ahead of Summary so "Is Mars in the list?" is answered
//! with a yes rather than the full-detail dump.

use std::fmt;

use super::phrasing;
use super::ParsedQuery;

// =============================================================================
// Keyword sets
// =============================================================================

pub const MASS_KEYWORDS: &[&str] = &["mass", "massive"];
pub const DISTANCE_KEYWORDS: &[&str] = &["distance", "far", "from sun", "from the sun"];
pub const MOON_KEYWORDS: &[&str] = &["moon", "moons", "satellite", "satellites"];
pub const MEMBERSHIP_KEYWORDS: &[&str] = &["in the list", "included"];
pub const MOON_COUNT_PHRASES: &[&str] = &["how many moons", "number of moons"];

// =============================================================================
// Intent
// =============================================================================

/// Category of question inferred from keyword presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Mass,
    Distance,
    Moons,
    /// Body named, no attribute keyword: full-detail answer
    Summary,
    /// "Is X in the list?"
    Membership,
    /// "How many moons does Earth have?" when no subject was detected
    EarthMoonCount,
    /// "List all planets"
    Enumeration,
    /// Nothing matched
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Mass => "mass",
            Intent::Distance => "distance",
            Intent::Moons => "moons",
            Intent::Summary => "summary",
            Intent::Membership => "membership",
            Intent::EarthMoonCount => "earth-moon-count",
            Intent::Enumeration => "enumeration",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Rules
// =============================================================================

/// One (predicate, handler) entry
#[derive(Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    applies: fn(&ParsedQuery<'_>) -> bool,
    respond: fn(&ParsedQuery<'_>) -> Option<String>,
}

impl Rule {
    /// Answer the query if this rule fires
    pub fn fire(&self, query: &ParsedQuery<'_>) -> Option<String> {
        if (self.applies)(query) {
            (self.respond)(query)
        } else {
            None
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("intent", &self.intent).finish()
    }
}

static RULES: [Rule; 8] = [
    Rule {
        intent: Intent::Mass,
        applies: asks_mass,
        respond: respond_mass,
    },
    Rule {
        intent: Intent::Distance,
        applies: asks_distance,
        respond: respond_distance,
    },
    Rule {
        intent: Intent::Moons,
        applies: asks_moons,
        respond: respond_moons,
    },
    Rule {
        intent: Intent::Membership,
        applies: asks_membership,
        respond: respond_membership,
    },
    Rule {
        intent: Intent::Summary,
        applies: has_subject,
        respond: respond_summary,
    },
    Rule {
        intent: Intent::EarthMoonCount,
        applies: asks_earth_moon_count,
        respond: respond_earth_moon_count,
    },
    Rule {
        intent: Intent::Enumeration,
        applies: asks_enumeration,
        respond: respond_enumeration,
    },
    Rule {
        intent: Intent::Unknown,
        applies: always,
        respond: respond_fallback,
    },
];

/// The rule table in priority order
pub fn rules() -> &'static [Rule] {
    &RULES
}

// =============================================================================
// Predicates
// =============================================================================

fn has_subject(query: &ParsedQuery<'_>) -> bool {
    query.subject.is_some()
}

fn asks_mass(query: &ParsedQuery<'_>) -> bool {
    has_subject(query) && query.mentions_any(MASS_KEYWORDS)
}

fn asks_distance(query: &ParsedQuery<'_>) -> bool {
    has_subject(query) && query.mentions_any(DISTANCE_KEYWORDS)
}

fn asks_moons(query: &ParsedQuery<'_>) -> bool {
    has_subject(query) && query.mentions_any(MOON_KEYWORDS)
}

fn asks_membership(query: &ParsedQuery<'_>) -> bool {
    query.mentions_any(MEMBERSHIP_KEYWORDS)
}

fn asks_earth_moon_count(query: &ParsedQuery<'_>) -> bool {
    query.mentions_any(MOON_COUNT_PHRASES) && query.mentions("earth")
}

fn asks_enumeration(query: &ParsedQuery<'_>) -> bool {
    query.mentions("list") && query.mentions("planet")
}

fn always(_query: &ParsedQuery<'_>) -> bool {
    true
}

// =============================================================================
// Handlers
// =============================================================================

fn respond_mass(query: &ParsedQuery<'_>) -> Option<String> {
    query.subject.map(phrasing::mass)
}

fn respond_distance(query: &ParsedQuery<'_>) -> Option<String> {
    query.subject.map(phrasing::distance)
}

fn respond_moons(query: &ParsedQuery<'_>) -> Option<String> {
    query.subject.map(phrasing::moons)
}

fn respond_summary(query: &ParsedQuery<'_>) -> Option<String> {
    query.subject.map(phrasing::summary)
}

/// Earth missing from the catalog means no answer here
fn respond_earth_moon_count(query: &ParsedQuery<'_>) -> Option<String> {
    query.catalog.find_by_name("Earth").map(phrasing::moon_count)
}

fn respond_enumeration(query: &ParsedQuery<'_>) -> Option<String> {
    Some(phrasing::enumeration(query.catalog))
}

fn respond_fallback(_query: &ParsedQuery<'_>) -> Option<String> {
    Some(phrasing::FALLBACK_ANSWER.to_string())
}

fn respond_membership(query: &ParsedQuery<'_>) -> Option<String> {
    if let Some(body) = query.detect_subject() {
        return Some(phrasing::listed(&body.name));
    }

    if query.mentions("pluto") {
        let answer = if query.catalog.all_names().contains(&"Pluto") {
            phrasing::listed("Pluto")
        } else {
            phrasing::PLUTO_EXCLUDED_ANSWER.to_string()
        };
        return Some(answer);
    }

    Some(phrasing::UNIDENTIFIED_ANSWER.to_string())
}
