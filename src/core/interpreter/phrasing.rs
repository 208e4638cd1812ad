//! Answer templates
//!
//! Every sentence the interpreter can produce lives here, so the rules stay
//! a pure decision table.

use crate::core::models::{Body, Catalog};

/// Answer when no rule recognises the question
pub const FALLBACK_ANSWER: &str =
    "I'm not sure how to answer that question. Try asking about a specific planet or attribute.";

/// Membership question without an identifiable body
pub const UNIDENTIFIED_ANSWER: &str = "I couldn't identify which planet you're asking about.";

/// Pluto asked about but absent from the catalog
pub const PLUTO_EXCLUDED_ANSWER: &str =
    "No, Pluto is not in the list of planets. It was reclassified as a dwarf planet in 2006.";

/// "moon" or "moons" depending on count
pub fn moons_word(count: usize) -> &'static str {
    if count == 1 {
        "moon"
    } else {
        "moons"
    }
}

pub fn mass(body: &Body) -> String {
    format!("{} has a mass of {} × 10^24 kg.", body.name, body.mass)
}

pub fn distance(body: &Body) -> String {
    format!("{} is {} million km from the Sun.", body.name, body.distance_from_sun)
}

/// Moon count with names, or the "no moons" sentence.
///
/// The noun stays plural for every count ("1 moons"); only `moon_count`
/// agrees with the number.
pub fn moons(body: &Body) -> String {
    let count = body.satellite_count();
    if count == 0 {
        return format!("{} doesn't have any moons in our database.", body.name);
    }
    format!(
        "{} has {} moons in our database: {}.",
        body.name,
        count,
        body.satellite_names().join(", ")
    )
}

/// Moon count only
pub fn moon_count(body: &Body) -> String {
    let count = body.satellite_count();
    format!("{} has {} {} in our database.", body.name, count, moons_word(count))
}

/// Full-detail summary
pub fn summary(body: &Body) -> String {
    format!("Information about {}:\n{}", body.name, body)
}

pub fn listed(name: &str) -> String {
    format!("Yes, {} is in the list of planets.", name)
}

pub fn enumeration(catalog: &Catalog) -> String {
    format!(
        "The planets in our solar system are: {}.",
        catalog.all_names().join(", ")
    )
}
