//! Search and filtering over a fetched list of schools.

use std::collections::BTreeSet;

use super::model::School;

/// City filter value meaning "no filter".
pub const ALL_CITIES: &str = "all";

/// Case-insensitive substring match against name, city, state, board and type.
///
/// A blank query matches every school.
pub fn matches(school: &School, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let board = school.board.map(|b| b.as_str());
    let school_type = school.school_type.map(|t| t.as_str());

    [
        Some(school.name.as_str()),
        Some(school.city.as_str()),
        Some(school.state.as_str()),
        board,
        school_type,
    ]
    .into_iter()
    .flatten()
    .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Keep schools matching `query` that are also in `city` (exact match).
///
/// `None`, an empty string, or [`ALL_CITIES`] disables the city filter.
pub fn filter<'a>(schools: &'a [School], query: &str, city: Option<&str>) -> Vec<&'a School> {
    let city = city.filter(|c| !c.is_empty() && *c != ALL_CITIES);
    schools
        .iter()
        .filter(|s| city.is_none_or(|c| s.city == c))
        .filter(|s| matches(s, query))
        .collect()
}

/// Distinct cities, sorted.
pub fn unique_cities(schools: &[School]) -> Vec<String> {
    schools
        .iter()
        .map(|s| s.city.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
