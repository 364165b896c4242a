//! Season buckets for succession timing

use crate::types::Season;
use chrono::{Datelike, NaiveDate};

/// Season implied by a calendar date (northern-hemisphere month buckets).
pub fn season_for_date(date: NaiveDate) -> Season {
    match date.month() {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

/// Seasons named in a free-text `planting_season` value.
///
/// "Spring/Fall" -> [Spring, Fall]; "Year-round" -> all four; unknown text -> empty.
pub fn planting_seasons(text: &str) -> Vec<Season> {
    let lower = text.to_lowercase();
    if matches!(lower.trim(), "all" | "any")
        || lower.contains("year-round")
        || lower.contains("year round")
    {
        return Season::ALL.to_vec();
    }

    Season::ALL
        .into_iter()
        .filter(|season| match season {
            Season::Spring => lower.contains("spring"),
            Season::Summer => lower.contains("summer"),
            Season::Fall => lower.contains("fall") || lower.contains("autumn"),
            Season::Winter => lower.contains("winter"),
        })
        .collect()
}
