//! Succession recommendations
//!
//! Ranks what to plant next in a space whose crop has just been harvested.
//! Single pass: filter -> score -> sort -> truncate.
//!
//! Filters:
//!   1. the finished crop itself and current bedmates (by id)
//!   2. hardiness range not containing the requested zone (unknown bounds fail)
//!   3. antagonists of any current bedmate
//!
//! Scoring:
//!   - rotation: +5 different genus token, -3 same genus token
//!   - N-fixer after feeder: +12 ("Sustenance" -> "Nitrogen/Bio-Mass"), more than
//!     season + stagger + layer fit together
//!   - seasonal alignment with the harvest date: +3
//!   - staggered harvest vs bedmates (>= 14 days apart): +1
//!   - layer fit when a target slot is given: +4

use crate::engine::compatibility::find_star;
use crate::engine::growth_layers::{
    classify_layer, default_ideal_layers, ideal_layers_for_slot, layer_match_score,
};
use crate::engine::sort_and_truncate;
use crate::tables::are_antagonists;
use crate::types::{ChordInterval, Crop, Recommendation};
use crate::utils::{genus_token, planting_seasons, season_for_date};
use chrono::NaiveDate;

pub const ROTATION_BONUS: f64 = 5.0;
pub const ROTATION_PENALTY: f64 = 3.0;
pub const NITROGEN_FIXER_BONUS: f64 = 12.0;
pub const SEASON_BONUS: f64 = 3.0;
pub const STAGGER_BONUS: f64 = 1.0;
pub const STAGGER_MIN_DAYS: u32 = 14;

pub const HEAVY_FEEDER_CATEGORY: &str = "Sustenance";
pub const NITROGEN_FIXER_CATEGORY: &str = "Nitrogen/Bio-Mass";

pub const DEFAULT_SUCCESSION_LIMIT: usize = 5;

/// A just-harvested event and the context to rank follow-up crops in.
#[derive(Debug, Clone, Copy)]
pub struct SuccessionQuery<'a> {
    pub finished: &'a Crop,
    /// USDA decimal zone (8.5 = 8b). `None` disables the hardiness filter.
    pub hardiness_zone: Option<f64>,
    pub bedmates: &'a [&'a Crop],
    pub harvest_date: Option<NaiveDate>,
    /// Slot the successor will occupy, for layer-aware scoring
    pub target_slot: Option<ChordInterval>,
    pub limit: usize,
}

impl<'a> SuccessionQuery<'a> {
    pub fn new(finished: &'a Crop) -> Self {
        Self {
            finished,
            hardiness_zone: None,
            bedmates: &[],
            harvest_date: None,
            target_slot: None,
            limit: DEFAULT_SUCCESSION_LIMIT,
        }
    }

    pub fn hardiness_zone(mut self, zone: Option<f64>) -> Self {
        self.hardiness_zone = zone;
        self
    }

    pub fn bedmates(mut self, bedmates: &'a [&'a Crop]) -> Self {
        self.bedmates = bedmates;
        self
    }

    pub fn harvest_date(mut self, date: Option<NaiveDate>) -> Self {
        self.harvest_date = date;
        self
    }

    pub fn target_slot(mut self, slot: Option<ChordInterval>) -> Self {
        self.target_slot = slot;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Inclusive range check. A crop missing either bound cannot be shown hardy.
fn within_hardiness(crop: &Crop, zone: f64) -> bool {
    match (crop.hardiness_zone_min, crop.hardiness_zone_max) {
        (Some(min), Some(max)) => min <= zone && zone <= max,
        _ => false,
    }
}

fn staggered(candidate: &Crop, bedmates: &[&Crop]) -> bool {
    let Some(days) = candidate.harvest_days else {
        return false;
    };
    let mut known = bedmates.iter().filter_map(|b| b.harvest_days).peekable();
    known.peek().is_some() && known.all(|other| days.abs_diff(other) >= STAGGER_MIN_DAYS)
}

/// Score one candidate that already passed the filters.
fn score_successor(query: &SuccessionQuery<'_>, candidate: &Crop) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Genus token as a family stand-in; unknown names are neutral.
    let finished_genus = genus_token(query.finished.scientific_name.as_deref());
    let candidate_genus = genus_token(candidate.scientific_name.as_deref());
    if let (Some(prev), Some(next)) = (finished_genus, candidate_genus) {
        if prev != next {
            score += ROTATION_BONUS;
            reasons.push("Good rotation".to_string());
        } else {
            score -= ROTATION_PENALTY;
            reasons.push("Same family as previous crop".to_string());
        }
    }

    if query.finished.category == HEAVY_FEEDER_CATEGORY
        && candidate.category == NITROGEN_FIXER_CATEGORY
    {
        score += NITROGEN_FIXER_BONUS;
        reasons.push("N-fixer after feeder".to_string());
    }

    if let (Some(date), Some(text)) = (query.harvest_date, candidate.planting_season.as_deref()) {
        let season = season_for_date(date);
        if planting_seasons(text).contains(&season) {
            score += SEASON_BONUS;
            reasons.push(format!("In season ({})", season));
        }
    }

    if staggered(candidate, query.bedmates) {
        score += STAGGER_BONUS;
        reasons.push("Staggered harvest".to_string());
    }

    if let Some(slot) = query.target_slot {
        let ideal = match find_star(query.bedmates) {
            Some(star) => ideal_layers_for_slot(star),
            None => default_ideal_layers(classify_layer(candidate).layer),
        };
        let bonus = layer_match_score(candidate, slot, &ideal);
        if bonus > 0.0 {
            score += bonus;
            reasons.push(format!("Fits {} layer", classify_layer(candidate).layer));
        }
    }

    (score, reasons)
}

/// Rank follow-up crops for the space `query.finished` just vacated.
///
/// Returns at most `query.limit` results, best first; ties keep pool order.
/// An empty pool, or one emptied by the filters, yields an empty list.
pub fn suggest_succession<'p>(query: &SuccessionQuery<'_>, pool: &'p [Crop]) -> Vec<Recommendation<'p>> {
    let not_self: Vec<&Crop> = pool
        .iter()
        .filter(|c| c.id != query.finished.id)
        .filter(|c| !query.bedmates.iter().any(|b| b.id == c.id))
        .collect();

    let hardy: Vec<&Crop> = match query.hardiness_zone {
        Some(zone) => not_self.into_iter().filter(|c| within_hardiness(c, zone)).collect(),
        None => not_self,
    };
    let hardy_count = hardy.len();

    let mut recs: Vec<Recommendation<'p>> = hardy
        .into_iter()
        .filter(|c| !query.bedmates.iter().any(|b| are_antagonists(b, c)))
        .map(|crop| {
            let (score, reasons) = score_successor(query, crop);
            Recommendation { crop, score, reasons }
        })
        .collect();

    tracing::debug!(
        "Succession after '{}': pool {}, {} within hardiness, {} after antagonist filter",
        query.finished.name,
        pool.len(),
        hardy_count,
        recs.len()
    );

    sort_and_truncate(&mut recs, query.limit);
    recs
}
