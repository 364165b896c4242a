//! Slot compatibility scoring
//!
//! Combines zone compliance, Brix targets, sprinter eligibility, layer fit and
//! companion relationships into one score for placing a candidate in a slot.
//!
//! Terms (all additive, missing fields contribute 0):
//!   - zone:      +10 compliant, -10 dissonant (non-structural), excluded (structural)
//!   - Brix:      +3 if brix_target_min >= 12, +2 more if brix_target_max >= 18
//!   - sprinter:  +3 x slot turnover factor if harvest_days <= 45
//!   - layer:     +4 if the candidate's layer is ideal for the slot
//!   - companion: +2 per existing planting that lists (or is listed by) the candidate
//!
//! A candidate that is an antagonist of any existing planting is excluded.

use crate::engine::growth_layers::{
    check_shading, classify_layer, default_ideal_layers, ideal_layers_for_slot,
    layer_match_score, ShadingWarning,
};
use crate::engine::sort_and_truncate;
use crate::engine::zone_compliance::{check_dissonance, Dissonance};
use crate::tables::{are_antagonists, zone_for_hz};
use crate::types::{ChordInterval, Crop, GuildRole, Recommendation, Slot};
use crate::utils::{flag_contribution, name_matches};

pub const ZONE_BONUS: f64 = 10.0;
pub const HIGH_BRIX_MIN: f64 = 12.0;
pub const HIGH_BRIX_BONUS: f64 = 3.0;
pub const EXCELLENT_BRIX_MAX: f64 = 18.0;
pub const EXCELLENT_BRIX_BONUS: f64 = 2.0;
pub const SPRINTER_MAX_DAYS: u32 = 45;
pub const SPRINTER_BASE_BONUS: f64 = 3.0;
pub const COMPANION_BONUS: f64 = 2.0;

/// Full breakdown of one candidate against one slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssessment {
    /// `f64::NEG_INFINITY` when disqualified
    pub score: f64,
    pub reasons: Vec<String>,
    pub disqualified: bool,
    pub dissonance: Dissonance,
    /// Shading conflicts with existing plantings (informational, not scored)
    pub shading: Vec<ShadingWarning>,
}

/// Sprinter: harvest in 45 days or fewer. Missing harvest days never qualify.
pub fn is_sprinter(crop: &Crop) -> bool {
    crop.harvest_days.is_some_and(|d| d <= SPRINTER_MAX_DAYS)
}

/// High- and excellent-Brix bonuses. The two thresholds stack.
pub fn brix_bonus(crop: &Crop) -> f64 {
    flag_contribution(crop.brix_target_min, HIGH_BRIX_BONUS, |v| v >= HIGH_BRIX_MIN)
        + flag_contribution(crop.brix_target_max, EXCELLENT_BRIX_BONUS, |v| v >= EXCELLENT_BRIX_MAX)
}

/// Sprinter bonus scaled by how well the slot suits fast turnover.
pub fn sprinter_bonus(crop: &Crop, slot: ChordInterval) -> f64 {
    flag_contribution(
        crop.harvest_days,
        SPRINTER_BASE_BONUS * slot.turnover_factor(),
        |d| d <= SPRINTER_MAX_DAYS,
    )
}

/// The planting that anchors the guild: the Root-slot crop, else a Lead.
pub(crate) fn find_star<'a>(plantings: &[&'a Crop]) -> Option<&'a Crop> {
    plantings
        .iter()
        .find(|p| p.chord_interval == Some(ChordInterval::Root))
        .or_else(|| plantings.iter().find(|p| p.guild_role == Some(GuildRole::Lead)))
        .copied()
}

fn lists_companion(host: &Crop, other: &Crop) -> bool {
    host.companions()
        .iter()
        .any(|c| name_matches(other.display_name(), c) || name_matches(&other.name, c))
}

/// Score `candidate` for `slot` given the crops already planted in the bed.
pub fn compatibility_score(candidate: &Crop, slot: &Slot, existing_plantings: &[&Crop]) -> SlotAssessment {
    let mut score = 0.0;
    let mut reasons = Vec::new();
    let mut disqualified = false;

    // Zone
    let dissonance = check_dissonance(
        candidate,
        slot.bed_frequency_hz,
        slot.chord_interval,
        slot.jazz_mode,
    );
    if !dissonance.is_dissonant {
        score += ZONE_BONUS;
        match zone_for_hz(candidate.frequency_hz) {
            Some(zone) => reasons.push(format!("Zone match ({} Hz, {})", zone.hz, zone.color)),
            None => reasons.push("Zone match".to_string()),
        }
    } else if slot.chord_interval.is_structural() {
        disqualified = true;
        reasons.push("Dissonant (Vibrational) in structural slot".to_string());
    } else {
        score -= ZONE_BONUS;
        reasons.push("Dissonant (Vibrational)".to_string());
    }

    // Brix
    if candidate.brix_target_min.is_some_and(|v| v >= HIGH_BRIX_MIN) {
        reasons.push("High Brix".to_string());
    }
    if candidate.brix_target_max.is_some_and(|v| v >= EXCELLENT_BRIX_MAX) {
        reasons.push("Excellent Brix".to_string());
    }
    score += brix_bonus(candidate);

    // Sprinter
    if let Some(days) = candidate.harvest_days.filter(|d| *d <= SPRINTER_MAX_DAYS) {
        reasons.push(format!("Sprinter ({} days)", days));
    }
    score += sprinter_bonus(candidate, slot.chord_interval);

    // Layer
    let ideal = match find_star(existing_plantings) {
        Some(star) => ideal_layers_for_slot(star),
        None => default_ideal_layers(classify_layer(candidate).layer),
    };
    let layer_bonus = layer_match_score(candidate, slot.chord_interval, &ideal);
    if layer_bonus > 0.0 {
        reasons.push(format!("Fits {} layer", classify_layer(candidate).layer));
    }
    score += layer_bonus;

    // Companions, antagonists and shading against the bed
    let mut shading = Vec::new();
    for planted in existing_plantings.iter().filter(|p| p.id != candidate.id) {
        if are_antagonists(candidate, planted) {
            disqualified = true;
            reasons.push(format!("Antagonist of {}", planted.display_name()));
            continue;
        }
        if lists_companion(planted, candidate) || lists_companion(candidate, planted) {
            score += COMPANION_BONUS;
            reasons.push(format!("Companion of {}", planted.display_name()));
        }
        shading.extend(check_shading(candidate, planted));
        shading.extend(check_shading(planted, candidate));
    }

    if disqualified {
        score = f64::NEG_INFINITY;
    }

    SlotAssessment { score, reasons, disqualified, dissonance, shading }
}

/// Rank candidates for `slot`, dropping disqualified ones and crops already planted.
pub fn rank_candidates<'a>(
    candidates: &'a [Crop],
    slot: &Slot,
    existing_plantings: &[&Crop],
    limit: usize,
) -> Vec<Recommendation<'a>> {
    let mut recs: Vec<Recommendation<'a>> = candidates
        .iter()
        .filter(|c| !existing_plantings.iter().any(|p| p.id == c.id))
        .filter_map(|crop| {
            let assessment = compatibility_score(crop, slot, existing_plantings);
            (!assessment.disqualified).then(|| Recommendation {
                crop,
                score: assessment.score,
                reasons: assessment.reasons,
            })
        })
        .collect();

    tracing::debug!(
        "Slot {} @ {} Hz: {} of {} candidates eligible",
        slot.chord_interval,
        slot.bed_frequency_hz,
        recs.len(),
        candidates.len()
    );

    sort_and_truncate(&mut recs, limit);
    recs
}
