//! Zone compliance ("dissonance") checks
//!
//! A crop placed in a bed of a different frequency zone is dissonant. Jazz mode
//! relaxes this for Enhancer crops in non-structural slots only.

use crate::types::{ChordInterval, Crop, GuildRole};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConflictType {
    Vibrational,
}

/// Result of a zone-compliance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dissonance {
    pub is_dissonant: bool,
    pub conflict_type: Option<ConflictType>,
}

impl Dissonance {
    const HARMONIC: Dissonance = Dissonance { is_dissonant: false, conflict_type: None };
    const VIBRATIONAL: Dissonance = Dissonance {
        is_dissonant: true,
        conflict_type: Some(ConflictType::Vibrational),
    };
}

/// Check whether `crop` violates the zone rule for a slot in a bed at `bed_frequency_hz`.
///
/// Frequencies outside the seven zones simply fail to match; they are not an error.
pub fn check_dissonance(
    crop: &Crop,
    bed_frequency_hz: f64,
    slot_interval: ChordInterval,
    jazz_mode: bool,
) -> Dissonance {
    if crop.frequency_hz == bed_frequency_hz {
        return Dissonance::HARMONIC;
    }

    if !jazz_mode {
        return Dissonance::VIBRATIONAL;
    }

    // Structural slots reject cross-zone crops whatever their role.
    if slot_interval.is_structural() {
        return Dissonance::VIBRATIONAL;
    }

    match crop.guild_role {
        Some(GuildRole::Enhancer) => Dissonance::HARMONIC,
        _ => Dissonance::VIBRATIONAL,
    }
}
