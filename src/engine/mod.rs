//! Planting compatibility and succession components
//!
//! Each component is a set of pure functions over borrowed catalog records:
//! - `zone_compliance`: dissonance (zone rule violation) checks
//! - `growth_layers`: layer tiers, shading risk, ideal layers per slot
//! - `compatibility`: slot-filling score
//! - `succession`: ranking of follow-up crops after a harvest

pub mod zone_compliance;
pub mod growth_layers;
pub mod compatibility;
pub mod succession;

pub use zone_compliance::{check_dissonance, ConflictType, Dissonance};
pub use growth_layers::{
    check_shading, classify_layer, ideal_layers_for_slot, default_ideal_layers,
    layer_match_score, vertical_diversity_score, IdealLayers, LayerClassification,
    ShadingSeverity, ShadingWarning,
};
pub use compatibility::{
    brix_bonus, compatibility_score, is_sprinter, rank_candidates, sprinter_bonus,
    SlotAssessment,
};
pub use succession::{suggest_succession, SuccessionQuery};

use crate::types::Recommendation;

/// Sort descending by score. The sort is stable, so equal scores keep
/// catalog order.
pub(crate) fn sort_and_truncate(recs: &mut Vec<Recommendation<'_>>, limit: usize) {
    recs.sort_by(|a, b| b.score.total_cmp(&a.score));
    recs.truncate(limit);
}
