//! Guild Scorer - Main coordinator for the planting engine
//!
//! Holds a validated crop catalog and exposes slot ranking, whole-guild slot
//! filling and succession over it. Guild filling ranks every open slot in
//! parallel with Rayon; each slot is independent and the output keeps slot order.

use crate::data::CropCatalog;
use crate::engine::compatibility::rank_candidates;
use crate::engine::growth_layers::{check_shading, vertical_diversity_score, ShadingWarning};
use crate::engine::succession::{suggest_succession, SuccessionQuery};
use crate::engine::zone_compliance::{check_dissonance, Dissonance};
use crate::error::CatalogError;
use crate::types::{ChordInterval, Crop, Recommendation, Slot};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Main guild scorer
pub struct GuildScorer {
    catalog: CropCatalog,
}

/// Ranked candidates for one open slot
#[derive(Debug, Serialize)]
pub struct SlotRecommendations<'a> {
    pub slot: ChordInterval,
    pub recommendations: Vec<Recommendation<'a>>,
}

/// Evaluation of an assembled guild
#[derive(Debug, Serialize)]
pub struct GuildReport {
    pub vertical_diversity: f64,
    pub shading: Vec<ShadingWarning>,
    /// (crop id, dissonance) for every crop that breaks the bed's zone rule
    pub dissonant: Vec<(String, Dissonance)>,
}

impl GuildScorer {
    pub fn new(catalog: CropCatalog) -> Self {
        Self { catalog }
    }

    /// Load the catalog from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::new(CropCatalog::load(path)?))
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Rank catalog crops for one slot of a bed.
    pub fn rank_slot(&self, slot: &Slot, planted: &[&Crop], limit: usize) -> Vec<Recommendation<'_>> {
        rank_candidates(self.catalog.crops(), slot, planted, limit)
    }

    /// Rank catalog crops to follow `query.finished`.
    pub fn suggest_succession(&self, query: &SuccessionQuery<'_>) -> Vec<Recommendation<'_>> {
        suggest_succession(query, self.catalog.crops())
    }

    /// Rank candidates for every slot not yet occupied by `planted`.
    ///
    /// A slot counts as occupied when a planted crop's `chord_interval` names it.
    pub fn fill_guild(
        &self,
        bed_frequency_hz: f64,
        jazz_mode: bool,
        planted: &[&Crop],
        limit: usize,
    ) -> Vec<SlotRecommendations<'_>> {
        let open: Vec<ChordInterval> = ChordInterval::ALL
            .into_iter()
            .filter(|slot| !planted.iter().any(|p| p.chord_interval == Some(*slot)))
            .collect();

        tracing::debug!("Filling {} open slots at {} Hz", open.len(), bed_frequency_hz);

        open.par_iter()
            .map(|&interval| {
                let slot = Slot::new(bed_frequency_hz, interval).with_jazz_mode(jazz_mode);
                SlotRecommendations {
                    slot: interval,
                    recommendations: self.rank_slot(&slot, planted, limit),
                }
            })
            .collect()
    }

    /// Vertical diversity, pairwise shading and zone violations of a guild.
    ///
    /// Crops without a `chord_interval` are checked as structural.
    pub fn guild_report(&self, bed_frequency_hz: f64, jazz_mode: bool, guild: &[&Crop]) -> GuildReport {
        let vertical_diversity = vertical_diversity_score(guild.iter().copied());

        let mut shading = Vec::new();
        for (i, a) in guild.iter().enumerate() {
            for b in &guild[i + 1..] {
                shading.extend(check_shading(a, b));
                shading.extend(check_shading(b, a));
            }
        }

        let dissonant = guild
            .iter()
            .filter_map(|crop| {
                let interval = crop.chord_interval.unwrap_or(ChordInterval::Root);
                let d = check_dissonance(crop, bed_frequency_hz, interval, jazz_mode);
                d.is_dissonant.then(|| (crop.id.clone(), d))
            })
            .collect();

        GuildReport { vertical_diversity, shading, dissonant }
    }
}
