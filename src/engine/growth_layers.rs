//! Growth layer resolution
//!
//! Classifies crops into vertical layer tiers, estimates shading between two
//! crops, and derives which layers suit each chord slot around a star crop.
//!
//! Shading rules:
//!   - height difference <= 4 ft: no warning
//!   - shorter crop on the ground or underground layer: no warning (shade-tolerant)
//!   - difference > 10 ft: "warning", otherwise "info"

use crate::tables::layer_entry;
use crate::types::{ChordInterval, Crop, LayerTier};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Bonus for a candidate whose layer is ideal for the slot. No partial credit.
pub const LAYER_MATCH_BONUS: f64 = 4.0;

/// Points per distinct layer in a guild
pub const DIVERSITY_POINTS_PER_LAYER: f64 = 2.0;

/// Height differences at or below this never shade
pub const SHADING_MIN_DIFF_FT: f64 = 4.0;

/// Height differences above this are a full warning
pub const SHADING_WARNING_DIFF_FT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerClassification {
    pub layer: LayerTier,
    pub height_ft: f64,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadingWarning {
    pub severity: ShadingSeverity,
    pub message: String,
    pub height_difference_ft: f64,
}

/// Acceptable layers per chord slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealLayers(BTreeMap<ChordInterval, Vec<LayerTier>>);

impl IdealLayers {
    pub fn layers_for(&self, slot: ChordInterval) -> &[LayerTier] {
        self.0.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn accepts(&self, slot: ChordInterval, layer: LayerTier) -> bool {
        self.layers_for(slot).contains(&layer)
    }

    fn set(&mut self, slot: ChordInterval, layers: Vec<LayerTier>) {
        self.0.insert(slot, layers);
    }

    fn remove_layer(&mut self, slot: ChordInterval, layer: LayerTier) {
        if let Some(layers) = self.0.get_mut(&slot) {
            layers.retain(|l| *l != layer);
        }
    }
}

/// Classify a crop's growth habit into a layer tier with a representative height.
pub fn classify_layer(crop: &Crop) -> LayerClassification {
    let entry = layer_entry(crop.growth_habit.as_deref());
    LayerClassification {
        layer: entry.layer,
        height_ft: entry.height_ft,
        icon: entry.icon,
    }
}

/// Shading risk of `taller` over `shorter`, or `None` when there is none.
pub fn check_shading(taller: &Crop, shorter: &Crop) -> Option<ShadingWarning> {
    let tall = classify_layer(taller);
    let short = classify_layer(shorter);
    let diff = tall.height_ft - short.height_ft;

    if diff <= SHADING_MIN_DIFF_FT || short.layer.is_shade_tolerant() {
        return None;
    }

    let (severity, message) = if diff > SHADING_WARNING_DIFF_FT {
        (
            ShadingSeverity::Warning,
            format!(
                "{} (~{} ft) will heavily shade {} (~{} ft); plant {} on the sunny side or pick a shade-tolerant companion",
                taller.display_name(),
                tall.height_ft,
                shorter.display_name(),
                short.height_ft,
                shorter.display_name(),
            ),
        )
    } else {
        (
            ShadingSeverity::Info,
            format!(
                "{} (~{} ft) may partially shade {} (~{} ft)",
                taller.display_name(),
                tall.height_ft,
                shorter.display_name(),
                short.height_ft,
            ),
        )
    };

    Some(ShadingWarning { severity, message, height_difference_ft: diff })
}

/// Default slot -> layer mapping with `root_layer` in the Root slot.
pub fn default_ideal_layers(root_layer: LayerTier) -> IdealLayers {
    use ChordInterval::*;
    use LayerTier::*;

    let mut map = BTreeMap::new();
    map.insert(Root, vec![root_layer]);
    map.insert(Third, vec![Understory, Herbaceous]);
    map.insert(Fifth, vec![Ground, Herbaceous]);
    map.insert(Seventh, vec![Herbaceous, Vine]);
    map.insert(Ninth, vec![Underground]);
    map.insert(Eleventh, vec![Ground, Underground]);
    map.insert(Thirteenth, vec![Vine, Canopy]);
    IdealLayers(map)
}

/// Slot -> layer mapping adjusted to the star crop's own layer.
pub fn ideal_layers_for_slot(star: &Crop) -> IdealLayers {
    let star_layer = classify_layer(star).layer;
    let mut ideal = default_ideal_layers(star_layer);

    match star_layer {
        LayerTier::Canopy => {
            ideal.set(ChordInterval::Third, vec![LayerTier::Understory]);
            ideal.set(ChordInterval::Thirteenth, vec![LayerTier::Vine]);
        }
        layer if layer.is_short() => {
            // A canopy companion would smother a short star.
            ideal.remove_layer(ChordInterval::Thirteenth, LayerTier::Canopy);
            ideal.remove_layer(ChordInterval::Seventh, LayerTier::Canopy);
        }
        LayerTier::Vine => {
            ideal.set(ChordInterval::Third, vec![LayerTier::Herbaceous, LayerTier::Understory]);
        }
        _ => {}
    }

    ideal
}

/// `LAYER_MATCH_BONUS` when the candidate's layer is ideal for `slot`, else 0.
pub fn layer_match_score(candidate: &Crop, slot: ChordInterval, ideal: &IdealLayers) -> f64 {
    if ideal.accepts(slot, classify_layer(candidate).layer) {
        LAYER_MATCH_BONUS
    } else {
        0.0
    }
}

/// Two points per distinct layer present across the crops.
pub fn vertical_diversity_score<'a, I>(crops: I) -> f64
where
    I: IntoIterator<Item = &'a Crop>,
{
    let layers: FxHashSet<LayerTier> = crops.into_iter().map(|c| classify_layer(c).layer).collect();
    DIVERSITY_POINTS_PER_LAYER * layers.len() as f64
}
