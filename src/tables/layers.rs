//! Growth habit -> layer tier lookup
//!
//! Keys are lower-cased `growth_habit` values. Heights are representative
//! mature heights in feet used for shading estimates.

use crate::types::LayerTier;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerEntry {
    pub habit: &'static str,
    pub layer: LayerTier,
    pub height_ft: f64,
    pub icon: &'static str,
}

/// Habit used when a crop has no habit or an unknown one
pub const DEFAULT_HABIT: &str = "herb";

pub static LAYER_TABLE: &[LayerEntry] = &[
    LayerEntry { habit: "tree", layer: LayerTier::Canopy, height_ft: 25.0, icon: "🌳" },
    LayerEntry { habit: "fruit tree", layer: LayerTier::Canopy, height_ft: 15.0, icon: "🌳" },
    LayerEntry { habit: "palm", layer: LayerTier::Canopy, height_ft: 20.0, icon: "🌴" },
    LayerEntry { habit: "dwarf tree", layer: LayerTier::Understory, height_ft: 8.0, icon: "🌲" },
    LayerEntry { habit: "shrub", layer: LayerTier::Understory, height_ft: 6.0, icon: "🌲" },
    LayerEntry { habit: "bush", layer: LayerTier::Understory, height_ft: 5.0, icon: "🌲" },
    LayerEntry { habit: "herb", layer: LayerTier::Herbaceous, height_ft: 2.0, icon: "🌿" },
    LayerEntry { habit: "vegetable", layer: LayerTier::Herbaceous, height_ft: 2.0, icon: "🥬" },
    LayerEntry { habit: "grass", layer: LayerTier::Herbaceous, height_ft: 3.0, icon: "🌾" },
    LayerEntry { habit: "flower", layer: LayerTier::Herbaceous, height_ft: 2.5, icon: "🌼" },
    LayerEntry { habit: "groundcover", layer: LayerTier::Ground, height_ft: 0.5, icon: "🍀" },
    LayerEntry { habit: "ground cover", layer: LayerTier::Ground, height_ft: 0.5, icon: "🍀" },
    LayerEntry { habit: "creeper", layer: LayerTier::Ground, height_ft: 0.5, icon: "🍀" },
    LayerEntry { habit: "root", layer: LayerTier::Underground, height_ft: 1.0, icon: "🥕" },
    LayerEntry { habit: "tuber", layer: LayerTier::Underground, height_ft: 1.5, icon: "🥔" },
    LayerEntry { habit: "bulb", layer: LayerTier::Underground, height_ft: 1.5, icon: "🧅" },
    LayerEntry { habit: "vine", layer: LayerTier::Vine, height_ft: 8.0, icon: "🍇" },
    LayerEntry { habit: "climber", layer: LayerTier::Vine, height_ft: 8.0, icon: "🍇" },
];

/// Table entry for a habit string; unknown or missing habits get the `herb` entry.
pub fn layer_entry(habit: Option<&str>) -> &'static LayerEntry {
    let key = habit.map(|h| h.trim().to_lowercase());
    key.and_then(|k| LAYER_TABLE.iter().find(|e| e.habit == k))
        .unwrap_or_else(default_entry)
}

fn default_entry() -> &'static LayerEntry {
    LAYER_TABLE
        .iter()
        .find(|e| e.habit == DEFAULT_HABIT)
        .unwrap_or(&LAYER_TABLE[0])
}
