//! Shared data types for the planting engine.
//!
//! Field names on `Crop` follow the catalog table columns so records can be
//! deserialized straight from the catalog export.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Vertical growth tier of a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerTier {
    Canopy,
    Understory,
    Herbaceous,
    Ground,
    Underground,
    Vine,
}

impl LayerTier {
    pub fn label(&self) -> &'static str {
        match self {
            LayerTier::Canopy => "canopy",
            LayerTier::Understory => "understory",
            LayerTier::Herbaceous => "herbaceous",
            LayerTier::Ground => "ground",
            LayerTier::Underground => "underground",
            LayerTier::Vine => "vine",
        }
    }

    /// Ground-hugging and root layers tolerate shade from taller neighbours.
    pub fn is_shade_tolerant(&self) -> bool {
        matches!(self, LayerTier::Ground | LayerTier::Underground)
    }

    /// Low-growing layers that a canopy companion would smother.
    pub fn is_short(&self) -> bool {
        matches!(self, LayerTier::Herbaceous | LayerTier::Ground)
    }
}

impl fmt::Display for LayerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named ecological role of a planting position (a "chord interval").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ChordInterval {
    #[serde(rename = "Root (Lead)")]
    Root,
    #[serde(rename = "3rd (Triad)")]
    Third,
    #[serde(rename = "5th (Stabilizer)")]
    Fifth,
    #[serde(rename = "7th (Signal)")]
    Seventh,
    #[serde(rename = "9th (Color)")]
    Ninth,
    #[serde(rename = "11th (Tension)")]
    Eleventh,
    #[serde(rename = "13th (Top Note)")]
    Thirteenth,
}

impl ChordInterval {
    pub const ALL: [ChordInterval; 7] = [
        ChordInterval::Root,
        ChordInterval::Third,
        ChordInterval::Fifth,
        ChordInterval::Seventh,
        ChordInterval::Ninth,
        ChordInterval::Eleventh,
        ChordInterval::Thirteenth,
    ];

    /// Catalog label, e.g. "7th (Signal)"
    pub fn label(&self) -> &'static str {
        match self {
            ChordInterval::Root => "Root (Lead)",
            ChordInterval::Third => "3rd (Triad)",
            ChordInterval::Fifth => "5th (Stabilizer)",
            ChordInterval::Seventh => "7th (Signal)",
            ChordInterval::Ninth => "9th (Color)",
            ChordInterval::Eleventh => "11th (Tension)",
            ChordInterval::Thirteenth => "13th (Top Note)",
        }
    }

    /// Parse a catalog label. Only the leading token is significant, so both
    /// "7th (Signal)" and "7th" resolve to `Seventh`.
    pub fn from_label(label: &str) -> Option<Self> {
        let token = label.split_whitespace().next()?.to_lowercase();
        match token.as_str() {
            "root" | "1st" => Some(ChordInterval::Root),
            "3rd" => Some(ChordInterval::Third),
            "5th" => Some(ChordInterval::Fifth),
            "7th" => Some(ChordInterval::Seventh),
            "9th" => Some(ChordInterval::Ninth),
            "11th" => Some(ChordInterval::Eleventh),
            "13th" => Some(ChordInterval::Thirteenth),
            _ => None,
        }
    }

    /// Structural slots hold the primary crop of a guild and never accept a
    /// cross-zone placement, jazz mode or not.
    pub fn is_structural(&self) -> bool {
        matches!(self, ChordInterval::Root)
    }

    /// How well the slot suits fast-turnover crops (multiplier on the sprinter bonus).
    pub fn turnover_factor(&self) -> f64 {
        match self {
            ChordInterval::Seventh => 2.0,
            ChordInterval::Fifth | ChordInterval::Ninth | ChordInterval::Eleventh => 1.0,
            ChordInterval::Root | ChordInterval::Third | ChordInterval::Thirteenth => 0.5,
        }
    }
}

impl fmt::Display for ChordInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ChordInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        ChordInterval::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown chord interval '{}'", label)))
    }
}

/// Unknown interval labels on catalog rows become `None` instead of failing the load.
fn lenient_interval<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ChordInterval>, D::Error> {
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(ChordInterval::from_label))
}

/// Guild role of a crop. Anything other than the known roles is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GuildRole {
    Lead,
    Enhancer,
    Other(String),
}

impl From<String> for GuildRole {
    fn from(value: String) -> Self {
        match value.trim() {
            "Lead" => GuildRole::Lead,
            "Enhancer" => GuildRole::Enhancer,
            _ => GuildRole::Other(value),
        }
    }
}

impl From<GuildRole> for String {
    fn from(role: GuildRole) -> Self {
        match role {
            GuildRole::Lead => "Lead".to_string(),
            GuildRole::Enhancer => "Enhancer".to_string(),
            GuildRole::Other(s) => s,
        }
    }
}

/// Planting season bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog entry for one species or variety. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Crop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,

    pub frequency_hz: f64,
    #[serde(default, deserialize_with = "lenient_interval")]
    pub chord_interval: Option<ChordInterval>,
    #[serde(default)]
    pub guild_role: Option<GuildRole>,

    #[serde(default)]
    pub growth_habit: Option<String>,
    #[serde(default)]
    pub harvest_days: Option<u32>,

    #[serde(default)]
    pub brix_target_min: Option<f64>,
    #[serde(default)]
    pub brix_target_max: Option<f64>,

    #[serde(default)]
    pub companion_crops: Option<Vec<String>>,
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub hardiness_zone_min: Option<f64>,
    #[serde(default)]
    pub hardiness_zone_max: Option<f64>,
    #[serde(default)]
    pub planting_season: Option<String>,
}

impl Crop {
    /// Name used for companion and antagonist matching: common name if present.
    pub fn display_name(&self) -> &str {
        self.common_name.as_deref().unwrap_or(&self.name)
    }

    pub fn companions(&self) -> &[String] {
        self.companion_crops.as_deref().unwrap_or(&[])
    }
}

/// Planting position being filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub bed_frequency_hz: f64,
    pub chord_interval: ChordInterval,
    #[serde(default)]
    pub jazz_mode: bool,
}

impl Slot {
    pub fn new(bed_frequency_hz: f64, chord_interval: ChordInterval) -> Self {
        Self { bed_frequency_hz, chord_interval, jazz_mode: false }
    }

    pub fn with_jazz_mode(mut self, jazz_mode: bool) -> Self {
        self.jazz_mode = jazz_mode;
        self
    }
}

/// Ranked engine output. Borrows the crop from the caller's catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub crop: &'a Crop,
    pub score: f64,
    pub reasons: Vec<String>,
}
