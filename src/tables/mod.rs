//! Static reference tables read by the engine
//!
//! - `zones`: the seven frequency zones and their display metadata
//! - `layers`: growth habit -> vertical layer tier
//! - `antagonists`: crops that inhibit each other when planted together
//!
//! The engine reads these tables but never mutates them.

pub mod zones;
pub mod layers;
pub mod antagonists;

pub use zones::{FrequencyZone, FREQUENCY_ZONES, zone_for_hz};
pub use layers::{LayerEntry, LAYER_TABLE, DEFAULT_HABIT, layer_entry};
pub use antagonists::{ANTAGONIST_PAIRS, are_antagonists};
