//! Harmonic Guild Engine
//!
//! Planting compatibility and succession recommendations over an in-memory
//! crop catalog.
//!
//! Module layout:
//! - `types`: crop, slot and recommendation records
//! - `tables`: static zone, layer and antagonist reference data
//! - `utils`: zero-contribution rule, name matching, season buckets
//! - `engine`: zone compliance, growth layers, slot compatibility, succession
//! - `data`: catalog loading and validation
//! - `scorer`: `GuildScorer` coordinator (slot ranking, guild filling, reports)
//! - `config`: environment settings for the `recommend` binary
//!
//! All scoring is pure and synchronous: identical inputs give identical scores
//! and reasons, and nothing in the catalog is mutated.

pub mod types;
pub mod tables;
pub mod utils;
pub mod engine;
pub mod error;
pub mod data;
pub mod scorer;
pub mod config;

// Re-export commonly used types
pub use types::{ChordInterval, Crop, GuildRole, LayerTier, Recommendation, Season, Slot};
pub use data::CropCatalog;
pub use error::{CatalogError, ConfigError};
pub use scorer::{GuildReport, GuildScorer, SlotRecommendations};
pub use config::EngineSettings;
pub use engine::*;
