//! Utility modules for the planting engine
//!
//! Contains shared functionality used across the scoring components:
//! - Contribution: zero-contribution rule for optional catalog fields
//! - Names: genus tokens and common-name matching
//! - Season: month-to-season buckets and planting-season parsing

pub mod contribution;
pub mod names;
pub mod season;

// Re-export commonly used helpers
pub use contribution::{contribution, flag_contribution};
pub use names::{genus_token, name_matches};
pub use season::{season_for_date, planting_seasons};
