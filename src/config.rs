//! Runtime settings for the `recommend` binary
//!
//! Read from environment variables:
//!   CATALOG_PATH      catalog JSON (default data/sample_catalog.json)
//!   BED_FREQUENCY_HZ  bed zone frequency (default: the finished crop's zone)
//!   JAZZ_MODE         "1"/"true" to relax zone rules for Enhancers
//!   HARDINESS_ZONE    USDA decimal zone, unset = no hardiness filter
//!   HARVEST_DATE      YYYY-MM-DD, unset = no seasonal scoring
//!   FINISHED_CROP_ID  crop just harvested (default: first catalog entry)
//!   RESULT_LIMIT      results per list (default 5)

use crate::engine::succession::DEFAULT_SUCCESSION_LIMIT;
use crate::error::ConfigError;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CATALOG_PATH: &str = "data/sample_catalog.json";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub catalog_path: PathBuf,
    pub bed_frequency_hz: Option<f64>,
    pub jazz_mode: bool,
    pub hardiness_zone: Option<f64>,
    pub harvest_date: Option<NaiveDate>,
    pub finished_crop_id: Option<String>,
    pub result_limit: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            bed_frequency_hz: None,
            jazz_mode: false,
            hardiness_zone: None,
            harvest_date: None,
            finished_crop_id: None,
            result_limit: DEFAULT_SUCCESSION_LIMIT,
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidSetting {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl EngineSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key -> value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let harvest_date = get("HARVEST_DATE")
            .map(|v| {
                NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|e| {
                    ConfigError::InvalidSetting {
                        key: "HARVEST_DATE",
                        value: v.clone(),
                        reason: e.to_string(),
                    }
                })
            })
            .transpose()?;

        let jazz_mode = get("JAZZ_MODE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(defaults.jazz_mode);

        Ok(Self {
            catalog_path: get("CATALOG_PATH").map(PathBuf::from).unwrap_or(defaults.catalog_path),
            bed_frequency_hz: get("BED_FREQUENCY_HZ")
                .map(|v| parse_value("BED_FREQUENCY_HZ", &v))
                .transpose()?,
            jazz_mode,
            hardiness_zone: get("HARDINESS_ZONE")
                .map(|v| parse_value("HARDINESS_ZONE", &v))
                .transpose()?,
            harvest_date,
            finished_crop_id: get("FINISHED_CROP_ID"),
            result_limit: get("RESULT_LIMIT")
                .map(|v| parse_value("RESULT_LIMIT", &v))
                .transpose()?
                .unwrap_or(defaults.result_limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<EngineSettings, ConfigError> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        EngineSettings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(settings(&[]).unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_parses_all_keys() {
        let s = settings(&[
            ("CATALOG_PATH", "/tmp/crops.json"),
            ("BED_FREQUENCY_HZ", "528"),
            ("JAZZ_MODE", "true"),
            ("HARDINESS_ZONE", "8.5"),
            ("HARVEST_DATE", "2026-04-12"),
            ("FINISHED_CROP_ID", "tomato"),
            ("RESULT_LIMIT", "3"),
        ])
        .unwrap();
        assert_eq!(s.catalog_path, PathBuf::from("/tmp/crops.json"));
        assert_eq!(s.bed_frequency_hz, Some(528.0));
        assert!(s.jazz_mode);
        assert_eq!(s.hardiness_zone, Some(8.5));
        assert_eq!(s.harvest_date, NaiveDate::from_ymd_opt(2026, 4, 12));
        assert_eq!(s.finished_crop_id.as_deref(), Some("tomato"));
        assert_eq!(s.result_limit, 3);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let s = settings(&[("HARDINESS_ZONE", "  ")]).unwrap();
        assert_eq!(s.hardiness_zone, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            settings(&[("HARDINESS_ZONE", "eight")]),
            Err(ConfigError::InvalidSetting { key: "HARDINESS_ZONE", .. })
        ));
        assert!(settings(&[("HARVEST_DATE", "12/04/2026")]).is_err());
        assert!(settings(&[("RESULT_LIMIT", "-1")]).is_err());
    }
}
