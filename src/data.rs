//! Crop catalog loading
//!
//! Loads catalog records exported from the crops table (a JSON array, or an
//! object with a `crops` array) and validates the identity fields the engine
//! relies on. Everything else is passed through as-is; optional fields that are
//! missing are handled by the scoring code.

use crate::error::CatalogError;
use crate::tables::zone_for_hz;
use crate::types::Crop;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Rows(Vec<Crop>),
    Wrapped { crops: Vec<Crop> },
}

/// Validated, immutable crop catalog in load order
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<Crop>,
    index: FxHashMap<String, usize>,
}

impl CropCatalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn from_crops(crops: Vec<Crop>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, crop) in crops.iter().enumerate() {
            if crop.id.trim().is_empty() {
                return Err(CatalogError::MissingId { index: i });
            }
            if index.insert(crop.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(crop.id.clone()));
            }
            if zone_for_hz(crop.frequency_hz).is_none() {
                tracing::warn!(
                    "Crop '{}' has unknown frequency {} Hz; it will match no zone",
                    crop.id,
                    crop.frequency_hz
                );
            }
        }
        Ok(Self { crops, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let crops = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Rows(crops) => crops,
            CatalogFile::Wrapped { crops } => crops,
        };
        Self::from_crops(crops)
    }

    /// Load a catalog JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} crops from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Crop> {
        self.index.get(id).map(|&i| &self.crops[i])
    }

    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
