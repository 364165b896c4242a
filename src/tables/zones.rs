//! Frequency zone table
//!
//! The catalog partitions crops into seven zones identified by a canonical
//! frequency. Zone numbering, display colours and mineral/element metadata are
//! display data only; compliance checks compare raw frequencies.

use serde::Serialize;

/// One frequency zone with display metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyZone {
    pub zone: u8,
    pub hz: f64,
    pub color: &'static str,
    pub color_hex: &'static str,
    pub mineral: &'static str,
    pub element: &'static str,
}

pub static FREQUENCY_ZONES: &[FrequencyZone] = &[
    FrequencyZone { zone: 1, hz: 396.0, color: "Red", color_hex: "#E53935", mineral: "Iron", element: "Fe" },
    FrequencyZone { zone: 2, hz: 417.0, color: "Orange", color_hex: "#FB8C00", mineral: "Calcium", element: "Ca" },
    FrequencyZone { zone: 3, hz: 528.0, color: "Yellow", color_hex: "#FDD835", mineral: "Magnesium", element: "Mg" },
    FrequencyZone { zone: 4, hz: 639.0, color: "Green", color_hex: "#43A047", mineral: "Nitrogen", element: "N" },
    FrequencyZone { zone: 5, hz: 741.0, color: "Blue", color_hex: "#1E88E5", mineral: "Phosphorus", element: "P" },
    FrequencyZone { zone: 6, hz: 852.0, color: "Indigo", color_hex: "#3949AB", mineral: "Potassium", element: "K" },
    FrequencyZone { zone: 7, hz: 963.0, color: "Violet", color_hex: "#8E24AA", mineral: "Silica", element: "Si" },
];

/// Zone for a frequency, or `None` if the value is not one of the seven zones.
pub fn zone_for_hz(hz: f64) -> Option<&'static FrequencyZone> {
    FREQUENCY_ZONES.iter().find(|z| z.hz == hz)
}
