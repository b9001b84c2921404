// ============================================================
// EXPORT RECORD TYPES
// ============================================================
// Data structures representing rows of the coffee-export dataset

use serde::{Deserialize, Serialize};

/// A single row of the coffee-export dataset.
///
/// Field names map onto the CSV header columns; deserialization fails on
/// any missing column or non-numeric measure, which callers treat as fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Exporting country
    #[serde(rename = "Country")]
    pub country: String,

    /// Geographic region the country belongs to
    #[serde(rename = "Region")]
    pub region: String,

    /// Exported volume in metric tons
    #[serde(rename = "Export_Tons")]
    pub export_tons: f64,

    /// Export value in US dollars
    #[serde(rename = "Export_Value_USD")]
    pub export_value_usd: f64,
}
