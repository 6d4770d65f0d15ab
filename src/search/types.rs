use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Structured filters pulled out of a free-text query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedIntent {
    pub operation: Option<String>,
    pub property_type: Option<String>,
    pub zone: Option<String>,
    /// Budget ceiling in whole pesos
    pub max_price: Option<u64>,
    /// What the extraction understood, shown back to the user
    pub explanation: Option<String>,
}

/// Whether a successful extraction rewrites the zone filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZonePolicy {
    /// Leave the zone filter as the user set it
    #[default]
    Keep,
    /// Replace it with the extracted zone, or reset it when none was found
    Overwrite,
}

impl FromStr for ZonePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(ZonePolicy::Keep),
            "overwrite" => Ok(ZonePolicy::Overwrite),
            other => anyhow::bail!("Unknown zone policy: {}", other),
        }
    }
}
