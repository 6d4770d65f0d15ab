use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing operation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Operation {
    #[serde(rename = "Venta")]
    Sale,
    #[serde(rename = "Renta")]
    Rent,
}

impl Operation {
    /// Label used on listings and in filter state
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sale => "Venta",
            Operation::Rent => "Renta",
        }
    }

    /// Recognize an operation from a free-form label (Spanish or English)
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "venta" | "sale" | "buy" | "compra" => Some(Operation::Sale),
            "renta" | "rent" | "lease" | "alquiler" => Some(Operation::Rent),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of property. Open-ended: labels outside the known set are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Studio,
    Penthouse,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::House => "Casa",
            PropertyType::Apartment => "Departamento",
            PropertyType::Land => "Terreno",
            PropertyType::Studio => "Estudio",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Other(label) => label,
        }
    }

    /// Canonicalize a label, matching known kinds case-insensitively
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "casa" | "house" => PropertyType::House,
            "departamento" | "apartment" => PropertyType::Apartment,
            "terreno" | "land" => PropertyType::Land,
            "estudio" | "studio" => PropertyType::Studio,
            "penthouse" => PropertyType::Penthouse,
            _ => PropertyType::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for PropertyType {
    fn from(label: String) -> Self {
        PropertyType::from_label(&label)
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub operation: Operation,
    pub property_type: PropertyType,
    pub zone: String,
    /// Whole Mexican pesos
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_sqm: u32,
    pub parking_spots: u32,
    pub tag: String,
    pub description: String,
    pub features: Vec<String>,
    pub image_url: String,
}

/// Format a peso amount the way listings display it, e.g. `$2,850,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}
