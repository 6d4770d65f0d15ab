use crate::models::Property;
use serde::{Deserialize, Serialize};

/// Sentinel for an unconstrained operation, property type or zone
pub const ANY: &str = "any";

/// Active search constraints. Every field is always populated; an absent
/// constraint is a sentinel (`ANY`, or an empty `max_price`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub operation: String,
    pub property_type: String,
    pub zone: String,
    /// String-encoded non-negative integer, or empty
    pub max_price: String,
    /// Free text fed to intent extraction; never a predicate
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            operation: ANY.to_string(),
            property_type: ANY.to_string(),
            zone: ANY.to_string(),
            max_price: String::new(),
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Price ceiling, if `max_price` holds a valid non-negative integer.
    /// Anything else is treated as unconstrained.
    pub fn price_ceiling(&self) -> Option<u64> {
        self.max_price.trim().parse::<u64>().ok()
    }

    /// Whether a single property satisfies every active constraint
    pub fn matches(&self, property: &Property) -> bool {
        if self.operation != ANY && property.operation.as_str() != self.operation {
            return false;
        }

        if self.property_type != ANY && property.property_type.as_str() != self.property_type {
            return false;
        }

        if self.zone != ANY
            && !property
                .zone
                .to_lowercase()
                .contains(&self.zone.to_lowercase())
        {
            return false;
        }

        match self.price_ceiling() {
            Some(ceiling) => property.price <= ceiling,
            None => true,
        }
    }

    /// Whether every constraint is at its sentinel
    pub fn is_unconstrained(&self) -> bool {
        self.operation == ANY
            && self.property_type == ANY
            && self.zone == ANY
            && self.price_ceiling().is_none()
    }
}

/// Ordered subsequence of `properties` matching `filter`
pub fn filter_properties<'a>(
    filter: &FilterState,
    properties: &'a [Property],
) -> Vec<&'a Property> {
    properties.iter().filter(|p| filter.matches(p)).collect()
}
