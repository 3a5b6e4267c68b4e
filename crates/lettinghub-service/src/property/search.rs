//! In-memory filters over listing summaries.
//!
//! The derived search endpoints (available, bedrooms, price range,
//! advanced) filter the full listing set rather than issuing dedicated
//! queries. These are pure functions so they can be tested without a
//! database.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::service::PropertySummary;

/// Optional criteria for the advanced search endpoint. All present fields
/// must match for a listing to be included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchCriteria {
    /// City name, matched case-insensitively.
    pub location: Option<String>,
    /// House type name, matched case-insensitively.
    pub house_type: Option<String>,
    /// Surface area substring, matched case-insensitively.
    pub surface_area: Option<String>,
    /// Maximum rent (inclusive).
    pub max_rent_amount: Option<Decimal>,
    /// Interior substring, matched case-insensitively.
    pub interior: Option<String>,
    /// Minimum bedroom count (inclusive).
    pub min_bedrooms: Option<i32>,
    /// Maximum bedroom count (inclusive).
    pub max_bedrooms: Option<i32>,
}

/// Keep only listings with at least one unit available.
pub fn available(properties: Vec<PropertySummary>) -> Vec<PropertySummary> {
    properties.into_iter().filter(|p| p.quantity > 0).collect()
}

/// Keep only listings with exactly the given bedroom count.
pub fn with_bedrooms(properties: Vec<PropertySummary>, bedrooms: i32) -> Vec<PropertySummary> {
    properties
        .into_iter()
        .filter(|p| p.bedrooms == bedrooms)
        .collect()
}

/// Keep only listings whose rent lies within the inclusive price range.
pub fn in_price_range(
    properties: Vec<PropertySummary>,
    min_price: Decimal,
    max_price: Decimal,
) -> Vec<PropertySummary> {
    properties
        .into_iter()
        .filter(|p| p.rent_amount >= min_price && p.rent_amount <= max_price)
        .collect()
}

/// Apply all present advanced-search criteria, ANDed together.
pub fn advanced(
    properties: Vec<PropertySummary>,
    criteria: &AdvancedSearchCriteria,
) -> Vec<PropertySummary> {
    properties
        .into_iter()
        .filter(|p| matches_criteria(p, criteria))
        .collect()
}

fn matches_criteria(property: &PropertySummary, criteria: &AdvancedSearchCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if !property.location_type.as_str().eq_ignore_ascii_case(location) {
            return false;
        }
    }

    if let Some(house_type) = &criteria.house_type {
        if !property.house_type.as_str().eq_ignore_ascii_case(house_type) {
            return false;
        }
    }

    if let Some(surface_area) = &criteria.surface_area {
        if !contains_ignore_case(&property.surface_area, surface_area) {
            return false;
        }
    }

    if let Some(max_rent) = criteria.max_rent_amount {
        if property.rent_amount > max_rent {
            return false;
        }
    }

    if let Some(interior) = &criteria.interior {
        if !contains_ignore_case(&property.interior, interior) {
            return false;
        }
    }

    if let Some(min_bedrooms) = criteria.min_bedrooms {
        if property.bedrooms < min_bedrooms {
            return false;
        }
    }

    if let Some(max_bedrooms) = criteria.max_bedrooms {
        if property.bedrooms > max_bedrooms {
            return false;
        }
    }

    true
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
