//! Core data models for the property showcase.
//!
//! These types represent the listings that flow through the filter engine,
//! the detail view, and the interactive client.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Category of a listed property.
///
/// The set is closed: filtering and display both match on exact variants,
/// never on free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    Apartment,
    Land,
    Hangar,
    Commerce,
}

impl PropertyType {
    /// All categories, in the order the filter bar presents them.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Villa,
        PropertyType::Apartment,
        PropertyType::Land,
        PropertyType::Hangar,
        PropertyType::Commerce,
    ];

    /// Stable machine name used on the CLI and in JSON output.
    pub fn wire_name(&self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::Apartment => "apartment",
            PropertyType::Land => "land",
            PropertyType::Hangar => "hangar",
            PropertyType::Commerce => "commerce",
        }
    }

    /// Translation key for the human-readable category label.
    ///
    /// The locale tables keep the agency's original French key names, so
    /// `Apartment` and `Land` map to `appartement` and `terrain`.
    pub fn label_key(&self) -> &'static str {
        match self {
            PropertyType::Villa => "properties.filters.villa",
            PropertyType::Apartment => "properties.filters.appartement",
            PropertyType::Land => "properties.filters.terrain",
            PropertyType::Hangar => "properties.filters.hangar",
            PropertyType::Commerce => "properties.filters.commerce",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "villa" => Ok(PropertyType::Villa),
            "apartment" => Ok(PropertyType::Apartment),
            "land" => Ok(PropertyType::Land),
            "hangar" => Ok(PropertyType::Hangar),
            "commerce" => Ok(PropertyType::Commerce),
            other => anyhow::bail!(
                "unknown property type '{}' (expected one of: villa, apartment, land, hangar, commerce)",
                other
            ),
        }
    }
}

/// A single listing in the showcase catalog.
///
/// Records are static marketing data: prices are FCFA amounts, image paths
/// point into the agency's asset tree, and `bedrooms`/`bathrooms` are absent
/// for non-residential categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: u64,
    pub surface_m2: u32,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub description: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
}

impl PropertyRecord {
    /// Cover image shown on listing cards (display order, index 0).
    pub fn cover_image(&self) -> &str {
        &self.images[0]
    }
}

/// Full price line, e.g. `2 000 000 FCFA`.
pub fn format_price(price: u64, currency: &str) -> String {
    format!("{} {}", group_thousands(price), currency)
}

/// Rounded million-unit price used on compact cards, e.g. `2 M FCFA`.
pub fn format_price_compact(price: u64, currency: &str) -> String {
    let millions = (price + 500_000) / 1_000_000;
    format!("{} M {}", millions, currency)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1 000");
        assert_eq!(group_thousands(700_000), "700 000");
        assert_eq!(group_thousands(6_500_000), "6 500 000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2_000_000, "FCFA"), "2 000 000 FCFA");
    }

    #[test]
    fn test_format_price_compact_rounds_half_up() {
        assert_eq!(format_price_compact(700_000, "FCFA"), "1 M FCFA");
        assert_eq!(format_price_compact(2_000_000, "FCFA"), "2 M FCFA");
        assert_eq!(format_price_compact(2_500_000, "FCFA"), "3 M FCFA");
        assert_eq!(format_price_compact(6_500_000, "FCFA"), "7 M FCFA");
    }

    #[test]
    fn test_property_type_parse_roundtrip() {
        for ty in PropertyType::ALL {
            let parsed: PropertyType = ty.wire_name().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn test_property_type_parse_is_case_insensitive() {
        let parsed: PropertyType = "Villa".parse().unwrap();
        assert_eq!(parsed, PropertyType::Villa);
    }

    #[test]
    fn test_property_type_rejects_unknown() {
        assert!("bureau".parse::<PropertyType>().is_err());
        assert!("".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_label_keys_keep_french_names() {
        assert_eq!(
            PropertyType::Apartment.label_key(),
            "properties.filters.appartement"
        );
        assert_eq!(PropertyType::Land.label_key(), "properties.filters.terrain");
    }
}
