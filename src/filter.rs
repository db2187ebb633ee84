//! The listing filter engine.
//!
//! Filtering is pure and deterministic: records that satisfy every active
//! criterion are returned in their original catalog order, never re-sorted.
//! Price bucket bounds come from configuration, not from the data.

use anyhow::Result;
use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::config::Config;
use crate::models::{format_price, format_price_compact, PropertyRecord, PropertyType};

/// Bucket boundaries in currency units. `low` is everything below
/// `low_max`, `high` everything at or above `high_min`, `medium` the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceThresholds {
    pub low_max: u64,
    pub high_min: u64,
}

impl PriceThresholds {
    pub fn from_config(config: &Config) -> Self {
        Self {
            low_max: config.pricing.bucket_low_max,
            high_min: config.pricing.bucket_high_min,
        }
    }
}

/// Price range selector on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriceBucket {
    /// Selector cycle order in the filter bar.
    pub const CYCLE: [PriceBucket; 4] = [
        PriceBucket::All,
        PriceBucket::Low,
        PriceBucket::Medium,
        PriceBucket::High,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::Low => "low",
            PriceBucket::Medium => "medium",
            PriceBucket::High => "high",
        }
    }

    /// The bucket a price falls into. Never returns [`PriceBucket::All`];
    /// the three ranges partition the whole price axis.
    pub fn classify(price: u64, thresholds: &PriceThresholds) -> PriceBucket {
        if price < thresholds.low_max {
            PriceBucket::Low
        } else if price < thresholds.high_min {
            PriceBucket::Medium
        } else {
            PriceBucket::High
        }
    }

    pub fn matches(&self, price: u64, thresholds: &PriceThresholds) -> bool {
        match self {
            PriceBucket::All => true,
            selected => Self::classify(price, thresholds) == *selected,
        }
    }

    /// Human-readable bounds, e.g. `< 2 M FCFA` or `2 M FCFA - 3 M FCFA`.
    pub fn bounds_label(&self, thresholds: &PriceThresholds, currency: &str) -> String {
        match self {
            PriceBucket::All => "-".to_string(),
            PriceBucket::Low => {
                format!("< {}", format_price_compact(thresholds.low_max, currency))
            }
            PriceBucket::Medium => format!(
                "{} - {}",
                format_price_compact(thresholds.low_max, currency),
                format_price_compact(thresholds.high_min, currency)
            ),
            PriceBucket::High => {
                format!(">= {}", format_price_compact(thresholds.high_min, currency))
            }
        }
    }

    pub fn next(&self) -> PriceBucket {
        let i = Self::CYCLE.iter().position(|b| b == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for PriceBucket {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(PriceBucket::All),
            "low" => Ok(PriceBucket::Low),
            "medium" => Ok(PriceBucket::Medium),
            "high" => Ok(PriceBucket::High),
            other => anyhow::bail!(
                "unknown price bucket '{}' (expected one of: all, low, medium, high)",
                other
            ),
        }
    }
}

/// Category selector on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    /// Selector cycle order in the filter bar, matching the site's tabs.
    pub const CYCLE: [TypeFilter; 6] = [
        TypeFilter::All,
        TypeFilter::Only(PropertyType::Villa),
        TypeFilter::Only(PropertyType::Apartment),
        TypeFilter::Only(PropertyType::Land),
        TypeFilter::Only(PropertyType::Hangar),
        TypeFilter::Only(PropertyType::Commerce),
    ];

    pub fn matches(&self, ty: PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(selected) => *selected == ty,
        }
    }

    /// Translation key of the selector label.
    pub fn label_key(&self) -> &'static str {
        match self {
            TypeFilter::All => "properties.filters.all",
            TypeFilter::Only(ty) => ty.label_key(),
        }
    }

    pub fn next(&self) -> TypeFilter {
        let i = Self::CYCLE.iter().position(|t| t == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(ty) => f.write_str(ty.wire_name()),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(s.parse()?))
        }
    }
}

/// The criteria pair held by the listing view. Ephemeral: views construct it
/// on entry and drop it on exit, so filters never survive a navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub type_filter: TypeFilter,
    pub price_bucket: PriceBucket,
}

impl FilterCriteria {
    /// Back to the view-mount state (everything visible).
    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// Applies both criteria to `records`, preserving relative order.
pub fn filter<'a>(
    records: &'a [PropertyRecord],
    criteria: FilterCriteria,
    thresholds: &PriceThresholds,
) -> Vec<&'a PropertyRecord> {
    records
        .iter()
        .filter(|p| criteria.type_filter.matches(p.property_type))
        .filter(|p| criteria.price_bucket.matches(p.price, thresholds))
        .collect()
}

/// CLI entry point for `vitrine list`.
pub fn run_list(
    config: &Config,
    type_arg: Option<&str>,
    price_arg: Option<&str>,
    json: bool,
) -> Result<()> {
    let criteria = FilterCriteria {
        type_filter: type_arg.map(str::parse).transpose()?.unwrap_or_default(),
        price_bucket: price_arg.map(str::parse).transpose()?.unwrap_or_default(),
    };
    let thresholds = PriceThresholds::from_config(config);
    let results = filter(catalog::catalog(), criteria, &thresholds);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!(
            "No properties match type={} price={}",
            criteria.type_filter, criteria.price_bucket
        );
        return Ok(());
    }

    println!(
        "{:<4} {:<10} {:<36} {:>16} {:>8}  TITLE",
        "ID", "TYPE", "LOCATION", "PRICE", "SURFACE"
    );
    for p in &results {
        println!(
            "{:<4} {:<10} {:<36} {:>16} {:>7}m²  {}",
            p.id,
            p.property_type.wire_name(),
            p.location,
            format_price(p.price, &config.pricing.currency),
            p.surface_m2,
            p.title
        );
    }
    println!();
    println!(
        "{} of {} properties (type={}, price={})",
        results.len(),
        catalog::catalog().len(),
        criteria.type_filter,
        criteria.price_bucket
    );

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> PriceThresholds {
        PriceThresholds {
            low_max: 2_000_000,
            high_min: 3_000_000,
        }
    }

    fn ids(records: &[&PropertyRecord]) -> Vec<String> {
        records.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_all_all_is_identity() {
        let records = catalog::catalog();
        let results = filter(records, FilterCriteria::default(), &thresholds());
        assert_eq!(results.len(), records.len());
        let expected: Vec<String> = records.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids(&results), expected);
    }

    #[test]
    fn test_type_filter_is_sound_and_complete() {
        let records = catalog::catalog();
        let criteria = FilterCriteria {
            type_filter: TypeFilter::Only(PropertyType::Villa),
            price_bucket: PriceBucket::All,
        };
        let results = filter(records, criteria, &thresholds());
        for p in &results {
            assert_eq!(p.property_type, PropertyType::Villa);
        }
        let expected = records
            .iter()
            .filter(|p| p.property_type == PropertyType::Villa)
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn test_buckets_partition_the_catalog() {
        let records = catalog::catalog();
        let t = thresholds();
        let mut total = 0;
        for bucket in [PriceBucket::Low, PriceBucket::Medium, PriceBucket::High] {
            let criteria = FilterCriteria {
                type_filter: TypeFilter::All,
                price_bucket: bucket,
            };
            let results = filter(records, criteria, &t);
            for p in &results {
                assert_eq!(PriceBucket::classify(p.price, &t), bucket);
            }
            total += results.len();
        }
        // Disjoint and exhaustive: each record lands in exactly one bucket.
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_bucket_bounds_are_half_open() {
        let t = thresholds();
        assert_eq!(PriceBucket::classify(1_999_999, &t), PriceBucket::Low);
        assert_eq!(PriceBucket::classify(2_000_000, &t), PriceBucket::Medium);
        assert_eq!(PriceBucket::classify(2_999_999, &t), PriceBucket::Medium);
        assert_eq!(PriceBucket::classify(3_000_000, &t), PriceBucket::High);
    }

    #[test]
    fn test_combined_filters_preserve_catalog_order() {
        let records = catalog::catalog();
        let criteria = FilterCriteria {
            type_filter: TypeFilter::Only(PropertyType::Hangar),
            price_bucket: PriceBucket::Medium,
        };
        let results = filter(records, criteria, &thresholds());
        let positions: Vec<usize> = results
            .iter()
            .map(|p| records.iter().position(|r| r.id == p.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_empty_result_is_valid() {
        // The catalog currently lists no land, so this combination is empty.
        let criteria = FilterCriteria {
            type_filter: TypeFilter::Only(PropertyType::Land),
            price_bucket: PriceBucket::All,
        };
        let results = filter(catalog::catalog(), criteria, &thresholds());
        assert!(results.is_empty());
    }

    #[test]
    fn test_custom_thresholds_move_bucket_membership() {
        let records = catalog::catalog();
        let tight = PriceThresholds {
            low_max: 1_000_000,
            high_min: 1_000_000,
        };
        let criteria = FilterCriteria {
            type_filter: TypeFilter::All,
            price_bucket: PriceBucket::Medium,
        };
        // Equal thresholds make the medium bucket empty.
        assert!(filter(records, criteria, &tight).is_empty());

        let wide = PriceThresholds {
            low_max: 100_000,
            high_min: 100_000_000,
        };
        assert_eq!(filter(records, criteria, &wide).len(), records.len());
    }

    #[test]
    fn test_criteria_reset_restores_mount_state() {
        let mut criteria = FilterCriteria {
            type_filter: TypeFilter::Only(PropertyType::Commerce),
            price_bucket: PriceBucket::Low,
        };
        assert!(!criteria.is_default());
        criteria.reset();
        assert!(criteria.is_default());
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "villa".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(PropertyType::Villa)
        );
        assert!("bureau".parse::<TypeFilter>().is_err());

        assert_eq!("medium".parse::<PriceBucket>().unwrap(), PriceBucket::Medium);
        assert!("cheap".parse::<PriceBucket>().is_err());
    }

    #[test]
    fn test_selector_cycles_wrap() {
        let mut tf = TypeFilter::All;
        for _ in 0..TypeFilter::CYCLE.len() {
            tf = tf.next();
        }
        assert_eq!(tf, TypeFilter::All);

        let mut pb = PriceBucket::All;
        for _ in 0..PriceBucket::CYCLE.len() {
            pb = pb.next();
        }
        assert_eq!(pb, PriceBucket::All);
    }
}
