//! Property detail view.
//!
//! [`DetailView::build`] is a pure function of the catalog lookup: an
//! unknown id yields the [`DetailView::Missing`] fallback, never an error.
//! The interface renders the fallback as a "property not found" page that
//! points back to the listing.

use anyhow::Result;

use crate::catalog;
use crate::config::Config;
use crate::contact;
use crate::i18n::Translator;
use crate::models::{format_price, PropertyRecord};

/// Outcome of resolving the selected property id.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Found(&'a PropertyRecord),
    Missing { requested_id: String },
}

impl<'a> DetailView<'a> {
    /// Resolves `id` against `records`. Total: every id, known or not,
    /// maps to a renderable view.
    pub fn build(records: &'a [PropertyRecord], id: &str) -> DetailView<'a> {
        match records.iter().find(|p| p.id == id) {
            Some(record) => DetailView::Found(record),
            None => DetailView::Missing {
                requested_id: id.to_string(),
            },
        }
    }

    pub fn record(&self) -> Option<&'a PropertyRecord> {
        match self {
            DetailView::Found(record) => Some(record),
            DetailView::Missing { .. } => None,
        }
    }
}

/// CLI entry point for `vitrine show`.
pub fn run_show(config: &Config, id: &str, json: bool) -> Result<()> {
    let translator = Translator::new(config.default_lang());
    let view = DetailView::build(catalog::catalog(), id);

    let record = match view {
        DetailView::Found(record) => record,
        DetailView::Missing { requested_id } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "found": false,
                        "requested_id": requested_id,
                    }))?
                );
            } else {
                println!("Property '{}' not found.", requested_id);
                println!("The listing may have been removed; run `vitrine list` to browse available properties.");
            }
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let currency = &config.pricing.currency;

    println!("--- Property {} ---", record.id);
    println!("title:     {}", record.title);
    println!("type:      {}", record.property_type.wire_name());
    println!("location:  {}", record.location);
    println!("price:     {}", format_price(record.price, currency));
    println!("surface:   {} m²", record.surface_m2);
    if let Some(bedrooms) = record.bedrooms {
        println!("bedrooms:  {}", bedrooms);
    }
    if let Some(bathrooms) = record.bathrooms {
        println!("bathrooms: {}", bathrooms);
    }
    println!("images:    {} (cover: {})", record.images.len(), record.cover_image());
    println!();

    println!("--- {} ---", translator.t("propertyDetail.presentation"));
    println!("{}", record.description);
    println!();

    println!("--- {} ---", translator.t("propertyDetail.features"));
    for feature in &record.features {
        println!("  - {}", feature);
    }
    println!();

    println!(
        "whatsapp:  {}",
        contact::property_inquiry(record, &translator, config)
    );
    println!("phone:     {}", config.contact.tel_link);

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_found() {
        let view = DetailView::build(catalog::catalog(), "10");
        let record = view.record().unwrap();
        assert_eq!(record.title, "Grand Magasin Spacieux");
    }

    #[test]
    fn test_build_unknown_id_is_missing_fallback() {
        let view = DetailView::build(catalog::catalog(), "999");
        assert_eq!(
            view,
            DetailView::Missing {
                requested_id: "999".to_string()
            }
        );
        assert!(view.record().is_none());
    }

    #[test]
    fn test_build_empty_id_is_missing_fallback() {
        let view = DetailView::build(catalog::catalog(), "");
        assert!(matches!(view, DetailView::Missing { .. }));
    }
}
