//! The embedded property catalog.
//!
//! Listings are static marketing data compiled into the binary; there is no
//! database and no remote fetch. [`catalog`] hands out the records in
//! display order, [`lookup`] resolves an id, and [`verify`] checks the
//! data-model invariants before anything renders them.

use std::collections::HashSet;
use std::sync::OnceLock;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::filter::{PriceBucket, PriceThresholds};
use crate::i18n::Lang;
use crate::models::{format_price, PropertyRecord, PropertyType};

/// Number of records the home page shows as featured opportunities.
const FEATURED_COUNT: usize = 4;

/// All listings, in display order.
pub fn catalog() -> &'static [PropertyRecord] {
    static CATALOG: OnceLock<Vec<PropertyRecord>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Finds a listing by exact id.
pub fn lookup(id: &str) -> Option<&'static PropertyRecord> {
    catalog().iter().find(|p| p.id == id)
}

/// The slice of the catalog featured on the home page.
pub fn featured() -> &'static [PropertyRecord] {
    let all = catalog();
    &all[..FEATURED_COUNT.min(all.len())]
}

/// Validates the catalog invariants: unique ids, at least one image per
/// record, positive surface and price.
pub fn verify(records: &[PropertyRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.id.trim().is_empty() {
            bail!("property with empty id");
        }
        if !seen.insert(record.id.as_str()) {
            bail!("duplicate property id: {}", record.id);
        }
        if record.images.is_empty() {
            bail!("property {} has no images", record.id);
        }
        if record.surface_m2 == 0 {
            bail!("property {} has zero surface", record.id);
        }
        if record.price == 0 {
            bail!("property {} has zero price", record.id);
        }
    }
    Ok(())
}

/// CLI entry point for `vitrine check`: verifies the catalog and prints a
/// summary of the data the other commands will serve.
pub fn run_check(config: &Config) -> Result<()> {
    let records = catalog();
    verify(records)?;

    let thresholds = PriceThresholds::from_config(config);
    let currency = &config.pricing.currency;

    println!("Catalog: {} properties, all invariants OK", records.len());
    println!();

    println!("{:<12} {:>5}", "TYPE", "COUNT");
    for ty in PropertyType::ALL {
        let count = records.iter().filter(|p| p.property_type == ty).count();
        println!("{:<12} {:>5}", ty.wire_name(), count);
    }
    println!();

    let min = records.iter().map(|p| p.price).min().unwrap_or(0);
    let max = records.iter().map(|p| p.price).max().unwrap_or(0);
    println!(
        "Price range: {} to {}",
        format_price(min, currency),
        format_price(max, currency)
    );
    println!();

    println!("{:<12} {:>5}  BOUNDS", "BUCKET", "COUNT");
    for bucket in [PriceBucket::Low, PriceBucket::Medium, PriceBucket::High] {
        let count = records
            .iter()
            .filter(|p| bucket.matches(p.price, &thresholds))
            .count();
        println!(
            "{:<12} {:>5}  {}",
            bucket.wire_name(),
            count,
            bucket.bounds_label(&thresholds, currency)
        );
    }
    println!();

    println!("Languages: {}", Lang::supported_codes().join(", "));
    println!("Default language: {}", config.default_lang().code());
    println!("WhatsApp account: {}", config.contact.whatsapp);
    println!("Phone: {} ({})", config.contact.phone_display, config.contact.tel_link);

    Ok(())
}

fn build_catalog() -> Vec<PropertyRecord> {
    vec![
        record(
            "1",
            "Appartement Meublé de Standing",
            PropertyType::Apartment,
            "Point E, Dakar",
            2_000_000,
            450,
            Some(3),
            Some(4),
            "Une belle opportunité pour un cadre de vie agréable et sécurisé au cœur de Dakar. Architecture moderne et finitions haut de gamme.",
            &[
                "assets/appart1/app1.jpeg",
                "assets/appart1/app11.jpeg",
                "assets/appart1/app111.jpeg",
                "assets/appart1/app1111.jpeg",
            ],
            &[
                "Ascenseur",
                "Groupe électrogène",
                "Cuisine entièrement équipée",
                "Salon moderne et lumineux",
                "Sécurité 24/7",
            ],
        ),
        record(
            "2",
            "Superbe Appartement Meublé",
            PropertyType::Apartment,
            "Point E, Dakar",
            1_500_000,
            170,
            Some(3),
            Some(1),
            "L'appartement est entièrement meublé avec goût, dans un style moderne et fonctionnel, parfait pour une installation immédiate. Le cadre est calme, familial et sécurisé, avec toutes les commodités à proximité (écoles, commerces, restaurants, axes routiers).",
            &[
                "assets/appart2/app22.jpeg",
                "assets/appart2/app222.jpeg",
                "assets/appart2/app2222.jpeg",
                "assets/appart2/app22222.jpeg",
            ],
            &[
                "Terrasse",
                "Ascenseur",
                "Parking",
                "Concierge",
                "Climatisation",
                "Vue panoramique",
            ],
        ),
        record(
            "3",
            "Villa Moderne Premium",
            PropertyType::Villa,
            "Ngor, Dakar",
            1_500_000,
            380,
            Some(3),
            Some(1),
            "Immeuble moderne situé dans un quartier résidentiel calme et sécurisé des Almadies, à proximité de la BICIS. Grande piscine, domotique complète et espaces de vie lumineux.",
            &[
                "assets/appart3/app3.jpeg",
                "assets/appart3/app33.jpeg",
                "assets/appart3/app333.jpeg",
                "assets/appart3/app3333.jpeg",
                "assets/appart3/app33333.jpeg",
                "assets/appart3/app333333.jpeg",
            ],
            &[
                "Piscine",
                "Ascenseur",
                "Jardin",
                "Garage",
                "Climatisation",
                "Salle de sport",
                "Surpresseur et réservoir d'eau",
                "Sécurité 24h/24",
            ],
        ),
        record(
            "4",
            "Hangar Standing Premium",
            PropertyType::Hangar,
            "Colobane, Dakar",
            5_000_000,
            1_500,
            None,
            None,
            "Espace professionnel d'exception en zone accessible, proche des grands axes routiers. Idéal pour stockage, logistique ou activité industrielle, avec une hauteur généreuse facilitant la manutention et le stockage. Accès poids lourds et sécurité renforcée.",
            &[
                "assets/hangars1/hangar1.jpeg",
                "assets/hangars1/hangar11.jpeg",
                "assets/hangars1/hangar111.jpeg",
            ],
            &[
                "Localisation stratégique",
                "Structure adaptée",
                "Hauteur sous plafond",
                "Sécurité",
                "Accès poids lourds",
            ],
        ),
        record(
            "5",
            "Appartement Grand Standing",
            PropertyType::Apartment,
            "Fann Résidence, Dakar",
            1_600_000,
            245,
            Some(3),
            Some(4),
            "Ascenseur, salle de sport, salle de festivités, services de gardiennage et de nettoyage, piscine, garage en sous-sol.",
            &[
                "assets/appart4/app4.jpeg",
                "assets/appart4/app44.jpeg",
                "assets/appart4/app444.jpeg",
            ],
            &[
                "Ascenseur",
                "Garage",
                "Salle de sport",
                "Salle de festivités",
                "Piscine",
                "Accès sécurisé",
            ],
        ),
        record(
            "6",
            "Résidence de Prestige",
            PropertyType::Apartment,
            "Fann Résidence, Dakar",
            2_000_000,
            500,
            Some(3),
            Some(4),
            "Propriété d'exception à l'architecture raffinée. Découvrez ce grand appartement de standing idéalement situé à Fann Résidence, dans un environnement calme, sécurisé et proche de toutes commodités.",
            &[
                "assets/appart5/app5.jpeg",
                "assets/appart5/app55.jpeg",
                "assets/appart5/app555.jpeg",
                "assets/appart5/app5555.jpeg",
            ],
            &[
                "Piscine",
                "Réservoir d'eau",
                "Ascenseur",
                "Groupe électrogène",
                "Sécurité",
            ],
        ),
        record(
            "7",
            "Villa Prestige",
            PropertyType::Villa,
            "Hann Marinas, Dakar",
            2_000_000,
            400,
            Some(5),
            Some(4),
            "Propriété d'exception à l'architecture raffinée. Un cadre idéal pour une vie paisible, avec des espaces fonctionnels, un confort optimal et deux cuisines (une américaine moderne et une cuisine africaine), dans un environnement sécurisé et proche de toutes commodités.",
            &[
                "assets/appart6/app6.jpeg",
                "assets/appart6/app66.jpeg",
                "assets/appart6/app666.jpeg",
            ],
            &[
                "Piscine privée",
                "Réservoir d'eau",
                "Jardin",
                "Buanderie",
                "Sécurité",
            ],
        ),
        record(
            "8",
            "Grande Villa Haut Standing",
            PropertyType::Villa,
            "Mamelles, Cité Mbackiyou Faye, Dakar",
            2_500_000,
            400,
            Some(3),
            Some(4),
            "Propriété d'exception à l'architecture raffinée. Un bien idéal pour une famille recherchant confort, standing et tranquillité dans un environnement sécurisé et proche de toutes commodités.",
            &[
                "assets/appart7/app7.jpeg",
                "assets/appart7/app77.jpeg",
                "assets/appart7/app777.jpeg",
                "assets/appart7/app7777.jpeg",
                "assets/appart7/app77777.jpeg",
                "assets/appart7/app777777.jpeg",
                "assets/appart7/app7777777.jpeg",
                "assets/appart7/app77777777.jpeg",
            ],
            &[
                "Piscine",
                "Réservoir d'eau",
                "Terrasse",
                "Garage",
                "Buanderie",
                "Jardin",
                "Sécurité",
            ],
        ),
        record(
            "9",
            "Villa Haut Standing",
            PropertyType::Villa,
            "Virage, Dakar",
            2_800_000,
            400,
            Some(4),
            Some(5),
            "Un cadre résidentiel idéal, proche de la plage, des commerces et de toutes commodités. Un bien parfait pour une famille recherchant confort, standing et tranquillité dans un environnement sécurisé.",
            &[
                "assets/appart8/app8.jpeg",
                "assets/appart8/app88.jpeg",
                "assets/appart8/app888.jpeg",
                "assets/appart8/app8888.jpeg",
                "assets/appart8/app88888.jpeg",
            ],
            &[
                "Piscine privée",
                "Réservoir d'eau",
                "Cuisine entièrement équipée",
                "Garage",
                "Buanderie",
                "Jardin verdoyant",
                "Sécurité",
            ],
        ),
        record(
            "10",
            "Grand Magasin Spacieux",
            PropertyType::Commerce,
            "Dalifort Belvédère",
            700_000,
            320,
            None,
            None,
            "Le local dispose de toilettes et convient idéalement pour un commerce, des bureaux ou un showroom.",
            &[
                "assets/commerce/commerce1.jpeg",
                "assets/commerce/commerce2.jpeg",
                "assets/commerce/commerce3.jpeg",
                "assets/commerce/commerce4.jpeg",
            ],
            &[
                "À louer",
                "Buanderie",
                "Excellente visibilité",
                "Sécurité",
            ],
        ),
        record(
            "11",
            "Hangar Standing",
            PropertyType::Hangar,
            "Rufisque, Dakar",
            2_000_000,
            800,
            None,
            None,
            "Espace professionnel d'exception en zone accessible. Il dispose d'une toilette interne et offre un espace fonctionnel et facilement accessible, idéal pour stockage, logistique ou activité industrielle. Accès poids lourds et sécurité renforcée.",
            &[
                "assets/hangars2/hangar2.jpeg",
                "assets/hangars2/hangar22.jpeg",
                "assets/hangars2/hangar222.jpeg",
                "assets/hangars2/hangar2222.jpeg",
            ],
            &[
                "Localisation stratégique",
                "Structure adaptée",
                "Hauteur sous plafond",
                "Sécurité",
                "Accès poids lourds",
            ],
        ),
        record(
            "12",
            "Hangar Haut Standing",
            PropertyType::Hangar,
            "Diamniadio Dougar, Dakar",
            6_500_000,
            2_200,
            None,
            None,
            "Espace professionnel d'exception en zone accessible, proche des grands axes routiers. Ce hangar est parfaitement adapté aux activités de logistique, de stockage ou industrielles, avec un accès facile aux infrastructures de Diamniadio.",
            &[
                "assets/hangars3/hangar3.jpeg",
                "assets/hangars3/hangar33.jpeg",
                "assets/hangars3/hangar333.jpeg",
            ],
            &[
                "Localisation stratégique",
                "Structure adaptée",
                "Hauteur sous plafond",
                "Sécurité",
                "Accès poids lourds",
            ],
        ),
        record(
            "13",
            "Hangar Ultra Premium",
            PropertyType::Hangar,
            "Diamniadio, Dakar",
            2_500_000,
            800,
            None,
            None,
            "Un bâtiment administratif avec bureaux et toilettes séparées, en zone accessible. Des bureaux intégrés, un espace de réfection avec cuisine pour plus de confort, et une chambre de gardien pour assurer la sécurité. Parfaitement adapté aux activités de logistique, de stockage ou industrielles.",
            &[
                "assets/hangars4/hangar4.jpeg",
                "assets/hangars4/hangar44.jpeg",
                "assets/hangars4/hangar444.jpeg",
                "assets/hangars4/hangar4444.jpeg",
            ],
            &[
                "Localisation stratégique",
                "Structure adaptée",
                "Hauteur sous plafond",
                "Sécurité",
                "Accès poids lourds",
            ],
        ),
    ]
}

fn record(
    id: &str,
    title: &str,
    property_type: PropertyType,
    location: &str,
    price: u64,
    surface_m2: u32,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    description: &str,
    images: &[&str],
    features: &[&str],
) -> PropertyRecord {
    PropertyRecord {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        property_type,
        price,
        surface_m2,
        bedrooms,
        bathrooms,
        description: description.to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
        features: features.iter().map(|s| s.to_string()).collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================
