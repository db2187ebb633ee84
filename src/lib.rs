//! # Vitrine
//!
//! A multilingual property-showcase catalog for a Dakar real-estate agency.
//!
//! Vitrine embeds the ABS Immo Services catalog and serves it from the
//! terminal: filterable listings by property type and price bucket,
//! per-property files with an image carousel, a contact form that hands off
//! to WhatsApp deep links, and an interface translated into French, English,
//! Wolof and Diola.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌─────────────┐
//! │   catalog     │──▶│   filter    │──▶│  list view   │
//! │  (embedded)  │   │ type+price  │   │ CLI / TUI   │
//! └──────┬───────┘   └─────────────┘   └──────┬──────┘
//!        │                                    │
//!        ▼                                    ▼
//! ┌──────────────┐   ┌─────────────┐   ┌─────────────┐
//! │    detail     │──▶│  carousel   │   │   contact    │
//! │ property file │   │   images    │   │ wa.me link  │
//! └──────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! vitrine list --type villa         # filter the catalog
//! vitrine show 7                    # one property's file
//! vitrine message buy --name ...    # WhatsApp contact link
//! vitrine langs                     # translation coverage
//! vitrine check                     # catalog invariants
//! vitrine browse                    # interactive client
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types and price formatting |
//! | [`catalog`] | Embedded property catalog |
//! | [`filter`] | Type and price-bucket filter engine |
//! | [`nav`] | View routing and scroll discipline |
//! | [`carousel`] | Per-property image carousel state |
//! | [`detail`] | Property detail resolution |
//! | [`contact`] | Contact messages and WhatsApp deep links |
//! | [`i18n`] | Language tables and translation lookup |
//! | [`browse`] | Interactive terminal client |

pub mod browse;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod detail;
pub mod filter;
pub mod i18n;
pub mod models;
pub mod nav;
