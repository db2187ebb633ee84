//! # Vitrine CLI (`vitrine`)
//!
//! The `vitrine` binary is the terminal interface to the ABS Immo Services
//! property showcase. It provides scripting commands over the embedded
//! catalog (filtering, detail views, contact links, language inspection)
//! and an interactive full-screen browser.
//!
//! ## Usage
//!
//! ```bash
//! vitrine --config ./config/vitrine.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vitrine list` | List properties, optionally filtered by type and price bucket |
//! | `vitrine show <id>` | Print the full file of one property |
//! | `vitrine message <project>` | Build a contact message and its WhatsApp deep link |
//! | `vitrine langs` | List interface languages and their translation coverage |
//! | `vitrine check` | Verify catalog invariants and print a data summary |
//! | `vitrine browse` | Open the interactive terminal client |
//!
//! ## Examples
//!
//! ```bash
//! # All villas
//! vitrine list --type villa
//!
//! # Mid-priced properties as JSON
//! vitrine list --price medium --json
//!
//! # One property's file
//! vitrine show 7
//!
//! # A buyer's contact message, in English
//! vitrine message buy --name "Awa Ndiaye" --email awa@example.sn \
//!     --phone "+221 70 000 00 00" --field1 "150 000 000 FCFA" \
//!     --field2 "Almadies" --details "Villa avec piscine" --lang en
//!
//! # Interactive browsing in Wolof
//! vitrine browse --lang wo
//! ```

mod browse;
mod carousel;
mod catalog;
mod config;
mod contact;
mod detail;
mod filter;
mod i18n;
mod models;
mod nav;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitrine CLI: the ABS Immo Services property showcase in a terminal.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. Missing files fall back to the built-in defaults; see
/// `config/vitrine.example.toml` for every setting.
#[derive(Parser)]
#[command(
    name = "vitrine",
    about = "A multilingual property-showcase catalog and terminal client",
    version,
    long_about = "Vitrine embeds a real-estate agency's property catalog and serves it from the \
    terminal: filterable listings, per-property files with image carousels, prefilled WhatsApp \
    contact links, and an interface translated into French, English, Wolof and Diola."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/vitrine.toml`. Pricing thresholds, agency
    /// identity, contact channels, and the default language are read from
    /// this file; built-in defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "./config/vitrine.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List properties from the catalog.
    ///
    /// Applies the same filter engine as the interactive client: an optional
    /// type criterion and an optional price bucket, combined with AND.
    /// Results keep their catalog order.
    List {
        /// Property type: `all`, `villa`, `apartment`, `land`, `hangar`, `commerce`.
        #[arg(long = "type", value_name = "TYPE")]
        type_filter: Option<String>,

        /// Price bucket: `all`, `low`, `medium`, `high`. Bucket bounds come
        /// from `[pricing]` in the config file.
        #[arg(long, value_name = "BUCKET")]
        price: Option<String>,

        /// Print the matching records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print one property's full file.
    ///
    /// Shows metadata, description, amenities, and the prefilled WhatsApp
    /// inquiry link. An unknown id prints the not-found fallback.
    Show {
        /// Property id (as printed by `vitrine list`).
        id: String,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a contact message and its WhatsApp deep link.
    ///
    /// Formats the same message the interactive contact form hands off:
    /// project label, identity fields, the two project-specific fields, and
    /// the free-form details, percent-encoded into a wa.me URL.
    Message {
        /// Project type: `buy`, `sell`, or `invest`. Decides the labels of
        /// `--field1` and `--field2`.
        project: String,

        /// Full name.
        #[arg(long)]
        name: String,

        /// Email address.
        #[arg(long)]
        email: String,

        /// Phone number.
        #[arg(long)]
        phone: String,

        /// First project-specific field (buy: estimated budget, sell:
        /// property type, invest: investment amount).
        #[arg(long)]
        field1: String,

        /// Second project-specific field (buy: target area, sell: property
        /// location, invest: investment horizon).
        #[arg(long)]
        field2: String,

        /// Free-form message body.
        #[arg(long)]
        details: String,

        /// Language for the message labels (`fr`, `en`, `wo`, `di`).
        /// Defaults to the configured default language.
        #[arg(long)]
        lang: Option<String>,

        /// Print only the deep link.
        #[arg(long)]
        link_only: bool,
    },

    /// List interface languages and their translation coverage.
    Langs,

    /// Verify catalog invariants and print a data summary.
    ///
    /// Checks id uniqueness, image presence, and positive surfaces and
    /// prices, then reports type counts, the price range, and the bucket
    /// distribution under the configured thresholds.
    Check,

    /// Open the interactive terminal client.
    ///
    /// Full-screen browsing of the showcase: home, listings with filters,
    /// property files with an image carousel, about, and the contact form.
    Browse {
        /// Initial interface language (`fr`, `en`, `wo`, `di`). Defaults to
        /// the configured default language.
        #[arg(long)]
        lang: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_or_default(&cli.config)?;
    catalog::verify(catalog::catalog())?;

    match cli.command {
        Commands::List {
            type_filter,
            price,
            json,
        } => {
            filter::run_list(&cfg, type_filter.as_deref(), price.as_deref(), json)?;
        }
        Commands::Show { id, json } => {
            detail::run_show(&cfg, &id, json)?;
        }
        Commands::Message {
            project,
            name,
            email,
            phone,
            field1,
            field2,
            details,
            lang,
            link_only,
        } => {
            contact::run_message(
                &cfg,
                &project,
                &name,
                &email,
                &phone,
                &field1,
                &field2,
                &details,
                lang.as_deref(),
                link_only,
            )?;
        }
        Commands::Langs => {
            i18n::run_langs(cfg.default_lang())?;
        }
        Commands::Check => {
            catalog::run_check(&cfg)?;
        }
        Commands::Browse { lang } => {
            browse::run_browse(&cfg, lang.as_deref())?;
        }
    }

    Ok(())
}
