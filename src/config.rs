use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::i18n::Lang;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub agency: AgencyConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub language: LanguageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Upper bound (exclusive) of the low price bucket, in currency units.
    #[serde(default = "default_bucket_low_max")]
    pub bucket_low_max: u64,
    /// Lower bound (inclusive) of the high price bucket, in currency units.
    #[serde(default = "default_bucket_high_min")]
    pub bucket_high_min: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            bucket_low_max: default_bucket_low_max(),
            bucket_high_min: default_bucket_high_min(),
            currency: default_currency(),
        }
    }
}

fn default_bucket_low_max() -> u64 {
    2_000_000
}
fn default_bucket_high_min() -> u64 {
    3_000_000
}
fn default_currency() -> String {
    "FCFA".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgencyConfig {
    #[serde(default = "default_agency_name")]
    pub name: String,
    #[serde(default = "default_agency_region")]
    pub region: String,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            name: default_agency_name(),
            region: default_agency_region(),
        }
    }
}

fn default_agency_name() -> String {
    "ABS Immo Services".to_string()
}
fn default_agency_region() -> String {
    "Dakar, Sénégal".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// WhatsApp account in international format, digits only (no '+').
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_phone_display")]
    pub phone_display: String,
    #[serde(default = "default_tel_link")]
    pub tel_link: String,
    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp: default_whatsapp(),
            phone_display: default_phone_display(),
            tel_link: default_tel_link(),
            email: default_email(),
        }
    }
}

fn default_whatsapp() -> String {
    "221774308344".to_string()
}
fn default_phone_display() -> String {
    "+221 77 430 83 44".to_string()
}
fn default_tel_link() -> String {
    "tel:774308344".to_string()
}
fn default_email() -> String {
    "contact@absimmo.sn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LanguageConfig {
    #[serde(default = "default_language")]
    pub default: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
        }
    }
}

fn default_language() -> String {
    "fr".to_string()
}

impl Config {
    /// Default language as a typed value. Valid on any config that passed
    /// validation.
    pub fn default_lang(&self) -> Lang {
        Lang::from_code(&self.language.default).unwrap_or(Lang::Fr)
    }
}

/// Loads the config file at `path`, falling back to built-in defaults when
/// the file does not exist. Every command works without a config file; the
/// file only overrides pricing thresholds, agency identity, and contact
/// channels.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        let config = Config::default();
        validate(&config)?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    // Validate pricing
    if config.pricing.bucket_low_max > config.pricing.bucket_high_min {
        anyhow::bail!(
            "pricing.bucket_low_max ({}) must be <= pricing.bucket_high_min ({})",
            config.pricing.bucket_low_max,
            config.pricing.bucket_high_min
        );
    }
    if config.pricing.currency.trim().is_empty() {
        anyhow::bail!("pricing.currency must not be empty");
    }

    // Validate agency
    if config.agency.name.trim().is_empty() {
        anyhow::bail!("agency.name must not be empty");
    }

    // Validate contact
    if config.contact.whatsapp.is_empty()
        || !config.contact.whatsapp.chars().all(|c| c.is_ascii_digit())
    {
        anyhow::bail!(
            "contact.whatsapp must be digits only in international format, got '{}'",
            config.contact.whatsapp
        );
    }
    if !config.contact.tel_link.starts_with("tel:") {
        anyhow::bail!(
            "contact.tel_link must start with 'tel:', got '{}'",
            config.contact.tel_link
        );
    }
    if !config.contact.email.contains('@') {
        anyhow::bail!(
            "contact.email must be an email address, got '{}'",
            config.contact.email
        );
    }

    // Validate language
    if Lang::from_code(&config.language.default).is_err() {
        anyhow::bail!(
            "language.default must be one of: {} (got '{}')",
            Lang::supported_codes().join(", "),
            config.language.default
        );
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
