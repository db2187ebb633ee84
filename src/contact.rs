//! Contact intent building.
//!
//! The form collects a visitor's project and hands it off as a prefilled
//! WhatsApp deep link; nothing is ever sent by this crate. Each project type
//! carries two project-specific fields whose labels come from a closed
//! mapping, and switching the type discards the values typed under the
//! previous labels.

use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::Config;
use crate::i18n::{Lang, Translator};
use crate::models::{format_price, PropertyRecord};

/// Cosmetic settling window between pressing send and the hand-off.
pub const SUBMIT_SETTLE: Duration = Duration::from_millis(2500);

/// What the visitor wants to do. Closed set; each variant maps to fixed
/// field labels, never to dynamically keyed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectType {
    #[default]
    Buy,
    Sell,
    Invest,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [ProjectType::Buy, ProjectType::Sell, ProjectType::Invest];

    /// Translation key of the selector label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ProjectType::Buy => "contact.form.buy",
            ProjectType::Sell => "contact.form.sell",
            ProjectType::Invest => "contact.form.invest",
        }
    }

    /// Translation key of the first project-specific field label.
    pub fn field1_key(&self) -> &'static str {
        match self {
            ProjectType::Buy => "contact.fields.buy.field1",
            ProjectType::Sell => "contact.fields.sell.field1",
            ProjectType::Invest => "contact.fields.invest.field1",
        }
    }

    /// Translation key of the second project-specific field label.
    pub fn field2_key(&self) -> &'static str {
        match self {
            ProjectType::Buy => "contact.fields.buy.field2",
            ProjectType::Sell => "contact.fields.sell.field2",
            ProjectType::Invest => "contact.fields.invest.field2",
        }
    }
}

impl FromStr for ProjectType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(ProjectType::Buy),
            "sell" => Ok(ProjectType::Sell),
            "invest" => Ok(ProjectType::Invest),
            other => anyhow::bail!(
                "unknown project type '{}' (expected one of: buy, sell, invest)",
                other
            ),
        }
    }
}

/// A submission in its settling window.
#[derive(Debug, Clone, Copy)]
pub struct Submission {
    started: Instant,
}

impl Submission {
    pub fn begin(now: Instant) -> Self {
        Self { started: now }
    }

    pub fn is_settling(&self, now: Instant) -> bool {
        now.duration_since(self.started) < SUBMIT_SETTLE
    }
}

/// The contact form state.
///
/// Required-ness is the shell's concern: [`ContactForm::missing_required`]
/// reports empty required fields so the shell can refuse to submit, but the
/// builder itself formats whatever is present.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    project_type: ProjectType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub field1: String,
    pub field2: String,
    pub details: String,
    submission: Option<Submission>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Switches the project. The two project-specific values are cleared:
    /// they were typed under the previous labels and must never be carried
    /// into the new ones. Re-selecting the current project changes nothing.
    pub fn set_project_type(&mut self, project: ProjectType) {
        if project == self.project_type {
            return;
        }
        self.project_type = project;
        self.field1.clear();
        self.field2.clear();
    }

    /// Translation keys of the required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("contact.form.name");
        }
        if self.email.trim().is_empty() {
            missing.push("contact.form.email");
        }
        if self.phone.trim().is_empty() {
            missing.push("contact.form.phone");
        }
        if self.field1.trim().is_empty() {
            missing.push(self.project_type.field1_key());
        }
        if self.field2.trim().is_empty() {
            missing.push(self.project_type.field2_key());
        }
        if self.details.trim().is_empty() {
            missing.push("contact.form.message");
        }
        missing
    }

    /// Starts the settling window. Returns false while a previous submission
    /// is still settling, so a double press cannot produce two hand-offs.
    pub fn begin_submit(&mut self, now: Instant) -> bool {
        if self.is_settling(now) {
            return false;
        }
        self.submission = Some(Submission::begin(now));
        true
    }

    pub fn is_settling(&self, now: Instant) -> bool {
        self.submission.map_or(false, |s| s.is_settling(now))
    }

    /// Formats the hand-off message. Line order is fixed: project label,
    /// identity fields, the two project-specific fields, then the free-form
    /// details. Labels resolve in the translator's active language.
    pub fn build_message(&self, translator: &Translator) -> String {
        let mut lines = Vec::new();
        lines.push(translator.t(self.project_type.label_key()));
        lines.push(String::new());
        lines.push(format!("{}: {}", translator.t("contact.form.name"), self.name));
        lines.push(format!("{}: {}", translator.t("contact.form.email"), self.email));
        lines.push(format!("{}: {}", translator.t("contact.form.phone"), self.phone));
        lines.push(format!(
            "{}: {}",
            translator.t(self.project_type.field1_key()),
            self.field1
        ));
        lines.push(format!(
            "{}: {}",
            translator.t(self.project_type.field2_key()),
            self.field2
        ));
        lines.push(String::new());
        lines.push(format!("{}:", translator.t("contact.form.message")));
        lines.push(self.details.clone());
        lines.join("\n")
    }
}

/// Prefilled conversation link: the message is percent-encoded into the
/// `text` query parameter of the account's wa.me URL.
pub fn whatsapp_url(account: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", account, urlencoding::encode(message))
}

/// The detail page's one-tap inquiry for a specific listing.
pub fn property_inquiry(record: &PropertyRecord, translator: &Translator, config: &Config) -> String {
    let message = translator.t_with(
        "propertyDetail.whatsappMessage",
        &[
            ("title", record.title.as_str()),
            ("price", format_price(record.price, &config.pricing.currency).as_str()),
        ],
    );
    whatsapp_url(&config.contact.whatsapp, &message)
}

/// CLI entry point for `vitrine message`.
pub fn run_message(
    config: &Config,
    project_arg: &str,
    name: &str,
    email: &str,
    phone: &str,
    field1: &str,
    field2: &str,
    details: &str,
    lang_arg: Option<&str>,
    link_only: bool,
) -> Result<()> {
    let lang = match lang_arg {
        Some(code) => Lang::from_code(code)?,
        None => config.default_lang(),
    };
    let translator = Translator::new(lang);

    let mut form = ContactForm::new();
    form.set_project_type(project_arg.parse()?);
    form.name = name.to_string();
    form.email = email.to_string();
    form.phone = phone.to_string();
    form.field1 = field1.to_string();
    form.field2 = field2.to_string();
    form.details = details.to_string();

    let message = form.build_message(&translator);
    let url = whatsapp_url(&config.contact.whatsapp, &message);

    if link_only {
        println!("{}", url);
        return Ok(());
    }

    println!("--- Message ({}) ---", lang.code());
    println!("{}", message);
    println!();
    println!("--- Deep link ---");
    println!("{}", url);

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Awa Ndiaye".to_string();
        form.email = "awa@example.sn".to_string();
        form.phone = "+221 70 000 00 00".to_string();
        form.field1 = "150 000 000 FCFA".to_string();
        form.field2 = "Almadies".to_string();
        form.details = "Je cherche une villa avec piscine.".to_string();
        form
    }

    #[test]
    fn test_default_project_is_buy() {
        assert_eq!(ContactForm::new().project_type(), ProjectType::Buy);
    }

    #[test]
    fn test_message_round_trip_keeps_labels_values_and_order() {
        let form = filled_form();
        let tr = Translator::new(Lang::Fr);
        let msg = form.build_message(&tr);

        // Every label and every value survives.
        for expected in [
            "Acheter",
            "Nom complet: Awa Ndiaye",
            "Adresse e-mail: awa@example.sn",
            "Téléphone: +221 70 000 00 00",
            "Budget estimé (FCFA): 150 000 000 FCFA",
            "Zone recherchée: Almadies",
            "Je cherche une villa avec piscine.",
        ] {
            assert!(msg.contains(expected), "missing '{}' in:\n{}", expected, msg);
        }

        // And in the fixed order.
        let positions: Vec<usize> = [
            "Acheter",
            "Nom complet",
            "Adresse e-mail",
            "Téléphone",
            "Budget estimé",
            "Zone recherchée",
            "Je cherche",
        ]
        .iter()
        .map(|needle| msg.find(needle).unwrap())
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_message_labels_follow_active_language() {
        let form = filled_form();
        let tr = Translator::new(Lang::En);
        let msg = form.build_message(&tr);
        assert!(msg.contains("Full name: Awa Ndiaye"));
        assert!(msg.contains("Estimated budget (FCFA): 150 000 000 FCFA"));
    }

    #[test]
    fn test_switching_project_clears_specific_fields_only() {
        let mut form = filled_form();
        form.set_project_type(ProjectType::Sell);

        assert_eq!(form.field1, "");
        assert_eq!(form.field2, "");
        assert_eq!(form.name, "Awa Ndiaye");
        assert_eq!(form.email, "awa@example.sn");
        assert_eq!(form.phone, "+221 70 000 00 00");
        assert_eq!(form.details, "Je cherche une villa avec piscine.");
    }

    #[test]
    fn test_reselecting_same_project_keeps_fields() {
        let mut form = filled_form();
        form.set_project_type(ProjectType::Buy);
        assert_eq!(form.field1, "150 000 000 FCFA");
        assert_eq!(form.field2, "Almadies");
    }

    #[test]
    fn test_each_project_has_distinct_field_labels() {
        let tr = Translator::new(Lang::Fr);
        let mut labels = Vec::new();
        for project in ProjectType::ALL {
            labels.push(tr.t(project.field1_key()));
            labels.push(tr.t(project.field2_key()));
        }
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_missing_required_reports_empty_fields() {
        let mut form = ContactForm::new();
        form.name = "Awa".to_string();
        let missing = form.missing_required();
        assert!(!missing.contains(&"contact.form.name"));
        assert!(missing.contains(&"contact.form.email"));
        assert!(missing.contains(&"contact.fields.buy.field1"));
        assert!(missing.contains(&"contact.form.message"));

        assert!(filled_form().missing_required().is_empty());
    }

    #[test]
    fn test_whatsapp_url_percent_encodes_message() {
        let url = whatsapp_url("221774308344", "Bonjour, je suis intéressé.\nMerci");
        assert!(url.starts_with("https://wa.me/221774308344?text="));
        let query = url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("%20"));
        assert!(query.contains("%0A"));
    }

    #[test]
    fn test_property_inquiry_embeds_title_and_price() {
        let config = Config::default();
        let tr = Translator::new(Lang::Fr);
        let record = &catalog::catalog()[6];
        let url = property_inquiry(record, &tr, &config);
        assert!(url.starts_with("https://wa.me/221774308344?text="));
        assert!(url.contains(&urlencoding::encode("Villa Prestige").into_owned()));
        assert!(url.contains(&urlencoding::encode("2 000 000 FCFA").into_owned()));
    }

    #[test]
    fn test_submission_settling_window() {
        let mut form = filled_form();
        let t0 = Instant::now();

        assert!(!form.is_settling(t0));
        assert!(form.begin_submit(t0));
        assert!(form.is_settling(t0 + Duration::from_millis(1000)));
        assert!(form.is_settling(t0 + Duration::from_millis(2499)));
        assert!(!form.is_settling(t0 + SUBMIT_SETTLE));
    }

    #[test]
    fn test_duplicate_submit_is_suppressed_while_settling() {
        let mut form = filled_form();
        let t0 = Instant::now();

        assert!(form.begin_submit(t0));
        assert!(!form.begin_submit(t0 + Duration::from_millis(500)));
        // Once settled, a new submission is allowed again.
        assert!(form.begin_submit(t0 + SUBMIT_SETTLE));
    }

    #[test]
    fn test_project_type_parsing() {
        assert_eq!("buy".parse::<ProjectType>().unwrap(), ProjectType::Buy);
        assert_eq!("SELL".parse::<ProjectType>().unwrap(), ProjectType::Sell);
        assert!("rent".parse::<ProjectType>().is_err());
    }
}
