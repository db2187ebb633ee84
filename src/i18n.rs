//! Client-side language switching.
//!
//! Locale tables ship inside the binary as the nested JSON files the agency
//! authored, flattened to dot-path keys at first use. Lookup falls back from
//! the active language to French and then to the key itself, so a missing
//! translation renders as its key instead of breaking the page.

use std::collections::HashMap;
use std::sync::OnceLock;

use anyhow::Result;
use thiserror::Error;

const FR_TABLE: &str = include_str!("../locales/fr.json");
const EN_TABLE: &str = include_str!("../locales/en.json");
const WO_TABLE: &str = include_str!("../locales/wo.json");
const DI_TABLE: &str = include_str!("../locales/di.json");

/// Interface languages. The set is closed; anything else is rejected by
/// [`Lang::from_code`] without touching the active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Fr,
    En,
    Wo,
    Di,
}

impl Lang {
    /// All supported languages, in switcher order.
    pub const ALL: [Lang; 4] = [Lang::Fr, Lang::En, Lang::Wo, Lang::Di];

    /// Fallback for missing keys, and the default interface language.
    pub const FALLBACK: Lang = Lang::Fr;

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Wo => "wo",
            Lang::Di => "di",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Fr => "Français",
            Lang::En => "English",
            Lang::Wo => "Wolof",
            Lang::Di => "Diola",
        }
    }

    pub fn from_code(code: &str) -> Result<Lang, LanguageError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Lang::Fr),
            "en" => Ok(Lang::En),
            "wo" => Ok(Lang::Wo),
            "di" => Ok(Lang::Di),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }

    pub fn supported_codes() -> Vec<&'static str> {
        Lang::ALL.iter().map(Lang::code).collect()
    }

    /// Next language in switcher order, wrapping at the end.
    pub fn next(&self) -> Lang {
        let i = Lang::ALL.iter().position(|l| l == self).unwrap_or(0);
        Lang::ALL[(i + 1) % Lang::ALL.len()]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language code '{0}' (supported: fr, en, wo, di)")]
    Unsupported(String),
}

/// Resolves interface strings for one active language.
///
/// Owned by the root controller and passed by reference to whatever renders;
/// switching the language takes effect on the next lookup.
#[derive(Debug, Clone)]
pub struct Translator {
    active: Lang,
}

impl Translator {
    pub fn new(active: Lang) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Lang {
        self.active
    }

    pub fn set_active(&mut self, lang: Lang) {
        self.active = lang;
    }

    /// Switches the active language. Unsupported codes leave the current
    /// selection untouched.
    #[allow(dead_code)]
    pub fn set_language(&mut self, code: &str) -> Result<(), LanguageError> {
        self.active = Lang::from_code(code)?;
        Ok(())
    }

    /// Looks up `key`, falling back to French and then to the key itself.
    pub fn t(&self, key: &str) -> String {
        lookup(self.active, key)
            .or_else(|| lookup(Lang::FALLBACK, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`Translator::t`], substituting `{name}` placeholders from `args`.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    tables().get(&lang).and_then(|t| t.get(key)).map(String::as_str)
}

fn tables() -> &'static HashMap<Lang, HashMap<String, String>> {
    static TABLES: OnceLock<HashMap<Lang, HashMap<String, String>>> = OnceLock::new();
    TABLES.get_or_init(|| {
        Lang::ALL
            .iter()
            .map(|lang| (*lang, flatten_table(raw_table(*lang))))
            .collect()
    })
}

fn raw_table(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => FR_TABLE,
        Lang::En => EN_TABLE,
        Lang::Wo => WO_TABLE,
        Lang::Di => DI_TABLE,
    }
}

fn flatten_table(raw: &str) -> HashMap<String, String> {
    let root: serde_json::Value =
        serde_json::from_str(raw).expect("embedded locale tables are valid JSON");
    let mut flat = HashMap::new();
    flatten_into("", &root, &mut flat);
    flat
}

fn flatten_into(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_into(&key, v, out);
            }
        }
        serde_json::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

/// Number of translated keys per language, measured against French.
pub fn coverage(lang: Lang) -> (usize, usize) {
    let reference = tables().get(&Lang::FALLBACK).map(HashMap::len).unwrap_or(0);
    let translated = tables().get(&lang).map(HashMap::len).unwrap_or(0);
    (translated, reference)
}

/// CLI entry point for `vitrine langs`.
pub fn run_langs(default_lang: Lang) -> Result<()> {
    println!("{:<6} {:<10} {:>6}  {:<10} DEFAULT", "CODE", "NAME", "KEYS", "COVERAGE");
    for lang in Lang::ALL {
        let (translated, reference) = coverage(lang);
        let pct = if reference == 0 {
            0
        } else {
            translated * 100 / reference
        };
        println!(
            "{:<6} {:<10} {:>6}  {:<10} {}",
            lang.code(),
            lang.native_name(),
            translated,
            format!("{}%", pct),
            lang == default_lang
        );
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_supported_languages() {
        assert_eq!(Lang::from_code("fr").unwrap(), Lang::Fr);
        assert_eq!(Lang::from_code("EN").unwrap(), Lang::En);
        assert_eq!(Lang::from_code(" wo ").unwrap(), Lang::Wo);
        assert_eq!(Lang::from_code("di").unwrap(), Lang::Di);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        let err = Lang::from_code("es").unwrap_err();
        assert_eq!(err, LanguageError::Unsupported("es".to_string()));
    }

    #[test]
    fn test_set_language_keeps_state_on_unknown_code() {
        let mut tr = Translator::new(Lang::En);
        assert!(tr.set_language("xx").is_err());
        assert_eq!(tr.active(), Lang::En);
        tr.set_language("wo").unwrap();
        assert_eq!(tr.active(), Lang::Wo);
    }

    #[test]
    fn test_lookup_uses_active_language() {
        let tr = Translator::new(Lang::En);
        assert_eq!(tr.t("navbar.menu.home"), "Home");
    }

    #[test]
    fn test_lookup_falls_back_to_french() {
        // Diola only covers part of the interface; untranslated keys must
        // resolve to the French copy, not to the key.
        let tr = Translator::new(Lang::Di);
        let fr = Translator::new(Lang::Fr);
        let key = "about.positioning.p1";
        assert_eq!(tr.t(key), fr.t(key));
        assert_ne!(tr.t(key), key);
    }

    #[test]
    fn test_unknown_key_returns_key_verbatim() {
        let tr = Translator::new(Lang::Fr);
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_interpolation_replaces_placeholders() {
        let tr = Translator::new(Lang::Fr);
        let msg = tr.t_with(
            "propertyDetail.whatsappMessage",
            &[("title", "Villa Prestige"), ("price", "2 000 000 FCFA")],
        );
        assert!(msg.contains("Villa Prestige"));
        assert!(msg.contains("2 000 000 FCFA"));
        assert!(!msg.contains("{title}"));
        assert!(!msg.contains("{price}"));
    }

    #[test]
    fn test_every_language_parses_and_has_keys() {
        for lang in Lang::ALL {
            let (translated, reference) = coverage(lang);
            assert!(translated > 0, "{} table is empty", lang.code());
            assert!(reference > 0);
        }
    }

    #[test]
    fn test_french_and_english_have_identical_key_sets() {
        let fr = tables().get(&Lang::Fr).unwrap();
        let en = tables().get(&Lang::En).unwrap();
        let mut missing: Vec<&str> = fr
            .keys()
            .filter(|k| !en.contains_key(*k))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        assert!(missing.is_empty(), "keys missing from en: {:?}", missing);
    }

    #[test]
    fn test_lang_next_cycles_through_all() {
        let mut lang = Lang::Fr;
        for _ in 0..Lang::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Lang::Fr);
    }
}
