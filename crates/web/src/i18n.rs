// =============================================================================
// Campana Web - Translations
// =============================================================================
// Table of Contents:
// 1. Locale
// 2. Catalog (all bundles)
// 3. Translator (one locale, passed down explicitly)
// 4. Key Structure Checks
// =============================================================================

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SiteError;
use crate::routing::{self, Page};

// -----------------------------------------------------------------------------
// 1. Locale
// -----------------------------------------------------------------------------

/// Supported site locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pl];

    /// URL prefix and `<html lang>` value.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pl => "pl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "pl" => Some(Locale::Pl),
            _ => None,
        }
    }

    /// Open Graph locale tag.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Pl => "pl_PL",
        }
    }

    /// Short switcher label.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pl => "PL",
        }
    }

    /// Language name in its own language.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pl => "Polski",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Catalog
// -----------------------------------------------------------------------------

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const PL_BUNDLE: &str = include_str!("../locales/pl.json");

/// Every locale's string bundle, parsed once at startup and kept for the
/// lifetime of the program.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    en: &'static Value,
    pl: &'static Value,
}

impl Catalog {
    /// Parse the bundles compiled into the binary.
    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_sources(EN_BUNDLE, PL_BUNDLE)
    }

    pub fn from_sources(en: &str, pl: &str) -> Result<Self, SiteError> {
        Ok(Self {
            en: Box::leak(Box::new(parse_bundle(Locale::En, en)?)),
            pl: Box::leak(Box::new(parse_bundle(Locale::Pl, pl)?)),
        })
    }

    pub fn translator(&self, locale: Locale) -> Translator {
        let bundle = match locale {
            Locale::En => self.en,
            Locale::Pl => self.pl,
        };
        Translator { locale, bundle }
    }

    /// Keys present in one locale but absent from another, as `(locale, key)`
    /// where `locale` is the bundle missing the key.
    pub fn missing_keys(&self) -> Vec<(Locale, String)> {
        let en = key_paths(self.en);
        let pl = key_paths(self.pl);
        let mut missing: Vec<(Locale, String)> = en
            .difference(&pl)
            .map(|key| (Locale::Pl, key.clone()))
            .collect();
        missing.extend(pl.difference(&en).map(|key| (Locale::En, key.clone())));
        missing
    }
}

fn parse_bundle(locale: Locale, source: &str) -> Result<Value, SiteError> {
    let value: Value = serde_json::from_str(source).map_err(|e| SiteError::Bundle {
        locale: locale.code().to_string(),
        message: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(SiteError::Bundle {
            locale: locale.code().to_string(),
            message: "top level must be an object".to_string(),
        });
    }
    Ok(value)
}

// -----------------------------------------------------------------------------
// 3. Translator
// -----------------------------------------------------------------------------

/// One locale's strings. `Copy`, so views and child closures can each hold one.
#[derive(Clone, Copy, Debug)]
pub struct Translator {
    locale: Locale,
    bundle: &'static Value,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale && std::ptr::eq(self.bundle, other.bundle)
    }
}

impl Translator {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a dotted key such as `pricing.meta.title`.
    pub fn lookup(&self, key: &str) -> Option<&'static Value> {
        key.split('.')
            .try_fold(self.bundle, |node, part| node.get(part))
    }

    /// Translated string; a missing key renders as the key itself.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key).and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => {
                log::warn!("Missing translation [{}] {}", self.locale.code(), key);
                key.to_string()
            }
        }
    }

    /// String array entry.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.raw(key)
    }

    /// Structured entry deserialized through serde; missing or malformed
    /// entries log and yield the default.
    pub fn raw<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(value) = self.lookup(key) else {
            log::warn!("Missing translation [{}] {}", self.locale.code(), key);
            return T::default();
        };
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            log::warn!("Malformed translation [{}] {}: {}", self.locale.code(), key, e);
            T::default()
        })
    }

    /// Localized path to a page in this translator's locale.
    pub fn href(&self, page: Page) -> String {
        routing::href(self.locale, page)
    }
}

// -----------------------------------------------------------------------------
// 4. Key Structure Checks
// -----------------------------------------------------------------------------

/// Dotted paths of every object key; arrays count as leaves.
fn key_paths(value: &Value) -> BTreeSet<String> {
    fn walk(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                walk(child, &path, out);
                out.insert(path);
            }
        }
    }

    let mut out = BTreeSet::new();
    walk(value, "", &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn sample() -> Catalog {
        Catalog::from_sources(
            r#"{"nav":{"pricing":"Pricing"},"items":["a","b"],"cards":[{"title":"T","desc":"D"}]}"#,
            r#"{"nav":{"pricing":"Cennik"},"items":["a"],"cards":[]}"#,
        )
        .unwrap()
    }

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Card {
        title: String,
        desc: String,
    }

    #[test]
    fn test_locale_codes() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_lookup_and_fallback() {
        let catalog = sample();
        assert_eq!(catalog.translator(Locale::En).t("nav.pricing"), "Pricing");
        assert_eq!(catalog.translator(Locale::Pl).t("nav.pricing"), "Cennik");
        assert_eq!(catalog.translator(Locale::En).t("nav.missing"), "nav.missing");
        // Non-string leaves are not rendered as text
        assert_eq!(catalog.translator(Locale::En).t("items"), "items");
    }

    #[test]
    fn test_translator_is_copy() {
        let catalog = sample();
        let t = catalog.translator(Locale::Pl);
        // Handing the translator to one owner leaves the original usable
        let moved = move || t.t("nav.pricing");
        assert_eq!(moved(), "Cennik");
        assert_eq!(t.t("nav.pricing"), "Cennik");
        assert_eq!(t, catalog.translator(Locale::Pl));
        assert_ne!(t, catalog.translator(Locale::En));
    }

    #[test]
    fn test_list_and_raw() {
        let t = sample().translator(Locale::En);
        assert_eq!(t.list("items"), vec!["a".to_string(), "b".to_string()]);
        assert!(t.list("nope").is_empty());
        let cards: Vec<Card> = t.raw("cards");
        assert_eq!(cards, vec![Card { title: "T".into(), desc: "D".into() }]);
        // Wrong shape falls back to default
        let bad: Vec<Card> = t.raw("items");
        assert!(bad.is_empty());
    }

    #[test]
    fn test_invalid_bundle_is_rejected() {
        let err = Catalog::from_sources("{", "{}").unwrap_err();
        assert!(matches!(err, SiteError::Bundle { ref locale, .. } if locale == "en"));
        let err = Catalog::from_sources("{}", "[]").unwrap_err();
        assert!(matches!(err, SiteError::Bundle { ref locale, .. } if locale == "pl"));
    }

    #[test]
    fn test_missing_keys_reports_both_directions() {
        let catalog = Catalog::from_sources(
            r#"{"a":{"x":"1"},"b":"2"}"#,
            r#"{"a":{"y":"1"},"b":"2"}"#,
        )
        .unwrap();
        let missing = catalog.missing_keys();
        assert!(missing.contains(&(Locale::Pl, "a.x".to_string())));
        assert!(missing.contains(&(Locale::En, "a.y".to_string())));
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_embedded_bundles_share_structure() {
        let catalog = Catalog::embedded().expect("embedded bundles parse");
        assert_eq!(catalog.missing_keys(), Vec::<(Locale, String)>::new());
    }

    #[test]
    fn test_every_page_has_meta() {
        let catalog = Catalog::embedded().unwrap();
        for locale in Locale::ALL {
            let t = catalog.translator(locale);
            for page in Page::STATIC {
                for field in ["title", "description"] {
                    let key = format!("{}.meta.{}", page.namespace(), field);
                    assert!(
                        t.lookup(&key).and_then(Value::as_str).is_some(),
                        "{} missing {}",
                        locale.code(),
                        key
                    );
                }
            }
        }
    }
}
