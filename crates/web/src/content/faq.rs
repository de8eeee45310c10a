// =============================================================================
// Campana Web - FAQ Content
// =============================================================================

use serde::Deserialize;

/// Filter tabs on the FAQ page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaqCategory {
    #[default]
    General,
    HowItWorks,
    Pricing,
    Safety,
    Technical,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 5] = [
        FaqCategory::General,
        FaqCategory::HowItWorks,
        FaqCategory::Pricing,
        FaqCategory::Safety,
        FaqCategory::Technical,
    ];

    /// Value of the `category` field on matching items.
    pub fn key(self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::HowItWorks => "howItWorks",
            FaqCategory::Pricing => "pricing",
            FaqCategory::Safety => "safety",
            FaqCategory::Technical => "technical",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Translation key of the tab label.
    pub fn label_key(self) -> &'static str {
        match self {
            FaqCategory::General => "faq.general",
            FaqCategory::HowItWorks => "faq.howItWorksCategory",
            FaqCategory::Pricing => "faq.pricingCategory",
            FaqCategory::Safety => "faq.safetyCategory",
            FaqCategory::Technical => "faq.technicalCategory",
        }
    }
}

/// One question as stored in the `faq.questions` bundle entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FaqItem {
    pub category: String,
    pub q: String,
    pub a: String,
}

impl FaqItem {
    pub fn category(&self) -> Option<FaqCategory> {
        FaqCategory::from_key(&self.category)
    }
}

/// Items of one category, in bundle order.
pub fn filter_by_category(items: &[FaqItem], category: FaqCategory) -> Vec<FaqItem> {
    items
        .iter()
        .filter(|item| item.category() == Some(category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};

    fn item(category: &str, q: &str) -> FaqItem {
        FaqItem { category: category.into(), q: q.into(), a: "answer".into() }
    }

    #[test]
    fn test_default_category_is_general() {
        assert_eq!(FaqCategory::default(), FaqCategory::General);
        assert_eq!(FaqCategory::default().key(), "general");
    }

    #[test]
    fn test_filter_keeps_only_matching_items() {
        let items = vec![
            item("general", "a"),
            item("pricing", "b"),
            item("general", "c"),
            item("unknown", "d"),
        ];
        let general = filter_by_category(&items, FaqCategory::General);
        assert_eq!(general.iter().map(|i| i.q.as_str()).collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(filter_by_category(&items, FaqCategory::Pricing).len(), 1);
        assert!(filter_by_category(&items, FaqCategory::Safety).is_empty());
        assert_eq!(items[3].category(), None);
    }

    #[test]
    fn test_keys_round_trip() {
        for category in FaqCategory::ALL {
            assert_eq!(FaqCategory::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_bundled_questions_cover_every_category() {
        let catalog = Catalog::embedded().unwrap();
        for locale in Locale::ALL {
            let t = catalog.translator(locale);
            let items: Vec<FaqItem> = t.raw("faq.questions");
            assert!(items.iter().all(|i| i.category().is_some()));
            for category in FaqCategory::ALL {
                assert!(
                    !filter_by_category(&items, category).is_empty(),
                    "{} has no {} questions",
                    locale.code(),
                    category.key()
                );
            }
        }
    }
}
