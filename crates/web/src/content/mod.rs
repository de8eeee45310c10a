// =============================================================================
// Campana Web - Content Models
// =============================================================================
// Typed views over translated entries plus the few pieces of sample data
// that are not translated (blog posts, schema.org offers).
// =============================================================================

pub mod blog;
pub mod contact;
pub mod faq;
pub mod pricing;

use serde::Deserialize;

/// Title + description card used across several pages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub desc: String,
}

/// Heading with a bullet list (steps, guardrail layers, security sections).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ItemGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// Before/after story on the audience pages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub before: String,
    pub after: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProblemSolution {
    pub problem: String,
    pub solution: String,
}

/// Row of the infrastructure table.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InfraRow {
    pub component: String,
    pub tech: String,
    pub why: String,
}

/// Title + body section of the legal pages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LegalSection {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};

    #[test]
    fn test_structured_entries_deserialize() {
        let catalog = Catalog::embedded().unwrap();
        for locale in Locale::ALL {
            let t = catalog.translator(locale);
            for key in ["howItWorks.steps", "howItWorks.pillars", "technology.layers", "security.sections"] {
                let groups: Vec<ItemGroup> = t.raw(key);
                assert!(!groups.is_empty(), "{} {}", locale.code(), key);
                assert!(groups.iter().all(|g| !g.items.is_empty()));
            }
            for key in ["about.values", "about.approaches", "forAgencies.benefits", "technology.stages"] {
                let cards: Vec<Card> = t.raw(key);
                assert!(!cards.is_empty(), "{} {}", locale.code(), key);
            }
            let scenarios: Vec<Scenario> = t.raw("forAgencies.scenarios");
            assert_eq!(scenarios.len(), 2);
            let rows: Vec<InfraRow> = t.raw("technology.infraItems");
            assert!(!rows.is_empty());
            let legal: Vec<LegalSection> = t.raw("terms.sections");
            assert!(!legal.is_empty());
        }
        assert_eq!(
            catalog.translator(Locale::En).raw::<Vec<ItemGroup>>("technology.layers").len(),
            6
        );
    }
}
