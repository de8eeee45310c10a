// =============================================================================
// Campana Web - Pricing Content
// =============================================================================

use serde::Deserialize;

/// Currency used for every price on the site.
pub const CURRENCY: &str = "PLN";

/// A plan card, read from the `pricing.tiers` bundle entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub founding_price: Option<String>,
    pub usd: String,
    pub best: String,
    pub accounts: String,
    pub seats: String,
    pub support: String,
    #[serde(default)]
    pub popular: bool,
    /// Sales-led plan: CTA goes to sales instead of the trial.
    #[serde(default)]
    pub contact: bool,
}

/// A self-serve plan published as a schema.org `Offer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offer {
    pub name: &'static str,
    pub monthly_price: u32,
}

pub const OFFERS: [Offer; 3] = [
    Offer { name: "Solo", monthly_price: 299 },
    Offer { name: "Starter", monthly_price: 699 },
    Offer { name: "Growth", monthly_price: 1499 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};

    #[test]
    fn test_bundled_tiers() {
        let catalog = Catalog::embedded().unwrap();
        for locale in Locale::ALL {
            let tiers: Vec<PricingTier> = catalog.translator(locale).raw("pricing.tiers");
            assert_eq!(tiers.len(), 4);
            assert_eq!(tiers.iter().filter(|t| t.popular).count(), 1);
            // Only the sales-led tier has no founding price
            for tier in &tiers {
                assert_eq!(tier.contact, tier.founding_price.is_none(), "{}", tier.id);
            }
        }
    }
}
