// =============================================================================
// Campana Web - Blog Content
// =============================================================================
// Sample posts shown until real articles are published.
// =============================================================================

use chrono::{Datelike, NaiveDate};

use crate::i18n::Locale;

/// A listed article.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title_en: &'static str,
    pub title_pl: &'static str,
    pub category: &'static str,
    pub read_minutes: u32,
}

impl BlogPost {
    pub fn title(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.title_en,
            Locale::Pl => self.title_pl,
        }
    }
}

pub const SAMPLE_POSTS: [BlogPost; 6] = [
    BlogPost {
        slug: "why-smart-bidding-optimizes-for-google",
        title_en: "Why Google's Smart Bidding Optimizes for Google's Revenue, Not Yours",
        title_pl: "Dlaczego Smart Bidding Google optymalizuje przychody Google, nie Twoje",
        category: "Google Ads",
        read_minutes: 8,
    },
    BlogPost {
        slug: "unified-dashboard-beats-switching-tabs",
        title_en: "One Dashboard for All Campaigns: Why Unified Views Beat Switching Tabs",
        title_pl: "Jeden dashboard dla wszystkich kampanii: dlaczego zunifikowany widok wygrywa",
        category: "AI & Technology",
        read_minutes: 6,
    },
    BlogPost {
        slug: "thompson-sampling-explained",
        title_en: "Thompson Sampling Explained: How Bayesian Statistics Beat Rule-Based Bidding",
        title_pl: "Thompson Sampling: Jak statystyka bayesowska wygrywa z regułami licytacji",
        category: "AI & Technology",
        read_minutes: 10,
    },
    BlogPost {
        slug: "managing-50-accounts-with-team-of-4",
        title_en: "Managing 50 Ad Accounts with a Team of 4: An Agency Case Study",
        title_pl: "Zarządzanie 50 kontami w zespole 4 osób: case study agencji",
        category: "Agency Growth",
        read_minutes: 7,
    },
    BlogPost {
        slug: "ai-ad-copywriting-beyond-chatgpt",
        title_en: "AI Ad Copywriting That Actually Converts: Beyond Generic ChatGPT Prompts",
        title_pl: "AI copywriting reklamowy, który konwertuje: poza generyczne prompty ChatGPT",
        category: "AI & Technology",
        read_minutes: 6,
    },
    BlogPost {
        slug: "6-layer-guardrail-system",
        title_en: "The 6-Layer Guardrail System That Prevents AI Ad Optimization Disasters",
        title_pl: "6-warstwowy system zabezpieczeń zapobiegający katastrofom w optymalizacji AI",
        category: "AI & Technology",
        read_minutes: 8,
    },
];

/// Category and read time shown for slugs without a sample post.
pub const FALLBACK_CATEGORY: &str = "AI & Technology";
pub const FALLBACK_READ_MINUTES: u32 = 8;

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    SAMPLE_POSTS.iter().find(|post| post.slug == slug)
}

/// Publication date of the article template.
pub fn published_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 28).unwrap_or_default()
}

/// `foo-bar-baz` -> `Foo Bar Baz`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Headline for a post page: the sample post's title, else the titled slug.
pub fn headline(slug: &str, locale: Locale) -> String {
    find_post(slug)
        .map(|post| post.title(locale).to_string())
        .unwrap_or_else(|| title_from_slug(slug))
}

const PL_MONTHS: [&str; 12] = [
    "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
];

/// `Feb 28, 2026` / `28 lut 2026`.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%b %-d, %Y").to_string(),
        Locale::Pl => format!(
            "{} {} {}",
            date.day(),
            PL_MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::is_valid_slug;

    #[test]
    fn test_sample_slugs_are_routable() {
        for post in SAMPLE_POSTS {
            assert!(is_valid_slug(post.slug), "{}", post.slug);
        }
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("thompson-sampling-explained"), "Thompson Sampling Explained");
        assert_eq!(title_from_slug("6-layer-guardrail-system"), "6 Layer Guardrail System");
        assert_eq!(title_from_slug("single"), "Single");
    }

    #[test]
    fn test_headline_prefers_sample_post() {
        assert_eq!(
            headline("thompson-sampling-explained", Locale::Pl),
            "Thompson Sampling: Jak statystyka bayesowska wygrywa z regułami licytacji"
        );
        assert_eq!(headline("fresh-news", Locale::En), "Fresh News");
    }

    #[test]
    fn test_format_date() {
        let date = published_on();
        assert_eq!(format_date(date, Locale::En), "Feb 28, 2026");
        assert_eq!(format_date(date, Locale::Pl), "28 lut 2026");
    }
}
