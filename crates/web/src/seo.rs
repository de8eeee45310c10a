// =============================================================================
// Campana Web - SEO Metadata
// =============================================================================
// Table of Contents:
// 1. Page Metadata (title, description, canonical, hreflang, OG, Twitter)
// 2. Structured Data (schema.org JSON-LD)
// =============================================================================

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::content::blog;
use crate::content::faq::FaqItem;
use crate::content::pricing::{CURRENCY, OFFERS};
use crate::i18n::{Locale, Translator};
use crate::routing::{Page, Route};

// -----------------------------------------------------------------------------
// 1. Page Metadata
// -----------------------------------------------------------------------------

/// `<link rel="alternate" hreflang=...>` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

/// Everything rendered into `<head>` for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub site_name: String,
    pub og_type: &'static str,
    pub og_locale: &'static str,
    pub twitter_card: &'static str,
}

/// Metadata for a resolved route.
pub fn page_meta(config: &SiteConfig, route: &Route, t: &Translator) -> PageMeta {
    let namespace = route.page.namespace();
    let (title, og_type) = match &route.page {
        Page::BlogPost(slug) => (
            format!("{} | {}", blog::headline(slug, route.locale), config.site_name),
            "article",
        ),
        _ => (t.t(&format!("{namespace}.meta.title")), "website"),
    };

    PageMeta {
        lang: route.locale.code(),
        title,
        description: t.t(&format!("{namespace}.meta.description")),
        canonical: config.absolute(&route.path()),
        alternates: alternates(config, route),
        site_name: config.site_name.clone(),
        og_type,
        og_locale: route.locale.og_locale(),
        twitter_card: "summary_large_image",
    }
}

/// One alternate per locale plus `x-default` pointing at English.
fn alternates(config: &SiteConfig, route: &Route) -> Vec<Alternate> {
    let mut links: Vec<Alternate> = Locale::ALL
        .iter()
        .map(|locale| Alternate {
            hreflang: locale.code().to_string(),
            href: config.absolute(&route.with_locale(*locale).path()),
        })
        .collect();
    links.push(Alternate {
        hreflang: "x-default".to_string(),
        href: config.absolute(&route.with_locale(Locale::default()).path()),
    });
    links
}

/// Metadata for the not-found page; never indexed, no alternates.
pub fn not_found_meta(config: &SiteConfig, t: &Translator) -> PageMeta {
    PageMeta {
        lang: t.locale().code(),
        title: t.t("notFound.meta.title"),
        description: t.t("notFound.meta.description"),
        canonical: String::new(),
        alternates: Vec::new(),
        site_name: config.site_name.clone(),
        og_type: "website",
        og_locale: t.locale().og_locale(),
        twitter_card: "summary",
    }
}

// -----------------------------------------------------------------------------
// 2. Structured Data
// -----------------------------------------------------------------------------

/// `Article` entity for a blog post.
pub fn article_json_ld(config: &SiteConfig, headline: &str, published: NaiveDate) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": headline,
        "datePublished": published.format("%Y-%m-%d").to_string(),
        "author": {
            "@type": "Organization",
            "name": config.site_name,
        },
    })
}

/// `FAQPage` entity listing every question.
pub fn faq_json_ld(items: &[FaqItem]) -> Value {
    let questions: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.q,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.a,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// `Product` entity with the self-serve offers.
pub fn product_json_ld(config: &SiteConfig, description: &str) -> Value {
    let offers: Vec<Value> = OFFERS
        .iter()
        .map(|offer| {
            json!({
                "@type": "Offer",
                "name": offer.name,
                "price": offer.monthly_price.to_string(),
                "priceCurrency": CURRENCY,
                "availability": "https://schema.org/InStock",
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": config.site_name,
        "description": description,
        "offers": offers,
    })
}

/// Serialize for an inline `<script type="application/ld+json">`.
pub fn script_body(value: &Value) -> String {
    // `</` would close the script element early
    value.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    fn setup() -> (SiteConfig, Catalog) {
        (SiteConfig::default(), Catalog::embedded().unwrap())
    }

    #[test]
    fn test_page_meta_links() {
        let (config, catalog) = setup();
        let route = Route::new(Locale::Pl, Page::Security);
        let meta = page_meta(&config, &route, &catalog.translator(Locale::Pl));

        assert_eq!(meta.lang, "pl");
        assert_eq!(meta.canonical, "https://campana.io/pl/bezpieczenstwo");
        assert_eq!(meta.og_locale, "pl_PL");
        assert_eq!(meta.og_type, "website");
        assert_eq!(
            meta.alternates,
            vec![
                Alternate { hreflang: "en".into(), href: "https://campana.io/en/security".into() },
                Alternate { hreflang: "pl".into(), href: "https://campana.io/pl/bezpieczenstwo".into() },
                Alternate { hreflang: "x-default".into(), href: "https://campana.io/en/security".into() },
            ]
        );
    }

    #[test]
    fn test_page_meta_uses_translated_copy() {
        let (config, catalog) = setup();
        let t = catalog.translator(Locale::En);
        let meta = page_meta(&config, &Route::home(Locale::En), &t);
        assert_eq!(meta.title, t.t("home.meta.title"));
        assert_eq!(meta.description, t.t("home.meta.description"));
        assert_eq!(meta.canonical, "https://campana.io/en");
        assert_eq!(meta.twitter_card, "summary_large_image");
    }

    #[test]
    fn test_blog_post_meta_is_an_article() {
        let (config, catalog) = setup();
        let route = Route::new(Locale::En, Page::BlogPost("fresh-news".into()));
        let meta = page_meta(&config, &route, &catalog.translator(Locale::En));
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.title, "Fresh News | Campana");
        assert_eq!(meta.alternates[1].href, "https://campana.io/pl/blog/fresh-news");
    }

    #[test]
    fn test_article_json_ld() {
        let value = article_json_ld(&SiteConfig::default(), "Fresh News", blog::published_on());
        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], "Fresh News");
        assert_eq!(value["datePublished"], "2026-02-28");
        assert_eq!(value["author"]["name"], "Campana");
    }

    #[test]
    fn test_faq_json_ld_lists_every_question() {
        let items = vec![
            FaqItem { category: "general".into(), q: "Q1".into(), a: "A1".into() },
            FaqItem { category: "pricing".into(), q: "Q2".into(), a: "A2".into() },
        ];
        let value = faq_json_ld(&items);
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["mainEntity"][1]["acceptedAnswer"]["text"], "A2");
    }

    #[test]
    fn test_product_json_ld_offers() {
        let value = product_json_ld(&SiteConfig::default(), "AI Marketing Command Center");
        assert_eq!(value["@type"], "Product");
        let offers = value["offers"].as_array().unwrap();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0]["price"], "299");
        assert_eq!(offers[2]["name"], "Growth");
        assert!(offers.iter().all(|o| o["priceCurrency"] == "PLN"));
    }

    #[test]
    fn test_script_body_escapes_closing_tags() {
        let value = json!({ "text": "</script><b>" });
        assert_eq!(script_body(&value), r#"{"text":"<\/script><b>"}"#);
    }
}
