// =============================================================================
// Campana Web - Localized Routing
// =============================================================================
// Every path is locale-prefixed (`/en/...`, `/pl/...`). Page segments are
// translated per locale; blog slugs are shared.
// =============================================================================

use crate::error::SiteError;
use crate::i18n::Locale;

/// A page of the site, independent of locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    HowItWorks,
    Technology,
    Pricing,
    ForAgencies,
    ForBusinesses,
    Security,
    Faq,
    Blog,
    BlogPost(String),
    About,
    Contact,
    Privacy,
    Terms,
}

/// `(page, en segment, pl segment)` for every page with a fixed path.
const SEGMENTS: [(Page, &str, &str); 13] = [
    (Page::Home, "", ""),
    (Page::HowItWorks, "how-it-works", "jak-to-dziala"),
    (Page::Technology, "technology", "technologia"),
    (Page::Pricing, "pricing", "cennik"),
    (Page::ForAgencies, "for-agencies", "dla-agencji"),
    (Page::ForBusinesses, "for-businesses", "dla-firm"),
    (Page::Security, "security", "bezpieczenstwo"),
    (Page::Faq, "faq", "faq"),
    (Page::Blog, "blog", "blog"),
    (Page::About, "about", "o-nas"),
    (Page::Contact, "contact", "kontakt"),
    (Page::Privacy, "privacy", "prywatnosc"),
    (Page::Terms, "terms", "regulamin"),
];

impl Page {
    /// Pages with a fixed path (everything except blog posts).
    pub const STATIC: [Page; 13] = [
        Page::Home,
        Page::HowItWorks,
        Page::Technology,
        Page::Pricing,
        Page::ForAgencies,
        Page::ForBusinesses,
        Page::Security,
        Page::Faq,
        Page::Blog,
        Page::About,
        Page::Contact,
        Page::Privacy,
        Page::Terms,
    ];

    /// Translation namespace holding this page's copy.
    pub fn namespace(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::HowItWorks => "howItWorks",
            Page::Technology => "technology",
            Page::Pricing => "pricing",
            Page::ForAgencies => "forAgencies",
            Page::ForBusinesses => "forBusinesses",
            Page::Security => "security",
            Page::Faq => "faq",
            Page::Blog => "blog",
            Page::BlogPost(_) => "blogPost",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Privacy => "privacy",
            Page::Terms => "terms",
        }
    }

    /// Path below the locale prefix, without a leading slash.
    pub fn segment(&self, locale: Locale) -> String {
        if let Page::BlogPost(slug) = self {
            return format!("blog/{slug}");
        }
        SEGMENTS
            .iter()
            .find(|(page, _, _)| page == self)
            .map(|(_, en, pl)| match locale {
                Locale::En => en.to_string(),
                Locale::Pl => pl.to_string(),
            })
            .unwrap_or_default()
    }

    fn from_segment(locale: Locale, segment: &str) -> Option<Page> {
        SEGMENTS.iter().find_map(|(page, en, pl)| {
            let localized = match locale {
                Locale::En => *en,
                Locale::Pl => *pl,
            };
            (!localized.is_empty() && localized == segment).then(|| page.clone())
        })
    }
}

/// A page in a particular locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    pub locale: Locale,
    pub page: Page,
}

impl Route {
    pub fn new(locale: Locale, page: Page) -> Self {
        Self { locale, page }
    }

    pub fn home(locale: Locale) -> Self {
        Self::new(locale, Page::Home)
    }

    /// Site-relative path, e.g. `/pl/cennik`.
    pub fn path(&self) -> String {
        let segment = self.page.segment(self.locale);
        if segment.is_empty() {
            format!("/{}", self.locale.code())
        } else {
            format!("/{}/{}", self.locale.code(), segment)
        }
    }

    /// Same page, other locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self::new(locale, self.page.clone())
    }
}

/// Localized path for a page.
pub fn href(locale: Locale, page: Page) -> String {
    Route::new(locale, page).path()
}

/// Resolve a browser pathname to a route.
pub fn resolve(pathname: &str) -> Result<Route, SiteError> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

    let Some((first, rest)) = segments.split_first() else {
        return Err(SiteError::UnknownLocale(String::new()));
    };
    let locale =
        Locale::from_code(first).ok_or_else(|| SiteError::UnknownLocale(first.to_string()))?;

    let page = match rest {
        [] => Some(Page::Home),
        [segment] => Page::from_segment(locale, segment),
        ["blog", slug] if is_valid_slug(slug) => Some(Page::BlogPost(slug.to_string())),
        _ => None,
    };

    page.map(|page| Route::new(locale, page))
        .ok_or_else(|| SiteError::UnknownRoute(pathname.to_string()))
}

/// Equivalent path in another locale; unknown paths land on that locale's home.
pub fn switch_locale(pathname: &str, target: Locale) -> String {
    resolve(pathname)
        .map(|route| route.with_locale(target))
        .unwrap_or_else(|_| Route::home(target))
        .path()
}

/// Lowercase ASCII letters, digits and single inner hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_static_page_round_trips_in_both_locales() {
        for locale in Locale::ALL {
            for page in Page::STATIC {
                let route = Route::new(locale, page);
                assert_eq!(resolve(&route.path()), Ok(route.clone()), "{}", route.path());
            }
        }
    }

    #[test]
    fn test_localized_paths() {
        assert_eq!(href(Locale::En, Page::Pricing), "/en/pricing");
        assert_eq!(href(Locale::Pl, Page::Pricing), "/pl/cennik");
        assert_eq!(href(Locale::Pl, Page::About), "/pl/o-nas");
        assert_eq!(href(Locale::Pl, Page::Home), "/pl");
        assert_eq!(href(Locale::En, Page::Faq), "/en/faq");
        assert_eq!(
            href(Locale::Pl, Page::BlogPost("thompson-sampling-explained".into())),
            "/pl/blog/thompson-sampling-explained"
        );
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(resolve("/pl/cennik/"), Ok(Route::new(Locale::Pl, Page::Pricing)));
        assert_eq!(resolve("/en/"), Ok(Route::home(Locale::En)));
    }

    #[test]
    fn test_unknown_locale_is_not_found() {
        let err = resolve("/de/pricing").unwrap_err();
        assert_eq!(err, SiteError::UnknownLocale("de".into()));
        assert!(err.is_not_found());
        assert!(matches!(resolve("/"), Err(SiteError::UnknownLocale(_))));
    }

    #[test]
    fn test_segment_must_belong_to_locale() {
        assert!(matches!(resolve("/pl/pricing"), Err(SiteError::UnknownRoute(_))));
        assert!(matches!(resolve("/en/cennik"), Err(SiteError::UnknownRoute(_))));
        assert!(matches!(resolve("/en/pricing/extra"), Err(SiteError::UnknownRoute(_))));
    }

    #[test]
    fn test_blog_slugs() {
        assert_eq!(
            resolve("/en/blog/6-layer-guardrail-system"),
            Ok(Route::new(Locale::En, Page::BlogPost("6-layer-guardrail-system".into())))
        );
        assert!(resolve("/en/blog/Bad_Slug").is_err());
        assert!(resolve("/en/blog/-x").is_err());
        assert!(resolve("/en/blog/a/b").is_err());
    }

    #[test]
    fn test_switch_locale_preserves_page() {
        assert_eq!(switch_locale("/en/pricing", Locale::Pl), "/pl/cennik");
        assert_eq!(switch_locale("/pl/jak-to-dziala", Locale::En), "/en/how-it-works");
        assert_eq!(switch_locale("/en/for-businesses", Locale::Pl), "/pl/dla-firm");
        assert_eq!(switch_locale("/en/blog/foo-bar", Locale::Pl), "/pl/blog/foo-bar");
        assert_eq!(switch_locale("/pl", Locale::En), "/en");
        // Same locale is a no-op
        assert_eq!(switch_locale("/pl/kontakt", Locale::Pl), "/pl/kontakt");
    }

    #[test]
    fn test_switch_locale_from_unknown_path_goes_home() {
        assert_eq!(switch_locale("/xx/nothing", Locale::Pl), "/pl");
        assert_eq!(switch_locale("/en/nothing", Locale::En), "/en");
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("managing-50-accounts-with-team-of-4"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("a--b"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("ÄÖ"));
    }
}
