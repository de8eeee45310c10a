// =============================================================================
// Campana Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Format Utilities
// 3. Validation Utilities
// =============================================================================

use web_sys::{Storage, Window};

use crate::error::SiteError;
use crate::i18n::Locale;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object, if running in a browser.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Browser local storage; blocked storage (cookies disabled, some private
/// modes) is an error instead of a thrown exception.
pub fn local_storage() -> Result<Storage, SiteError> {
    let window = window().ok_or_else(|| SiteError::Storage("no window".to_string()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(SiteError::Storage("local storage unavailable".to_string())),
        Err(e) => Err(SiteError::Storage(format!("local storage blocked: {e:?}"))),
    }
}

/// Navigate to a URL (full page load, or hand-off for `mailto:` links).
pub fn navigate_to(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(url) {
            log::warn!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

/// Set `<html lang>` for the active locale.
pub fn set_document_lang(lang: &str) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("lang", lang) {
        log::warn!("Could not set document language: {:?}", e);
    }
}

// -----------------------------------------------------------------------------
// 2. Format Utilities
// -----------------------------------------------------------------------------

const NO_BREAK_SPACE: char = '\u{a0}';

/// Integer with the locale's digit grouping.
///
/// English groups with `,` from four digits; Polish groups with a no-break
/// space and leaves four-digit numbers ungrouped.
pub fn format_thousands(value: i64, locale: Locale) -> String {
    let digits = value.unsigned_abs().to_string();
    let (separator, min_digits) = match locale {
        Locale::En => (',', 4),
        Locale::Pl => (NO_BREAK_SPACE, 5),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    if digits.len() < min_digits {
        out.push_str(&digits);
        return out;
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Amount in the site currency, e.g. `3,475 PLN`.
pub fn format_amount(value: i64, locale: Locale) -> String {
    format!("{} {}", format_thousands(value, locale), crate::content::pricing::CURRENCY)
}

/// Grouped integer with an explicit sign for non-negative values, e.g. `+3,475`.
pub fn format_signed(value: i64, locale: Locale) -> String {
    if value >= 0 {
        format!("+{}", format_thousands(value, locale))
    } else {
        format_thousands(value, locale)
    }
}

// -----------------------------------------------------------------------------
// 3. Validation Utilities
// -----------------------------------------------------------------------------

/// Validate an email address (basic check).
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands_en() {
        assert_eq!(format_thousands(0, Locale::En), "0");
        assert_eq!(format_thousands(999, Locale::En), "999");
        assert_eq!(format_thousands(4000, Locale::En), "4,000");
        assert_eq!(format_thousands(1_234_567, Locale::En), "1,234,567");
        assert_eq!(format_thousands(-1_500, Locale::En), "-1,500");
    }

    #[test]
    fn test_format_thousands_pl() {
        assert_eq!(format_thousands(4000, Locale::Pl), "4000");
        assert_eq!(format_thousands(15_000, Locale::Pl), "15\u{a0}000");
        assert_eq!(format_thousands(1_234_567, Locale::Pl), "1\u{a0}234\u{a0}567");
        assert_eq!(format_thousands(-127, Locale::Pl), "-127");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3475, Locale::En), "3,475 PLN");
        assert_eq!(format_amount(750, Locale::Pl), "750 PLN");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(3475, Locale::En), "+3,475");
        assert_eq!(format_signed(0, Locale::En), "+0");
        assert_eq!(format_signed(-127, Locale::En), "-127");
        assert_eq!(format_signed(12_000, Locale::Pl), "+12\u{a0}000");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("hello@campana.io"));
        assert!(is_valid_email("a.b+c@mail.example.pl"));
        assert!(!is_valid_email("hello"));
        assert!(!is_valid_email("@campana.io"));
        assert!(!is_valid_email("hello@campana"));
        assert!(!is_valid_email("hello@.io"));
        assert!(!is_valid_email("a@b@c.io"));
        assert!(!is_valid_email("hel lo@campana.io"));
    }
}
