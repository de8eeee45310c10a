// =============================================================================
// Campana Web - Error Types
// =============================================================================

use thiserror::Error;

/// Errors surfaced while resolving routes, loading copy or touching storage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("No page at {0}")]
    UnknownRoute(String),

    #[error("Translation bundle '{locale}' is invalid: {message}")]
    Bundle { locale: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SiteError {
    /// Whether this error should render the not-found page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::UnknownLocale(_) | SiteError::UnknownRoute(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_routing_errors_are_not_found() {
        assert!(SiteError::UnknownLocale("de".into()).is_not_found());
        assert!(SiteError::UnknownRoute("/en/nope".into()).is_not_found());
        assert!(!SiteError::Storage("blocked".into()).is_not_found());
        let bundle = SiteError::Bundle { locale: "pl".into(), message: "eof".into() };
        assert!(!bundle.is_not_found());
    }
}
