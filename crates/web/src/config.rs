// =============================================================================
// Campana Web - Site Configuration
// =============================================================================
// Values are baked in at build time:
//   CAMPANA_ENV       development | staging | production (default)
//   CAMPANA_SITE_URL  absolute origin used for canonical/OG links
// =============================================================================

/// Production origin used when `CAMPANA_SITE_URL` is not set.
pub const DEFAULT_SITE_URL: &str = "https://campana.io";

/// Deployment environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    /// Parse the `CAMPANA_ENV` value; anything unrecognized is production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "staging" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// Static configuration shared by every page.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub base_url: String,
    pub site_name: String,
    pub environment: Environment,
}

impl SiteConfig {
    /// Build the configuration from compile-time environment variables.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("CAMPANA_SITE_URL").unwrap_or(DEFAULT_SITE_URL),
            Environment::parse(option_env!("CAMPANA_ENV").unwrap_or("production")),
        )
    }

    pub fn new(base_url: &str, environment: Environment) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            site_name: "Campana".to_string(),
            environment,
        }
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Console log level for this environment.
    pub fn log_level(&self) -> log::Level {
        if self.is_development() {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL, Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" DEV "), Environment::Development);
        assert_eq!(Environment::parse("staging"), Environment::Staging);
        assert_eq!(Environment::parse("whatever"), Environment::Production);
    }

    #[test]
    fn test_absolute_urls() {
        let config = SiteConfig::new("https://example.com/", Environment::Staging);
        assert_eq!(config.absolute("/en/pricing"), "https://example.com/en/pricing");
        assert_eq!(config.absolute("pl"), "https://example.com/pl");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(SiteConfig::new(DEFAULT_SITE_URL, Environment::Development).log_level(), log::Level::Debug);
        assert_eq!(SiteConfig::default().log_level(), log::Level::Info);
    }
}
