// =============================================================================
// Campana Web - Cookie Consent
// =============================================================================
// The choice is stored as a bare string under `cookie-consent` in local
// storage: "essential" or "all". No recognized value means we must ask.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;
use crate::utils;

/// Local storage key holding the visitor's choice.
pub const CONSENT_KEY: &str = "cookie-consent";

/// What the visitor agreed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Essential,
    All,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Essential => "essential",
            ConsentChoice::All => "all",
        }
    }

}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentChoice {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "essential" => Ok(ConsentChoice::Essential),
            "all" => Ok(ConsentChoice::All),
            other => Err(SiteError::Storage(format!("unrecognized consent value '{other}'"))),
        }
    }
}

/// Where the choice is persisted.
pub trait ConsentStore {
    /// Raw stored value, if any.
    fn read(&self) -> Result<Option<String>, SiteError>;

    fn write(&self, value: &str) -> Result<(), SiteError>;

    /// The recognized stored choice; unreadable or unknown values count as none.
    fn load(&self) -> Option<ConsentChoice> {
        match self.read() {
            Ok(Some(raw)) => match raw.parse() {
                Ok(choice) => Some(choice),
                Err(e) => {
                    log::warn!("Ignoring stored consent: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read consent: {e}");
                None
            }
        }
    }

    fn save(&self, choice: ConsentChoice) -> Result<(), SiteError> {
        self.write(choice.as_str())
    }

    /// Whether the banner should be shown.
    fn needs_prompt(&self) -> bool {
        self.load().is_none()
    }
}

/// Browser `localStorage`, read and written as plain strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConsentStore;

impl ConsentStore for BrowserConsentStore {
    fn read(&self) -> Result<Option<String>, SiteError> {
        utils::local_storage()?
            .get_item(CONSENT_KEY)
            .map_err(|e| SiteError::Storage(format!("{e:?}")))
    }

    fn write(&self, value: &str) -> Result<(), SiteError> {
        utils::local_storage()?
            .set_item(CONSENT_KEY, value)
            .map_err(|e| SiteError::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Stands in for local storage across simulated reloads.
    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl ConsentStore for MemoryStore {
        fn read(&self) -> Result<Option<String>, SiteError> {
            if self.fail_reads {
                return Err(SiteError::Storage("local storage blocked".into()));
            }
            Ok(self.value.borrow().clone())
        }

        fn write(&self, value: &str) -> Result<(), SiteError> {
            if self.fail_writes {
                return Err(SiteError::Storage("quota exceeded".into()));
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_first_visit_prompts() {
        let store = MemoryStore::default();
        assert!(store.needs_prompt());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_either_choice_stops_prompting() {
        for choice in [ConsentChoice::Essential, ConsentChoice::All] {
            let store = MemoryStore::default();
            store.save(choice).unwrap();
            // A "reload" only re-reads storage
            assert!(!store.needs_prompt());
            assert_eq!(store.load(), Some(choice));
            assert_eq!(store.read().unwrap().as_deref(), Some(choice.as_str()));
        }
    }

    #[test]
    fn test_unrecognized_value_prompts_again() {
        let store = MemoryStore {
            value: RefCell::new(Some("\"all\"".into())),
            ..Default::default()
        };
        assert!(store.needs_prompt());
    }

    #[test]
    fn test_failed_write_is_reported() {
        let store = MemoryStore { fail_writes: true, ..Default::default() };
        assert!(matches!(store.save(ConsentChoice::All), Err(SiteError::Storage(_))));
        assert!(store.needs_prompt());
    }

    #[test]
    fn test_blocked_storage_prompts() {
        let store = MemoryStore {
            value: RefCell::new(Some("all".into())),
            fail_reads: true,
            ..Default::default()
        };
        assert_eq!(store.load(), None);
        assert!(store.needs_prompt());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("essential".parse::<ConsentChoice>(), Ok(ConsentChoice::Essential));
        assert_eq!("all".parse::<ConsentChoice>(), Ok(ConsentChoice::All));
        assert!("ALL".parse::<ConsentChoice>().is_err());
        assert_eq!(ConsentChoice::All.to_string(), "all");
    }
}
