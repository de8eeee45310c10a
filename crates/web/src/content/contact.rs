// =============================================================================
// Campana Web - Contact Request
// =============================================================================
// There is no backend: a valid form opens the visitor's mail client with a
// prefilled message.
// =============================================================================

use crate::utils::is_valid_email;

pub const CONTACT_EMAIL: &str = "hello@campana.io";

/// Who is asking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactKind {
    #[default]
    Agency,
    Business,
}

impl ContactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactKind::Agency => "agency",
            ContactKind::Business => "business",
        }
    }
}

/// Reasons a form cannot be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactProblem {
    MissingName,
    InvalidEmail,
}

impl ContactProblem {
    /// Translation key of the inline message.
    pub fn message_key(self) -> &'static str {
        match self {
            ContactProblem::MissingName => "contact.errorName",
            ContactProblem::InvalidEmail => "contact.errorEmail",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub kind: ContactKind,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ContactProblem> {
        if self.name.trim().is_empty() {
            return Err(ContactProblem::MissingName);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactProblem::InvalidEmail);
        }
        Ok(())
    }

    /// `mailto:` link carrying the request.
    pub fn mailto(&self) -> String {
        let subject = format!("Campana: {} ({})", self.name.trim(), self.kind.as_str());
        let mut body = format!("{}\n{}\n", self.name.trim(), self.email.trim());
        if !self.company.trim().is_empty() {
            body.push_str(self.company.trim());
            body.push('\n');
        }
        body.push('\n');
        body.push_str(self.message.trim());

        format!(
            "mailto:{}?subject={}&body={}",
            CONTACT_EMAIL,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Magda".into(),
            email: "magda@agency.pl".into(),
            company: "Agency".into(),
            kind: ContactKind::Agency,
            message: "Hi & welcome".into(),
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(request().validate(), Ok(()));
        let blank = ContactRequest { name: "  ".into(), ..request() };
        assert_eq!(blank.validate(), Err(ContactProblem::MissingName));
        let bad = ContactRequest { email: "magda@".into(), ..request() };
        assert_eq!(bad.validate(), Err(ContactProblem::InvalidEmail));
    }

    #[test]
    fn test_mailto_is_encoded() {
        let link = request().mailto();
        assert!(link.starts_with("mailto:hello@campana.io?subject=Campana%3A%20Magda%20%28agency%29&body="));
        assert!(link.contains("Hi%20%26%20welcome"));
        assert!(link.contains("Agency%0A"));
        assert!(!link.contains(' '));
    }
}
