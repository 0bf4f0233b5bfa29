use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactReason {
    Hire,
    Build,
    Collaborate,
    Consultation,
    Partnership,
    Other,
}

impl ContactReason {
    pub const ALL: [ContactReason; 6] = [
        Self::Hire,
        Self::Build,
        Self::Collaborate,
        Self::Consultation,
        Self::Partnership,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hire => "Hire me for a project",
            Self::Build => "Build something together",
            Self::Collaborate => "Collaborate on a project",
            Self::Consultation => "Technical consultation",
            Self::Partnership => "Business partnership",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Reason,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Reason => "reason",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(ContactField),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// In-memory contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub reason: Option<ContactReason>,
    pub message: String,
}

impl ContactForm {
    /// Whether every required field has content; gates the submit button.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField(ContactField::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField(ContactField::Email));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ContactError::InvalidEmail(email.to_string())),
        }
        if self.reason.is_none() {
            return Err(ContactError::MissingField(ContactField::Reason));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField(ContactField::Message));
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        let reason = self.reason.map(|r| r.label()).unwrap_or("Contact");
        format!("{} - {}", reason, self.name.trim())
    }

    pub fn body(&self) -> String {
        let reason = self.reason.map(|r| r.label()).unwrap_or_default();
        format!(
            "Name: {}\nEmail: {}\nReason: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            reason,
            self.message
        )
    }

    pub fn mailto_link(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }

    /// Builds the mailto link and clears the form. On error the fields are
    /// left untouched.
    pub fn submit(&mut self, recipient: &str) -> Result<String, ContactError> {
        let link = self.mailto_link(recipient)?;
        log::debug!("contact form submitted: {}", self.subject());
        *self = Self::default();
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            reason: Some(ContactReason::Hire),
            message: "Let's build a shop & more".to_string(),
        }
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
        let mut form = filled();
        form.reason = None;
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Reason))
        );
        form.reason = Some(ContactReason::Other);
        form.message = "   ".to_string();
        assert!(!form.is_complete());
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Message))
        );
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "jane.example.com".to_string();
        assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))));
        form.email = "@example.com".to_string();
        assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))));
    }

    #[test]
    fn test_subject_and_body() {
        let form = filled();
        assert_eq!(form.subject(), "Hire me for a project - Jane Doe");
        assert_eq!(
            form.body(),
            "Name: Jane Doe\nEmail: jane@example.com\nReason: Hire me for a project\n\nMessage:\nLet's build a shop & more"
        );
    }

    #[test]
    fn test_mailto_link_is_encoded() {
        let link = filled().mailto_link("me@example.com").unwrap();
        assert!(link.starts_with("mailto:me@example.com?subject=Hire%20me%20for%20a%20project%20-%20Jane%20Doe&body="));
        assert!(link.contains("%0A"));
        assert!(link.contains("%26%20more"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_submit_resets_only_on_success() {
        let mut form = filled();
        assert!(form.submit("me@example.com").is_ok());
        assert_eq!(form, ContactForm::default());

        let mut partial = filled();
        partial.name.clear();
        let before = partial.clone();
        assert!(partial.submit("me@example.com").is_err());
        assert_eq!(partial, before);
    }
}
