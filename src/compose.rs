//! Draft state and pre-send validation.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::MailError;

/// A message as composed, before any send attempt.
///
/// Built fresh from the current form values for every send; nothing here
/// is persisted. The attachment path outlives the draft (it sticks to the
/// session until replaced), the rest is discarded after the attempt.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub from_name: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachment_path: Option<PathBuf>,
}

/// Loose address shape: something, `@`, something, `.`, something.
///
/// Anchored at the start only, so trailing junk is tolerated just like the
/// original check. This is a sanity check, not RFC 5322.
fn address_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap())
}

impl Draft {
    pub fn new(
        from_name: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            attachment_path: None,
        }
    }

    pub fn attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachment_path = Some(path.into());
        self
    }

    /// Check the draft is sendable.
    ///
    /// The address shape is checked first, then field presence, mirroring
    /// the order the compose form applies them. The attachment path is not
    /// touched here; a missing file surfaces at send time.
    pub fn validate(&self) -> Result<(), MailError> {
        if !address_shape().is_match(&self.recipient) {
            return Err(MailError::MalformedRecipient(self.recipient.clone()));
        }
        for (value, name) in [
            (&self.from_name, "from name"),
            (&self.recipient, "recipient"),
            (&self.subject, "subject"),
            (&self.body, "message body"),
        ] {
            if value.is_empty() {
                return Err(MailError::MissingField(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(recipient: &str) -> Draft {
        Draft::new("Alice", recipient, "Hi", "Hello there")
    }

    #[test]
    fn accepts_minimal_address() {
        assert!(draft("a@b.c").validate().is_ok());
    }

    #[test]
    fn accepts_ordinary_address() {
        assert!(draft("bob@example.com").validate().is_ok());
    }

    #[test]
    fn rejects_missing_at() {
        let err = draft("not-an-email").validate().unwrap_err();
        assert!(matches!(err, MailError::MalformedRecipient(_)));
    }

    #[test]
    fn rejects_missing_dot_after_at() {
        let err = draft("a@b").validate().unwrap_err();
        assert!(matches!(err, MailError::MalformedRecipient(_)));
    }

    #[test]
    fn rejects_empty_recipient_as_malformed() {
        // Shape check runs first, so an empty recipient is "malformed",
        // not "missing".
        let err = draft("").validate().unwrap_err();
        assert!(matches!(err, MailError::MalformedRecipient(_)));
    }

    #[test]
    fn tolerates_trailing_junk() {
        // Start-anchored match, same as the original form check.
        assert!(draft("a@b.c and more").validate().is_ok());
    }

    #[test]
    fn empty_subject_is_missing_field() {
        let mut d = draft("bob@example.com");
        d.subject.clear();
        assert!(matches!(
            d.validate().unwrap_err(),
            MailError::MissingField("subject")
        ));
    }

    #[test]
    fn empty_from_name_is_missing_field() {
        let mut d = draft("bob@example.com");
        d.from_name.clear();
        assert!(matches!(
            d.validate().unwrap_err(),
            MailError::MissingField("from name")
        ));
    }

    #[test]
    fn empty_body_is_missing_field() {
        let mut d = draft("bob@example.com");
        d.body.clear();
        assert!(matches!(
            d.validate().unwrap_err(),
            MailError::MissingField("message body")
        ));
    }

    #[test]
    fn validation_errors_are_flagged_as_validation() {
        assert!(draft("nope").validate().unwrap_err().is_validation());
    }

    #[test]
    fn attachment_is_not_checked_at_validation_time() {
        let d = draft("bob@example.com").attachment("/no/such/file.bin");
        assert!(d.validate().is_ok());
    }
}
