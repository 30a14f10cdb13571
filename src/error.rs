use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between "Send" and "sent".
///
/// Callers match on the variant to decide how to present the failure;
/// the rendered message is what the user sees.
#[derive(Debug, Error)]
pub enum MailError {
    /// The recipient does not look like `local@domain.tld`.
    #[error("invalid email format: {0:?}")]
    MalformedRecipient(String),

    /// A required compose field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The attached file could not be opened or read at send time.
    #[error("failed to read attachment {path}: {source}")]
    AttachmentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// SMTP settings are unusable (empty host/user, non-numeric port).
    #[error("invalid SMTP settings: {0}")]
    Config(String),

    /// Any failure during the transport session, reported verbatim.
    #[error("failed to send email: {0}")]
    Transport(String),

    /// The settings file could not be written.
    #[error("failed to save settings: {0}")]
    Persistence(#[from] io::Error),
}

impl MailError {
    /// True for the two pre-send validation categories.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MailError::MalformedRecipient(_) | MailError::MissingField(_)
        )
    }
}
