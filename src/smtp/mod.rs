//! SMTP delivery: message serialization and the transport session.

pub mod client;
pub mod message;

use async_trait::async_trait;

use crate::compose::Draft;
use crate::error::MailError;
use crate::settings::SmtpSettings;

pub use client::SmtpMailer;

/// Mail delivery seam.
///
/// The session talks to this trait so the send path can be exercised
/// without a reachable SMTP server.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a validated draft using the given settings.
    async fn send(&self, draft: &Draft, settings: &SmtpSettings) -> Result<(), MailError>;
}
