//! STARTTLS transport session built on lettre.

use async_trait::async_trait;
use lettre::{
    address::Envelope,
    transport::smtp::authentication::{Credentials, Mechanism},
    Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};

use super::{message, Mailer};
use crate::compose::Draft;
use crate::error::MailError;
use crate::settings::SmtpSettings;

/// Sends drafts over a plaintext-then-upgrade (STARTTLS) SMTP session,
/// authenticating with the configured user and password.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmtpMailer;

/// Build an async STARTTLS transport from the given settings.
fn build_transport(
    settings: &SmtpSettings,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
    if settings.host.is_empty() {
        return Err(MailError::Config("SMTP host is not set".into()));
    }
    let port = settings.port_number()?;
    let credentials = Credentials::new(settings.user.clone(), settings.password.clone());

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        .map_err(|e| MailError::Transport(format!("SMTP STARTTLS error: {e}")))?
        .port(port)
        .credentials(credentials)
        .authentication(vec![Mechanism::Plain, Mechanism::Login])
        .build();

    Ok(transport)
}

/// Build the SMTP envelope: mail from the configured user, delivered to
/// the draft's single recipient. Separate from the visible headers.
fn build_envelope(draft: &Draft, settings: &SmtpSettings) -> Result<Envelope, MailError> {
    if settings.user.is_empty() {
        return Err(MailError::Config("SMTP user is not set".into()));
    }
    let from: Address = settings
        .user
        .parse()
        .map_err(|e| MailError::Config(format!("invalid SMTP user {:?}: {e}", settings.user)))?;
    let to: Address = draft
        .recipient
        .parse()
        .map_err(|_| MailError::MalformedRecipient(draft.recipient.clone()))?;

    Envelope::new(Some(from), vec![to])
        .map_err(|e| MailError::Transport(format!("envelope error: {e}")))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, draft: &Draft, settings: &SmtpSettings) -> Result<(), MailError> {
        let raw = message::build_message(draft, settings)?;
        let envelope = build_envelope(draft, settings)?;
        let transport = build_transport(settings)?;

        transport
            .send_raw(&envelope, raw.as_bytes())
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        log::info!("sent mail to {}", draft.recipient);
        Ok(())
    }
}
