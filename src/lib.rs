//! missive — compose an email, send it through your own SMTP server,
//! and keep an in-memory log of what went out.
//!
//! The library is headless: the shell (or any other front end) builds a
//! [`Draft`], hands it to a [`Session`], and renders whatever comes back.
//! SMTP settings are the only durable state, stored as a small JSON file
//! next to the process.

pub mod compose;
pub mod error;
pub mod sentlog;
pub mod session;
pub mod settings;
pub mod smtp;

pub use compose::Draft;
pub use error::MailError;
pub use sentlog::{SentLog, SentLogEntry};
pub use session::Session;
pub use settings::{SettingsStore, SmtpSettings, SETTINGS_FILE};
pub use smtp::{Mailer, SmtpMailer};
