//! Application session: the single owner of settings, sent log, and the
//! sticky attachment path.
//!
//! The presentation layer builds [`Draft`] values and calls in here; this
//! module never touches the UI. One logical thread of control, so every
//! operation runs to completion before the next.

use std::path::{Path, PathBuf};

use crate::compose::Draft;
use crate::error::MailError;
use crate::sentlog::{SentLog, SentLogEntry};
use crate::settings::{SettingsStore, SmtpSettings};
use crate::smtp::{Mailer, SmtpMailer};

pub struct Session<M: Mailer = SmtpMailer> {
    store: SettingsStore,
    settings: SmtpSettings,
    log: SentLog,
    attachment: Option<PathBuf>,
    mailer: M,
}

impl Session<SmtpMailer> {
    /// Start a session against the default settings file, loading whatever
    /// was saved last (or empty settings on first run).
    pub fn new() -> Self {
        Self::with_mailer(SettingsStore::default(), SmtpMailer)
    }

    pub fn with_store(store: SettingsStore) -> Self {
        Self::with_mailer(store, SmtpMailer)
    }
}

impl Default for Session<SmtpMailer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mailer> Session<M> {
    pub fn with_mailer(store: SettingsStore, mailer: M) -> Self {
        let settings = store.load();
        Self {
            store,
            settings,
            log: SentLog::new(),
            attachment: None,
            mailer,
        }
    }

    /// Build a draft from the current form values, stamping in the sticky
    /// attachment path.
    pub fn compose(
        &self,
        from_name: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Draft {
        Draft {
            from_name: from_name.into(),
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            attachment_path: self.attachment.clone(),
        }
    }

    /// Validate and send. On success exactly one log entry is appended;
    /// on any failure nothing is mutated.
    pub async fn send(&mut self, draft: &Draft) -> Result<(), MailError> {
        draft.validate()?;
        self.mailer.send(draft, &self.settings).await?;
        self.log.append(SentLogEntry::from_draft(draft));
        Ok(())
    }

    pub fn settings(&self) -> &SmtpSettings {
        &self.settings
    }

    /// Persist the given settings and adopt them for subsequent sends.
    pub fn save_settings(&mut self, settings: SmtpSettings) -> Result<(), MailError> {
        self.store.save(&settings)?;
        self.settings = settings;
        Ok(())
    }

    pub fn attach(&mut self, path: impl Into<PathBuf>) {
        self.attachment = Some(path.into());
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    pub fn attachment(&self) -> Option<&Path> {
        self.attachment.as_deref()
    }

    pub fn sent(&self) -> &[SentLogEntry] {
        self.log.entries()
    }

    pub fn clear_sent(&mut self) {
        self.log.clear();
    }
}
