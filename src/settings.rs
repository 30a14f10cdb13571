//! SMTP connection settings and their on-disk store.
//!
//! The durable form is a single JSON object with four string-valued keys
//! (`smtp_host`, `smtp_port`, `smtp_user`, `smtp_pass`). The port is kept
//! as a string on disk and only parsed to a number at send time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MailError;

/// Default store location, relative to the working directory.
pub const SETTINGS_FILE: &str = "smtp_settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpSettings {
    #[serde(rename = "smtp_host", default)]
    pub host: String,
    #[serde(rename = "smtp_port", default)]
    pub port: String,
    #[serde(rename = "smtp_user", default)]
    pub user: String,
    #[serde(rename = "smtp_pass", default)]
    pub password: String,
}

impl SmtpSettings {
    /// Parse the stored port string, rejecting anything that is not a
    /// plain port number. Surfaced as a settings problem, not a send one.
    pub fn port_number(&self) -> Result<u16, MailError> {
        self.port
            .trim()
            .parse()
            .map_err(|_| MailError::Config(format!("invalid SMTP port {:?}", self.port)))
    }
}

/// Reads and writes [`SmtpSettings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::at(SETTINGS_FILE)
    }
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored settings.
    ///
    /// A missing file is not an error: every field defaults to the empty
    /// string. Unreadable or malformed JSON is treated the same way, with
    /// a warning, so a corrupt file never blocks startup.
    pub fn load(&self) -> SmtpSettings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return SmtpSettings::default();
            }
            Err(e) => {
                log::warn!("could not read {}: {e}", self.path.display());
                return SmtpSettings::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "ignoring malformed settings file {}: {e}",
                    self.path.display()
                );
                SmtpSettings::default()
            }
        }
    }

    /// Overwrite the store with the given settings, unconditionally.
    pub fn save(&self, settings: &SmtpSettings) -> Result<(), MailError> {
        let json = serde_json::to_string(settings)
            .map_err(|e| MailError::Config(format!("unencodable settings: {e}")))?;
        fs::write(&self.path, json)?;
        log::info!("saved SMTP settings to {}", self.path.display());
        Ok(())
    }
}
