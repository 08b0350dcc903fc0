//! OTP defaults and behaviour switches, stored as plain JSON.
//!
//! Nothing here is secret: the file holds the values applied to newly
//! created OTP entries and the user's answer to "increment the HOTP counter
//! in the entry?".

use std::fs;
use std::path::Path;

use pwstore_otp_core::{DigitSpec, OtpAlgorithm, DEFAULT_PERIOD};
use serde::{Deserialize, Serialize};

use crate::entry::OtpEntry;

// ── Settings ───────────────────────────────────────────────────────

/// OTP-related settings.
///
/// Persisted to `{data_dir}/otp_settings.json`. All fields have defaults
/// via [`Default`], so older or partial files still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpSettings {
    /// Algorithm for new entries.
    #[serde(default)]
    pub default_algorithm: OtpAlgorithm,

    /// Output format for new entries.
    #[serde(default)]
    pub default_digits: DigitSpec,

    /// TOTP period for new entries, in seconds.
    #[serde(default = "default_period")]
    pub default_period: u64,

    /// Remembered answer to the HOTP increment prompt; `None` asks every time.
    #[serde(default)]
    pub hotp_remember_choice: Option<bool>,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            default_algorithm: OtpAlgorithm::default(),
            default_digits: DigitSpec::default(),
            default_period: default_period(),
            hotp_remember_choice: None,
        }
    }
}

const fn default_period() -> u64 {
    DEFAULT_PERIOD
}

/// What to do when the user asks for an HOTP code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotpAction {
    /// Show the code and write the advanced counter back into the entry.
    Commit,
    /// Show the code without touching the stored counter.
    ShowOnly,
    /// Ask the user.
    Ask,
}

impl OtpSettings {
    /// A new TOTP entry carrying the configured defaults.
    #[must_use]
    pub fn new_totp_entry(&self, secret: impl Into<String>) -> OtpEntry {
        OtpEntry::totp(secret)
            .with_algorithm(self.default_algorithm)
            .with_digits(self.default_digits)
            .with_period(self.default_period)
    }

    /// The HOTP behaviour selected by [`Self::hotp_remember_choice`].
    #[must_use]
    pub const fn hotp_action(&self) -> HotpAction {
        match self.hotp_remember_choice {
            Some(true) => HotpAction::Commit,
            Some(false) => HotpAction::ShowOnly,
            None => HotpAction::Ask,
        }
    }
}

// ── File I/O ───────────────────────────────────────────────────────

const SETTINGS_FILE: &str = "otp_settings.json";

impl OtpSettings {
    /// Load settings from `{data_dir}/otp_settings.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing or does not
    /// parse. A zero period is replaced by the default.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };
        let mut settings: Self = match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Corrupt OTP settings, using defaults"
                );
                return Self::default();
            }
        };
        if settings.default_period == 0 {
            tracing::warn!("OTP settings contain a zero period, using {DEFAULT_PERIOD}s");
            settings.default_period = DEFAULT_PERIOD;
        }
        settings
    }

    /// Persist settings to `{data_dir}/otp_settings.json`.
    ///
    /// Writes to a temporary file first and renames it into place.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the directory does not exist or the
    /// file system rejects the write/rename.
    pub fn save(&self, data_dir: &Path) -> std::io::Result<()> {
        let path = data_dir.join(SETTINGS_FILE);
        let tmp = data_dir.join(".otp_settings.json.tmp");

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(&tmp, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), "OTP settings saved");

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────
