//! OTP parameters of a decrypted password entry.
//!
//! The entry parser extracts these fields from the decrypted blob; this
//! module only models them. Defaults follow the `otpauth://` conventions:
//! SHA1, 6 digits, 30 second period, counter 0.

use std::fmt;

use pwstore_otp_core::{DigitSpec, OtpAlgorithm, OtpError, DEFAULT_PERIOD};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// How the OTP counter is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OtpKind {
    /// Time-based: counter = `floor(unix_time / period)`.
    Totp {
        /// Time step in seconds.
        #[serde(default = "default_period")]
        period: u64,
    },
    /// Counter-based: the counter stored in the entry.
    Hotp {
        /// Last used counter value.
        #[serde(default)]
        counter: u64,
    },
}

const fn default_period() -> u64 {
    DEFAULT_PERIOD
}

/// OTP fields of one entry. The secret is zeroed on drop and never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpEntry {
    /// Base32 shared secret.
    pub secret: String,
    /// TOTP period or HOTP counter.
    #[serde(flatten)]
    pub kind: OtpKind,
    /// HMAC algorithm.
    #[serde(default)]
    pub algorithm: OtpAlgorithm,
    /// Output format.
    #[serde(default)]
    pub digits: DigitSpec,
}

impl OtpEntry {
    /// A TOTP entry with default algorithm, digits and period.
    #[must_use]
    pub fn totp(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            kind: OtpKind::Totp {
                period: DEFAULT_PERIOD,
            },
            algorithm: OtpAlgorithm::default(),
            digits: DigitSpec::default(),
        }
    }

    /// An HOTP entry at `counter` with default algorithm and digits.
    #[must_use]
    pub fn hotp(secret: impl Into<String>, counter: u64) -> Self {
        Self {
            secret: secret.into(),
            kind: OtpKind::Hotp { counter },
            algorithm: OtpAlgorithm::default(),
            digits: DigitSpec::default(),
        }
    }

    /// Build an entry from the textual fields produced by the entry parser.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::UnsupportedAlgorithm`] or [`OtpError::InvalidDigits`]
    /// if either field does not parse.
    pub fn from_fields(
        secret: impl Into<String>,
        kind: OtpKind,
        algorithm: &str,
        digits: &str,
    ) -> Result<Self, OtpError> {
        Ok(Self {
            secret: secret.into(),
            kind,
            algorithm: algorithm.parse()?,
            digits: digits.parse()?,
        })
    }

    /// Set the HMAC algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: OtpAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_digits(mut self, digits: DigitSpec) -> Self {
        self.digits = digits;
        self
    }

    /// Set the TOTP period. Ignored for HOTP entries.
    #[must_use]
    pub fn with_period(mut self, period: u64) -> Self {
        if let OtpKind::Totp { period: ref mut current } = self.kind {
            *current = period;
        }
        self
    }

    /// `"totp"` or `"hotp"`, for log fields.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            OtpKind::Totp { .. } => "totp",
            OtpKind::Hotp { .. } => "hotp",
        }
    }

    /// The TOTP period, if time-based.
    #[must_use]
    pub const fn period(&self) -> Option<u64> {
        match self.kind {
            OtpKind::Totp { period } => Some(period),
            OtpKind::Hotp { .. } => None,
        }
    }

    /// The stored HOTP counter, if counter-based.
    #[must_use]
    pub const fn counter(&self) -> Option<u64> {
        match self.kind {
            OtpKind::Totp { .. } => None,
            OtpKind::Hotp { counter } => Some(counter),
        }
    }
}

impl Drop for OtpEntry {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl fmt::Debug for OtpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpEntry")
            .field("secret", &"***")
            .field("kind", &self.kind)
            .field("algorithm", &self.algorithm)
            .field("digits", &self.digits)
            .finish()
    }
}
