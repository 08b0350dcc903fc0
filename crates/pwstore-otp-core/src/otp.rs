//! RFC 4226 HOTP engine with numeric and Steam Guard output formats.
//!
//! The engine is a set of pure functions: the same secret, counter,
//! algorithm and digit specifier always produce the same code. TOTP is
//! HOTP with a time-derived counter, see [`crate::totp`].

use std::fmt;
use std::str::FromStr;

use ring::hmac;
use serde::{Deserialize, Serialize};

use crate::error::OtpError;
use crate::secret::decode_secret;

// ── Constants ───────────────────────────────────────────────────────

/// Steam Guard alphabet: digits and consonants that cannot be confused.
pub const STEAM_ALPHABET: &[u8; 26] = b"23456789BCDFGHJKMNPQRTVWXY";

/// Length of a Steam Guard code.
pub const STEAM_CODE_LENGTH: usize = 5;

/// Decimal digits a 31-bit truncated value can fill. Longer numeric codes
/// are the full value with leading zeros.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 10;

const STEAM_RADIX: u32 = 26;

/// Digit specifier selecting the Steam Guard format.
pub const STEAM_DIGIT_SPEC: &str = "s";

// ── Types ───────────────────────────────────────────────────────────

/// HMAC algorithm used for OTP generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OtpAlgorithm {
    /// HMAC-SHA1 (RFC 4226 default, used by most issuers).
    #[default]
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl OtpAlgorithm {
    /// Map to the corresponding `ring::hmac::Algorithm`.
    fn to_ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }

    /// Lowercase name as written in entries and `otpauth://` URIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for OtpAlgorithm {
    type Err = OtpError;

    /// Parse an algorithm name, ignoring case, an `Hmac` prefix and dashes.
    ///
    /// `"sha1"`, `"SHA-256"` and `"HmacSHA512"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let name = normalized.strip_prefix("hmac").unwrap_or(&normalized);
        match name {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(OtpError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

impl TryFrom<String> for OtpAlgorithm {
    type Error = OtpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OtpAlgorithm> for String {
    fn from(algorithm: OtpAlgorithm) -> Self {
        algorithm.as_str().to_owned()
    }
}

impl fmt::Display for OtpAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format of an OTP code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DigitSpec {
    /// Decimal code of the given positive length, zero-padded.
    Numeric(u32),
    /// Five-character Steam Guard code over [`STEAM_ALPHABET`].
    Steam,
}

impl DigitSpec {
    /// Build a numeric specifier.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidDigits`] if `digits` is zero.
    pub fn numeric(digits: u32) -> Result<Self, OtpError> {
        if digits == 0 {
            return Err(OtpError::InvalidDigits(digits.to_string()));
        }
        Ok(Self::Numeric(digits))
    }

    /// Length of the codes this specifier produces.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::Numeric(digits) => usize::try_from(digits).unwrap_or(usize::MAX),
            Self::Steam => STEAM_CODE_LENGTH,
        }
    }

    /// Always `false`; present alongside [`DigitSpec::len`].
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl Default for DigitSpec {
    fn default() -> Self {
        Self::Numeric(6)
    }
}

impl FromStr for DigitSpec {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == STEAM_DIGIT_SPEC {
            return Ok(Self::Steam);
        }
        let digits: u32 = trimmed
            .parse()
            .map_err(|_| OtpError::InvalidDigits(s.to_owned()))?;
        Self::numeric(digits).map_err(|_| OtpError::InvalidDigits(s.to_owned()))
    }
}

impl TryFrom<String> for DigitSpec {
    type Error = OtpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigitSpec> for String {
    fn from(spec: DigitSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for DigitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(digits) => write!(f, "{digits}"),
            Self::Steam => f.write_str(STEAM_DIGIT_SPEC),
        }
    }
}

// ── Engine ──────────────────────────────────────────────────────────

/// Compute an OTP code from the textual fields of a password entry.
///
/// # Arguments
/// - `secret`: Base32-encoded shared secret
/// - `counter`: HOTP counter, or `floor(unix_time / period)` for TOTP
/// - `algorithm`: `"sha1"`, `"sha256"` or `"sha512"`, any case
/// - `digit_spec`: a digit count such as `"6"`, or `"s"` for Steam Guard
///
/// # Errors
/// - [`OtpError::Decode`] if `secret` is not Base32
/// - [`OtpError::UnsupportedAlgorithm`] for an unknown `algorithm`
/// - [`OtpError::KeyInitialization`] if the secret decodes to nothing
/// - [`OtpError::InvalidDigits`] for a malformed `digit_spec`
#[must_use = "OTP code should be used or stored"]
pub fn compute_code(
    secret: &str,
    counter: u64,
    algorithm: &str,
    digit_spec: &str,
) -> Result<String, OtpError> {
    let key = decode_secret(secret)?;
    let algorithm: OtpAlgorithm = algorithm.parse()?;
    let digits: DigitSpec = digit_spec.parse()?;
    generate_hotp(key.expose(), counter, digits, algorithm)
}

/// Generate an HOTP code per RFC 4226 from raw key bytes.
///
/// # Errors
/// Returns [`OtpError::KeyInitialization`] if the secret is empty.
#[must_use = "OTP code should be used or stored"]
pub fn generate_hotp(
    secret: &[u8],
    counter: u64,
    digits: DigitSpec,
    algorithm: OtpAlgorithm,
) -> Result<String, OtpError> {
    if secret.is_empty() {
        return Err(OtpError::KeyInitialization(
            "secret must not be empty".to_owned(),
        ));
    }

    // HMAC(K, C) where C is counter as 8-byte big-endian (RFC 4226 §5.2).
    let key = hmac::Key::new(algorithm.to_ring_algorithm(), secret);
    let tag = hmac::sign(&key, &counter.to_be_bytes());

    let binary_code = dynamic_truncate(tag.as_ref())
        .ok_or_else(|| OtpError::KeyInitialization("digest too short".to_owned()))?;
    Ok(format_code(binary_code, digits))
}

/// Dynamic truncation (RFC 4226 §5.3).
///
/// The low nibble of the last digest byte selects a 4-byte window, read
/// big-endian with the top bit cleared. Returns `None` if the digest is too
/// short to contain the selected window, which never happens for SHA-1 or
/// longer digests.
#[must_use]
pub fn dynamic_truncate(digest: &[u8]) -> Option<u32> {
    let offset = usize::from(digest.last()? & 0x0F);
    let window = digest.get(offset..offset.checked_add(4)?)?;
    let bytes: [u8; 4] = window.try_into().ok()?;
    Some(u32::from_be_bytes(bytes) & 0x7FFF_FFFF)
}

/// Render a truncated HOTP value in the requested format.
///
/// Numeric codes are the last `n` decimal digits, left-padded with zeros;
/// past [`MAX_SIGNIFICANT_DIGITS`] that is the whole value. Steam codes take five base-26 digits, least significant first.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn format_code(binary_code: u32, digits: DigitSpec) -> String {
    match digits {
        DigitSpec::Numeric(n) => {
            let width = digits.len();
            if n > MAX_SIGNIFICANT_DIGITS {
                return format!("{binary_code:0>width$}");
            }
            // n <= 10, so 10^n fits in u64 and is never zero.
            let code = u64::from(binary_code) % 10_u64.pow(n);
            format!("{code:0>width$}")
        }
        DigitSpec::Steam => {
            let mut remaining = binary_code;
            let mut code = String::with_capacity(STEAM_CODE_LENGTH);
            for _ in 0..STEAM_CODE_LENGTH {
                code.push(char::from(STEAM_ALPHABET[(remaining % STEAM_RADIX) as usize]));
                remaining /= STEAM_RADIX;
            }
            code
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────
