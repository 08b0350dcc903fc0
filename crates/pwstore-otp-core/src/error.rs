//! Error types for `pwstore-otp-core`.

use thiserror::Error;

/// Errors produced while computing a one-time password.
///
/// Every variant is a deterministic input-validation failure: retrying with
/// the same inputs yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    /// The shared secret is not valid Base32.
    #[error("invalid OTP secret: {0}")]
    Decode(String),

    /// The requested HMAC algorithm is not available.
    #[error("unsupported OTP algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The decoded secret was rejected as an HMAC key.
    #[error("invalid OTP key: {0}")]
    KeyInitialization(String),

    /// The digit specifier is neither `"s"` nor a supported digit count.
    #[error("invalid OTP digit specifier: {0}")]
    InvalidDigits(String),

    /// TOTP period of zero seconds.
    #[error("TOTP period must be > 0")]
    InvalidPeriod,
}
