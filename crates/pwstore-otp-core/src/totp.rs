//! RFC 6238 TOTP on top of the HOTP engine.
//!
//! A TOTP code is the HOTP code for counter `floor(unix_time / period)`.
//! The helpers here derive that counter and report how long the current
//! code stays valid.

use crate::error::OtpError;
use crate::otp::{generate_hotp, DigitSpec, OtpAlgorithm};

// ── Constants ───────────────────────────────────────────────────────

/// Default TOTP period in seconds (RFC 6238 §4).
pub const DEFAULT_PERIOD: u64 = 30;

// ── Time steps ─────────────────────────────────────────────────────

/// Time-step counter `T = floor(unix_time / period)`.
///
/// # Errors
/// Returns [`OtpError::InvalidPeriod`] if `period` is 0.
pub fn time_step(unix_time: u64, period: u64) -> Result<u64, OtpError> {
    unix_time
        .checked_div(period)
        .ok_or(OtpError::InvalidPeriod)
}

/// Seconds until the code for `unix_time` rolls over, in `1..=period`.
///
/// # Errors
/// Returns [`OtpError::InvalidPeriod`] if `period` is 0.
pub fn seconds_remaining(unix_time: u64, period: u64) -> Result<u64, OtpError> {
    let elapsed = unix_time
        .checked_rem(period)
        .ok_or(OtpError::InvalidPeriod)?;
    // elapsed < period, so the subtraction cannot underflow.
    #[allow(clippy::arithmetic_side_effects)]
    let remaining = period - elapsed;
    Ok(remaining)
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// Generate a TOTP code per RFC 6238.
///
/// # Arguments
/// - `secret`: Shared secret key bytes
/// - `unix_time`: Unix timestamp in seconds
/// - `digits`: Output format
/// - `period`: Time step in seconds (typically 30)
/// - `algorithm`: HMAC algorithm to use
///
/// # Errors
/// Returns [`OtpError::InvalidPeriod`] if `period` is 0, or
/// [`OtpError::KeyInitialization`] if the secret is empty.
#[must_use = "OTP code should be used or stored"]
pub fn generate_totp(
    secret: &[u8],
    unix_time: u64,
    digits: DigitSpec,
    period: u64,
    algorithm: OtpAlgorithm,
) -> Result<String, OtpError> {
    let step = time_step(unix_time, period)?;
    generate_hotp(secret, step, digits, algorithm)
}

// ── Tests ───────────────────────────────────────────────────────────
