//! Error types for `pwstore-otp`.

use pwstore_otp_core::OtpError;
use thiserror::Error;

/// Errors produced while preparing an OTP for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    /// The engine rejected the entry's OTP parameters.
    #[error(transparent)]
    Otp(#[from] OtpError),

    /// A time-based code was requested for an HOTP entry.
    #[error("entry uses a counter-based OTP")]
    NotTotp,

    /// A counter advance was requested for a TOTP entry.
    #[error("entry uses a time-based OTP")]
    NotHotp,

    /// The HOTP counter is already at its maximum value.
    #[error("HOTP counter cannot be incremented past {}", u64::MAX)]
    CounterOverflow,
}
