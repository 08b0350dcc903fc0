//! `pwstore-otp-core` — one-time password engine for pwstore.
//!
//! Pure functions only: no I/O, no logging, no shared state. Callers hand in
//! an already-parsed secret, counter, algorithm and digit specifier and get
//! back a code or an [`OtpError`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod otp;
pub mod secret;
pub mod totp;

pub use error::OtpError;
pub use otp::{
    compute_code, dynamic_truncate, format_code, generate_hotp, DigitSpec, OtpAlgorithm,
    MAX_SIGNIFICANT_DIGITS, STEAM_ALPHABET, STEAM_CODE_LENGTH,
};
pub use secret::{decode_secret, SecretBytes};
pub use totp::{generate_totp, seconds_remaining, time_step, DEFAULT_PERIOD};
