//! `pwstore-otp` — OTP display logic for pwstore entries.
//!
//! Sits between the entry parser and the UI: derives TOTP counters from the
//! clock, advances HOTP counters, and degrades to "no OTP" instead of
//! failing when an entry's parameters are unusable. Code generation itself
//! lives in `pwstore-otp-core`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod clock;
pub mod display;
pub mod entry;
pub mod error;
pub mod settings;

pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{
    commit_hotp, current_code, next_hotp, visible_code, HotpAdvance, OtpCode, OtpView,
};
pub use entry::{OtpEntry, OtpKind};
pub use error::DisplayError;
pub use pwstore_otp_core::{compute_code, DigitSpec, OtpAlgorithm, OtpError};
pub use settings::{HotpAction, OtpSettings};
