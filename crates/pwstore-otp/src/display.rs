//! Turning an [`OtpEntry`] into something a screen can show.
//!
//! TOTP codes are recomputed on every call from the clock; the caller
//! refreshes them when `remaining_seconds` runs out. HOTP codes are only
//! computed on request, because computing one consumes a counter value that
//! the caller must write back into the entry.

use pwstore_otp_core::{decode_secret, generate_hotp, seconds_remaining, time_step};
use serde::Serialize;

use crate::clock::Clock;
use crate::entry::{OtpEntry, OtpKind};
use crate::error::DisplayError;

/// A TOTP code together with its remaining lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpCode {
    /// The code to display.
    pub code: String,
    /// Seconds until the code changes, in `1..=period`.
    pub remaining_seconds: u64,
    /// The entry's time step in seconds.
    pub period: u64,
}

/// Result of generating the next HOTP code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotpAdvance {
    /// The code for `counter`.
    pub code: String,
    /// The counter the code was computed for; persist it into the entry.
    pub counter: u64,
}

/// What the OTP area of an entry screen should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpView {
    /// A live TOTP code.
    Code(OtpCode),
    /// An HOTP entry waiting for the user to request a code.
    HotpPending,
    /// The entry's OTP parameters are unusable; hide the OTP controls.
    Hidden,
}

fn code_for(entry: &OtpEntry, counter: u64) -> Result<String, DisplayError> {
    let key = decode_secret(&entry.secret)?;
    Ok(generate_hotp(key.expose(), counter, entry.digits, entry.algorithm)?)
}

/// Compute the current TOTP code of `entry`.
///
/// # Errors
///
/// Returns [`DisplayError::NotTotp`] for HOTP entries and
/// [`DisplayError::Otp`] when the engine rejects the entry's parameters.
pub fn current_code<C: Clock + ?Sized>(
    entry: &OtpEntry,
    clock: &C,
) -> Result<OtpCode, DisplayError> {
    let OtpKind::Totp { period } = entry.kind else {
        return Err(DisplayError::NotTotp);
    };
    let now = clock.unix_time();
    let counter = time_step(now, period)?;
    Ok(OtpCode {
        code: code_for(entry, counter)?,
        remaining_seconds: seconds_remaining(now, period)?,
        period,
    })
}

/// Compute the HOTP code for the counter after the stored one.
///
/// The entry is not modified; see [`commit_hotp`].
///
/// # Errors
///
/// Returns [`DisplayError::NotHotp`] for TOTP entries,
/// [`DisplayError::CounterOverflow`] if the stored counter is `u64::MAX`,
/// and [`DisplayError::Otp`] when the engine rejects the parameters.
pub fn next_hotp(entry: &OtpEntry) -> Result<HotpAdvance, DisplayError> {
    let OtpKind::Hotp { counter } = entry.kind else {
        return Err(DisplayError::NotHotp);
    };
    let next = counter.checked_add(1).ok_or(DisplayError::CounterOverflow)?;
    Ok(HotpAdvance {
        code: code_for(entry, next)?,
        counter: next,
    })
}

/// Compute the next HOTP code and store the advanced counter in `entry`.
///
/// On error the entry is left untouched.
///
/// # Errors
///
/// Same as [`next_hotp`].
pub fn commit_hotp(entry: &mut OtpEntry) -> Result<String, DisplayError> {
    let advance = next_hotp(entry)?;
    entry.kind = OtpKind::Hotp {
        counter: advance.counter,
    };
    tracing::debug!(counter = advance.counter, "HOTP counter advanced");
    Ok(advance.code)
}

/// Decide what to show for `entry`, logging instead of failing.
///
/// Any engine error degrades to [`OtpView::Hidden`]. HOTP entries are
/// checked against their stored counter, which consumes nothing, so a
/// broken secret hides the controls before the user presses them.
pub fn visible_code<C: Clock + ?Sized>(entry: &OtpEntry, clock: &C) -> OtpView {
    let view = match entry.kind {
        OtpKind::Hotp { counter } => code_for(entry, counter).map(|_| OtpView::HotpPending),
        OtpKind::Totp { .. } => current_code(entry, clock).map(OtpView::Code),
    };
    view.unwrap_or_else(|e| {
        tracing::warn!(
            kind = entry.kind_name(),
            algorithm = %entry.algorithm,
            error = %e,
            "OTP unavailable, hiding OTP controls"
        );
        OtpView::Hidden
    })
}
