//! Base32 shared-secret decoding.
//!
//! Secrets arrive as RFC 4648 Base32 text copied out of a decrypted entry or
//! an `otpauth://` URI. Issuers are inconsistent about case, padding and
//! grouping, so decoding normalises the text before handing it to the strict
//! `data-encoding` decoder:
//! - ASCII letters are upper-cased
//! - whitespace and `-` group separators are removed
//! - trailing `=` padding is dropped
//!
//! Anything left outside `A-Z2-7` is a [`OtpError::Decode`].

use std::fmt;

use data_encoding::BASE32_NOPAD;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::OtpError;

/// Decoded shared secret. Zeroed on drop, never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Borrow the raw key bytes.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of key bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the secret decoded to zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBytes(***)")
    }
}

/// Decode a Base32 shared secret into raw key bytes.
///
/// # Errors
///
/// Returns [`OtpError::Decode`] if the normalised text contains characters
/// outside the Base32 alphabet, misplaced padding, or has a length no Base32
/// encoding can produce.
pub fn decode_secret(secret: &str) -> Result<SecretBytes, OtpError> {
    let mut normalized: String = secret
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let unpadded_len = normalized.trim_end_matches('=').len();
    normalized.truncate(unpadded_len);

    let decoded = BASE32_NOPAD
        .decode(normalized.as_bytes())
        .map_err(|e| OtpError::Decode(e.to_string()));
    normalized.zeroize();
    decoded.map(SecretBytes)
}
