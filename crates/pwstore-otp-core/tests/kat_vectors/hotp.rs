//! RFC 4226 Appendix D — HOTP test vectors, driven through the textual API.

use pwstore_otp_core::{compute_code, dynamic_truncate, OtpError};

// "12345678901234567890" (ASCII, 20 bytes) in Base32.
const HOTP_SECRET_B32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

const HOTP_EXPECTED: [(u64, &str); 10] = [
    (0, "755224"),
    (1, "287082"),
    (2, "359152"),
    (3, "969429"),
    (4, "338314"),
    (5, "254676"),
    (6, "287922"),
    (7, "162583"),
    (8, "399871"),
    (9, "520489"),
];

#[test]
fn rfc4226_appendix_d_hotp_sha1() {
    for (counter, expected) in &HOTP_EXPECTED {
        let code = compute_code(HOTP_SECRET_B32, *counter, "sha1", "6")
            .expect("HOTP generation should succeed");
        assert_eq!(&code, expected, "RFC 4226 HOTP mismatch at counter {counter}");
    }
}

#[test]
fn rfc4226_lowercase_secret_matches() {
    let lower = HOTP_SECRET_B32.to_ascii_lowercase();
    for (counter, expected) in &HOTP_EXPECTED {
        let code = compute_code(&lower, *counter, "SHA1", "6").expect("HOTP generation");
        assert_eq!(&code, expected, "lowercase secret mismatch at counter {counter}");
    }
}

#[test]
fn rfc4226_section_5_4_truncation() {
    let digest = [
        0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19, 0xda,
        0x8e, 0x94, 0x5b, 0x55, 0x5a,
    ];
    assert_eq!(dynamic_truncate(&digest), Some(1_357_872_921));
}

#[test]
fn invalid_inputs_are_reported_not_panicked() {
    assert!(matches!(
        compute_code("GEZDGNBV1", 0, "sha1", "6"),
        Err(OtpError::Decode(_))
    ));
    assert!(matches!(
        compute_code(HOTP_SECRET_B32, 0, "sha384", "6"),
        Err(OtpError::UnsupportedAlgorithm(_))
    ));
    assert!(matches!(
        compute_code(HOTP_SECRET_B32, 0, "sha1", "x"),
        Err(OtpError::InvalidDigits(_))
    ));
    assert!(matches!(
        compute_code("====", 0, "sha1", "6"),
        Err(OtpError::KeyInitialization(_))
    ));
}
