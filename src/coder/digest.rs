//! # Salted Signature
//!
//! Derives the 8-digit decimal signature embedded in a code from the
//! salt and the number's decimal string. The pipeline is a fixed
//! sequence: SHA-256 over `salt + digits`, hex-encode, keep the first
//! 8 hex characters, reinterpret as a base-16 integer, render as
//! decimal, truncate/left-zero-pad to 8 characters. Every step is part
//! of the wire contract; changing any of them produces incompatible
//! codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use sha2::{Digest, Sha256};

use crate::constants::{DIGEST_WIDTH, HEX_PREFIX_LEN};

/// Derives the decimal signature for a salt and an (unpadded) decimal
/// number string.
///
/// The hash input is the salt followed by the number's plain decimal
/// form, not the zero-padded field that ends up in the payload.
///
/// # Returns
/// A `String` of exactly 8 ASCII decimal digits
pub fn salted(salt: &str, digits: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(digits.as_bytes());
    let hash = hex::encode(hasher.finalize());

    decimalize(&hash[..HEX_PREFIX_LEN])
}

/// Renders an 8-character hex prefix as a fixed-width decimal string:
/// parse base-16, stringify base-10, truncate to 8, left-zero-pad to 8.
///
/// The pad branch only triggers for prefixes below `0x00989680`
/// (10 000 000), which a real SHA-256 output hits with probability
/// ~1/429; tests exercise it with synthetic prefixes.
pub(crate) fn decimalize(hex_prefix: &str) -> String {
    // Callers pass a slice of a hex-encoded digest, so every character
    // is a valid hex digit and 8 of them always fit a u32.
    let value = u32::from_str_radix(hex_prefix, 16)
        .expect("hex digest prefix is valid base-16");

    let mut decimal = value.to_string();
    decimal.truncate(DIGEST_WIDTH);
    format!("{decimal:0>width$}", width = DIGEST_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salted_golden_vector() {
        // SHA-256("test45") starts with 017730c0
        assert_eq!(salted("test", "45"), "24590336");
    }

    #[test]
    fn test_salted_uses_unpadded_digits() {
        // Hashing the padded field would derive a different signature
        assert_ne!(salted("test", "45"), salted("test", "0045"));
    }

    #[test]
    fn test_salted_is_deterministic() {
        assert_eq!(salted("scope", "7"), salted("scope", "7"));
    }

    #[test]
    fn test_salted_width() {
        for n in ["0", "1", "42", "9999"] {
            let sig = salted("width-check", n);
            assert_eq!(sig.len(), DIGEST_WIDTH);
            assert!(sig.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_decimalize_truncates_long_values() {
        // 0xffffffff = 4294967295, ten digits, keep the first eight
        assert_eq!(decimalize("ffffffff"), "42949672");
    }

    #[test]
    fn test_decimalize_pads_short_values() {
        // Small hash prefixes decimalize to fewer than 8 digits and
        // must be left-zero-padded
        assert_eq!(decimalize("00000001"), "00000001");
        assert_eq!(decimalize("0000000f"), "00000015");
        assert_eq!(decimalize("00000000"), "00000000");
    }

    #[test]
    fn test_decimalize_exact_width_boundary() {
        // 0x00989680 = 10000000, the smallest value needing no padding
        assert_eq!(decimalize("00989680"), "10000000");
        assert_eq!(decimalize("0098967f"), "09999999");
    }
}
