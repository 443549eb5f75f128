//! # EAN Check Digit
//!
//! Standard EAN-13 check digit arithmetic over decimal digit strings.
//! Digits are read from rightmost to leftmost with alternating weights
//! 3, 1, 3, 1, ... starting at the rightmost digit; the check digit is
//! `(10 - sum mod 10) mod 10`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Computes the EAN check digit for a string of decimal digits.
///
/// # Arguments
/// * `digits` - The digits to checksum (for EAN-13, the first 12 digits)
///
/// # Returns
/// The check digit as a `char`, or `None` if `digits` contains any
/// character that is not an ASCII decimal digit
pub fn compute(digits: &str) -> Option<char> {
    let mut sum: u32 = 0;

    for (i, c) in digits.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        let weight = if i % 2 == 0 { 3 } else { 1 };
        sum += weight * digit;
    }

    // The outer mod folds a sum divisible by 10 to check digit 0, not 10.
    let check = (10 - sum % 10) % 10;
    char::from_digit(check, 10)
}

/// Verifies the trailing check digit of a candidate code.
///
/// Recomputes the check digit over all but the last character and
/// compares it with the last character. Does not assume any particular
/// length; empty or non-digit input verifies as `false`.
pub fn verify(code: &str) -> bool {
    match code.char_indices().last() {
        Some((idx, last)) => compute(&code[..idx]) == Some(last),
        None => false,
    }
}
