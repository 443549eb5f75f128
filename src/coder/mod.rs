//! # Coder
//!
//! Encodes integers into salted 13-digit EAN-13 codes and decodes them
//! back. A `Coder` holds only the immutable salt that defines its
//! verification scope; every call is an independent pure computation.
//!
//! Code layout (13 ASCII decimal digits, no separators):
//!
//! ```text
//! Position:  0  1  2  3 | 4  5  6  7  8  9 10 11 | 12
//! Field:     number (4)  | signature (8)          | check digit
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod digest;

use crate::checksum;
use crate::constants::NUMBER_WIDTH;
use crate::error::CodeError;

/// Encoder/decoder bound to one salt.
///
/// The salt is set at construction and never changes, so a `Coder` is
/// safe to share across threads.
#[derive(Debug, Clone)]
pub struct Coder {
    salt: String,
}

impl Coder {
    /// Creates a coder scoped to the given salt.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Encodes a number into a 13-digit code.
    ///
    /// The input is validated textually: the decimal form of `number`
    /// must be at most 4 characters and contain no sign. On success the
    /// returned string is always exactly 13 ASCII decimal digits.
    ///
    /// # Errors
    /// [`CodeError::InvalidInput`] if the decimal form exceeds 4
    /// characters or carries a sign character.
    pub fn encode(&self, number: i64) -> Result<String, CodeError> {
        let digits = number.to_string();

        if digits.len() > NUMBER_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::InvalidInput { number });
        }

        // The signature hashes the unpadded decimal form; only the
        // payload field is zero-padded.
        let signature = digest::salted(&self.salt, &digits);
        let payload = format!("{number:0width$}{signature}", width = NUMBER_WIDTH);

        let check = checksum::compute(&payload).ok_or(CodeError::InvalidInput { number })?;

        let mut code = payload;
        code.push(check);
        Ok(code)
    }

    /// Decodes a code back to the number it embeds.
    ///
    /// Verifies the trailing check digit, then re-encodes the embedded
    /// number under this coder's salt and compares the full string, so
    /// a code issued under a different salt (or with a doctored
    /// signature) is rejected even when its check digit is intact.
    ///
    /// # Errors
    /// [`CodeError::Checksum`] if the code is structurally invalid or
    /// its check digit does not match; [`CodeError::HashMismatch`] if
    /// the check digit passes but the code was not produced by
    /// `encode` under this salt.
    pub fn decode(&self, code: &str) -> Result<i64, CodeError> {
        if !checksum::verify(code) {
            return Err(CodeError::Checksum);
        }

        // verify() only passes all-ASCII-digit strings, so byte
        // slicing below cannot split a character.
        let head = &code[..code.len().min(NUMBER_WIDTH)];
        let number: i64 = head.parse().map_err(|_| CodeError::Checksum)?;

        if self.encode(number)? != code {
            return Err(CodeError::HashMismatch);
        }

        Ok(number)
    }
}
