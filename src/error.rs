//! # Errors
//!
//! Error types for encoding and decoding codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a code.
///
/// The two decode failures are deliberately distinct variants so callers
/// can tell a transcription error (`Checksum`) apart from a code issued
/// under a different salt or with a doctored signature (`HashMismatch`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The number's decimal form does not fit the 4-digit field, either
    /// because it is longer than 4 characters or because it carries a
    /// sign character.
    #[error("input number does not fit 4 digits: {number}")]
    InvalidInput { number: i64 },

    /// The final digit of the candidate code does not match the
    /// recomputed EAN check digit, or the code is not a digit string.
    #[error("checksum error")]
    Checksum,

    /// The check digit passes but re-encoding the embedded number does
    /// not reproduce the code: wrong salt, or a tampered signature.
    #[error("hash mismatch")]
    HashMismatch,
}
