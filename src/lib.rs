//! # eansign
//!
//! Encodes a small integer (decimal form up to 4 digits) into a 13-digit
//! EAN-13 code carrying a salted signature, and decodes it back.
//!
//! The code embeds the original number, an 8-digit decimal digest derived
//! from a salted SHA-256 hash, and a standard EAN check digit:
//!
//! ```text
//! 0045 24590336 5
//!  |    |       |
//!  |    |       +- EAN check digit
//!  |    +- salted signature
//!  +- input number
//! ```
//!
//! Because the signature is salted, a code can be verified to belong to a
//! given scope: decoding under a different salt is rejected.
//!
//! ## Features
//!
//! - **Round-trip**: `decode(encode(n)) == n` under the same salt
//! - **Scope binding**: codes issued under one salt fail under another
//! - **Transcription safety**: standard EAN-13 check digit
//! - **Typed failures**: transcription errors and scope/tamper errors are
//!   distinguishable variants
//!
//! ```
//! use eansign::Coder;
//!
//! let coder = Coder::new("test");
//! let code = coder.encode(45).unwrap();
//! assert_eq!(code, "0045245903365");
//! assert_eq!(coder.decode(&code).unwrap(), 45);
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod checksum;
pub mod coder;
pub mod constants;
pub mod error;

pub use coder::Coder;
pub use error::CodeError;
