//! # Constants
//!
//! Centralized constants for the code format used throughout eansign.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Code Format
// =============================================================================

/// Width of the number field (positions 0-3), zero-padded.
pub const NUMBER_WIDTH: usize = 4;

/// Width of the signature field (positions 4-11).
pub const DIGEST_WIDTH: usize = 8;

/// Width of the payload (number + signature, before the check digit).
pub const PAYLOAD_WIDTH: usize = NUMBER_WIDTH + DIGEST_WIDTH;

/// Total width of a complete code (payload + check digit).
pub const CODE_WIDTH: usize = PAYLOAD_WIDTH + 1;

// =============================================================================
// Signature Derivation
// =============================================================================

/// Number of leading hex characters of the SHA-256 digest that feed the
/// decimal signature.
pub const HEX_PREFIX_LEN: usize = 8;
