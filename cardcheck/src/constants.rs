// cardcheck/src/constants.rs
//! Common constants used across the crate

/// Language hint passed to the OCR engine when none is configured
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Prefix of the brand string produced when the image does not exist
pub const IMAGE_MISSING_PREFIX: &str = "image not found at path: ";

/// Prefix of the brand string produced when the OCR engine fails
pub const ENGINE_ERROR_PREFIX: &str = "error extracting brand: ";

/// Luhn checksum modulus
pub const LUHN_MODULUS: u32 = 10;
