// fixtures.rs — commonly used card numbers and image paths

use std::path::PathBuf;

/// Luhn-valid test number (Visa pattern)
pub const VALID_VISA: &str = "4532015112830366";

/// `VALID_VISA` with the last digit altered by one
pub const INVALID_VISA: &str = "4532015112830367";

/// Other well-known Luhn-valid test numbers
pub const VALID_NUMBERS: &[&str] = &[
    "4532015112830366",
    "79927398713",
    "5555555555554444",
    "378282246310005",
    "6011111111111117",
];

/// Path that never exists on disk
pub const MISSING_IMAGE: &str = "nonexistent.png";

/// A small PNG checked into the repository
pub fn blank_png() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("blank.png")
}
