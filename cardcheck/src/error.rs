// cardcheck/src/error.rs

//! Error type shared by the whole crate.

use std::path::PathBuf;

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Card number contains a character other than an ASCII digit
    #[error("invalid digit {character:?} at position {position}")]
    InvalidDigit {
        /// 0-based character position
        position: usize,
        /// Offending character
        character: char,
    },

    /// Image file does not exist
    #[error("image not found at path: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// OCR engine failure with the engine's message
    #[error("ocr error: {0}")]
    Ocr(String),

    /// OCR call exceeded the configured timeout
    #[error("ocr timed out after {after_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds
        after_ms: u64,
    },

    /// Builder was finished without a required component
    #[error("missing component: {0}")]
    MissingComponent(&'static str),

    /// A result marked invalid carried a brand
    #[error("invalid card must not carry a brand")]
    BrandOnInvalidCard,
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
