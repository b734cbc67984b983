// cardcheck/src/inspector/outcome.rs

//! Tagged brand outcome and detailed inspection result.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{ENGINE_ERROR_PREFIX, IMAGE_MISSING_PREFIX};
use crate::types::ValidationResult;
use crate::{Error, Result};

/// Outcome of the brand-extraction path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandOutcome {
    /// Text recognized by the engine, trimmed of surrounding whitespace
    Recognized(String),
    /// No image resource at the given path; the engine was not called
    ImageMissing(PathBuf),
    /// The engine failed; carries the engine's error message
    EngineError(String),
}

impl BrandOutcome {
    /// Convert a raw engine result into an outcome. An `Error::Ocr` keeps
    /// only the engine's own message.
    pub fn from_recognition(result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::Recognized(text.trim().to_string()),
            Err(Error::Ocr(message)) => Self::EngineError(message),
            Err(e) => Self::EngineError(e.to_string()),
        }
    }

    /// True when the engine returned text.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }

    /// Recognized text, if any.
    pub fn recognized_text(&self) -> Option<&str> {
        match self {
            Self::Recognized(t) => Some(t),
            _ => None,
        }
    }

    /// Render as the string placed in `ValidationResult::brand`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BrandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recognized(t) => f.write_str(t),
            Self::ImageMissing(p) => write!(f, "{}{}", IMAGE_MISSING_PREFIX, p.display()),
            Self::EngineError(m) => write!(f, "{}{}", ENGINE_ERROR_PREFIX, m),
        }
    }
}

/// Detailed inspection result. `brand` is `None` exactly when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    valid: bool,
    brand: Option<BrandOutcome>,
}

impl Inspection {
    /// Checksum failed; no brand.
    pub fn invalid() -> Self {
        Self {
            valid: false,
            brand: None,
        }
    }

    /// Checksum passed with the given brand outcome.
    pub fn valid(brand: BrandOutcome) -> Self {
        Self {
            valid: true,
            brand: Some(brand),
        }
    }

    /// Whether the checksum passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Brand outcome; `None` for invalid numbers.
    pub fn brand(&self) -> Option<&BrandOutcome> {
        self.brand.as_ref()
    }

    /// Consume and return the brand outcome.
    pub fn into_brand(self) -> Option<BrandOutcome> {
        self.brand
    }
}

impl From<Inspection> for ValidationResult {
    fn from(i: Inspection) -> Self {
        ValidationResult {
            valid: i.valid,
            brand: i.brand.map(|b| b.render()),
        }
    }
}
