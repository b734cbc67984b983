// cardcheck/src/prelude.rs

//! Convenience re-exports.

pub use crate::checksum::{check_digit, is_valid};
pub use crate::image::{ImageProbe, LocalFilesystem};
#[cfg(feature = "async")]
pub use crate::inspector::AsyncCardInspector;
pub use crate::inspector::{
    BrandOutcome, CardInspector, Inspection, InspectorBuilder, InspectorConfig,
};
pub use crate::ocr::OcrEngine;
#[cfg(feature = "tesseract")]
pub use crate::ocr::TesseractEngine;
pub use crate::{CardNumber, Error, Result, ValidationResult};

// Re-export small utilities for convenience
pub use crate::utils::ms;
