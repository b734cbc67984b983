// cardcheck/src/ocr/mod.rs

//! OCR engines used to read the brand label.

pub mod mock;
pub mod traits;
#[cfg(feature = "tesseract")]
pub mod tesseract;

pub use mock::MockOcrEngine;
#[cfg(feature = "tesseract")]
pub use tesseract::TesseractEngine;
pub use traits::OcrEngine;
