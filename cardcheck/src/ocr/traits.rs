// cardcheck/src/ocr/traits.rs

//! The `OcrEngine` seam.

use std::path::Path;
use std::sync::Arc;

use crate::Result;

/// OcrEngine trait abstracts the text recognizer away from inspection logic.
///
/// Implementations are blocking; the async inspector moves calls onto a
/// blocking thread.
pub trait OcrEngine: Send + Sync {
    /// Short engine identifier used in log output
    fn name(&self) -> &'static str;

    /// Recognize text in the image at `path` using the given language hint
    /// (e.g. `"eng"`). The returned text is not trimmed.
    fn recognize_text(&self, path: &Path, language: &str) -> Result<String>;
}

impl<T: OcrEngine + ?Sized> OcrEngine for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn recognize_text(&self, path: &Path, language: &str) -> Result<String> {
        (**self).recognize_text(path, language)
    }
}

impl<T: OcrEngine + ?Sized> OcrEngine for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn recognize_text(&self, path: &Path, language: &str) -> Result<String> {
        (**self).recognize_text(path, language)
    }
}

impl<T: OcrEngine + ?Sized> OcrEngine for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn recognize_text(&self, path: &Path, language: &str) -> Result<String> {
        (**self).recognize_text(path, language)
    }
}
