// cardcheck/src/ocr/tesseract.rs

//! Tesseract-backed engine using the `leptess` bindings.
//!
//! A fresh `LepTess` handle is created per call so each call can use its own
//! language hint and no handle is shared across threads.

use std::path::{Path, PathBuf};

use leptess::LepTess;

use crate::ocr::traits::OcrEngine;
use crate::{Error, Result};

/// OCR engine backed by a local Tesseract installation.
#[derive(Debug, Clone, Default)]
pub struct TesseractEngine {
    data_path: Option<PathBuf>,
}

impl TesseractEngine {
    /// Use the tessdata directory Tesseract finds on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit tessdata directory.
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: Some(path.into()),
        }
    }

    /// Configured tessdata directory, if any.
    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize_text(&self, path: &Path, language: &str) -> Result<String> {
        if !path.is_file() {
            return Err(Error::ImageNotFound(path.to_path_buf()));
        }
        let data_path = self.data_path.as_ref().map(|p| p.to_string_lossy());
        let mut lt = LepTess::new(data_path.as_deref(), language)
            .map_err(|e| Error::Ocr(format!("failed to initialize tesseract: {e}")))?;
        lt.set_image(path)
            .map_err(|e| Error::Ocr(format!("failed to set image: {e}")))?;
        lt.get_utf8_text()
            .map_err(|e| Error::Ocr(format!("failed to extract text: {e}")))
    }
}
