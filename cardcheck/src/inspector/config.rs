// cardcheck/src/inspector/config.rs

//! Inspector configuration.

use std::time::Duration;

use crate::constants::DEFAULT_OCR_LANGUAGE;
use crate::utils::{DEFAULT_OCR_TIMEOUT_MS, ms};

/// Inspector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InspectorConfig {
    /// Language hint handed to the OCR engine
    pub language: String,
    /// Upper bound for one OCR call (async inspector only)
    pub ocr_timeout_ms: u64,
}

impl InspectorConfig {
    /// Set the language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the OCR timeout in milliseconds.
    pub fn with_ocr_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.ocr_timeout_ms = timeout_ms;
        self
    }

    /// OCR timeout as Duration.
    pub fn ocr_timeout(&self) -> Duration {
        ms(self.ocr_timeout_ms)
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_OCR_LANGUAGE.to_string(),
            ocr_timeout_ms: DEFAULT_OCR_TIMEOUT_MS,
        }
    }
}
