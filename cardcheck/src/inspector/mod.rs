// cardcheck/src/inspector/mod.rs

//! Card inspection: Luhn check first, then OCR brand extraction.

use std::path::Path;

use log::{debug, warn};

use crate::Result;
use crate::image::{ImageProbe, LocalFilesystem};
use crate::ocr::OcrEngine;
use crate::types::{CardNumber, ValidationResult};

mod config;
mod outcome;
pub use config::InspectorConfig;
pub use outcome::{BrandOutcome, Inspection};

pub mod builder;
pub use builder::InspectorBuilder;

#[cfg(feature = "async")]
pub mod async_inspector;
#[cfg(feature = "async")]
pub use async_inspector::AsyncCardInspector;

/// Validates a card number and, when the checksum passes, reads the brand
/// label from an image through the OCR engine.
pub struct CardInspector<E, P = LocalFilesystem> {
    engine: E,
    probe: P,
    config: InspectorConfig,
}

impl<E: OcrEngine, P: ImageProbe> CardInspector<E, P> {
    /// Inspector with the default config.
    pub fn new(engine: E, probe: P) -> Self {
        Self {
            engine,
            probe,
            config: InspectorConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// The OCR engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The image probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Inspect a card number and render the brand outcome as a string.
    ///
    /// Missing images and engine failures are reported inside `brand`; only a
    /// malformed card number returns `Err`.
    pub fn inspect(
        &self,
        card_number: &str,
        image_path: impl AsRef<Path>,
    ) -> Result<ValidationResult> {
        self.inspect_detailed(card_number, image_path)
            .map(ValidationResult::from)
    }

    /// Inspect a card number, keeping the brand outcome as a tagged value.
    pub fn inspect_detailed(
        &self,
        card_number: &str,
        image_path: impl AsRef<Path>,
    ) -> Result<Inspection> {
        let number = CardNumber::parse(card_number)?;
        if !number.is_luhn_valid() {
            debug!("checksum failed for {}", number.masked());
            return Ok(Inspection::invalid());
        }
        debug!("checksum passed for {}", number.masked());
        Ok(Inspection::valid(self.extract_brand(image_path.as_ref())))
    }

    /// Run only the brand-extraction path.
    pub fn extract_brand(&self, image_path: &Path) -> BrandOutcome {
        if !self.probe.exists(image_path) {
            warn!("image not found at {}", image_path.display());
            return BrandOutcome::ImageMissing(image_path.to_path_buf());
        }

        debug!(
            "running {} ocr on {} (lang={})",
            self.engine.name(),
            image_path.display(),
            self.config.language
        );
        let outcome = BrandOutcome::from_recognition(
            self.engine
                .recognize_text(image_path, &self.config.language),
        );
        if let BrandOutcome::EngineError(msg) = &outcome {
            warn!("{} ocr failed: {}", self.engine.name(), msg);
        }
        outcome
    }
}
