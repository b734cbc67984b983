// cardcheck/src/inspector/async_inspector.rs

//! Async counterpart of `CardInspector`.
//!
//! The OCR call is the only suspension point. It runs on tokio's blocking
//! pool and is bounded by `InspectorConfig::ocr_timeout_ms`.

use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::image::ImageProbe;
use crate::inspector::{BrandOutcome, Inspection, InspectorConfig};
use crate::ocr::OcrEngine;
use crate::types::{CardNumber, ValidationResult};
use crate::{Error, Result};

/// Async `CardInspector` over shared engine and probe handles.
#[derive(Clone)]
pub struct AsyncCardInspector {
    engine: Arc<dyn OcrEngine>,
    probe: Arc<dyn ImageProbe>,
    config: InspectorConfig,
}

impl AsyncCardInspector {
    /// Take ownership of an engine and a probe.
    pub fn new<E, P>(engine: E, probe: P) -> Self
    where
        E: OcrEngine + 'static,
        P: ImageProbe + 'static,
    {
        Self::from_shared(Arc::new(engine), Arc::new(probe))
    }

    /// Build from engines and probes already shared with other owners.
    pub fn from_shared(engine: Arc<dyn OcrEngine>, probe: Arc<dyn ImageProbe>) -> Self {
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

    /// Async form of `CardInspector::inspect`.
    pub async fn inspect(
        &self,
        card_number: &str,
        image_path: impl AsRef<Path>,
    ) -> Result<ValidationResult> {
        self.inspect_detailed(card_number, image_path)
            .await
            .map(ValidationResult::from)
    }

    /// Async form of `CardInspector::inspect_detailed`.
    pub async fn inspect_detailed(
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
        Ok(Inspection::valid(
            self.extract_brand(image_path.as_ref()).await,
        ))
    }

    /// Brand-extraction path with the OCR call bounded by the timeout.
    pub async fn extract_brand(&self, image_path: &Path) -> BrandOutcome {
        if !self.probe.exists(image_path) {
            warn!("image not found at {}", image_path.display());
            return BrandOutcome::ImageMissing(image_path.to_path_buf());
        }

        let engine = Arc::clone(&self.engine);
        let path = image_path.to_path_buf();
        let language = self.config.language.clone();
        debug!(
            "running {} ocr on {} (lang={}, timeout={}ms)",
            engine.name(),
            path.display(),
            language,
            self.config.ocr_timeout_ms
        );

        let task = tokio::task::spawn_blocking(move || engine.recognize_text(&path, &language));
        let outcome = match tokio::time::timeout(self.config.ocr_timeout(), task).await {
            Ok(Ok(result)) => BrandOutcome::from_recognition(result),
            Ok(Err(join_err)) => BrandOutcome::EngineError(format!("ocr task failed: {join_err}")),
            Err(_) => BrandOutcome::EngineError(
                Error::Timeout {
                    after_ms: self.config.ocr_timeout_ms,
                }
                .to_string(),
            ),
        };
        if let BrandOutcome::EngineError(msg) = &outcome {
            warn!("{} ocr failed: {}", self.engine.name(), msg);
        }
        outcome
    }
}
