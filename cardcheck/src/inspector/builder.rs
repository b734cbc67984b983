// cardcheck/src/inspector/builder.rs

//! Builder for `CardInspector`.

use crate::image::{ImageProbe, LocalFilesystem};
use crate::inspector::{CardInspector, InspectorConfig};
use crate::ocr::OcrEngine;
use crate::{Error, Result};

/// Builder for `CardInspector`. The probe defaults to the local filesystem.
pub struct InspectorBuilder<E, P = LocalFilesystem> {
    engine: Option<E>,
    probe: P,
    config: InspectorConfig,
}

impl<E: OcrEngine> InspectorBuilder<E, LocalFilesystem> {
    /// Empty builder with the default config.
    pub fn new() -> Self {
        Self {
            engine: None,
            probe: LocalFilesystem,
            config: InspectorConfig::default(),
        }
    }
}

impl<E: OcrEngine> Default for InspectorBuilder<E, LocalFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: OcrEngine, P: ImageProbe> InspectorBuilder<E, P> {
    /// Set the OCR engine (required).
    pub fn engine(mut self, engine: E) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Replace the image probe.
    pub fn probe<Q: ImageProbe>(self, probe: Q) -> InspectorBuilder<E, Q> {
        InspectorBuilder {
            engine: self.engine,
            probe,
            config: self.config,
        }
    }

    /// Set the language hint passed to the engine.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Fails with `Error::MissingComponent` when no engine was set.
    pub fn build(self) -> Result<CardInspector<E, P>> {
        let engine = self.engine.ok_or(Error::MissingComponent("ocr engine"))?;
        Ok(CardInspector::new(engine, self.probe).with_config(self.config))
    }
}
