// cardcheck/src/ocr/mock.rs

//! Recording OCR engine for tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::ocr::traits::OcrEngine;
use crate::{Error, Result};

#[derive(Debug)]
enum Reply {
    Text(String),
    Failure(String),
}

#[derive(Debug, Default)]
struct State {
    replies: VecDeque<Reply>,
    fallback: Option<String>,
    calls: Vec<(PathBuf, String)>,
}

/// Mock OCR engine for unit tests. It records every call and returns queued
/// replies, then the fallback text (if any).
#[derive(Debug, Default)]
pub struct MockOcrEngine {
    state: Mutex<State>,
}

impl MockOcrEngine {
    /// Engine with an empty queue and no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that answers every call with `text` once the queue is drained.
    pub fn with_text(text: impl Into<String>) -> Self {
        let m = Self::new();
        m.lock().fallback = Some(text.into());
        m
    }

    /// Queue a successful reply.
    pub fn push_text(&self, text: impl Into<String>) {
        self.lock().replies.push_back(Reply::Text(text.into()));
    }

    /// Queue a failure; the call returns `Error::Ocr(message)`.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.lock().replies.push_back(Reply::Failure(message.into()));
    }

    /// Recorded `(path, language)` pairs in call order.
    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.lock().calls.clone()
    }

    /// Number of `recognize_text` calls so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    // A poisoned lock only means another test thread panicked mid-call; the
    // recorded state is still usable.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OcrEngine for MockOcrEngine {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn recognize_text(&self, path: &Path, language: &str) -> Result<String> {
        let mut state = self.lock();
        state.calls.push((path.to_path_buf(), language.to_string()));
        match state.replies.pop_front() {
            Some(Reply::Text(t)) => Ok(t),
            Some(Reply::Failure(m)) => Err(Error::Ocr(m)),
            None => state
                .fallback
                .clone()
                .ok_or_else(|| Error::Ocr("no queued response".into())),
        }
    }
}
