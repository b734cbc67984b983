// cardcheck/src/image.rs

//! Image existence checks.
//!
//! The inspector only needs to know whether an image resource is present
//! before handing its path to the OCR engine.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Existence check for image resources.
pub trait ImageProbe: Send + Sync {
    /// Whether an image resource is present at `path`.
    fn exists(&self, path: &Path) -> bool;
}

impl<T: ImageProbe + ?Sized> ImageProbe for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: ImageProbe + ?Sized> ImageProbe for Box<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: ImageProbe + ?Sized> ImageProbe for std::sync::Arc<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Probe backed by the local filesystem. Directories do not count as images.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl ImageProbe for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Mock probe for unit tests: a fixed set of present paths plus a call counter.
#[derive(Debug, Default)]
pub struct MockImageProbe {
    present: HashSet<PathBuf>,
    calls: AtomicUsize,
}

impl MockImageProbe {
    /// Probe that reports no paths as present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe that reports exactly the given paths as present.
    pub fn with_present<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            present: paths.into_iter().map(Into::into).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mark one more path as present.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.present.insert(path.into());
    }

    /// Number of `exists` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageProbe for MockImageProbe {
    fn exists(&self, path: &Path) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.present.contains(path)
    }
}
