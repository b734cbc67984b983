// cardcheck/src/lib.rs

//! cardcheck
//!
//! Luhn checksum validation for card numbers, with the card brand read from
//! an image by an OCR engine once the checksum passes.
#![warn(missing_docs)]

pub mod checksum;
pub mod constants;
pub mod error;
pub mod image;
pub mod inspector;
pub mod ocr;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
