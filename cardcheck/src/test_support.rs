//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common mock setup so tests across the crate and
//! the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::Arc;

use crate::image::MockImageProbe;
use crate::inspector::CardInspector;
use crate::ocr::MockOcrEngine;

/// Build an inspector whose engine answers every call with `text` and whose
/// probe reports exactly `present` as existing images.
#[doc(hidden)]
pub fn mock_inspector<'a, I>(
    text: &str,
    present: I,
) -> CardInspector<MockOcrEngine, MockImageProbe>
where
    I: IntoIterator<Item = &'a str>,
{
    CardInspector::new(
        MockOcrEngine::with_text(text),
        MockImageProbe::with_present(present),
    )
}

/// Like `mock_inspector`, but the engine and probe stay shared with the caller
/// so call counts can be asserted after the inspector has been used.
#[doc(hidden)]
pub fn shared_mock_inspector<'a, I>(
    text: &str,
    present: I,
) -> (
    CardInspector<Arc<MockOcrEngine>, Arc<MockImageProbe>>,
    Arc<MockOcrEngine>,
    Arc<MockImageProbe>,
)
where
    I: IntoIterator<Item = &'a str>,
{
    let engine = Arc::new(MockOcrEngine::with_text(text));
    let probe = Arc::new(MockImageProbe::with_present(present));
    let inspector = CardInspector::new(Arc::clone(&engine), Arc::clone(&probe));
    (inspector, engine, probe)
}

/// Reference Luhn implementation written independently of `checksum`:
/// doubles digits by position parity counted from the left.
#[doc(hidden)]
pub fn reference_luhn(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    let parity = digits.len() % 2;
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == parity {
                let x = d * 2;
                x / 10 + x % 10
            } else {
                d
            }
        })
        .sum();
    total % 10 == 0
}
