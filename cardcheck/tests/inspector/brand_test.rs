#[path = "../common/mod.rs"]
mod common;

use std::path::PathBuf;

use cardcheck::image::LocalFilesystem;
use cardcheck::inspector::{BrandOutcome, CardInspector};
use cardcheck::ocr::MockOcrEngine;
use cardcheck::test_support::shared_mock_inspector;

#[test]
fn missing_image_on_disk_becomes_brand_message() {
    let ins = CardInspector::new(MockOcrEngine::with_text("VISA"), LocalFilesystem);
    let r = ins
        .inspect(common::fixtures::VALID_VISA, common::fixtures::MISSING_IMAGE)
        .unwrap();
    assert!(r.valid);
    assert_eq!(
        r.brand.as_deref(),
        Some("image not found at path: nonexistent.png")
    );
    assert_eq!(ins.engine().call_count(), 0);
}

#[test]
fn existing_image_text_is_trimmed() {
    let png = common::fixtures::blank_png();
    let ins = CardInspector::new(MockOcrEngine::with_text("  VISA  "), LocalFilesystem);
    let r = ins.inspect(common::fixtures::VALID_VISA, &png).unwrap();
    assert!(r.valid);
    assert_eq!(r.brand.as_deref(), Some("VISA"));
    assert_eq!(ins.engine().calls(), vec![(png, "eng".to_string())]);
}

#[test]
fn engine_failure_is_reported_inside_brand() {
    let (ins, engine, _probe) = shared_mock_inspector("unused", ["card.png"]);
    engine.push_failure("tesseract crashed");

    let detailed = ins
        .inspect_detailed(common::fixtures::VALID_VISA, "card.png")
        .unwrap();
    assert_eq!(
        detailed.brand(),
        Some(&BrandOutcome::EngineError("tesseract crashed".into()))
    );
    engine.push_failure("tesseract crashed");
    let rendered = ins.inspect(common::fixtures::VALID_VISA, "card.png").unwrap();
    assert_eq!(
        rendered.brand.as_deref(),
        Some("error extracting brand: tesseract crashed")
    );

    let r = ins.inspect(common::fixtures::VALID_VISA, "card.png").unwrap();
    // Queue drained: the fallback text is used from here on
    assert_eq!(r.brand.as_deref(), Some("unused"));
}

#[test]
fn detailed_result_keeps_missing_path() {
    let (ins, _engine, _probe) = shared_mock_inspector("VISA", []);
    let detailed = ins
        .inspect_detailed(common::fixtures::VALID_VISA, "scans/front.png")
        .unwrap();
    assert_eq!(
        detailed.into_brand(),
        Some(BrandOutcome::ImageMissing(PathBuf::from("scans/front.png")))
    );
}

#[test]
fn every_valid_fixture_reaches_the_engine() {
    let (ins, engine, _probe) = shared_mock_inspector("MASTERCARD", ["card.png"]);
    for n in common::fixtures::VALID_NUMBERS {
        let r = ins.inspect(n, "card.png").unwrap();
        assert_eq!(r.brand.as_deref(), Some("MASTERCARD"));
    }
    assert_eq!(engine.call_count(), common::fixtures::VALID_NUMBERS.len());
}
