#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use cardcheck::ValidationResult;
use cardcheck::image::{LocalFilesystem, MockImageProbe};
use cardcheck::inspector::AsyncCardInspector;
use cardcheck::ocr::MockOcrEngine;

#[tokio::test]
async fn async_missing_image_on_disk() {
    let ins = AsyncCardInspector::new(MockOcrEngine::with_text("VISA"), LocalFilesystem);
    let r = ins
        .inspect(common::fixtures::VALID_VISA, common::fixtures::MISSING_IMAGE)
        .await
        .unwrap();
    assert_eq!(
        r,
        ValidationResult::valid_with_brand("image not found at path: nonexistent.png")
    );
}

#[tokio::test]
async fn async_existing_image_and_idempotence() {
    let png = common::fixtures::blank_png();
    let engine = Arc::new(MockOcrEngine::with_text("\tVISA  "));
    let ins = AsyncCardInspector::from_shared(engine.clone(), Arc::new(LocalFilesystem));

    let first = ins.inspect(common::fixtures::VALID_VISA, &png).await.unwrap();
    let second = ins.inspect(common::fixtures::VALID_VISA, &png).await.unwrap();
    assert_eq!(first, ValidationResult::valid_with_brand("VISA"));
    assert_eq!(first, second);
    assert_eq!(engine.call_count(), 2);
}

#[tokio::test]
async fn concurrent_inspections_are_independent() {
    let engine = Arc::new(MockOcrEngine::with_text("VISA"));
    let probe = Arc::new(MockImageProbe::with_present(["card.png"]));
    let ins = AsyncCardInspector::from_shared(engine.clone(), probe);

    let (a, b) = tokio::join!(
        ins.inspect(common::fixtures::VALID_VISA, "card.png"),
        ins.inspect(common::fixtures::INVALID_VISA, "card.png"),
    );
    assert_eq!(a.unwrap(), ValidationResult::valid_with_brand("VISA"));
    assert_eq!(b.unwrap(), ValidationResult::invalid());
    assert_eq!(engine.call_count(), 1);
}
