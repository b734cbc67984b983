#[path = "../common/mod.rs"]
mod common;

use cardcheck::ValidationResult;
use cardcheck::test_support::shared_mock_inspector;

#[test]
fn invalid_number_never_touches_probe_or_engine() {
    let (ins, engine, probe) = shared_mock_inspector("VISA", [common::fixtures::MISSING_IMAGE]);

    for path in ["", "nonexistent.png", "card.png", "../../etc/passwd"] {
        let r = ins.inspect(common::fixtures::INVALID_VISA, path).unwrap();
        assert_eq!(r, ValidationResult { valid: false, brand: None });
    }

    assert_eq!(engine.call_count(), 0);
    assert_eq!(probe.call_count(), 0);
}

#[test]
fn malformed_number_fails_before_any_io() {
    let (ins, engine, probe) = shared_mock_inspector("VISA", []);
    assert!(ins.inspect("4532-0151-1283-0366", "card.png").is_err());
    assert_eq!(engine.call_count(), 0);
    assert_eq!(probe.call_count(), 0);
}
