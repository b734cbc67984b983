#[path = "../common/mod.rs"]
mod common;

use cardcheck::test_support::mock_inspector;

#[test]
fn repeated_inspection_yields_identical_results() {
    let ins = mock_inspector(" VISA\n", ["card.png"]);

    let first = ins.inspect(common::fixtures::VALID_VISA, "card.png").unwrap();
    let second = ins.inspect(common::fixtures::VALID_VISA, "card.png").unwrap();
    assert_eq!(first, second);

    let first = ins.inspect(common::fixtures::INVALID_VISA, "card.png").unwrap();
    let second = ins.inspect(common::fixtures::INVALID_VISA, "card.png").unwrap();
    assert_eq!(first, second);

    let first = ins.inspect(common::fixtures::VALID_VISA, "gone.png").unwrap();
    let second = ins.inspect(common::fixtures::VALID_VISA, "gone.png").unwrap();
    assert_eq!(first, second);
}
