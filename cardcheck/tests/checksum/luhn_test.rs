#[path = "../common/mod.rs"]
mod common;

use cardcheck::checksum::{check_digit, is_valid};
use cardcheck::{CardNumber, Error};

#[test]
fn visa_test_number_is_valid() {
    assert!(is_valid(common::fixtures::VALID_VISA).unwrap());
}

#[test]
fn altered_last_digit_is_invalid() {
    assert!(!is_valid(common::fixtures::INVALID_VISA).unwrap());
}

#[test]
fn empty_string_passes_known_quirk() {
    // Nothing to sum: 0 mod 10 == 0. Asserted so a change here is deliberate.
    assert!(is_valid("").unwrap());
}

#[test]
fn well_known_numbers_are_valid() {
    for n in common::fixtures::VALID_NUMBERS {
        assert!(is_valid(n).unwrap(), "{} should pass", n);
    }
}

#[test]
fn non_digits_are_rejected_with_position() {
    match is_valid("4532x15112830366") {
        Err(Error::InvalidDigit {
            position,
            character,
        }) => {
            assert_eq!(position, 4);
            assert_eq!(character, 'x');
        }
        other => panic!("expected invalid digit, got {:?}", other),
    }
}

#[test]
fn check_digit_completes_visa_prefix() {
    let payload = &common::fixtures::VALID_VISA[..15];
    assert_eq!(check_digit(payload).unwrap(), 6);
}

#[test]
fn card_number_agrees_with_free_function() {
    let n: CardNumber = common::fixtures::VALID_VISA.parse().unwrap();
    assert!(n.is_luhn_valid());
    let n = CardNumber::parse(common::fixtures::INVALID_VISA).unwrap();
    assert!(!n.is_luhn_valid());
}
