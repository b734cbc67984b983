// cardcheck/src/checksum.rs

//! Luhn checksum.
//!
//! Digits are processed from the rightmost one. Every second digit (odd
//! reversed position) is doubled, and 9 is subtracted when the doubled value
//! exceeds 9. The number is valid when the total is a multiple of 10.

use crate::Result;
use crate::constants::LUHN_MODULUS;
use crate::types::CardNumber;

/// Luhn total over digit values given most significant first, reduced
/// modulo 10 as it accumulates so input length cannot overflow it.
pub fn luhn_sum_iter<I>(digits: I) -> u32
where
    I: DoubleEndedIterator<Item = u8>,
{
    digits
        .rev()
        .enumerate()
        .map(|(i, d)| {
            let n = u32::from(d);
            if i % 2 == 1 {
                let doubled = n * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                n
            }
        })
        .fold(0, |acc, v| (acc + v) % LUHN_MODULUS)
}

/// Luhn total (mod 10) of a slice of digit values (0..=9), most significant first.
pub fn luhn_sum(digits: &[u8]) -> u32 {
    luhn_sum_iter(digits.iter().copied())
}

/// Validate a numeric string against Luhn's algorithm.
///
/// Any non-digit character fails with `Error::InvalidDigit`. The empty string
/// sums to 0 and is therefore reported as valid.
pub fn is_valid(number: &str) -> Result<bool> {
    Ok(CardNumber::parse(number)?.is_luhn_valid())
}

/// Compute the digit that makes `payload` followed by it Luhn-valid.
pub fn check_digit(payload: &str) -> Result<u8> {
    let number = CardNumber::parse(payload)?;
    // Reserve the check digit slot with 0 so the payload digits shift into
    // their final parity.
    let sum = luhn_sum_iter(number.digits().chain(std::iter::once(0)));
    Ok(((LUHN_MODULUS - sum) % LUHN_MODULUS) as u8)
}
