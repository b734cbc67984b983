// cardcheck/src/types.rs

//! Domain newtypes and the caller-facing result.

use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Card number - Newtype Pattern (ASCII 10 進数字列)
///
/// No length or prefix constraint is applied. The empty string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct CardNumber(String);

impl CardNumber {
    /// Parse a string of decimal digits. The first non-digit character is
    /// reported with its 0-based character position.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let bad = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit());
        if let Some((position, character)) = bad {
            return Err(Error::InvalidDigit {
                position,
                character,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty number.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Luhn check on an already validated number.
    pub fn is_luhn_valid(&self) -> bool {
        crate::checksum::luhn_sum_iter(self.digits()) == 0
    }

    /// Mask all but the last four digits, for log output.
    pub fn masked(&self) -> String {
        let keep = self.0.len().min(4);
        let hidden = self.0.len() - keep;
        let mut s = "*".repeat(hidden);
        s.push_str(&self.0[hidden..]);
        s
    }
}

impl TryFrom<&str> for CardNumber {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl FromStr for CardNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CardNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result handed back to callers of `CardInspector::inspect`.
///
/// `brand` is `None` whenever `valid` is false. Deserialization rejects
/// input that breaks this.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawValidationResult"))]
pub struct ValidationResult {
    /// Whether the card number passed the Luhn check
    pub valid: bool,
    /// Recognized brand, or a message describing why extraction failed
    pub brand: Option<String>,
}

/// Unchecked wire form of `ValidationResult`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawValidationResult {
    valid: bool,
    brand: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValidationResult> for ValidationResult {
    type Error = Error;

    fn try_from(raw: RawValidationResult) -> Result<Self, Self::Error> {
        if !raw.valid && raw.brand.is_some() {
            return Err(Error::BrandOnInvalidCard);
        }
        Ok(Self {
            valid: raw.valid,
            brand: raw.brand,
        })
    }
}

impl ValidationResult {
    /// Result for a number that failed the checksum
    pub fn invalid() -> Self {
        Self {
            valid: false,
            brand: None,
        }
    }

    /// Result for a number that passed the checksum
    pub fn valid_with_brand(brand: impl Into<String>) -> Self {
        Self {
            valid: true,
            brand: Some(brand.into()),
        }
    }
}
