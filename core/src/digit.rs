use std::fmt;

use serde::{Deserialize, Serialize};

pub const DIGIT_MIN: u8 = 1;
pub const DIGIT_MAX: u8 = 9;

/// A Sudoku value in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if (DIGIT_MIN..=DIGIT_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(i64::from(value)))
        }
    }

    /// Parses the text of a `data-number` attribute.
    pub fn parse(raw: &str) -> Result<Self, DigitError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DigitError::Empty);
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DigitError::NotANumber(trimmed.to_string()))?;
        u8::try_from(value)
            .map_err(|_| DigitError::OutOfRange(value))
            .and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(value: Digit) -> Self {
        value.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for Digit {
    type Err = DigitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    Empty,
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitError::Empty => write!(f, "digit is empty"),
            DigitError::NotANumber(raw) => write!(f, "digit '{raw}' is not a number"),
            DigitError::OutOfRange(value) => {
                write!(f, "digit {value} outside {DIGIT_MIN}..={DIGIT_MAX}")
            }
        }
    }
}

impl std::error::Error for DigitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_padded_values() {
        assert_eq!(Digit::parse(" 7 ").map(Digit::get), Ok(7));
    }

    #[test]
    fn parse_rejects_zero_and_ten() {
        assert_eq!(Digit::parse("0"), Err(DigitError::OutOfRange(0)));
        assert_eq!(Digit::parse("10"), Err(DigitError::OutOfRange(10)));
        assert_eq!(Digit::parse("-3"), Err(DigitError::OutOfRange(-3)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Digit::parse(""), Err(DigitError::Empty));
        assert_eq!(
            Digit::parse("x"),
            Err(DigitError::NotANumber("x".to_string()))
        );
    }

    #[test]
    fn serializes_as_plain_number() {
        let digit = Digit::new(4).unwrap();
        assert_eq!(serde_json::to_string(&digit).unwrap(), "4");
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
