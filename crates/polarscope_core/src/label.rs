//! Sentiment labels and the two-class code scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A sentiment in the closed two-value encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Code `1`.
    Negative,
    /// Code `2`.
    Positive,
}

impl Sentiment {
    /// Map a raw code onto the encoding. Codes other than `1` and `2` have no sentiment.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Negative),
            2 => Some(Self::Positive),
            _ => None,
        }
    }

    /// The raw code of this sentiment.
    pub fn code(self) -> i64 {
        match self {
            Self::Negative => 1,
            Self::Positive => 2,
        }
    }
}

impl TryFrom<i64> for Sentiment {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "sentiment code must be 1 (negative) or 2 (positive), got {}",
                code
            ))
        })
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => f.write_str("Negative"),
            Self::Positive => f.write_str("Positive"),
        }
    }
}

/// The value of one label cell.
///
/// `Valid` holds whatever integer the field contained, which may lie outside
/// the two-value domain (e.g. `0`). Only [`Label::sentiment`] decides whether
/// the cell takes part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Label {
    /// A parsed integer code.
    Valid(i64),
    /// The field was empty or not a number.
    #[default]
    Missing,
}

impl Label {
    /// Parse a raw field into a label.
    ///
    /// Leading whitespace and an optional sign are accepted, followed by the
    /// longest run of ASCII digits. Anything after the digits is ignored, so
    /// `"2.0"` reads as `2`. A field without digits, or one that overflows
    /// `i64`, is [`Label::Missing`].
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits_end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Self::Missing;
        }

        let mut value: i64 = 0;
        for b in rest[..digits_end].bytes() {
            let digit = i64::from(b - b'0');
            let next = value
                .checked_mul(10)
                .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
            match next {
                Some(v) => value = v,
                None => return Self::Missing,
            }
        }
        Self::Valid(value)
    }

    /// The raw code, if present.
    pub fn code(self) -> Option<i64> {
        match self {
            Self::Valid(code) => Some(code),
            Self::Missing => None,
        }
    }

    /// The sentiment this label encodes, if it is in the two-value domain.
    pub fn sentiment(self) -> Option<Sentiment> {
        self.code().and_then(Sentiment::from_code)
    }

    /// Whether the cell is missing.
    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<i64>> for Label {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Missing, Self::Valid)
    }
}

impl From<Sentiment> for Label {
    fn from(sentiment: Sentiment) -> Self {
        Self::Valid(sentiment.code())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(code) => write!(f, "{}", code),
            Self::Missing => f.write_str("-"),
        }
    }
}
