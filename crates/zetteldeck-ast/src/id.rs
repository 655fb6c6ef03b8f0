//! Zettel identifiers
//!
//! A zettel is addressed by a 14-digit decimal identifier, conventionally
//! the creation timestamp `YYYYMMDDhhmmss`. The value `0` is reserved as the
//! invalid identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits of a formatted identifier
pub const LENGTH: usize = 14;

const MAX_VALUE: u64 = 99_999_999_999_999;

/// Errors produced while parsing an identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Input does not have exactly 14 characters
    #[error("zettel identifier {input:?} must have 14 digits")]
    InvalidLength { input: String },

    /// Input contains a non-digit character
    #[error("zettel identifier {input:?} contains a non-digit")]
    NotNumeric { input: String },

    /// Input is all zeros
    #[error("zettel identifier 00000000000000 is reserved")]
    Reserved,
}

impl IdError {
    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "ZID001",
            Self::NotNumeric { .. } => "ZID002",
            Self::Reserved => "ZID003",
        }
    }
}

/// Identifier of a zettel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZettelId(u64);

impl ZettelId {
    /// The reserved, invalid identifier
    pub const INVALID: ZettelId = ZettelId(0);

    /// Identifier of the default home zettel
    pub const DEFAULT_HOME: ZettelId = ZettelId(10_000_000_000_100);

    /// Create an identifier from its numeric value.
    ///
    /// Returns `None` for zero and for values with more than 14 digits.
    pub fn new(value: u64) -> Option<Self> {
        if value == 0 || value > MAX_VALUE {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Parse the 14-digit textual form
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.len() != LENGTH {
            return Err(IdError::InvalidLength {
                input: s.to_string(),
            });
        }
        let mut value = 0u64;
        for b in s.bytes() {
            if !b.is_ascii_digit() {
                return Err(IdError::NotNumeric {
                    input: s.to_string(),
                });
            }
            value = value * 10 + u64::from(b - b'0');
        }
        if value == 0 {
            return Err(IdError::Reserved);
        }
        Ok(Self(value))
    }

    /// Numeric value
    pub fn value(self) -> u64 {
        self.0
    }

    /// Check whether this is a usable identifier
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ZettelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:014}", self.0)
    }
}

impl FromStr for ZettelId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZettelId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZettelId> for String {
    fn from(id: ZettelId) -> Self {
        id.to_string()
    }
}
