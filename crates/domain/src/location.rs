//! Locations and the UN/LOCODE identifiers that key them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// United Nations location code identifying a port or place.
///
/// Five characters: a two-letter country code followed by a three-character
/// place code, e.g. "SESTO" (Stockholm) or "AUMEL" (Melbourne). Input is
/// normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnLocode(String);

impl UnLocode {
    /// Parses and validates a UN locode.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let raw: String = code.into();
        let code = raw.trim().to_ascii_uppercase();

        let bytes = code.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[..2].iter().all(|b| b.is_ascii_alphabetic())
            && bytes[2..].iter().all(|b| b.is_ascii_alphanumeric());

        if !well_formed {
            return Err(DomainError::InvalidUnLocode { code: raw });
        }

        Ok(Self(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnLocode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UnLocode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named waypoint, keyed by its UN locode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    unlocode: UnLocode,
    name: String,
}

impl Location {
    /// Creates a location.
    pub fn new(unlocode: UnLocode, name: impl Into<String>) -> Self {
        Self {
            unlocode,
            name: name.into(),
        }
    }

    /// Returns the UN locode identifying this location.
    pub fn unlocode(&self) -> &UnLocode {
        &self.unlocode
    }

    /// Returns the human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Locations are identified by their UN locode; two locations with the same
// code are the same place regardless of the display name carried along.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.unlocode == other.unlocode
    }
}

impl Eq for Location {}

impl std::hash::Hash for Location {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.unlocode.hash(state);
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unlocode)
    }
}
