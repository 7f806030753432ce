//! Carrier movements: scheduled transports between two locations.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Identifies a scheduled carrier movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierMovementId(String);

impl CarrierMovementId {
    /// Creates a carrier movement id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CarrierMovementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CarrierMovementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CarrierMovementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CarrierMovementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A scheduled transport from one location to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierMovement {
    id: CarrierMovementId,
    departure: Location,
    arrival: Location,
}

impl CarrierMovement {
    /// Creates a carrier movement.
    pub fn new(id: CarrierMovementId, departure: Location, arrival: Location) -> Self {
        Self {
            id,
            departure,
            arrival,
        }
    }

    /// Returns the movement id.
    pub fn id(&self) -> &CarrierMovementId {
        &self.id
    }

    /// Returns the departure location.
    pub fn departure(&self) -> &Location {
        &self.departure
    }

    /// Returns the arrival location.
    pub fn arrival(&self) -> &Location {
        &self.arrival
    }
}
