use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a cargo.
///
/// Wraps an opaque id string to provide type safety and prevent mixing up
/// tracking ids with other string-based identifiers. Uniqueness is enforced
/// by the persistence layer (primary-key constraint), not in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    /// Creates a tracking id from an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocates a fresh random tracking id.
    ///
    /// Any sufficiently random generator suffices; UUIDv4 keeps collisions
    /// out of practical reach while the storage layer guarantees uniqueness.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the tracking id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TrackingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TrackingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for TrackingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
