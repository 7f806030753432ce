//! Domain error types.

use thiserror::Error;

use crate::handling::HandlingEventType;

/// Errors raised when constructing domain values from invalid input.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The string is not a well-formed UN location code.
    #[error("invalid UN locode: {code:?} (expected two letters followed by three alphanumerics)")]
    InvalidUnLocode { code: String },

    /// An itinerary was built from an empty leg list.
    #[error("an itinerary must contain at least one leg")]
    EmptyItinerary,

    /// A handling event of this type must reference a carrier movement.
    #[error("handling event type {event_type} requires a carrier movement")]
    MissingCarrierMovement { event_type: HandlingEventType },
}
