//! Service-level error types.

use common::TrackingId;
use domain::{CarrierMovementId, DomainError, UnLocode};
use store::StoreError;
use thiserror::Error;

/// Errors surfaced by the booking service.
///
/// Lookup failures are typed per referenced identifier; invalid input and
/// storage faults pass through from the domain and store layers.
#[derive(Debug, Error)]
pub enum BookingError {
    /// No cargo is registered under this tracking id.
    #[error("cargo not found: {0}")]
    UnknownCargo(TrackingId),

    /// No location is known under this UN locode.
    #[error("location not found: {0}")]
    UnknownLocation(UnLocode),

    /// No carrier movement is known under this id.
    #[error("carrier movement not found: {0}")]
    UnknownCarrierMovement(CarrierMovementId),

    /// The request carried invalid input.
    #[error("invalid request: {0}")]
    Domain(#[from] DomainError),

    /// The storage layer failed; distinct from not-found and expected to be
    /// retried or surfaced by the caller.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl BookingError {
    /// Returns true for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BookingError::UnknownCargo(_)
                | BookingError::UnknownLocation(_)
                | BookingError::UnknownCarrierMovement(_)
        )
    }
}
