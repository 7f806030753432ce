use async_trait::async_trait;
use common::TrackingId;
use domain::{Cargo, CarrierMovement, CarrierMovementId, Location, UnLocode};

use crate::Result;

/// Persistence contract for the cargo aggregate.
///
/// All implementations must be thread-safe (Send + Sync). Lookups return
/// `Ok(None)` when no record exists; errors are reserved for storage
/// faults.
#[async_trait]
pub trait CargoRepository: Send + Sync {
    /// Finds a cargo by tracking id.
    async fn find(&self, tracking_id: &TrackingId) -> Result<Option<Cargo>>;

    /// Saves a cargo, replacing any previously stored state for the same
    /// tracking id.
    async fn save(&self, cargo: &Cargo) -> Result<()>;

    /// Allocates a tracking id for a cargo yet to be saved.
    ///
    /// Uniqueness is guaranteed by the storage layer, not the generator:
    /// the id does not exist in the repository until `save` is called.
    async fn next_tracking_id(&self) -> Result<TrackingId>;

    /// Returns all stored cargo.
    async fn find_all(&self) -> Result<Vec<Cargo>>;
}

/// Persistence contract for locations.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Finds a location by UN locode.
    async fn find(&self, unlocode: &UnLocode) -> Result<Option<Location>>;

    /// Returns all known locations.
    async fn find_all(&self) -> Result<Vec<Location>>;
}

/// Persistence contract for carrier movements.
#[async_trait]
pub trait CarrierMovementRepository: Send + Sync {
    /// Finds a carrier movement by id.
    async fn find(&self, id: &CarrierMovementId) -> Result<Option<CarrierMovement>>;
}
