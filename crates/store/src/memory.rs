use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use common::TrackingId;
use domain::{Cargo, CarrierMovement, CarrierMovementId, Location, UnLocode};
use tokio::sync::RwLock;

use crate::{
    Result, StoreError,
    repository::{CargoRepository, CarrierMovementRepository, LocationRepository},
};

/// In-memory cargo repository for testing.
///
/// Cloning shares the underlying state, so a repository can be seeded and
/// then handed to a service while the test keeps its own handle.
///
/// Storage faults are injectable per tracking id via [`fail_finds_for`],
/// which makes subsequent `find` calls for that id return
/// [`StoreError::Unavailable`]. This is an explicit test fixture; no id has
/// baked-in failure behavior.
///
/// [`fail_finds_for`]: InMemoryCargoRepository::fail_finds_for
#[derive(Clone, Default)]
pub struct InMemoryCargoRepository {
    cargos: Arc<RwLock<HashMap<TrackingId, Cargo>>>,
    failing: Arc<RwLock<HashSet<TrackingId>>>,
}

impl InMemoryCargoRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `find` fail with [`StoreError::Unavailable`] for this id.
    pub async fn fail_finds_for(&self, tracking_id: TrackingId) {
        self.failing.write().await.insert(tracking_id);
    }

    /// Returns the number of stored cargo.
    pub async fn len(&self) -> usize {
        self.cargos.read().await.len()
    }

    /// Returns true if no cargo is stored.
    pub async fn is_empty(&self) -> bool {
        self.cargos.read().await.is_empty()
    }
}

#[async_trait]
impl CargoRepository for InMemoryCargoRepository {
    async fn find(&self, tracking_id: &TrackingId) -> Result<Option<Cargo>> {
        if self.failing.read().await.contains(tracking_id) {
            return Err(StoreError::Unavailable {
                reason: format!("injected fault for tracking id {tracking_id}"),
            });
        }

        Ok(self.cargos.read().await.get(tracking_id).cloned())
    }

    async fn save(&self, cargo: &Cargo) -> Result<()> {
        self.cargos
            .write()
            .await
            .insert(cargo.tracking_id().clone(), cargo.clone());
        Ok(())
    }

    async fn next_tracking_id(&self) -> Result<TrackingId> {
        Ok(TrackingId::random())
    }

    async fn find_all(&self) -> Result<Vec<Cargo>> {
        let mut all: Vec<Cargo> = self.cargos.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.tracking_id().as_str().cmp(b.tracking_id().as_str()));
        Ok(all)
    }
}

/// In-memory location repository for testing.
#[derive(Clone, Default)]
pub struct InMemoryLocationRepository {
    locations: Arc<RwLock<HashMap<UnLocode, Location>>>,
}

impl InMemoryLocationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a location.
    pub async fn store(&self, location: Location) {
        self.locations
            .write()
            .await
            .insert(location.unlocode().clone(), location);
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn find(&self, unlocode: &UnLocode) -> Result<Option<Location>> {
        Ok(self.locations.read().await.get(unlocode).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Location>> {
        let mut all: Vec<Location> = self.locations.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.unlocode().as_str().cmp(b.unlocode().as_str()));
        Ok(all)
    }
}

/// In-memory carrier movement repository for testing.
#[derive(Clone, Default)]
pub struct InMemoryCarrierMovementRepository {
    movements: Arc<RwLock<HashMap<CarrierMovementId, CarrierMovement>>>,
}

impl InMemoryCarrierMovementRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a carrier movement.
    pub async fn store(&self, movement: CarrierMovement) {
        self.movements
            .write()
            .await
            .insert(movement.id().clone(), movement);
    }
}

#[async_trait]
impl CarrierMovementRepository for InMemoryCarrierMovementRepository {
    async fn find(&self, id: &CarrierMovementId) -> Result<Option<CarrierMovement>> {
        Ok(self.movements.read().await.get(id).cloned())
    }
}
