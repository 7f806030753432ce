//! Repository abstractions and storage backends.
//!
//! The traits in [`repository`] are the persistence contracts the service
//! layer consumes. Two implementations are provided: deterministic
//! in-memory repositories for tests ([`memory`]) and PostgreSQL-backed
//! repositories for production ([`postgres`]).

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use common::TrackingId;

pub use error::{Result, StoreError};
pub use memory::{
    InMemoryCargoRepository, InMemoryCarrierMovementRepository, InMemoryLocationRepository,
};
pub use postgres::{
    PostgresCargoRepository, PostgresCarrierMovementRepository, PostgresLocationRepository,
    run_migrations,
};
pub use repository::{CargoRepository, CarrierMovementRepository, LocationRepository};
