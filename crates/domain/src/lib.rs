//! Domain model for cargo booking and tracking.
//!
//! This crate provides the core domain types:
//! - Value objects: [`UnLocode`], [`Location`], [`CarrierMovementId`],
//!   [`CarrierMovement`], [`Leg`], [`Itinerary`]
//! - The handling log: [`HandlingEvent`], [`DeliveryHistory`] and the
//!   [`DeliveryStatus`] derived from it
//! - The [`Cargo`] aggregate root tying identity, route and history together

pub mod cargo;
pub mod carrier;
pub mod delivery;
pub mod error;
pub mod handling;
pub mod itinerary;
pub mod location;

pub use common::TrackingId;

pub use cargo::Cargo;
pub use carrier::{CarrierMovement, CarrierMovementId};
pub use delivery::{DeliveryHistory, DeliveryStatus};
pub use error::DomainError;
pub use handling::{HandlingEvent, HandlingEventType};
pub use itinerary::{Itinerary, Leg};
pub use location::{Location, UnLocode};
