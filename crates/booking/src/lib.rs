//! Booking and tracking service layer.
//!
//! [`BookingService`] orchestrates the repositories: it registers cargo,
//! assigns itineraries, records handling events and assembles read-only
//! tracking and routing views. Domain-significant occurrences are emitted
//! through the [`BookingEvents`] capability rather than a global logger.

pub mod config;
pub mod dto;
pub mod error;
pub mod events;
pub mod service;

pub use common::TrackingId;

pub use config::{Config, init_tracing};
pub use dto::{
    CargoRoutingDto, CargoTrackingDto, HandlingEventDto, HandlingReport, ItineraryCandidate,
    LegDto,
};
pub use error::BookingError;
pub use events::{BookingEvents, TracingEvents};
pub use service::BookingService;
