//! Structured emission of domain-significant occurrences.
//!
//! The service reports what happened through this capability instead of a
//! global logger, so callers can route occurrences to logs, notifications
//! or test recorders.

use common::TrackingId;
use domain::{HandlingEvent, Location, UnLocode};

/// Sink for domain-significant occurrences in the booking service.
pub trait BookingEvents: Send + Sync {
    /// A new cargo was registered.
    fn cargo_registered(&self, tracking_id: &TrackingId, origin: &UnLocode, destination: &UnLocode);

    /// An itinerary was assigned (or re-assigned) to a cargo.
    fn itinerary_assigned(&self, tracking_id: &TrackingId, legs: usize);

    /// A handling event was recorded against a cargo.
    fn handling_event_recorded(&self, tracking_id: &TrackingId, event: &HandlingEvent);

    /// A cargo's latest handling deviates from its plan.
    fn cargo_misdirected(&self, tracking_id: &TrackingId, last_event: &HandlingEvent);

    /// A cargo was unloaded at its final destination.
    fn cargo_arrived(&self, tracking_id: &TrackingId, destination: &Location);
}

/// Default sink that emits occurrences as structured tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEvents;

impl BookingEvents for TracingEvents {
    fn cargo_registered(
        &self,
        tracking_id: &TrackingId,
        origin: &UnLocode,
        destination: &UnLocode,
    ) {
        tracing::info!(%tracking_id, %origin, %destination, "registered new cargo");
    }

    fn itinerary_assigned(&self, tracking_id: &TrackingId, legs: usize) {
        tracing::info!(%tracking_id, legs, "assigned itinerary");
    }

    fn handling_event_recorded(&self, tracking_id: &TrackingId, event: &HandlingEvent) {
        tracing::info!(
            %tracking_id,
            event_type = %event.event_type(),
            location = %event.location(),
            "recorded handling event"
        );
    }

    fn cargo_misdirected(&self, tracking_id: &TrackingId, last_event: &HandlingEvent) {
        tracing::warn!(
            %tracking_id,
            last_event_type = %last_event.event_type(),
            last_event_location = %last_event.location(),
            "cargo has been misdirected"
        );
    }

    fn cargo_arrived(&self, tracking_id: &TrackingId, destination: &Location) {
        tracing::info!(%tracking_id, %destination, "cargo unloaded at its final destination");
    }
}
