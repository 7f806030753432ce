//! Read-only views and request payloads for the booking service.

use chrono::{DateTime, Utc};
use domain::{Cargo, DeliveryStatus, HandlingEventType};
use serde::{Deserialize, Serialize};

/// One handling event in a tracking view, with its expectation verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingEventDto {
    pub location: String,
    pub event_type: String,
    pub carrier_movement: Option<String>,
    pub completed_at: DateTime<Utc>,
    /// True if the assigned itinerary expected this event.
    pub expected: bool,
}

/// Read-only tracking snapshot of one cargo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoTrackingDto {
    pub tracking_id: String,
    pub origin: String,
    pub destination: String,
    pub status: DeliveryStatus,
    /// Location of the latest handling event; None until the cargo has
    /// been handled.
    pub current_location: Option<String>,
    /// Movement the cargo currently rides, while onboard.
    pub current_carrier_movement: Option<String>,
    pub misdirected: bool,
    /// All handling events ordered by completion time.
    pub events: Vec<HandlingEventDto>,
}

impl CargoTrackingDto {
    /// Assembles the tracking view from the aggregate's current state.
    pub fn for_cargo(cargo: &Cargo) -> Self {
        let history = cargo.delivery_history();

        let events = history
            .events_ordered_by_completion()
            .into_iter()
            .map(|event| HandlingEventDto {
                location: event.location().unlocode().to_string(),
                event_type: event.event_type().to_string(),
                carrier_movement: event
                    .carrier_movement()
                    .map(|movement| movement.id().to_string()),
                completed_at: event.completed_at(),
                expected: cargo
                    .itinerary()
                    .is_some_and(|itinerary| itinerary.is_expected(event)),
            })
            .collect();

        Self {
            tracking_id: cargo.tracking_id().to_string(),
            origin: cargo.origin().unlocode().to_string(),
            destination: cargo.final_destination().unlocode().to_string(),
            status: history.status(),
            current_location: history
                .current_location()
                .map(|location| location.unlocode().to_string()),
            current_carrier_movement: history
                .current_carrier_movement()
                .map(|movement| movement.id().to_string()),
            misdirected: cargo.is_misdirected(),
            events,
        }
    }
}

/// One leg in a routing view or itinerary candidate, all references by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegDto {
    pub carrier_movement_id: String,
    pub from: String,
    pub to: String,
}

impl LegDto {
    /// Creates a leg reference.
    pub fn new(
        carrier_movement_id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            carrier_movement_id: carrier_movement_id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Routing view of one cargo: identity, endpoints and the planned legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoRoutingDto {
    pub tracking_id: String,
    pub origin: String,
    pub destination: String,
    pub legs: Vec<LegDto>,
}

impl CargoRoutingDto {
    /// Assembles the routing view from the aggregate's current state.
    ///
    /// An unrouted cargo has an empty leg list.
    pub fn for_cargo(cargo: &Cargo) -> Self {
        let legs = cargo
            .itinerary()
            .map(|itinerary| {
                itinerary
                    .legs()
                    .iter()
                    .map(|leg| LegDto {
                        carrier_movement_id: leg.carrier_movement().id().to_string(),
                        from: leg.from().unlocode().to_string(),
                        to: leg.to().unlocode().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            tracking_id: cargo.tracking_id().to_string(),
            origin: cargo.origin().unlocode().to_string(),
            destination: cargo.final_destination().unlocode().to_string(),
            legs,
        }
    }
}

/// An itinerary to assign, as an ordered list of leg references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryCandidate {
    pub legs: Vec<LegDto>,
}

impl ItineraryCandidate {
    /// Creates a candidate from ordered leg references.
    pub fn new(legs: Vec<LegDto>) -> Self {
        Self { legs }
    }
}

/// A handling occurrence reported from the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingReport {
    pub location: String,
    pub event_type: HandlingEventType,
    pub carrier_movement_id: Option<String>,
    pub completed_at: DateTime<Utc>,
}
