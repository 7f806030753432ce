//! The Cargo aggregate root.

use common::TrackingId;
use serde::{Deserialize, Serialize};

use crate::delivery::DeliveryHistory;
use crate::handling::{HandlingEvent, HandlingEventType};
use crate::itinerary::Itinerary;
use crate::location::Location;

/// One shipment, tracked end-to-end.
///
/// A cargo is created with its identity, origin and final destination; the
/// itinerary is assigned later and may be replaced by re-routing. The
/// delivery history only ever grows. The cargo owns its itinerary and
/// history exclusively; locations and carrier movements are referenced
/// values shared with the rest of the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cargo {
    tracking_id: TrackingId,
    origin: Location,
    destination: Location,
    itinerary: Option<Itinerary>,
    delivery_history: DeliveryHistory,
}

impl Cargo {
    /// Creates a newly registered cargo with no itinerary and an empty
    /// delivery history.
    pub fn new(tracking_id: TrackingId, origin: Location, destination: Location) -> Self {
        Self {
            tracking_id,
            origin,
            destination,
            itinerary: None,
            delivery_history: DeliveryHistory::new(),
        }
    }

    /// Returns the tracking id.
    pub fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    /// Returns the origin location.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the final destination.
    pub fn final_destination(&self) -> &Location {
        &self.destination
    }

    /// Returns the assigned itinerary, if any.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    /// Returns the delivery history.
    pub fn delivery_history(&self) -> &DeliveryHistory {
        &self.delivery_history
    }

    /// Assigns an itinerary, replacing any previous one wholesale.
    ///
    /// The cargo is the sole owner of its itinerary; the replaced value is
    /// simply dropped.
    pub fn assign_itinerary(&mut self, itinerary: Itinerary) {
        self.itinerary = Some(itinerary);
    }

    /// Records a handling event against this cargo.
    pub fn handle(&mut self, event: HandlingEvent) {
        self.delivery_history.add(event);
    }

    /// Returns true if the latest handling deviates from the plan.
    ///
    /// A cargo with no handling events is never misdirected. Once handled,
    /// a cargo without an itinerary — or whose latest event the itinerary
    /// does not expect — is misdirected.
    pub fn is_misdirected(&self) -> bool {
        match (self.delivery_history.last_event(), &self.itinerary) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(event), Some(itinerary)) => !itinerary.is_expected(event),
        }
    }

    /// Returns true if the latest event unloaded the cargo at its final
    /// destination.
    pub fn is_unloaded_at_destination(&self) -> bool {
        self.delivery_history.last_event().is_some_and(|event| {
            event.event_type() == HandlingEventType::Unload
                && event.location() == &self.destination
        })
    }

    /// Returns the location of the latest handling event, falling back to
    /// the origin while the history is empty.
    pub fn last_known_location(&self) -> &Location {
        self.delivery_history
            .current_location()
            .unwrap_or(&self.origin)
    }
}

// Cargo is an entity: its identity is the tracking id.
impl PartialEq for Cargo {
    fn eq(&self, other: &Self) -> bool {
        self.tracking_id == other.tracking_id
    }
}

impl Eq for Cargo {}
