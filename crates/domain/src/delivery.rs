//! Delivery history and the status derived from it.

use serde::{Deserialize, Serialize};

use crate::carrier::CarrierMovement;
use crate::handling::{HandlingEvent, HandlingEventType};
use crate::location::Location;

/// Where a cargo stands in its transport chain, derived from the latest
/// handling event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// No handling event has been recorded yet.
    NotReceived,

    /// The cargo sits in a port (received, unloaded, or through customs).
    InPort,

    /// The cargo rides a carrier movement.
    OnboardCarrier,

    /// The cargo has been claimed by the consignee.
    Claimed,

    /// Carried for statuses supplied by external systems; never derived
    /// from a handling event here.
    Unknown,
}

impl DeliveryStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::NotReceived => "NOT_RECEIVED",
            DeliveryStatus::InPort => "IN_PORT",
            DeliveryStatus::OnboardCarrier => "ONBOARD_CARRIER",
            DeliveryStatus::Claimed => "CLAIMED",
            DeliveryStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The append-only log of handling events for one cargo.
///
/// Events are kept in the order they were recorded; queries order by
/// completion time. The "latest" event is the one with the greatest
/// completion time, ties broken in favor of the most recently recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryHistory {
    events: Vec<HandlingEvent>,
}

impl DeliveryHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handling event. Events are never removed or rewritten.
    pub fn add(&mut self, event: HandlingEvent) {
        self.events.push(event);
    }

    /// Returns true if no event has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns all events ordered by completion time.
    pub fn events_ordered_by_completion(&self) -> Vec<&HandlingEvent> {
        let mut ordered: Vec<&HandlingEvent> = self.events.iter().collect();
        ordered.sort_by_key(|event| event.completed_at());
        ordered
    }

    /// Returns the latest event, or None for an empty history.
    pub fn last_event(&self) -> Option<&HandlingEvent> {
        self.events.iter().max_by_key(|event| event.completed_at())
    }

    /// Derives the delivery status from the latest event.
    pub fn status(&self) -> DeliveryStatus {
        match self.last_event() {
            None => DeliveryStatus::NotReceived,
            Some(event) => match event.event_type() {
                HandlingEventType::Load => DeliveryStatus::OnboardCarrier,
                HandlingEventType::Unload
                | HandlingEventType::Receive
                | HandlingEventType::Customs => DeliveryStatus::InPort,
                HandlingEventType::Claim => DeliveryStatus::Claimed,
            },
        }
    }

    /// Returns the location of the latest event, or None for an empty
    /// history.
    pub fn current_location(&self) -> Option<&Location> {
        self.last_event().map(HandlingEvent::location)
    }

    /// Returns the movement the cargo currently rides, or None unless the
    /// latest event put it on board.
    pub fn current_carrier_movement(&self) -> Option<&CarrierMovement> {
        self.last_event()
            .filter(|event| event.event_type() == HandlingEventType::Load)
            .and_then(HandlingEvent::carrier_movement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::CarrierMovementId;
    use crate::location::UnLocode;
    use chrono::{DateTime, TimeZone, Utc};
    use common::TrackingId;

    fn location(code: &str) -> Location {
        Location::new(UnLocode::new(code).unwrap(), code)
    }

    fn movement(id: &str, from: &str, to: &str) -> CarrierMovement {
        CarrierMovement::new(CarrierMovementId::new(id), location(from), location(to))
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2008, 3, 14, hour, 0, 0).unwrap()
    }

    fn event(
        event_type: HandlingEventType,
        code: &str,
        carrier_movement: Option<CarrierMovement>,
        completed_at: DateTime<Utc>,
    ) -> HandlingEvent {
        HandlingEvent::new(
            TrackingId::new("XYZ"),
            event_type,
            location(code),
            carrier_movement,
            completed_at,
        )
        .unwrap()
    }

    #[test]
    fn empty_history_is_not_received_and_nowhere() {
        let history = DeliveryHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.status(), DeliveryStatus::NotReceived);
        assert!(history.current_location().is_none());
        assert!(history.current_carrier_movement().is_none());
        assert!(history.last_event().is_none());
    }

    #[test]
    fn single_receive_puts_the_cargo_in_port() {
        let mut history = DeliveryHistory::new();
        history.add(event(HandlingEventType::Receive, "SESTO", None, at(8)));

        assert_eq!(history.status(), DeliveryStatus::InPort);
        assert_eq!(
            history.current_location().unwrap().unlocode().as_str(),
            "SESTO"
        );
        assert!(history.current_carrier_movement().is_none());
    }

    #[test]
    fn load_puts_the_cargo_onboard_its_movement() {
        let mut history = DeliveryHistory::new();
        history.add(event(HandlingEventType::Receive, "SESTO", None, at(8)));
        history.add(event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(10),
        ));

        assert_eq!(history.status(), DeliveryStatus::OnboardCarrier);
        assert_eq!(
            history
                .current_carrier_movement()
                .unwrap()
                .id()
                .as_str(),
            "CAR_001"
        );
    }

    #[test]
    fn unload_clears_the_current_movement() {
        let mut history = DeliveryHistory::new();
        history.add(event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(10),
        ));
        history.add(event(
            HandlingEventType::Unload,
            "FIHEL",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(14),
        ));

        assert_eq!(history.status(), DeliveryStatus::InPort);
        assert_eq!(
            history.current_location().unwrap().unlocode().as_str(),
            "FIHEL"
        );
        assert!(history.current_carrier_movement().is_none());
    }

    #[test]
    fn claim_ends_the_chain() {
        let mut history = DeliveryHistory::new();
        history.add(event(HandlingEventType::Claim, "AUMEL", None, at(20)));
        assert_eq!(history.status(), DeliveryStatus::Claimed);
    }

    #[test]
    fn latest_event_wins_regardless_of_insertion_order() {
        let mut history = DeliveryHistory::new();
        // Recorded out of order: the unload arrives before the load report.
        history.add(event(
            HandlingEventType::Unload,
            "FIHEL",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(14),
        ));
        history.add(event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(10),
        ));

        assert_eq!(history.status(), DeliveryStatus::InPort);
        assert_eq!(
            history.current_location().unwrap().unlocode().as_str(),
            "FIHEL"
        );
    }

    #[test]
    fn events_are_ordered_by_completion_time() {
        let mut history = DeliveryHistory::new();
        history.add(event(HandlingEventType::Claim, "AUMEL", None, at(20)));
        history.add(event(HandlingEventType::Receive, "SESTO", None, at(8)));
        history.add(event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_001", "SESTO", "AUMEL")),
            at(10),
        ));

        let ordered = history.events_ordered_by_completion();
        let types: Vec<_> = ordered.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec![
                HandlingEventType::Receive,
                HandlingEventType::Load,
                HandlingEventType::Claim
            ]
        );
    }

    #[test]
    fn completion_time_ties_break_towards_the_latest_recording() {
        let mut history = DeliveryHistory::new();
        history.add(event(HandlingEventType::Receive, "SESTO", None, at(8)));
        history.add(event(HandlingEventType::Customs, "SESTO", None, at(8)));

        assert_eq!(
            history.last_event().unwrap().event_type(),
            HandlingEventType::Customs
        );
    }

    #[test]
    fn status_display() {
        assert_eq!(DeliveryStatus::NotReceived.to_string(), "NOT_RECEIVED");
        assert_eq!(DeliveryStatus::InPort.to_string(), "IN_PORT");
        assert_eq!(
            DeliveryStatus::OnboardCarrier.to_string(),
            "ONBOARD_CARRIER"
        );
        assert_eq!(DeliveryStatus::Claimed.to_string(), "CLAIMED");
        assert_eq!(DeliveryStatus::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn history_serialization_roundtrip() {
        let mut history = DeliveryHistory::new();
        history.add(event(HandlingEventType::Receive, "SESTO", None, at(8)));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: DeliveryHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
