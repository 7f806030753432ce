//! Handling events: recorded real-world occurrences for a cargo.

use chrono::{DateTime, Utc};
use common::TrackingId;
use serde::{Deserialize, Serialize};

use crate::carrier::CarrierMovement;
use crate::error::DomainError;
use crate::location::Location;

/// The kind of real-world occurrence a handling event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlingEventType {
    /// Cargo received at a location, entering the transport chain.
    Receive,

    /// Cargo loaded onto a carrier movement.
    Load,

    /// Cargo unloaded from a carrier movement.
    Unload,

    /// Cargo claimed by the consignee (end of the transport chain).
    Claim,

    /// Cargo passed a customs inspection.
    Customs,
}

impl HandlingEventType {
    /// Returns true if events of this type must reference a carrier movement.
    pub fn requires_carrier_movement(&self) -> bool {
        matches!(self, HandlingEventType::Load | HandlingEventType::Unload)
    }

    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlingEventType::Receive => "RECEIVE",
            HandlingEventType::Load => "LOAD",
            HandlingEventType::Unload => "UNLOAD",
            HandlingEventType::Claim => "CLAIM",
            HandlingEventType::Customs => "CUSTOMS",
        }
    }
}

impl std::fmt::Display for HandlingEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of one handling occurrence for a cargo.
///
/// `Load` and `Unload` events always carry the carrier movement they refer
/// to; the constructor rejects them otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingEvent {
    tracking_id: TrackingId,
    event_type: HandlingEventType,
    location: Location,
    carrier_movement: Option<CarrierMovement>,
    completed_at: DateTime<Utc>,
}

impl HandlingEvent {
    /// Creates a handling event, validating the carrier movement requirement.
    pub fn new(
        tracking_id: TrackingId,
        event_type: HandlingEventType,
        location: Location,
        carrier_movement: Option<CarrierMovement>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if event_type.requires_carrier_movement() && carrier_movement.is_none() {
            return Err(DomainError::MissingCarrierMovement { event_type });
        }

        Ok(Self {
            tracking_id,
            event_type,
            location,
            carrier_movement,
            completed_at,
        })
    }

    /// Returns the cargo this event belongs to.
    pub fn tracking_id(&self) -> &TrackingId {
        &self.tracking_id
    }

    /// Returns the event type.
    pub fn event_type(&self) -> HandlingEventType {
        self.event_type
    }

    /// Returns where the event took place.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the carrier movement involved, if any.
    pub fn carrier_movement(&self) -> Option<&CarrierMovement> {
        self.carrier_movement.as_ref()
    }

    /// Returns when the event was completed in the real world.
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::CarrierMovementId;
    use crate::location::UnLocode;
    use chrono::TimeZone;

    fn location(code: &str) -> Location {
        Location::new(UnLocode::new(code).unwrap(), code)
    }

    fn movement(id: &str, from: &str, to: &str) -> CarrierMovement {
        CarrierMovement::new(CarrierMovementId::new(id), location(from), location(to))
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2008, 3, 14, hour, 0, 0).unwrap()
    }

    #[test]
    fn load_and_unload_require_a_carrier_movement() {
        for event_type in [HandlingEventType::Load, HandlingEventType::Unload] {
            let result = HandlingEvent::new(
                TrackingId::new("XYZ"),
                event_type,
                location("SESTO"),
                None,
                at(10),
            );
            assert!(matches!(
                result,
                Err(DomainError::MissingCarrierMovement { .. })
            ));
        }
    }

    #[test]
    fn receive_claim_and_customs_do_not_require_a_movement() {
        for event_type in [
            HandlingEventType::Receive,
            HandlingEventType::Claim,
            HandlingEventType::Customs,
        ] {
            assert!(!event_type.requires_carrier_movement());
            let event = HandlingEvent::new(
                TrackingId::new("XYZ"),
                event_type,
                location("SESTO"),
                None,
                at(10),
            )
            .unwrap();
            assert!(event.carrier_movement().is_none());
        }
    }

    #[test]
    fn load_event_carries_its_movement() {
        let event = HandlingEvent::new(
            TrackingId::new("XYZ"),
            HandlingEventType::Load,
            location("SESTO"),
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(12),
        )
        .unwrap();

        assert_eq!(event.event_type(), HandlingEventType::Load);
        assert_eq!(
            event.carrier_movement().unwrap().id().as_str(),
            "CAR_001"
        );
        assert_eq!(event.completed_at(), at(12));
    }

    #[test]
    fn event_type_display() {
        assert_eq!(HandlingEventType::Receive.to_string(), "RECEIVE");
        assert_eq!(HandlingEventType::Load.to_string(), "LOAD");
        assert_eq!(HandlingEventType::Unload.to_string(), "UNLOAD");
        assert_eq!(HandlingEventType::Claim.to_string(), "CLAIM");
        assert_eq!(HandlingEventType::Customs.to_string(), "CUSTOMS");
    }

    #[test]
    fn handling_event_serialization_roundtrip() {
        let event = HandlingEvent::new(
            TrackingId::new("ABC"),
            HandlingEventType::Unload,
            location("FIHEL"),
            Some(movement("CAR_001", "SESTO", "FIHEL")),
            at(15),
        )
        .unwrap();

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: HandlingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
