//! Itineraries: the planned route of a cargo as an ordered sequence of legs.

use serde::{Deserialize, Serialize};

use crate::carrier::CarrierMovement;
use crate::error::DomainError;
use crate::handling::{HandlingEvent, HandlingEventType};
use crate::location::Location;

/// One planned segment of an itinerary, bound to a carrier movement.
///
/// The leg's endpoints may diverge from the movement's own endpoints when
/// the cargo rides only part of the movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    carrier_movement: CarrierMovement,
    from: Location,
    to: Location,
}

impl Leg {
    /// Creates a leg.
    pub fn new(carrier_movement: CarrierMovement, from: Location, to: Location) -> Self {
        Self {
            carrier_movement,
            from,
            to,
        }
    }

    /// Returns the carrier movement this leg rides.
    pub fn carrier_movement(&self) -> &CarrierMovement {
        &self.carrier_movement
    }

    /// Returns where the cargo is loaded for this leg.
    pub fn from(&self) -> &Location {
        &self.from
    }

    /// Returns where the cargo is unloaded after this leg.
    pub fn to(&self) -> &Location {
        &self.to
    }
}

/// The planned route of a cargo: a non-empty, ordered sequence of legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Creates an itinerary from an ordered leg list.
    ///
    /// Input order is preserved exactly. An empty list is rejected.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { legs })
    }

    /// Returns the legs in planned order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns true if consecutive legs chain endpoint-to-endpoint
    /// (leg\[i\].to == leg\[i+1\].from).
    ///
    /// Chaining is not enforced at construction; partial legs are allowed.
    pub fn is_contiguous(&self) -> bool {
        self.legs.windows(2).all(|pair| pair[0].to == pair[1].from)
    }

    /// Returns true if the handling event matches the plan.
    ///
    /// A receive is expected at the first leg's origin, a claim at the last
    /// leg's destination. Loads and unloads are expected when some leg rides
    /// the same carrier movement and its endpoint matches the event
    /// location. Customs inspections are not itinerary-planned and never
    /// count against the route.
    pub fn is_expected(&self, event: &HandlingEvent) -> bool {
        match event.event_type() {
            HandlingEventType::Receive => self
                .legs
                .first()
                .is_some_and(|leg| leg.from() == event.location()),
            HandlingEventType::Load => event.carrier_movement().is_some_and(|movement| {
                self.legs.iter().any(|leg| {
                    leg.carrier_movement().id() == movement.id()
                        && leg.from() == event.location()
                })
            }),
            HandlingEventType::Unload => event.carrier_movement().is_some_and(|movement| {
                self.legs.iter().any(|leg| {
                    leg.carrier_movement().id() == movement.id() && leg.to() == event.location()
                })
            }),
            HandlingEventType::Claim => self
                .legs
                .last()
                .is_some_and(|leg| leg.to() == event.location()),
            HandlingEventType::Customs => true,
        }
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

    fn leg(id: &str, from: &str, to: &str) -> Leg {
        Leg::new(movement(id, from, to), location(from), location(to))
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2008, 3, 14, hour, 0, 0).unwrap()
    }

    fn event(
        event_type: HandlingEventType,
        code: &str,
        carrier_movement: Option<CarrierMovement>,
    ) -> HandlingEvent {
        HandlingEvent::new(
            TrackingId::new("XYZ"),
            event_type,
            location(code),
            carrier_movement,
            at(10),
        )
        .unwrap()
    }

    /// SESTO -> FIHEL -> AUMEL, two movements.
    fn stockholm_to_melbourne() -> Itinerary {
        Itinerary::new(vec![
            leg("CAR_001", "SESTO", "FIHEL"),
            leg("CAR_002", "FIHEL", "AUMEL"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_leg_list() {
        let result = Itinerary::new(vec![]);
        assert!(matches!(result, Err(DomainError::EmptyItinerary)));
    }

    #[test]
    fn preserves_leg_order() {
        let legs = vec![
            leg("CAR_001", "SESTO", "FIHEL"),
            leg("CAR_002", "FIHEL", "DEHAM"),
            leg("CAR_003", "DEHAM", "AUMEL"),
        ];
        let itinerary = Itinerary::new(legs.clone()).unwrap();
        assert_eq!(itinerary.legs(), legs.as_slice());
    }

    #[test]
    fn contiguity_check() {
        assert!(stockholm_to_melbourne().is_contiguous());

        let gap = Itinerary::new(vec![
            leg("CAR_001", "SESTO", "FIHEL"),
            leg("CAR_002", "DEHAM", "AUMEL"),
        ])
        .unwrap();
        assert!(!gap.is_contiguous());
    }

    #[test]
    fn receive_is_expected_at_the_first_leg_origin() {
        let itinerary = stockholm_to_melbourne();
        assert!(itinerary.is_expected(&event(HandlingEventType::Receive, "SESTO", None)));
        assert!(!itinerary.is_expected(&event(HandlingEventType::Receive, "FIHEL", None)));
    }

    #[test]
    fn load_is_expected_on_a_planned_movement_at_its_origin() {
        let itinerary = stockholm_to_melbourne();

        let planned = event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
        );
        assert!(itinerary.is_expected(&planned));

        // Right movement, wrong location.
        let wrong_port = event(
            HandlingEventType::Load,
            "FIHEL",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
        );
        assert!(!itinerary.is_expected(&wrong_port));

        // Movement not on the route at all.
        let stray = event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_999", "SESTO", "CNHKG")),
        );
        assert!(!itinerary.is_expected(&stray));
    }

    #[test]
    fn unload_is_expected_on_a_planned_movement_at_its_destination() {
        let itinerary = stockholm_to_melbourne();

        let planned = event(
            HandlingEventType::Unload,
            "AUMEL",
            Some(movement("CAR_002", "FIHEL", "AUMEL")),
        );
        assert!(itinerary.is_expected(&planned));

        let wrong_port = event(
            HandlingEventType::Unload,
            "FIHEL",
            Some(movement("CAR_002", "FIHEL", "AUMEL")),
        );
        assert!(!itinerary.is_expected(&wrong_port));
    }

    #[test]
    fn claim_is_expected_at_the_last_leg_destination() {
        let itinerary = stockholm_to_melbourne();
        assert!(itinerary.is_expected(&event(HandlingEventType::Claim, "AUMEL", None)));
        assert!(!itinerary.is_expected(&event(HandlingEventType::Claim, "SESTO", None)));
    }

    #[test]
    fn customs_is_never_counted_against_the_route() {
        let itinerary = stockholm_to_melbourne();
        assert!(itinerary.is_expected(&event(HandlingEventType::Customs, "CNHKG", None)));
    }

    #[test]
    fn partial_leg_endpoints_take_precedence_over_the_movement() {
        // The cargo rides CAR_001 only from DEHAM onwards.
        let partial = Itinerary::new(vec![Leg::new(
            movement("CAR_001", "SESTO", "FIHEL"),
            location("DEHAM"),
            location("FIHEL"),
        )])
        .unwrap();

        let load_at_leg_origin = event(
            HandlingEventType::Load,
            "DEHAM",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
        );
        assert!(partial.is_expected(&load_at_leg_origin));

        let load_at_movement_origin = event(
            HandlingEventType::Load,
            "SESTO",
            Some(movement("CAR_001", "SESTO", "FIHEL")),
        );
        assert!(!partial.is_expected(&load_at_movement_origin));
    }
}
