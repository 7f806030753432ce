//! Booking service orchestrating the repositories.

use common::TrackingId;
use domain::{
    Cargo, CarrierMovement, CarrierMovementId, HandlingEvent, Itinerary, Leg, Location, UnLocode,
};
use store::{CargoRepository, CarrierMovementRepository, LocationRepository};

use crate::dto::{CargoRoutingDto, CargoTrackingDto, HandlingReport, ItineraryCandidate};
use crate::error::BookingError;
use crate::events::{BookingEvents, TracingEvents};

/// Service for registering, routing and tracking cargo.
///
/// Each operation runs to completion against the repositories with no
/// internal parallelism; coordination of concurrent writers is left to the
/// storage layer.
pub struct BookingService<C, L, M, E = TracingEvents> {
    cargo_repo: C,
    location_repo: L,
    movement_repo: M,
    events: E,
}

impl<C, L, M> BookingService<C, L, M>
where
    C: CargoRepository,
    L: LocationRepository,
    M: CarrierMovementRepository,
{
    /// Creates a service emitting occurrences as tracing events.
    pub fn new(cargo_repo: C, location_repo: L, movement_repo: M) -> Self {
        Self::with_events(cargo_repo, location_repo, movement_repo, TracingEvents)
    }
}

impl<C, L, M, E> BookingService<C, L, M, E>
where
    C: CargoRepository,
    L: LocationRepository,
    M: CarrierMovementRepository,
    E: BookingEvents,
{
    /// Creates a service with an explicit event sink.
    pub fn with_events(cargo_repo: C, location_repo: L, movement_repo: M, events: E) -> Self {
        Self {
            cargo_repo,
            location_repo,
            movement_repo,
            events,
        }
    }

    /// Registers a new cargo from origin to destination and returns its
    /// freshly allocated tracking id.
    ///
    /// The cargo starts out unrouted with an empty delivery history.
    #[tracing::instrument(skip(self))]
    pub async fn register_new(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TrackingId, BookingError> {
        let tracking_id = self.cargo_repo.next_tracking_id().await?;
        let origin = self.resolve_location(origin).await?;
        let destination = self.resolve_location(destination).await?;

        let cargo = Cargo::new(tracking_id.clone(), origin.clone(), destination.clone());
        self.cargo_repo.save(&cargo).await?;

        metrics::counter!("cargo_registered_total").increment(1);
        self.events
            .cargo_registered(&tracking_id, origin.unlocode(), destination.unlocode());

        Ok(tracking_id)
    }

    /// Returns the UN locodes of all known shipping locations.
    #[tracing::instrument(skip(self))]
    pub async fn shipping_locations(&self) -> Result<Vec<UnLocode>, BookingError> {
        let locations = self.location_repo.find_all().await?;
        Ok(locations
            .into_iter()
            .map(|location| location.unlocode().clone())
            .collect())
    }

    /// Returns a read-only tracking snapshot of one cargo.
    #[tracing::instrument(skip(self))]
    pub async fn track(&self, tracking_id: &TrackingId) -> Result<CargoTrackingDto, BookingError> {
        let cargo = self.load_cargo(tracking_id).await?;
        Ok(CargoTrackingDto::for_cargo(&cargo))
    }

    /// Assigns an itinerary assembled from the candidate's leg references,
    /// replacing the cargo's current itinerary entirely.
    ///
    /// Every referenced carrier movement and location is resolved before
    /// the aggregate is touched, so a dangling reference fails the whole
    /// assignment and leaves the stored cargo unchanged.
    #[tracing::instrument(skip(self, candidate))]
    pub async fn assign_itinerary(
        &self,
        tracking_id: &TrackingId,
        candidate: ItineraryCandidate,
    ) -> Result<(), BookingError> {
        let mut cargo = self.load_cargo(tracking_id).await?;

        let mut legs = Vec::with_capacity(candidate.legs.len());
        for leg in &candidate.legs {
            let movement = self.resolve_movement(&leg.carrier_movement_id).await?;
            let from = self.resolve_location(&leg.from).await?;
            let to = self.resolve_location(&leg.to).await?;
            legs.push(Leg::new(movement, from, to));
        }
        let itinerary = Itinerary::new(legs)?;

        cargo.assign_itinerary(itinerary);
        self.cargo_repo.save(&cargo).await?;

        metrics::counter!("itineraries_assigned_total").increment(1);
        self.events
            .itinerary_assigned(tracking_id, candidate.legs.len());

        Ok(())
    }

    /// Records a handling occurrence reported from the field.
    #[tracing::instrument(skip(self, report))]
    pub async fn record_handling_event(
        &self,
        tracking_id: &TrackingId,
        report: HandlingReport,
    ) -> Result<(), BookingError> {
        let mut cargo = self.load_cargo(tracking_id).await?;

        let location = self.resolve_location(&report.location).await?;
        let movement = match &report.carrier_movement_id {
            Some(id) => Some(self.resolve_movement(id).await?),
            None => None,
        };

        let event = HandlingEvent::new(
            tracking_id.clone(),
            report.event_type,
            location,
            movement,
            report.completed_at,
        )?;

        cargo.handle(event.clone());
        self.cargo_repo.save(&cargo).await?;

        metrics::counter!("handling_events_recorded_total").increment(1);
        self.events.handling_event_recorded(tracking_id, &event);

        Ok(())
    }

    /// Returns the routing view of one cargo.
    #[tracing::instrument(skip(self))]
    pub async fn load_for_routing(
        &self,
        tracking_id: &TrackingId,
    ) -> Result<CargoRoutingDto, BookingError> {
        let cargo = self.load_cargo(tracking_id).await?;
        Ok(CargoRoutingDto::for_cargo(&cargo))
    }

    /// Returns the routing view of all registered cargo.
    #[tracing::instrument(skip(self))]
    pub async fn load_all_for_routing(&self) -> Result<Vec<CargoRoutingDto>, BookingError> {
        let all = self.cargo_repo.find_all().await?;
        Ok(all.iter().map(CargoRoutingDto::for_cargo).collect())
    }

    /// Inspects a cargo and reports misdirection or arrival through the
    /// event sink.
    ///
    /// An unknown tracking id is reported, not an error: notification is
    /// best-effort.
    #[tracing::instrument(skip(self))]
    pub async fn notify(&self, tracking_id: &TrackingId) -> Result<(), BookingError> {
        let Some(cargo) = self.cargo_repo.find(tracking_id).await? else {
            tracing::warn!(%tracking_id, "cannot notify listeners for non-existing cargo");
            return Ok(());
        };

        if cargo.is_misdirected()
            && let Some(last_event) = cargo.delivery_history().last_event()
        {
            metrics::counter!("cargo_misdirected_total").increment(1);
            self.events.cargo_misdirected(tracking_id, last_event);
        }

        if cargo.is_unloaded_at_destination() {
            self.events
                .cargo_arrived(tracking_id, cargo.final_destination());
        }

        Ok(())
    }

    async fn load_cargo(&self, tracking_id: &TrackingId) -> Result<Cargo, BookingError> {
        self.cargo_repo
            .find(tracking_id)
            .await?
            .ok_or_else(|| BookingError::UnknownCargo(tracking_id.clone()))
    }

    async fn resolve_location(&self, code: &str) -> Result<Location, BookingError> {
        let unlocode = UnLocode::new(code)?;
        self.location_repo
            .find(&unlocode)
            .await?
            .ok_or(BookingError::UnknownLocation(unlocode))
    }

    async fn resolve_movement(&self, id: &str) -> Result<CarrierMovement, BookingError> {
        let movement_id = CarrierMovementId::new(id);
        self.movement_repo
            .find(&movement_id)
            .await?
            .ok_or(BookingError::UnknownCarrierMovement(movement_id))
    }
}
