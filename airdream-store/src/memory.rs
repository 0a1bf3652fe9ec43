use crate::app_config::SeedMode;
use airdream_catalog::fixtures::{
    fallback_aircraft, fallback_deals, fallback_destinations, fallback_flights, fallback_services,
};
use airdream_catalog::{
    generate_seat_map, Aircraft, Deal, Destination, Flight, FlightQuery, InFlightService, Seat,
    SeatConfiguration,
};
use airdream_core::records::{
    BookingRecord, GuestRecord, PassengerRecord, PaymentRecord, ServiceLineRecord, StoredBooking,
};
use airdream_core::repository::{BookingRepository, CatalogRepository, RepoResult};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Process-local stand-in for the hosted database. Catalog tables are read-only
/// after construction; booking tables only grow.
#[derive(Default)]
pub struct InMemoryStore {
    destinations: Vec<Destination>,
    flights: Vec<Flight>,
    aircraft: Vec<Aircraft>,
    seats: Vec<Seat>,
    services: Vec<InFlightService>,
    deals: Vec<Deal>,
    guests: RwLock<Vec<GuestRecord>>,
    bookings: RwLock<Vec<BookingRecord>>,
    passengers: RwLock<Vec<PassengerRecord>>,
    booking_services: RwLock<Vec<ServiceLineRecord>>,
    payments: RwLock<Vec<PaymentRecord>>,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog tables filled from the fixtures, seats generated per aircraft.
    pub fn seeded() -> Self {
        let aircraft = fallback_aircraft();
        let seats = aircraft
            .iter()
            .flat_map(|a| {
                let config = a.seat_configuration.parse().unwrap_or_else(|_| SeatConfiguration::default());
                generate_seat_map(&a.id, config).into_seats()
            })
            .collect();

        Self {
            destinations: fallback_destinations(),
            flights: fallback_flights(),
            aircraft,
            seats,
            services: fallback_services(),
            deals: fallback_deals(),
            ..Self::default()
        }
    }

    pub fn from_seed(mode: SeedMode) -> Self {
        let store = match mode {
            SeedMode::Store => Self::seeded(),
            SeedMode::Empty => Self::empty(),
        };
        info!(
            "In-memory store ready: {} destinations, {} flights, {} seats",
            store.destinations.len(),
            store.flights.len(),
            store.seats.len()
        );
        store
    }

    pub async fn booking_count(&self) -> usize {
        self.bookings.read().await.len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn list_destinations(&self) -> RepoResult<Vec<Destination>> {
        Ok(self.destinations.clone())
    }

    async fn list_flights(&self, query: &FlightQuery) -> RepoResult<Vec<Flight>> {
        let found = query.apply(&self.flights);
        debug!("Flight query {:?} matched {} rows", query, found.len());
        Ok(found)
    }

    async fn get_flight(&self, id: &str) -> RepoResult<Option<Flight>> {
        Ok(self.flights.iter().find(|f| f.id == id).cloned())
    }

    async fn get_aircraft(&self, id: &str) -> RepoResult<Option<Aircraft>> {
        Ok(self.aircraft.iter().find(|a| a.id == id).cloned())
    }

    async fn list_seats(&self, aircraft_id: &str) -> RepoResult<Vec<Seat>> {
        let mut seats: Vec<Seat> = self
            .seats
            .iter()
            .filter(|s| s.aircraft_id == aircraft_id)
            .cloned()
            .collect();
        seats.sort_by(|a, b| (a.row_number, a.seat_letter).cmp(&(b.row_number, b.seat_letter)));
        Ok(seats)
    }

    async fn list_services(&self) -> RepoResult<Vec<InFlightService>> {
        Ok(self.services.clone())
    }

    async fn list_deals(&self) -> RepoResult<Vec<Deal>> {
        Ok(self.deals.clone())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn insert_guest(&self, guest: &GuestRecord) -> RepoResult<()> {
        self.guests.write().await.push(guest.clone());
        Ok(())
    }

    async fn insert_booking(&self, booking: &BookingRecord) -> RepoResult<()> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.booking_reference == booking.booking_reference) {
            return Err(format!("duplicate booking reference {}", booking.booking_reference).into());
        }
        bookings.push(booking.clone());
        Ok(())
    }

    async fn insert_passengers(&self, passengers: &[PassengerRecord]) -> RepoResult<()> {
        self.passengers.write().await.extend_from_slice(passengers);
        Ok(())
    }

    async fn insert_services(&self, services: &[ServiceLineRecord]) -> RepoResult<()> {
        self.booking_services.write().await.extend_from_slice(services);
        Ok(())
    }

    async fn insert_payment(&self, payment: &PaymentRecord) -> RepoResult<()> {
        self.payments.write().await.push(payment.clone());
        Ok(())
    }

    async fn find_booking(&self, reference: &str) -> RepoResult<Option<StoredBooking>> {
        let booking = {
            let bookings = self.bookings.read().await;
            match bookings.iter().find(|b| b.booking_reference == reference) {
                Some(b) => b.clone(),
                None => return Ok(None),
            }
        };

        let guest = self
            .guests
            .read()
            .await
            .iter()
            .find(|g| g.id == booking.guest_id)
            .cloned()
            .ok_or_else(|| format!("guest {} missing for booking {}", booking.guest_id, reference))?;

        let passengers = self
            .passengers
            .read()
            .await
            .iter()
            .filter(|p| p.booking_id == booking.id)
            .cloned()
            .collect();
        let services = self
            .booking_services
            .read()
            .await
            .iter()
            .filter(|s| s.booking_id == booking.id)
            .cloned()
            .collect();
        let payment = self
            .payments
            .read()
            .await
            .iter()
            .find(|p| p.booking_id == booking.id)
            .cloned();

        Ok(Some(StoredBooking {
            booking,
            guest,
            passengers,
            services,
            payment,
        }))
    }
}
