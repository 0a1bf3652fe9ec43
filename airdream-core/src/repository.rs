use crate::records::{
    BookingRecord, GuestRecord, PassengerRecord, PaymentRecord, ServiceLineRecord, StoredBooking,
};
use airdream_catalog::{Aircraft, Deal, Destination, Flight, FlightQuery, InFlightService, Seat};
use async_trait::async_trait;

pub type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Read access to the hosted reference data.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_destinations(&self) -> RepoResult<Vec<Destination>>;

    /// Flights matching every set field of the query, ordered by departure time.
    async fn list_flights(&self, query: &FlightQuery) -> RepoResult<Vec<Flight>>;

    async fn get_flight(&self, id: &str) -> RepoResult<Option<Flight>>;

    async fn get_aircraft(&self, id: &str) -> RepoResult<Option<Aircraft>>;

    /// Seats stored for an aircraft, ordered by row then letter.
    async fn list_seats(&self, aircraft_id: &str) -> RepoResult<Vec<Seat>>;

    async fn list_services(&self) -> RepoResult<Vec<InFlightService>>;

    async fn list_deals(&self) -> RepoResult<Vec<Deal>>;
}

/// Write side for confirmed bookings. Each insert stands alone: there is no
/// transaction spanning them.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_guest(&self, guest: &GuestRecord) -> RepoResult<()>;

    async fn insert_booking(&self, booking: &BookingRecord) -> RepoResult<()>;

    async fn insert_passengers(&self, passengers: &[PassengerRecord]) -> RepoResult<()>;

    async fn insert_services(&self, services: &[ServiceLineRecord]) -> RepoResult<()>;

    async fn insert_payment(&self, payment: &PaymentRecord) -> RepoResult<()>;

    async fn find_booking(&self, reference: &str) -> RepoResult<Option<StoredBooking>>;
}
