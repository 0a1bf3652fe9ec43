pub mod destination;
pub mod flight;
pub mod service;
pub mod seat_map;
pub mod availability;
pub mod search;
pub mod deals;
pub mod fixtures;

pub use destination::Destination;
pub use flight::{Aircraft, CabinClass, Flight, FlightStatus};
pub use service::{InFlightService, ServiceType};
pub use seat_map::{generate_seat_map, Seat, SeatConfigError, SeatConfiguration, SeatMap, SeatType};
pub use availability::AvailabilitySimulator;
pub use search::{FlightFilter, FlightQuery, SortBy, TimeSlot};
pub use deals::Deal;
