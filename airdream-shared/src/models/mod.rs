pub mod events;

pub use events::{BookingConfirmedEvent, CatalogFallbackEvent};
