pub mod records;
pub mod repository;
pub mod source;
pub mod booking;

pub use booking::{BookingConfirmation, BookingService};
pub use source::{CatalogService, DataSource, FlightSearch, Sourced};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error("Failed to persist {step}: {message}")]
    Persistence { step: &'static str, message: String },
    #[error("Store error: {0}")]
    Store(String),
    #[error(transparent)]
    Workflow(#[from] airdream_booking::WorkflowError),
}

pub type CoreResult<T> = Result<T, CoreError>;
