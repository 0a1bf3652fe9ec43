pub mod passenger;
pub mod pricing;
pub mod state;
pub mod workflow;
pub mod request;
pub mod checkin;

pub use passenger::{PassengerDetails, PassengerType};
pub use pricing::PriceBreakdown;
pub use state::{BookingAction, BookingState};
pub use workflow::{BookingStep, BookingWorkflow, WorkflowError};
pub use request::{BookingRequest, PassengerEntry, PaymentDetails, PaymentType, ServiceLine};
pub use checkin::{CheckInStatus, CheckInWindow};
