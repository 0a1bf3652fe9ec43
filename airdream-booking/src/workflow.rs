use crate::request::{BookingRequest, PaymentDetails};
use crate::state::{BookingAction, BookingState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Steps of the seat page, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    SeatSelection,
    InFlightServices,
    ReviewAndPay,
    Confirmed,
}

impl BookingStep {
    /// 1-based counter shown in the progress bar.
    pub fn number(self) -> u8 {
        match self {
            BookingStep::SeatSelection => 1,
            BookingStep::InFlightServices => 2,
            BookingStep::ReviewAndPay => 3,
            BookingStep::Confirmed => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStep::SeatSelection => "Seat Selection",
            BookingStep::InFlightServices => "In-flight Services",
            BookingStep::ReviewAndPay => "Review & Pay",
            BookingStep::Confirmed => "Confirmed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("Booking can only be confirmed from Review & Pay, currently at {0:?}")]
    NotReadyToConfirm(BookingStep),

    #[error("Booking is already confirmed")]
    AlreadyConfirmed,

    #[error("No flight selected")]
    MissingFlight,

    #[error("Passenger details are missing")]
    MissingPassengerDetails,

    #[error("{item} amount {cents} is outside 0..={max} cents", max = crate::pricing::MAX_AMOUNT_CENTS)]
    AmountOutOfRange { item: String, cents: i32 },
}

/// Drives one booking through seat selection, services and payment.
///
/// The step counter lives here, not in the reducer: the reducer accepts any action
/// at any step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWorkflow {
    step: BookingStep,
    state: BookingState,
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self::with_state(BookingState::default())
    }

    pub fn with_state(state: BookingState) -> Self {
        Self {
            step: BookingStep::SeatSelection,
            state,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn into_state(self) -> BookingState {
        self.state
    }

    pub fn dispatch(&mut self, action: BookingAction) -> &BookingState {
        self.state.dispatch(action);
        &self.state
    }

    /// Advance one step, stopping at Review & Pay. Leaving the services step
    /// recomputes the total; nothing else does until confirmation.
    pub fn next_step(&mut self) -> BookingStep {
        let next = match self.step {
            BookingStep::SeatSelection => BookingStep::InFlightServices,
            BookingStep::InFlightServices => {
                self.state.dispatch(BookingAction::RecomputeTotal);
                BookingStep::ReviewAndPay
            }
            other => other,
        };
        debug!("Booking step {} -> {}", self.step.number(), next.number());
        self.step = next;
        self.step
    }

    /// Go back one step, never below seat selection and never out of Confirmed.
    pub fn prev_step(&mut self) -> BookingStep {
        self.step = match self.step {
            BookingStep::ReviewAndPay => BookingStep::InFlightServices,
            BookingStep::InFlightServices => BookingStep::SeatSelection,
            other => other,
        };
        self.step
    }

    /// Recompute the total and produce the request handed to persistence.
    pub fn confirm(&mut self, payment: PaymentDetails) -> Result<BookingRequest, WorkflowError> {
        match self.step {
            BookingStep::ReviewAndPay => {}
            BookingStep::Confirmed => return Err(WorkflowError::AlreadyConfirmed),
            other => return Err(WorkflowError::NotReadyToConfirm(other)),
        }

        self.state.dispatch(BookingAction::RecomputeTotal);
        let request = BookingRequest::from_state(&self.state, payment)?;
        self.step = BookingStep::Confirmed;

        info!(
            "Booking confirmed for flight {} ({} cents)",
            request.flight_id, request.payment_amount_cents
        );
        Ok(request)
    }

    /// Discard the booking and start over at seat selection.
    pub fn reset(&mut self) {
        self.state.dispatch(BookingAction::Reset);
        self.step = BookingStep::SeatSelection;
    }
}

impl Default for BookingWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::PassengerDetails;
    use airdream_catalog::fixtures::{fallback_flights, fallback_services};
    use airdream_catalog::{generate_seat_map, SeatConfiguration};

    fn workflow_with_flight() -> BookingWorkflow {
        let flight = fallback_flights().into_iter().find(|f| f.id == "fl-004").unwrap();
        let mut workflow = BookingWorkflow::new();
        workflow.dispatch(BookingAction::SetFlight(flight));
        workflow
    }

    #[test]
    fn test_full_flow() {
        let mut workflow = workflow_with_flight();
        let seat = generate_seat_map("aircraft-1", SeatConfiguration::default())
            .get("14A")
            .cloned()
            .unwrap();
        let services = fallback_services();

        workflow.dispatch(BookingAction::SetSeat(seat));
        assert_eq!(workflow.next_step(), BookingStep::InFlightServices);

        workflow.dispatch(BookingAction::AddMeal(services[0].clone()));
        workflow.dispatch(BookingAction::AddBeverage(services[4].clone()));
        assert_eq!(workflow.state().total_amount_cents, 0);

        assert_eq!(workflow.next_step(), BookingStep::ReviewAndPay);
        assert_eq!(workflow.state().total_amount_cents, 94_698);

        workflow.dispatch(BookingAction::SetPassengerDetails(PassengerDetails::new(
            "John",
            "Smith",
            "john@example.com",
        )));
        let request = workflow.confirm(PaymentDetails::default()).unwrap();
        assert_eq!(request.payment_amount_cents, 94_698);
        assert_eq!(workflow.step(), BookingStep::Confirmed);

        assert_eq!(workflow.confirm(PaymentDetails::default()), Err(WorkflowError::AlreadyConfirmed));
        assert_eq!(workflow.prev_step(), BookingStep::Confirmed);
    }

    #[test]
    fn test_step_bounds() {
        let mut workflow = BookingWorkflow::new();
        assert_eq!(workflow.prev_step(), BookingStep::SeatSelection);
        workflow.next_step();
        workflow.next_step();
        assert_eq!(workflow.next_step(), BookingStep::ReviewAndPay);
        assert_eq!(workflow.step().number(), 3);
        assert_eq!(workflow.step().label(), "Review & Pay");
    }

    #[test]
    fn test_confirm_requires_review_step() {
        let mut workflow = workflow_with_flight();
        assert_eq!(
            workflow.confirm(PaymentDetails::default()),
            Err(WorkflowError::NotReadyToConfirm(BookingStep::SeatSelection))
        );
    }

    #[test]
    fn test_confirm_without_passenger_stays_on_review() {
        let mut workflow = workflow_with_flight();
        workflow.next_step();
        workflow.next_step();
        assert_eq!(
            workflow.confirm(PaymentDetails::default()),
            Err(WorkflowError::MissingPassengerDetails)
        );
        assert_eq!(workflow.step(), BookingStep::ReviewAndPay);
    }

    #[test]
    fn test_going_back_and_changing_seat_is_picked_up_on_next_pass() {
        let mut workflow = workflow_with_flight();
        let map = generate_seat_map("aircraft-1", SeatConfiguration::default());

        workflow.dispatch(BookingAction::SetSeat(map.get("14B").cloned().unwrap()));
        workflow.next_step();
        workflow.next_step();
        assert_eq!(workflow.state().total_amount_cents, 89_900 + 1500);

        workflow.prev_step();
        workflow.prev_step();
        workflow.dispatch(BookingAction::SetSeat(map.get("10A").cloned().unwrap()));
        assert_eq!(workflow.state().total_amount_cents, 89_900 + 1500);

        workflow.next_step();
        workflow.next_step();
        assert_eq!(workflow.state().total_amount_cents, 89_900 + 5500);
    }

    #[test]
    fn test_reset() {
        let mut workflow = workflow_with_flight();
        workflow.next_step();
        workflow.reset();
        assert_eq!(workflow, BookingWorkflow::new());
    }
}
