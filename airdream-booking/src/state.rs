use crate::passenger::PassengerDetails;
use crate::pricing::{PriceBreakdown, MAX_AMOUNT_CENTS};
use crate::workflow::WorkflowError;
use airdream_catalog::{Destination, Flight, InFlightService, Seat};
use serde::{Deserialize, Serialize};

/// An in-progress booking held by one customer session.
///
/// `total_amount_cents` is whatever the last [`BookingAction::RecomputeTotal`]
/// produced. Other actions leave it untouched, so it can lag behind the
/// selections until the next recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingState {
    pub selected_flight: Option<Flight>,
    pub departure_destination: Option<Destination>,
    pub arrival_destination: Option<Destination>,
    pub selected_seat: Option<Seat>,
    /// Insertion order, duplicates allowed.
    pub selected_meals: Vec<InFlightService>,
    /// Insertion order, duplicates allowed.
    pub selected_beverages: Vec<InFlightService>,
    pub passenger_details: Option<PassengerDetails>,
    pub total_amount_cents: i32,
}

/// Every transition the booking pages can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingAction {
    SetFlight(Flight),
    SetDepartureDestination(Destination),
    SetArrivalDestination(Destination),
    SetSeat(Seat),
    AddMeal(InFlightService),
    /// Drops every meal line item with this id.
    RemoveMeal(String),
    AddBeverage(InFlightService),
    /// Drops every beverage line item with this id.
    RemoveBeverage(String),
    SetPassengerDetails(PassengerDetails),
    RecomputeTotal,
    Reset,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the next state. Never fails: unknown ids are no-ops
    /// and no cross-field validation happens here.
    pub fn reduce(self, action: BookingAction) -> Self {
        match action {
            BookingAction::SetFlight(flight) => Self {
                selected_flight: Some(flight),
                ..self
            },
            BookingAction::SetDepartureDestination(destination) => Self {
                departure_destination: Some(destination),
                ..self
            },
            BookingAction::SetArrivalDestination(destination) => Self {
                arrival_destination: Some(destination),
                ..self
            },
            BookingAction::SetSeat(seat) => Self {
                selected_seat: Some(seat),
                ..self
            },
            BookingAction::AddMeal(meal) => {
                let mut selected_meals = self.selected_meals;
                selected_meals.push(meal);
                Self { selected_meals, ..self }
            }
            BookingAction::RemoveMeal(id) => {
                let mut selected_meals = self.selected_meals;
                selected_meals.retain(|meal| meal.id != id);
                Self { selected_meals, ..self }
            }
            BookingAction::AddBeverage(beverage) => {
                let mut selected_beverages = self.selected_beverages;
                selected_beverages.push(beverage);
                Self {
                    selected_beverages,
                    ..self
                }
            }
            BookingAction::RemoveBeverage(id) => {
                let mut selected_beverages = self.selected_beverages;
                selected_beverages.retain(|beverage| beverage.id != id);
                Self {
                    selected_beverages,
                    ..self
                }
            }
            BookingAction::SetPassengerDetails(details) => Self {
                passenger_details: Some(details),
                ..self
            },
            BookingAction::RecomputeTotal => {
                let total_amount_cents = self.price_breakdown().total_cents;
                Self {
                    total_amount_cents,
                    ..self
                }
            }
            BookingAction::Reset => Self::default(),
        }
    }

    /// In-place variant of [`BookingState::reduce`].
    pub fn dispatch(&mut self, action: BookingAction) {
        *self = std::mem::take(self).reduce(action);
    }

    /// Breakdown of the current selections. A missing flight counts as a zero base fare.
    pub fn price_breakdown(&self) -> PriceBreakdown {
        let base_fare = self
            .selected_flight
            .as_ref()
            .map(|f| f.base_price_cents)
            .unwrap_or(0);

        PriceBreakdown::compute(
            base_fare,
            self.selected_seat.as_ref(),
            &self.selected_meals,
            &self.selected_beverages,
        )
    }

    /// Always-fresh total, independent of the last recompute.
    pub fn live_total_cents(&self) -> i32 {
        self.price_breakdown().total_cents
    }

    /// Rejects negative or oversized fares, seat modifiers and service prices.
    /// States built from the catalog always pass; client-supplied ones may not.
    pub fn check_amounts(&self) -> Result<(), WorkflowError> {
        let flight = self
            .selected_flight
            .iter()
            .map(|f| (format!("Flight {}", f.id), f.base_price_cents));
        let seat = self
            .selected_seat
            .iter()
            .map(|s| (format!("Seat {}", s.seat_number), s.price_modifier_cents));
        let services = self
            .selected_meals
            .iter()
            .chain(&self.selected_beverages)
            .map(|item| (format!("Service {}", item.id), item.price_cents));

        match flight
            .chain(seat)
            .chain(services)
            .find(|(_, cents)| !(0..=MAX_AMOUNT_CENTS).contains(cents))
        {
            Some((item, cents)) => Err(WorkflowError::AmountOutOfRange { item, cents }),
            None => Ok(()),
        }
    }

    /// True when selections changed since the last recompute.
    pub fn is_total_stale(&self) -> bool {
        self.total_amount_cents != self.live_total_cents()
    }
}
