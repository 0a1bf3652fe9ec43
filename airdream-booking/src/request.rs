use crate::passenger::{PassengerDetails, PassengerType};
use crate::state::BookingState;
use crate::workflow::WorkflowError;
use airdream_catalog::InFlightService;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const REFERENCE_LENGTH: usize = 6;

/// Six characters from `A-Z0-9`, e.g. `"K7Q2ZD"`. Uniqueness is not checked.
pub fn generate_reference<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..REFERENCE_LENGTH)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    CreditCard,
    Paypal,
    ApplePay,
}

/// Payment form contents. No gateway is contacted; this is recorded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub payment_type: PaymentType,
    #[serde(default)]
    pub card_last_four: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

impl PaymentDetails {
    /// Keeps only the last four digits of the entered card number.
    pub fn card(card_number: &str, card_type: impl Into<String>) -> Self {
        let digits: Vec<char> = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let last_four: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        Self {
            payment_type: PaymentType::CreditCard,
            card_last_four: Some(last_four),
            card_type: Some(card_type.into()),
            transaction_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerEntry {
    pub seat_id: Option<String>,
    pub seat_number: Option<String>,
    pub passenger_type: PassengerType,
}

/// One purchased service, repeated selections folded into `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i32,
}

impl ServiceLine {
    /// Saturates at the `i32` bounds for absurd quantities or prices.
    pub fn total_cents(&self) -> i32 {
        let quantity = i32::try_from(self.quantity).unwrap_or(i32::MAX);
        self.unit_price_cents.saturating_mul(quantity)
    }
}

/// Everything the persistence side needs to record a confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub flight_id: String,
    pub guest: PassengerDetails,
    pub passengers: Vec<PassengerEntry>,
    pub services: Vec<ServiceLine>,
    pub payment: PaymentDetails,
    pub payment_amount_cents: i32,
}

impl BookingRequest {
    /// Build from a state that has at least a flight and passenger details.
    ///
    /// The payment amount is computed from the current selections, not taken from
    /// the possibly stale `total_amount_cents`. Out-of-range amounts are rejected.
    pub fn from_state(state: &BookingState, payment: PaymentDetails) -> Result<Self, WorkflowError> {
        let flight = state.selected_flight.as_ref().ok_or(WorkflowError::MissingFlight)?;
        state.check_amounts()?;
        let guest = state
            .passenger_details
            .clone()
            .ok_or(WorkflowError::MissingPassengerDetails)?;

        let lead = PassengerEntry {
            seat_id: state.selected_seat.as_ref().map(|s| s.id.clone()),
            seat_number: state.selected_seat.as_ref().map(|s| s.seat_number.clone()),
            passenger_type: PassengerType::Adult,
        };

        Ok(Self {
            flight_id: flight.id.clone(),
            guest,
            passengers: vec![lead],
            services: group_service_lines(&state.selected_meals, &state.selected_beverages),
            payment,
            payment_amount_cents: state.live_total_cents(),
        })
    }

    pub fn services_total_cents(&self) -> i32 {
        self.services
            .iter()
            .fold(0, |sum: i32, line| sum.saturating_add(line.total_cents()))
    }
}

/// Meals then beverages, grouped by service id in first-appearance order.
pub fn group_service_lines(meals: &[InFlightService], beverages: &[InFlightService]) -> Vec<ServiceLine> {
    let mut lines: Vec<ServiceLine> = Vec::new();

    for item in meals.iter().chain(beverages) {
        match lines.iter_mut().find(|line| line.service_id == item.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(ServiceLine {
                service_id: item.id.clone(),
                name: item.name.clone(),
                quantity: 1,
                unit_price_cents: item.price_cents,
            }),
        }
    }

    lines
}
