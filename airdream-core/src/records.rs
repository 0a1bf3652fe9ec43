use airdream_booking::{PassengerDetails, PassengerType, PaymentType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: PassengerDetails,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub booking_reference: String,
    pub guest_id: Uuid,
    pub flight_id: String,
    pub booking_status: BookingStatus,
    pub total_amount_cents: i32,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub guest_id: Uuid,
    pub seat_id: Option<String>,
    pub passenger_type: PassengerType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLineRecord {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub service_id: String,
    pub quantity: u32,
    pub total_price_cents: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub payment_type: PaymentType,
    pub card_last_four: Option<String>,
    pub card_type: Option<String>,
    pub payment_amount_cents: i32,
    pub payment_date: DateTime<Utc>,
    pub transaction_id: Option<String>,
    pub status: PaymentStatus,
}

/// A booking with every related row, as the manage-booking page needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBooking {
    pub booking: BookingRecord,
    pub guest: GuestRecord,
    pub passengers: Vec<PassengerRecord>,
    pub services: Vec<ServiceLineRecord>,
    pub payment: Option<PaymentRecord>,
}
