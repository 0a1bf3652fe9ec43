use crate::records::{
    BookingRecord, BookingStatus, GuestRecord, PassengerRecord, PaymentRecord, PaymentStatus,
    ServiceLineRecord, StoredBooking,
};
use crate::repository::BookingRepository;
use crate::{CoreError, CoreResult};
use airdream_booking::request::generate_reference;
use airdream_booking::BookingRequest;
use airdream_shared::models::BookingConfirmedEvent;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub booking_reference: String,
    pub total_amount_cents: i32,
    pub seat_number: Option<String>,
}

pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
    events: Option<broadcast::Sender<BookingConfirmedEvent>>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo, events: None }
    }

    pub fn with_events(mut self, events: broadcast::Sender<BookingConfirmedEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Record a confirmed booking as five separate inserts. The first failure stops
    /// the sequence; rows written before it stay in place.
    pub async fn create_booking(&self, request: &BookingRequest) -> CoreResult<BookingConfirmation> {
        let now = Utc::now();
        let booking_reference = generate_reference(&mut rand::thread_rng());

        let guest = GuestRecord {
            id: Uuid::new_v4(),
            details: request.guest.clone(),
            created_at: now,
        };
        self.repo
            .insert_guest(&guest)
            .await
            .map_err(|e| persistence_error("guest profile", &booking_reference, e))?;

        let booking = BookingRecord {
            id: Uuid::new_v4(),
            booking_reference: booking_reference.clone(),
            guest_id: guest.id,
            flight_id: request.flight_id.clone(),
            booking_status: BookingStatus::Confirmed,
            total_amount_cents: request.payment_amount_cents,
            payment_status: PaymentStatus::Completed,
            created_at: now,
        };
        self.repo
            .insert_booking(&booking)
            .await
            .map_err(|e| persistence_error("booking", &booking_reference, e))?;

        let passengers: Vec<PassengerRecord> = request
            .passengers
            .iter()
            .map(|p| PassengerRecord {
                id: Uuid::new_v4(),
                booking_id: booking.id,
                guest_id: guest.id,
                seat_id: p.seat_id.clone(),
                passenger_type: p.passenger_type,
                created_at: now,
            })
            .collect();
        self.repo
            .insert_passengers(&passengers)
            .await
            .map_err(|e| persistence_error("passengers", &booking_reference, e))?;

        if !request.services.is_empty() {
            let services: Vec<ServiceLineRecord> = request
                .services
                .iter()
                .map(|line| ServiceLineRecord {
                    id: Uuid::new_v4(),
                    booking_id: booking.id,
                    service_id: line.service_id.clone(),
                    quantity: line.quantity,
                    total_price_cents: line.total_cents(),
                    created_at: now,
                })
                .collect();
            self.repo
                .insert_services(&services)
                .await
                .map_err(|e| persistence_error("booking services", &booking_reference, e))?;
        }

        let payment = PaymentRecord {
            id: Uuid::new_v4(),
            booking_id: booking.id,
            payment_type: request.payment.payment_type,
            card_last_four: request.payment.card_last_four.clone(),
            card_type: request.payment.card_type.clone(),
            payment_amount_cents: request.payment_amount_cents,
            payment_date: now,
            transaction_id: request.payment.transaction_id.clone(),
            status: PaymentStatus::Completed,
        };
        self.repo
            .insert_payment(&payment)
            .await
            .map_err(|e| persistence_error("payment", &booking_reference, e))?;

        let seat_number = request.passengers.first().and_then(|p| p.seat_number.clone());
        info!(
            "Booking {} saved for flight {} ({} cents)",
            booking_reference, booking.flight_id, booking.total_amount_cents
        );

        if let Some(tx) = &self.events {
            let _ = tx.send(BookingConfirmedEvent {
                booking_id: booking.id,
                booking_reference: booking_reference.clone(),
                flight_id: booking.flight_id.clone(),
                seat_number: seat_number.clone(),
                total_cents: booking.total_amount_cents,
                timestamp: now.timestamp(),
            });
        }

        Ok(BookingConfirmation {
            booking_id: booking.id,
            booking_reference,
            total_amount_cents: booking.total_amount_cents,
            seat_number,
        })
    }

    /// Look up a booking for the manage-booking page. A last name that does not
    /// match the guest is reported the same as a missing booking.
    pub async fn retrieve_booking(&self, reference: &str, last_name: &str) -> CoreResult<StoredBooking> {
        let reference = reference.trim().to_uppercase();
        let stored = self
            .repo
            .find_booking(&reference)
            .await
            .map_err(|e| CoreError::Store(e.to_string()))?
            .ok_or_else(|| CoreError::NotFound(reference.clone()))?;

        let stored_name = stored.guest.details.last_name.trim();
        if !stored_name.eq_ignore_ascii_case(last_name.trim()) {
            return Err(CoreError::NotFound(reference));
        }
        Ok(stored)
    }
}

fn persistence_error(
    step: &'static str,
    reference: &str,
    e: Box<dyn std::error::Error + Send + Sync>,
) -> CoreError {
    error!("Failed to insert {} for booking {}: {}", step, reference, e);
    CoreError::Persistence {
        step,
        message: e.to_string(),
    }
}
