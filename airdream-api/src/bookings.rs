use crate::error::AppError;
use crate::state::AppState;
use airdream_booking::{BookingRequest, BookingState, PaymentDetails, PriceBreakdown};
use airdream_core::records::StoredBooking;
use airdream_core::BookingConfirmation;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings/quote", post(quote_booking))
        .route("/v1/bookings", post(create_booking))
        .route("/v1/bookings/{reference}", get(get_booking))
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub breakdown: PriceBreakdown,
    pub total_label: String,
    pub currency: String,
    /// The stored total lags behind the selections until the next recompute.
    pub total_is_stale: bool,
}

async fn quote_booking(
    State(state): State<AppState>,
    Json(booking): Json<BookingState>,
) -> Result<Json<QuoteResponse>, AppError> {
    booking.check_amounts()?;
    let breakdown = booking.price_breakdown();
    Ok(Json(QuoteResponse {
        total_label: breakdown.total_label(),
        breakdown,
        currency: state.business_rules.currency.clone(),
        total_is_stale: booking.is_total_stale(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingBody {
    pub state: BookingState,
    #[serde(default)]
    pub payment: PaymentDetails,
}

async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingBody>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let request = BookingRequest::from_state(&body.state, body.payment)?;
    let confirmation = state.bookings.create_booking(&request).await?;
    info!("Created booking {}", confirmation.booking_reference);
    Ok((StatusCode::CREATED, Json(confirmation)))
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub last_name: String,
}

async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Query(params): Query<LookupParams>,
) -> Result<Json<StoredBooking>, AppError> {
    let booking = state.bookings.retrieve_booking(&reference, &params.last_name).await?;
    Ok(Json(booking))
}
