use crate::error::AppError;
use crate::state::AppState;
use airdream_booking::{CheckInStatus, CheckInWindow};
use axum::{extract::State, routing::post, Json, Router};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/check-in", post(check_in))
}

#[derive(Debug, Deserialize)]
pub struct CheckInBody {
    pub booking_reference: String,
    pub last_name: String,
    /// Evaluate the window at this instant instead of now.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub booking_reference: String,
    pub flight_id: String,
    pub departs_at: NaiveDateTime,
    pub status: CheckInStatus,
    pub can_check_in: bool,
}

async fn check_in(
    State(state): State<AppState>,
    Json(body): Json<CheckInBody>,
) -> Result<Json<CheckInResponse>, AppError> {
    let stored = state
        .bookings
        .retrieve_booking(&body.booking_reference, &body.last_name)
        .await?;

    let flight_id = stored.booking.flight_id;
    let flight = state
        .catalog
        .flight(&flight_id)
        .await
        .data
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", flight_id)))?;

    let rules = &state.business_rules;
    let window = CheckInWindow::new(rules.checkin_opens_hours, rules.checkin_closes_hours);
    let now = body.as_of.unwrap_or_else(|| Utc::now().naive_utc());
    let status = window.status(flight.departs_at(), now);

    Ok(Json(CheckInResponse {
        booking_reference: stored.booking.booking_reference,
        flight_id,
        departs_at: flight.departs_at(),
        status,
        can_check_in: status == CheckInStatus::Open,
    }))
}
