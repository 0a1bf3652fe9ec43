use crate::error::AppError;
use crate::state::AppState;
use airdream_catalog::{Deal, Destination, InFlightService, ServiceType};
use airdream_core::Sourced;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/destinations", get(list_destinations))
        .route("/v1/destinations/{code}", get(get_destination))
        .route("/v1/services", get(list_services))
        .route("/v1/deals/latest", get(latest_deals))
}

#[derive(Debug, Deserialize)]
pub struct DestinationsQuery {
    #[serde(default)]
    pub popular: bool,
}

async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationsQuery>,
) -> Json<Sourced<Vec<Destination>>> {
    if query.popular {
        Json(state.catalog.popular_destinations().await)
    } else {
        Json(state.catalog.destinations().await)
    }
}

async fn get_destination(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Sourced<Destination>>, AppError> {
    let found = state.catalog.destination_by_code(&code).await;
    match found.data {
        Some(destination) => Ok(Json(Sourced {
            source: found.source,
            data: destination,
        })),
        None => Err(AppError::NotFoundError(format!("Destination {} not found", code))),
    }
}

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    #[serde(rename = "type")]
    pub service_type: Option<String>,
}

async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<Sourced<Vec<InFlightService>>>, AppError> {
    let service_type = query
        .service_type
        .as_deref()
        .map(str::parse::<ServiceType>)
        .transpose()
        .map_err(AppError::ValidationError)?;

    Ok(Json(state.catalog.services(service_type).await))
}

async fn latest_deals(State(state): State<AppState>) -> Json<Sourced<Vec<Deal>>> {
    Json(state.catalog.latest_deals().await)
}
