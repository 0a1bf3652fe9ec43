use crate::error::AppError;
use crate::state::AppState;
use airdream_catalog::search::{DEFAULT_MAX_PRICE_CENTS, DEFAULT_MIN_PRICE_CENTS};
use airdream_catalog::{AvailabilitySimulator, CabinClass, Flight, FlightFilter, Seat, SortBy, TimeSlot};
use airdream_core::{FlightSearch, Sourced};
use airdream_shared::parse_cents;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", get(search_flights))
        .route("/v1/flights/{id}", get(get_flight))
        .route("/v1/flights/{id}/seats", get(get_seats))
}

/// Raw search form values; prices are decimal amounts such as `"250.00"`,
/// `stops` and `time` are comma-separated lists.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub class: Option<String>,
    pub sort: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub stops: Option<String>,
    pub time: Option<String>,
}

impl SearchParams {
    fn search(&self) -> Result<FlightSearch, AppError> {
        let cabin_class = self
            .class
            .as_deref()
            .map(CabinClass::from_str)
            .transpose()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(FlightSearch {
            from: self.from.clone(),
            to: self.to.clone(),
            departure_date: self.departure_date,
            cabin_class,
        })
    }

    fn filter(&self) -> Result<(FlightFilter, SortBy), AppError> {
        let sort_by = match self.sort.as_deref() {
            Some(s) => s.parse().map_err(AppError::ValidationError)?,
            None => SortBy::default(),
        };

        let filter = FlightFilter {
            min_price_cents: price(self.min_price.as_deref(), DEFAULT_MIN_PRICE_CENTS)?,
            max_price_cents: price(self.max_price.as_deref(), DEFAULT_MAX_PRICE_CENTS)?,
            stops: list(self.stops.as_deref(), |s| {
                s.parse::<u8>().map_err(|_| format!("Invalid stops value: {}", s))
            })?,
            time_slots: list(self.time.as_deref(), TimeSlot::from_str)?,
        };
        Ok((filter, sort_by))
    }
}

fn price(raw: Option<&str>, default: i32) -> Result<i32, AppError> {
    match raw {
        Some(s) => parse_cents(s).ok_or_else(|| AppError::ValidationError(format!("Invalid price: {}", s))),
        None => Ok(default),
    }
}

fn list<T>(raw: Option<&str>, parse: impl Fn(&str) -> Result<T, String>) -> Result<Vec<T>, AppError> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(&parse)
            .collect::<Result<Vec<T>, String>>()
    })
    .transpose()
    .map(Option::unwrap_or_default)
    .map_err(AppError::ValidationError)
}

async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Sourced<Vec<Flight>>>, AppError> {
    let search = params.search()?;
    let (filter, sort_by) = params.filter()?;

    let found = state.catalog.search_flights(&search).await;
    let refined = found.map(|flights| filter.apply(&flights, sort_by));
    info!(
        "Flight search {:?}-{:?} returned {} results",
        search.from,
        search.to,
        refined.data.len()
    );
    Ok(Json(refined))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Sourced<Flight>>, AppError> {
    let found = state.catalog.flight(&id).await;
    match found.data {
        Some(flight) => Ok(Json(Sourced {
            source: found.source,
            data: flight,
        })),
        None => Err(AppError::NotFoundError(format!("Flight {} not found", id))),
    }
}

#[derive(Debug, Deserialize)]
pub struct SeatsParams {
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SeatAvailability {
    pub flight_id: String,
    pub aircraft_id: String,
    pub seats: Vec<Seat>,
    pub available: Vec<String>,
}

async fn get_seats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SeatsParams>,
) -> Result<Json<Sourced<SeatAvailability>>, AppError> {
    let flight = state
        .catalog
        .flight(&id)
        .await
        .data
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", id)))?;

    let map = state.catalog.seat_map(&flight.aircraft_id).await;
    let simulator = AvailabilitySimulator::new(state.business_rules.seat_occupancy_rate);
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok(Json(map.map(|map| {
        let available = simulator
            .available_seats(&map, &mut rng)
            .into_iter()
            .map(|seat| seat.seat_number.clone())
            .collect();
        SeatAvailability {
            flight_id: flight.id,
            aircraft_id: map.aircraft_id.clone(),
            seats: map.into_seats(),
            available,
        }
    })))
}
