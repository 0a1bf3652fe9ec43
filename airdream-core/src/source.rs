use crate::repository::{CatalogRepository, RepoResult};
use airdream_catalog::fixtures::{
    fallback_aircraft, fallback_deals, fallback_destinations, fallback_flights, fallback_services,
};
use airdream_catalog::{
    deals, generate_seat_map, CabinClass, Deal, Destination, Flight, FlightQuery, InFlightService,
    SeatConfiguration, SeatMap, ServiceType,
};
use airdream_shared::models::CatalogFallbackEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Where a catalog result came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Store,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn store(data: T) -> Self {
        Self {
            source: DataSource::Store,
            data,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            source: DataSource::Fallback,
            data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            source: self.source,
            data: f(self.data),
        }
    }
}

/// Search form input. Date and cabin class filter only alongside a route, so
/// both codes must resolve for any of them to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSearch {
    pub from: Option<String>,
    pub to: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub cabin_class: Option<CabinClass>,
}

/// Catalog reads that never fail: store errors and empty results are replaced
/// by the built-in fixtures.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
    events: Option<broadcast::Sender<CatalogFallbackEvent>>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo, events: None }
    }

    pub fn with_events(mut self, events: broadcast::Sender<CatalogFallbackEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// All destinations ordered by name.
    pub async fn destinations(&self) -> Sourced<Vec<Destination>> {
        let result = self.repo.list_destinations().await;
        let mut sourced = self.resolve("destinations", result, fallback_destinations);
        sourced.data.sort_by(|a, b| a.name.cmp(&b.name));
        sourced
    }

    pub async fn popular_destinations(&self) -> Sourced<Vec<Destination>> {
        let result: RepoResult<Vec<Destination>> = self
            .repo
            .list_destinations()
            .await
            .map(|all| all.into_iter().filter(|d| d.popular).collect());
        let mut sourced = self.resolve("popular destinations", result, || {
            fallback_destinations().into_iter().filter(|d| d.popular).collect()
        });
        sourced.data.sort_by(|a, b| a.name.cmp(&b.name));
        sourced
    }

    pub async fn destination_by_code(&self, code: &str) -> Sourced<Option<Destination>> {
        let code = code.to_uppercase();
        self.destinations()
            .await
            .map(|all| all.into_iter().find(|d| d.code == code))
    }

    pub async fn search_flights(&self, search: &FlightSearch) -> Sourced<Vec<Flight>> {
        let mut query = FlightQuery::default();

        if let (Some(from), Some(to)) = (&search.from, &search.to) {
            let departure = self.destination_by_code(from).await.data;
            let arrival = self.destination_by_code(to).await.data;
            if let (Some(departure), Some(arrival)) = (departure, arrival) {
                query = FlightQuery {
                    departure_destination_id: Some(departure.id),
                    arrival_destination_id: Some(arrival.id),
                    departure_date: search.departure_date,
                    cabin_class: search.cabin_class,
                };
            } else {
                debug!("Route {}-{} did not resolve, searching without route", from, to);
            }
        }

        let result = self.repo.list_flights(&query).await;
        self.resolve("flights", result, || query.apply(&fallback_flights()))
    }

    pub async fn flight(&self, id: &str) -> Sourced<Option<Flight>> {
        match self.repo.get_flight(id).await {
            Ok(Some(flight)) => Sourced::store(Some(flight)),
            Ok(None) => {
                self.fall_back("flight", &format!("flight {} not in store", id));
                Sourced::fallback(fallback_flights().into_iter().find(|f| f.id == id))
            }
            Err(e) => {
                self.fall_back("flight", &e.to_string());
                Sourced::fallback(fallback_flights().into_iter().find(|f| f.id == id))
            }
        }
    }

    /// Stored seats for the aircraft, or a generated layout when there are none.
    pub async fn seat_map(&self, aircraft_id: &str) -> Sourced<SeatMap> {
        match self.repo.list_seats(aircraft_id).await {
            Ok(seats) if !seats.is_empty() => {
                return Sourced::store(SeatMap::from_seats(aircraft_id, seats));
            }
            Ok(_) => self.fall_back("seats", &format!("no seats stored for {}", aircraft_id)),
            Err(e) => self.fall_back("seats", &e.to_string()),
        }

        let config = self.seat_configuration(aircraft_id).await;
        Sourced::fallback(generate_seat_map(aircraft_id, config))
    }

    /// Every service ordered by type then name, or only available services of one
    /// type ordered by name.
    pub async fn services(&self, service_type: Option<ServiceType>) -> Sourced<Vec<InFlightService>> {
        let keep = move |s: &InFlightService| match service_type {
            Some(t) => s.service_type == t && s.available,
            None => true,
        };

        let result: RepoResult<Vec<InFlightService>> = self
            .repo
            .list_services()
            .await
            .map(|all| all.into_iter().filter(|s| keep(s)).collect());
        let mut sourced = self.resolve("services", result, || {
            fallback_services().into_iter().filter(|s| keep(s)).collect()
        });
        sourced.data.sort_by(|a, b| {
            (a.service_type.to_string(), &a.name).cmp(&(b.service_type.to_string(), &b.name))
        });
        sourced
    }

    pub async fn latest_deals(&self) -> Sourced<Vec<Deal>> {
        let result = self.repo.list_deals().await;
        self.resolve("deals", result, fallback_deals)
            .map(|all| deals::latest_deals(&all))
    }

    async fn seat_configuration(&self, aircraft_id: &str) -> SeatConfiguration {
        let stored = match self.repo.get_aircraft(aircraft_id).await {
            Ok(found) => found,
            Err(e) => {
                warn!("Failed to load aircraft {}: {}", aircraft_id, e);
                None
            }
        };
        let aircraft = stored.or_else(|| fallback_aircraft().into_iter().find(|a| a.id == aircraft_id));

        match aircraft.map(|a| a.seat_configuration.parse::<SeatConfiguration>()) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("Bad seat configuration for {}: {}, using 3-3", aircraft_id, e);
                SeatConfiguration::default()
            }
            None => SeatConfiguration::default(),
        }
    }

    fn resolve<T>(
        &self,
        resource: &str,
        result: RepoResult<Vec<T>>,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> Sourced<Vec<T>> {
        match result {
            Ok(rows) if !rows.is_empty() => Sourced::store(rows),
            Ok(_) => {
                self.fall_back(resource, "no rows returned");
                Sourced::fallback(fallback())
            }
            Err(e) => {
                self.fall_back(resource, &e.to_string());
                Sourced::fallback(fallback())
            }
        }
    }

    fn fall_back(&self, resource: &str, reason: &str) {
        warn!("Using fallback {}: {}", resource, reason);
        if let Some(tx) = &self.events {
            let _ = tx.send(CatalogFallbackEvent {
                resource: resource.to_string(),
                reason: reason.to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            });
        }
    }
}
