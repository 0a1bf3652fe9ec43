use crate::flight::{CabinClass, Flight};
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Equality filters pushed down to the store. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub departure_destination_id: Option<String>,
    pub arrival_destination_id: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub cabin_class: Option<CabinClass>,
}

impl FlightQuery {
    pub fn matches(&self, flight: &Flight) -> bool {
        if let Some(id) = &self.departure_destination_id {
            if &flight.departure_destination_id != id {
                return false;
            }
        }
        if let Some(id) = &self.arrival_destination_id {
            if &flight.arrival_destination_id != id {
                return false;
            }
        }
        if let Some(date) = self.departure_date {
            if flight.departure_date != date {
                return false;
            }
        }
        if let Some(class) = self.cabin_class {
            if flight.cabin_class != class {
                return false;
            }
        }
        true
    }

    /// Matching flights ordered by departure time.
    pub fn apply(&self, flights: &[Flight]) -> Vec<Flight> {
        let mut matched: Vec<Flight> = flights.iter().filter(|f| self.matches(f)).cloned().collect();
        matched.sort_by_key(|f| f.departure_time);
        matched
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub fn of(time: NaiveTime) -> Self {
        match time.hour() {
            6..=11 => TimeSlot::Morning,
            12..=17 => TimeSlot::Afternoon,
            18..=23 => TimeSlot::Evening,
            _ => TimeSlot::Night,
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            "night" => Ok(TimeSlot::Night),
            other => Err(format!("Unknown time slot: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Price,
    Duration,
    Departure,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortBy::Price),
            "duration" => Ok(SortBy::Duration),
            "departure" => Ok(SortBy::Departure),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

pub const DEFAULT_MIN_PRICE_CENTS: i32 = 20_000;
pub const DEFAULT_MAX_PRICE_CENTS: i32 = 200_000;

/// Refinements applied to a result set after it has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightFilter {
    pub min_price_cents: i32,
    pub max_price_cents: i32,
    /// Empty accepts any number of stops.
    pub stops: Vec<u8>,
    /// Empty accepts any departure time.
    pub time_slots: Vec<TimeSlot>,
}

impl Default for FlightFilter {
    fn default() -> Self {
        Self {
            min_price_cents: DEFAULT_MIN_PRICE_CENTS,
            max_price_cents: DEFAULT_MAX_PRICE_CENTS,
            stops: Vec::new(),
            time_slots: Vec::new(),
        }
    }
}

impl FlightFilter {
    pub fn matches(&self, flight: &Flight) -> bool {
        if flight.base_price_cents < self.min_price_cents || flight.base_price_cents > self.max_price_cents {
            return false;
        }
        if !self.stops.is_empty() && !self.stops.contains(&flight.stops) {
            return false;
        }
        if !self.time_slots.is_empty() && !self.time_slots.contains(&TimeSlot::of(flight.departure_time)) {
            return false;
        }
        true
    }

    pub fn apply(&self, flights: &[Flight], sort_by: SortBy) -> Vec<Flight> {
        let mut filtered: Vec<Flight> = flights.iter().filter(|f| self.matches(f)).cloned().collect();
        match sort_by {
            SortBy::Price => filtered.sort_by_key(|f| f.base_price_cents),
            SortBy::Duration => filtered.sort_by_key(|f| f.duration_minutes),
            SortBy::Departure => filtered.sort_by_key(|f| f.departure_time),
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fallback_flights;

    #[test]
    fn test_time_slots() {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(TimeSlot::of(at(5, 59)), TimeSlot::Night);
        assert_eq!(TimeSlot::of(at(6, 0)), TimeSlot::Morning);
        assert_eq!(TimeSlot::of(at(12, 15)), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::of(at(19, 30)), TimeSlot::Evening);
        assert_eq!(TimeSlot::of(at(0, 30)), TimeSlot::Night);
    }

    #[test]
    fn test_query_route_and_order() {
        let query = FlightQuery {
            departure_destination_id: Some("dest-1".to_string()),
            arrival_destination_id: Some("dest-3".to_string()),
            ..Default::default()
        };
        let flights = query.apply(&fallback_flights());
        let numbers: Vec<&str> = flights.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["DF1234", "DF2345", "DF3456"]);
    }

    #[test]
    fn test_query_cabin_class_and_date() {
        let query = FlightQuery {
            cabin_class: Some(CabinClass::Business),
            ..Default::default()
        };
        assert!(query.apply(&fallback_flights()).is_empty());

        let query = FlightQuery {
            departure_date: NaiveDate::from_ymd_opt(2023, 7, 15),
            ..Default::default()
        };
        assert_eq!(query.apply(&fallback_flights()).len(), fallback_flights().len());
    }

    #[test]
    fn test_filter_price_range_and_sort() {
        let filter = FlightFilter {
            min_price_cents: 50_000,
            max_price_cents: 70_000,
            ..Default::default()
        };
        let flights = filter.apply(&fallback_flights(), SortBy::Price);
        let prices: Vec<i32> = flights.iter().map(|f| f.base_price_cents).collect();
        assert_eq!(prices, vec![57_900, 59_900, 64_900]);
    }

    #[test]
    fn test_filter_time_slot_and_duration_sort() {
        let filter = FlightFilter {
            time_slots: vec![TimeSlot::Morning],
            ..Default::default()
        };
        let flights = filter.apply(&fallback_flights(), SortBy::Duration);
        let numbers: Vec<&str> = flights.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["DF5678", "DF1234"]);
    }

    #[test]
    fn test_filter_stops() {
        let filter = FlightFilter {
            stops: vec![1],
            ..Default::default()
        };
        assert!(filter.apply(&fallback_flights(), SortBy::Price).is_empty());
    }
}
