use airdream_shared::format_cents;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fare tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown cabin class: {0}")]
pub struct UnknownCabinClass(pub String);

impl FromStr for CabinClass {
    type Err = UnknownCabinClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premium_economy" | "premiumeconomy" => Ok(CabinClass::PremiumEconomy),
            "business" => Ok(CabinClass::Business),
            "first" => Ok(CabinClass::First),
            _ => Err(UnknownCabinClass(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
    Diverted,
}

/// Aircraft type with its cabin layout, e.g. `"3-3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: String,
    pub model: String,
    pub manufacturer: String,
    pub capacity: u32,
    pub seat_configuration: String,
}

/// A scheduled flight as shown on the search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    pub airline: String,
    pub aircraft_id: String,
    pub departure_destination_id: String,
    pub arrival_destination_id: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub duration_minutes: u32,
    pub stops: u8,
    pub base_price_cents: i32,
    pub cabin_class: CabinClass,
    pub seats_available: u32,
    pub total_seats: u32,
    pub amenities: Vec<String>,
    pub status: FlightStatus,
}

impl Flight {
    pub fn departs_at(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrives_at(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }

    pub fn base_price_label(&self) -> String {
        format_cents(self.base_price_cents)
    }

    /// `"7h 15m"`
    pub fn duration_label(&self) -> String {
        format!("{}h {}m", self.duration_minutes / 60, self.duration_minutes % 60)
    }
}
