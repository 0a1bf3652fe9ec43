use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Meal,
    Beverage,
    Entertainment,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceType::Meal => "meal",
            ServiceType::Beverage => "beverage",
            ServiceType::Entertainment => "entertainment",
        };
        f.write_str(label)
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meal" => Ok(ServiceType::Meal),
            "beverage" => Ok(ServiceType::Beverage),
            "entertainment" => Ok(ServiceType::Entertainment),
            other => Err(format!("Unknown service type: {}", other)),
        }
    }
}

/// A purchasable meal, drink or entertainment package. Reference data, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InFlightService {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub dietary_info: Vec<String>,
    pub image_url: String,
    pub available: bool,
}

impl InFlightService {
    pub fn is_meal(&self) -> bool {
        self.service_type == ServiceType::Meal
    }

    pub fn is_beverage(&self) -> bool {
        self.service_type == ServiceType::Beverage
    }
}
