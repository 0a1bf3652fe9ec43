use serde::{Deserialize, Serialize};

/// A city the airline flies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    /// City code used by the search form (`NYC`, `LON`).
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub airport_code: String,
    pub image_url: String,
    pub description: String,
    pub popular: bool,
}

impl Destination {
    /// `"London (LHR)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.airport_code)
    }
}
