use uuid::Uuid;

/// Emitted once every insert of a booking has landed.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub booking_reference: String,
    pub flight_id: String,
    pub seat_number: Option<String>,
    pub total_cents: i32,
    pub timestamp: i64,
}

/// Emitted whenever a catalog read is served from the static fixtures.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct CatalogFallbackEvent {
    pub resource: String,
    pub reason: String,
    pub timestamp: i64,
}
