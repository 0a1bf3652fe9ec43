use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many deals the home page shows.
pub const LATEST_DEALS_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub original_price_cents: i32,
    pub sale_price_cents: i32,
    pub discount_percent: u8,
    pub destination: String,
    pub valid_until: NaiveDate,
    pub featured: bool,
}

/// Featured deals first, otherwise original order, capped at [`LATEST_DEALS_LIMIT`].
pub fn latest_deals(deals: &[Deal]) -> Vec<Deal> {
    let mut sorted = deals.to_vec();
    sorted.sort_by_key(|d| !d.featured);
    sorted.truncate(LATEST_DEALS_LIMIT);
    sorted
}
