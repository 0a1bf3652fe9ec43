use airdream_core::{BookingService, CatalogService};
use airdream_shared::models::{BookingConfirmedEvent, CatalogFallbackEvent};
use airdream_store::app_config::BusinessRules;
use airdream_store::InMemoryStore;
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct EventChannels {
    pub bookings: broadcast::Sender<BookingConfirmedEvent>,
    pub fallbacks: broadcast::Sender<CatalogFallbackEvent>,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<BookingService>,
    pub events: EventChannels,
    pub business_rules: BusinessRules,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>, business_rules: BusinessRules) -> Self {
        let (booking_tx, _) = broadcast::channel(100);
        let (fallback_tx, _) = broadcast::channel(100);

        Self {
            catalog: Arc::new(CatalogService::new(store.clone()).with_events(fallback_tx.clone())),
            bookings: Arc::new(BookingService::new(store).with_events(booking_tx.clone())),
            events: EventChannels {
                bookings: booking_tx,
                fallbacks: fallback_tx,
            },
            business_rules,
        }
    }
}
