use airdream_api::{app, AppState};
use airdream_store::InMemoryStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airdream_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = airdream_store::Config::load()?;
    tracing::info!("Starting AirDream API on port {}", config.server.port);

    let store = Arc::new(InMemoryStore::from_seed(config.data.source));
    let app_state = AppState::new(store, config.business_rules.clone());

    let mut confirmed = app_state.events.bookings.subscribe();
    tokio::spawn(async move {
        loop {
            match confirmed.recv().await {
                Ok(event) => tracing::info!(
                    "Booking {} confirmed on flight {} (seat {:?})",
                    event.booking_reference,
                    event.flight_id,
                    event.seat_number
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Booking event listener lagged, {} events dropped", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut fallbacks = app_state.events.fallbacks.subscribe();
    tokio::spawn(async move {
        loop {
            match fallbacks.recv().await {
                Ok(event) => tracing::debug!("Catalog fallback for {}: {}", event.resource, event.reason),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;
    Ok(())
}
