use airdream_api::{app, AppState};
use airdream_catalog::fixtures::{fallback_flights, fallback_services};
use airdream_catalog::{generate_seat_map, SeatConfiguration};
use airdream_store::app_config::{BusinessRules, SeedMode};
use airdream_store::InMemoryStore;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn rules() -> BusinessRules {
    BusinessRules {
        seat_occupancy_rate: 0.3,
        checkin_opens_hours: 24,
        checkin_closes_hours: 2,
        currency: "USD".to_string(),
    }
}

fn router(seed: SeedMode) -> Router {
    let store = Arc::new(InMemoryStore::from_seed(seed));
    app(AppState::new(store, rules()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(data: &Value) -> Vec<String> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect()
}

/// A booking state for fl-004 with window seat 14A, one meal and one beverage.
fn booking_state() -> Value {
    let flight = fallback_flights().into_iter().find(|f| f.id == "fl-004").unwrap();
    let seat = generate_seat_map("aircraft-1", SeatConfiguration::default())
        .get("14A")
        .cloned()
        .unwrap();
    let services = fallback_services();
    let meal = services.iter().find(|s| s.id == "meal-1").unwrap();
    let beverage = services.iter().find(|s| s.id == "bev-1").unwrap();

    json!({
        "selected_flight": flight,
        "selected_seat": seat,
        "selected_meals": [meal],
        "selected_beverages": [beverage],
        "passenger_details": {
            "first_name": "Mai",
            "last_name": "Nguyen",
            "email": "mai@example.com"
        },
        "total_amount_cents": 0
    })
}

#[tokio::test]
async fn test_health() {
    let app = router(SeedMode::Store);
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_destinations_from_store_and_fallback() {
    let seeded = router(SeedMode::Store);
    let (status, body) = get(&seeded, "/v1/destinations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "store");
    assert_eq!(body["data"].as_array().unwrap().len(), 12);

    let empty = router(SeedMode::Empty);
    let (status, body) = get(&empty, "/v1/destinations?popular=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert!(body["data"].as_array().unwrap().iter().all(|d| d["popular"] == true));
}

#[tokio::test]
async fn test_destination_by_code() {
    let app = router(SeedMode::Store);
    let (status, body) = get(&app, "/v1/destinations/lon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "dest-3");

    let (status, body) = get(&app, "/v1/destinations/XXX").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("XXX"));
}

#[tokio::test]
async fn test_flight_search_sorting_and_filters() {
    let app = router(SeedMode::Store);

    let (status, body) = get(&app, "/v1/flights/search?from=NYC&to=LON&sort=price").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "store");
    assert_eq!(ids(&body["data"]), vec!["fl-003", "fl-002", "fl-001"]);

    let (_, body) = get(&app, "/v1/flights/search?from=NYC&to=LON&sort=duration").await;
    assert_eq!(ids(&body["data"]), vec!["fl-003", "fl-001", "fl-002"]);

    let (_, body) = get(&app, "/v1/flights/search?from=NYC&to=LON&max_price=600").await;
    assert_eq!(ids(&body["data"]), vec!["fl-003", "fl-002"]);

    let (_, body) = get(&app, "/v1/flights/search?from=NYC&to=LON&time=morning").await;
    assert_eq!(ids(&body["data"]), vec!["fl-001"]);
}

#[tokio::test]
async fn test_flight_search_fallback_uses_same_route() {
    let app = router(SeedMode::Empty);
    let (status, body) = get(&app, "/v1/flights/search?from=NYC&to=YYZ&class=economy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fallback");
    assert_eq!(ids(&body["data"]), vec!["fl-005"]);
}

#[tokio::test]
async fn test_flight_search_rejects_bad_input() {
    let app = router(SeedMode::Store);
    let (status, _) = get(&app, "/v1/flights/search?class=steerage").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/v1/flights/search?sort=cheapest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/v1/flights/search?stops=one").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_flight_by_id() {
    let app = router(SeedMode::Store);
    let (status, body) = get(&app, "/v1/flights/fl-002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["flight_number"], "DF2345");

    let (status, _) = get(&app, "/v1/flights/fl-999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seat_map_with_seeded_availability() {
    let app = router(SeedMode::Store);
    let (status, first) = get(&app, "/v1/flights/fl-001/seats?seed=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["source"], "store");
    assert_eq!(first["data"]["seats"].as_array().unwrap().len(), 180);

    let available = first["data"]["available"].as_array().unwrap();
    assert!(!available.is_empty());
    assert!(available.len() < 180);

    let (_, second) = get(&app, "/v1/flights/fl-001/seats?seed=42").await;
    assert_eq!(first["data"]["available"], second["data"]["available"]);

    let empty = router(SeedMode::Empty);
    let (_, generated) = get(&empty, "/v1/flights/fl-001/seats?seed=42").await;
    assert_eq!(generated["source"], "fallback");
    assert_eq!(generated["data"]["seats"], first["data"]["seats"]);
}

#[tokio::test]
async fn test_services_by_type() {
    let app = router(SeedMode::Store);
    let (status, body) = get(&app, "/v1/services?type=beverage").await;
    assert_eq!(status, StatusCode::OK);
    let services = body["data"].as_array().unwrap();
    assert_eq!(services.len(), 4);
    assert!(services.iter().all(|s| s["type"] == "beverage"));

    let (status, _) = get(&app, "/v1/services?type=snack").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_latest_deals() {
    let app = router(SeedMode::Store);
    let (status, body) = get(&app, "/v1/deals/latest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["data"]), vec!["1", "3", "5"]);
}

#[tokio::test]
async fn test_quote_reports_stale_total() {
    let app = router(SeedMode::Store);
    let (status, body) = send(&app, Method::POST, "/v1/bookings/quote", Some(booking_state())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["total_cents"], 94_698);
    assert_eq!(body["total_label"], "946.98");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["total_is_stale"], true);
}

#[tokio::test]
async fn test_out_of_range_amounts_are_rejected() {
    let app = router(SeedMode::Store);

    let mut huge = booking_state();
    huge["selected_flight"]["base_price_cents"] = json!(i32::MAX - 100);
    let (status, body) = send(&app, Method::POST, "/v1/bookings/quote", Some(huge.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Flight fl-004"));

    let mut negative = booking_state();
    negative["selected_beverages"][0]["price_cents"] = json!(-399);
    let (status, _) = send(&app, Method::POST, "/v1/bookings/quote", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/v1/bookings", Some(json!({ "state": huge }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_retrieve_booking() {
    let app = router(SeedMode::Store);
    let payment = json!({ "payment_type": "credit_card", "card_last_four": "4242", "card_type": "visa" });

    let (status, created) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({ "state": booking_state(), "payment": payment })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["total_amount_cents"], 94_698);
    assert_eq!(created["seat_number"], "14A");

    let reference = created["booking_reference"].as_str().unwrap();
    let (status, found) = get(&app, &format!("/v1/bookings/{}?last_name=nguyen", reference)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["booking"]["flight_id"], "fl-004");
    assert_eq!(found["booking"]["booking_status"], "confirmed");
    assert_eq!(found["services"].as_array().unwrap().len(), 2);
    assert_eq!(found["payment"]["card_last_four"], "4242");

    let (status, _) = get(&app, &format!("/v1/bookings/{}?last_name=Smith", reference)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_booking_requires_passenger() {
    let app = router(SeedMode::Store);
    let mut state = booking_state();
    state["passenger_details"] = Value::Null;

    let (status, body) = send(&app, Method::POST, "/v1/bookings", Some(json!({ "state": state }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Passenger details are missing");
}

#[tokio::test]
async fn test_check_in_window() {
    let app = router(SeedMode::Store);
    let (_, created) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({ "state": booking_state() })),
    )
    .await;
    let reference = created["booking_reference"].as_str().unwrap().to_string();

    // fl-004 departs 2023-07-15 19:30
    let check = |as_of: &str| {
        json!({ "booking_reference": reference, "last_name": "Nguyen", "as_of": as_of })
    };

    let (status, body) = send(&app, Method::POST, "/v1/check-in", Some(check("2023-07-15T08:00:00"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OPEN");
    assert_eq!(body["can_check_in"], true);

    let (_, body) = send(&app, Method::POST, "/v1/check-in", Some(check("2023-07-13T08:00:00"))).await;
    assert_eq!(body["status"], "TOO_EARLY");

    let (_, body) = send(&app, Method::POST, "/v1/check-in", Some(check("2023-07-15T18:00:00"))).await;
    assert_eq!(body["status"], "CLOSED");
    assert_eq!(body["can_check_in"], false);
}
