//! Static reference data served when the store is empty or unreachable.

use crate::deals::Deal;
use crate::destination::Destination;
use crate::flight::{Aircraft, CabinClass, Flight, FlightStatus};
use crate::service::{InFlightService, ServiceType};
use chrono::{NaiveDate, NaiveTime};

const HERO_IMAGE: &str = "/images/airplane-hero.jpg";
const BLOB_BASE: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com";

struct Place {
    id: &'static str,
    code: &'static str,
    name: &'static str,
    city: &'static str,
    country: &'static str,
    airport_code: &'static str,
    /// File under the image host; `None` uses the hero image.
    image: Option<&'static str>,
    description: &'static str,
}

fn destination(p: Place) -> Destination {
    Destination {
        id: p.id.to_string(),
        code: p.code.to_string(),
        name: p.name.to_string(),
        city: p.city.to_string(),
        country: p.country.to_string(),
        airport_code: p.airport_code.to_string(),
        image_url: match p.image {
            Some(file) => format!("{}/{}", BLOB_BASE, file),
            None => HERO_IMAGE.to_string(),
        },
        description: p.description.to_string(),
        popular: true,
    }
}

pub fn fallback_destinations() -> Vec<Destination> {
    vec![
        destination(Place {
            id: "dest-1",
            code: "NYC",
            name: "New York",
            city: "New York",
            country: "United States",
            airport_code: "JFK",
            image: None,
            description: "The city that never sleeps",
        }),
        destination(Place {
            id: "dest-2",
            code: "LAX",
            name: "Los Angeles",
            city: "Los Angeles",
            country: "United States",
            airport_code: "LAX",
            image: None,
            description: "City of Angels",
        }),
        destination(Place {
            id: "dest-3",
            code: "LON",
            name: "London",
            city: "London",
            country: "United Kingdom",
            airport_code: "LHR",
            image: None,
            description: "Historic capital city",
        }),
        destination(Place {
            id: "dest-4",
            code: "PAR",
            name: "Paris",
            city: "Paris",
            country: "France",
            airport_code: "CDG",
            image: None,
            description: "City of Light",
        }),
        destination(Place {
            id: "dest-5",
            code: "TOK",
            name: "Tokyo",
            city: "Tokyo",
            country: "Japan",
            airport_code: "HND",
            image: None,
            description: "Modern metropolis",
        }),
        destination(Place {
            id: "dest-6",
            code: "DUB",
            name: "Dubai",
            city: "Dubai",
            country: "UAE",
            airport_code: "DXB",
            image: None,
            description: "Luxury destination",
        }),
        destination(Place {
            id: "dest-7",
            code: "SGN",
            name: "Ho Chi Minh City",
            city: "Ho Chi Minh City",
            country: "Vietnam",
            airport_code: "SGN",
            image: Some("Ho%20Chi%20Minh.png"),
            description: "Vibrant Vietnamese city with rich culture and delicious cuisine",
        }),
        destination(Place {
            id: "dest-8",
            code: "CTS",
            name: "Hokkaido",
            city: "Sapporo",
            country: "Japan",
            airport_code: "CTS",
            image: Some("Hokkaido.png"),
            description: "Beautiful Japanese island with stunning natural landscapes",
        }),
        destination(Place {
            id: "dest-9",
            code: "DPS",
            name: "Bali",
            city: "Denpasar",
            country: "Indonesia",
            airport_code: "DPS",
            image: Some("Bali.png"),
            description: "Tropical paradise with ancient temples and pristine beaches",
        }),
        destination(Place {
            id: "dest-10",
            code: "PER",
            name: "Perth",
            city: "Perth",
            country: "Australia",
            airport_code: "PER",
            image: Some("Perth.png"),
            description: "Western Australian gem with beautiful parks and modern architecture",
        }),
        destination(Place {
            id: "dest-11",
            code: "SAN",
            name: "California",
            city: "San Diego",
            country: "United States",
            airport_code: "SAN",
            image: Some("California.png"),
            description: "Sunny California coast with perfect weather year-round",
        }),
        destination(Place {
            id: "dest-12",
            code: "YYZ",
            name: "Toronto",
            city: "Toronto",
            country: "Canada",
            airport_code: "YYZ",
            image: Some("Toronto.png"),
            description: "Canadian cultural hub with iconic CN Tower and diverse neighborhoods",
        }),
    ]
}

pub fn fallback_aircraft() -> Vec<Aircraft> {
    vec![
        Aircraft {
            id: "aircraft-1".to_string(),
            model: "A321neo".to_string(),
            manufacturer: "Airbus".to_string(),
            capacity: 180,
            seat_configuration: "3-3".to_string(),
        },
        Aircraft {
            id: "aircraft-2".to_string(),
            model: "737 MAX 8".to_string(),
            manufacturer: "Boeing".to_string(),
            capacity: 180,
            seat_configuration: "3-3".to_string(),
        },
    ]
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 7, day).unwrap_or_default()
}

struct Schedule {
    id: &'static str,
    number: &'static str,
    to: &'static str,
    departs: (u32, u32),
    arrives: (u32, u32),
    arrival_day: u32,
    duration_minutes: u32,
    base_price_cents: i32,
    seats_available: u32,
}

fn flight(s: Schedule) -> Flight {
    Flight {
        id: s.id.to_string(),
        flight_number: s.number.to_string(),
        airline: "AirDreamFly".to_string(),
        aircraft_id: "aircraft-1".to_string(),
        departure_destination_id: "dest-1".to_string(),
        arrival_destination_id: s.to.to_string(),
        departure_time: time(s.departs.0, s.departs.1),
        arrival_time: time(s.arrives.0, s.arrives.1),
        departure_date: date(15),
        arrival_date: date(s.arrival_day),
        duration_minutes: s.duration_minutes,
        stops: 0,
        base_price_cents: s.base_price_cents,
        cabin_class: CabinClass::Economy,
        seats_available: s.seats_available,
        total_seats: 256,
        amenities: vec!["wifi".to_string(), "power".to_string(), "entertainment".to_string()],
        status: FlightStatus::Scheduled,
    }
}

pub fn fallback_flights() -> Vec<Flight> {
    vec![
        flight(Schedule {
            id: "fl-001",
            number: "DF1234",
            to: "dest-3",
            departs: (8, 30),
            arrives: (20, 45),
            arrival_day: 15,
            duration_minutes: 435,
            base_price_cents: 64_900,
            seats_available: 12,
        }),
        flight(Schedule {
            id: "fl-002",
            number: "DF2345",
            to: "dest-3",
            departs: (12, 15),
            arrives: (0, 30),
            arrival_day: 16,
            duration_minutes: 435,
            base_price_cents: 59_900,
            seats_available: 8,
        }),
        flight(Schedule {
            id: "fl-003",
            number: "DF3456",
            to: "dest-3",
            departs: (16, 45),
            arrives: (4, 55),
            arrival_day: 16,
            duration_minutes: 430,
            base_price_cents: 57_900,
            seats_available: 5,
        }),
        flight(Schedule {
            id: "fl-004",
            number: "DF4567",
            to: "dest-7",
            departs: (19, 30),
            arrives: (7, 45),
            arrival_day: 16,
            duration_minutes: 915,
            base_price_cents: 89_900,
            seats_available: 15,
        }),
        flight(Schedule {
            id: "fl-005",
            number: "DF5678",
            to: "dest-12",
            departs: (10, 20),
            arrives: (13, 35),
            arrival_day: 15,
            duration_minutes: 75,
            base_price_cents: 29_900,
            seats_available: 3,
        }),
    ]
}

fn service(
    id: &str,
    service_type: ServiceType,
    name: &str,
    description: &str,
    price_cents: i32,
    dietary_info: &[&str],
) -> InFlightService {
    let size = if service_type == ServiceType::Meal { "height=100&width=150" } else { "height=100&width=100" };
    InFlightService {
        id: id.to_string(),
        service_type,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        dietary_info: dietary_info.iter().map(|d| d.to_string()).collect(),
        image_url: format!("/placeholder.svg?{}", size),
        available: true,
    }
}

pub fn fallback_services() -> Vec<InFlightService> {
    use ServiceType::{Beverage, Meal};

    vec![
        service(
            "meal-1",
            Meal,
            "Asian Fusion Salmon",
            "Pan-seared salmon with teriyaki glaze, jasmine rice, and steamed bok choy.",
            1899,
            &["protein-rich", "gluten-free"],
        ),
        service(
            "meal-2",
            Meal,
            "Mediterranean Quinoa Bowl",
            "Quinoa salad with roasted vegetables, feta cheese, olives, and lemon herb dressing.",
            1599,
            &["vegetarian", "gluten-free"],
        ),
        service(
            "meal-3",
            Meal,
            "Classic Beef Tenderloin",
            "Tender beef with roasted potatoes, seasonal vegetables, and red wine jus.",
            2299,
            &["protein-rich"],
        ),
        service(
            "meal-4",
            Meal,
            "Thai Green Curry",
            "Aromatic green curry with coconut milk, vegetables, and fragrant jasmine rice.",
            1699,
            &["vegan", "spicy"],
        ),
        service("bev-1", Beverage, "Coca-Cola", "Classic refreshing cola drink.", 399, &[]),
        service("bev-2", Beverage, "7UP", "Crisp lemon-lime soda.", 399, &[]),
        service("bev-3", Beverage, "Orange Juice", "Fresh squeezed orange juice.", 499, &[]),
        service("bev-4", Beverage, "Premium Coffee", "Freshly brewed specialty coffee.", 499, &[]),
    ]
}

struct Offer {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    original_price_cents: i32,
    sale_price_cents: i32,
    discount_percent: u8,
    destination: &'static str,
    valid_until: (i32, u32, u32),
    featured: bool,
}

fn deal(o: Offer) -> Deal {
    let (year, month, day) = o.valid_until;
    Deal {
        id: o.id.to_string(),
        title: o.title.to_string(),
        description: o.description.to_string(),
        original_price_cents: o.original_price_cents,
        sale_price_cents: o.sale_price_cents,
        discount_percent: o.discount_percent,
        destination: o.destination.to_string(),
        valid_until: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        featured: o.featured,
    }
}

pub fn fallback_deals() -> Vec<Deal> {
    vec![
        deal(Offer {
            id: "1",
            title: "Early Bird Special",
            description: "Book 60 days in advance and save big on international flights",
            original_price_cents: 89_900,
            sale_price_cents: 69_900,
            discount_percent: 22,
            destination: "Tokyo",
            valid_until: (2024, 12, 31),
            featured: true,
        }),
        deal(Offer {
            id: "2",
            title: "Weekend Getaway",
            description: "Perfect for short trips with flexible dates",
            original_price_cents: 29_900,
            sale_price_cents: 19_900,
            discount_percent: 33,
            destination: "Bali",
            valid_until: (2024, 12, 15),
            featured: false,
        }),
        deal(Offer {
            id: "3",
            title: "Business Class Upgrade",
            description: "Experience luxury travel at an unbeatable price",
            original_price_cents: 129_900,
            sale_price_cents: 99_900,
            discount_percent: 23,
            destination: "London",
            valid_until: (2024, 12, 20),
            featured: true,
        }),
        deal(Offer {
            id: "4",
            title: "Family Package",
            description: "Special rates for family bookings with children",
            original_price_cents: 120_000,
            sale_price_cents: 89_900,
            discount_percent: 25,
            destination: "Sydney",
            valid_until: (2024, 12, 25),
            featured: false,
        }),
        deal(Offer {
            id: "5",
            title: "Last Minute Deal",
            description: "Spontaneous travel with amazing savings",
            original_price_cents: 59_900,
            sale_price_cents: 39_900,
            discount_percent: 33,
            destination: "Singapore",
            valid_until: (2024, 12, 10),
            featured: true,
        }),
    ]
}
