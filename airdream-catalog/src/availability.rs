use crate::seat_map::{Seat, SeatMap};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Share of seats shown as taken when nothing better is known.
pub const DEFAULT_OCCUPANCY_RATE: f64 = 0.3;

/// Simulated seat availability. There is no inventory behind this: every seat
/// is independently shown as taken with probability `occupancy_rate`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AvailabilitySimulator {
    occupancy_rate: f64,
}

impl AvailabilitySimulator {
    pub fn new(occupancy_rate: f64) -> Self {
        let occupancy_rate = if occupancy_rate.is_finite() {
            occupancy_rate.clamp(0.0, 1.0)
        } else {
            DEFAULT_OCCUPANCY_RATE
        };
        Self { occupancy_rate }
    }

    pub fn occupancy_rate(&self) -> f64 {
        self.occupancy_rate
    }

    /// Seats left open, in seat-map order.
    pub fn available_seats<'a, R: Rng + ?Sized>(&self, map: &'a SeatMap, rng: &mut R) -> Vec<&'a Seat> {
        let keep = 1.0 - self.occupancy_rate;
        let available: Vec<&Seat> = map.seats.iter().filter(|_| rng.gen_bool(keep)).collect();
        debug!(
            "Simulated availability for {}: {}/{} seats open",
            map.aircraft_id,
            available.len(),
            map.len()
        );
        available
    }
}

impl Default for AvailabilitySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_OCCUPANCY_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat_map::{generate_seat_map, SeatConfiguration};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_availability_is_reproducible() {
        let map = generate_seat_map("aircraft-1", SeatConfiguration::default());
        let simulator = AvailabilitySimulator::default();

        let first: Vec<String> = simulator
            .available_seats(&map, &mut StdRng::seed_from_u64(42))
            .into_iter()
            .map(|s| s.seat_number.clone())
            .collect();
        let second: Vec<String> = simulator
            .available_seats(&map, &mut StdRng::seed_from_u64(42))
            .into_iter()
            .map(|s| s.seat_number.clone())
            .collect();

        assert_eq!(first, second);
        assert!(first.len() < map.len());
        assert!(!first.is_empty());
    }

    #[test]
    fn test_occupancy_bounds() {
        let map = generate_seat_map("aircraft-1", SeatConfiguration::default());
        let mut rng = StdRng::seed_from_u64(7);

        let empty_cabin = AvailabilitySimulator::new(0.0);
        assert_eq!(empty_cabin.available_seats(&map, &mut rng).len(), 180);

        let full_cabin = AvailabilitySimulator::new(1.0);
        assert!(full_cabin.available_seats(&map, &mut rng).is_empty());

        assert_eq!(AvailabilitySimulator::new(4.0).occupancy_rate(), 1.0);
        assert_eq!(AvailabilitySimulator::new(f64::NAN).occupancy_rate(), DEFAULT_OCCUPANCY_RATE);
    }

    #[test]
    fn test_available_seats_keep_map_order() {
        let map = generate_seat_map("aircraft-1", SeatConfiguration::default());
        let seats = AvailabilitySimulator::default().available_seats(&map, &mut StdRng::seed_from_u64(3));
        let positions: Vec<usize> = seats
            .iter()
            .map(|s| map.seats.iter().position(|m| m.id == s.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
