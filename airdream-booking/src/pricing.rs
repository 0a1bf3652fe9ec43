use airdream_catalog::{InFlightService, Seat};
use airdream_shared::format_cents;
use serde::{Deserialize, Serialize};

/// Largest fare, seat modifier or service price accepted from a client, in cents.
pub const MAX_AMOUNT_CENTS: i32 = 100_000_000;

/// Components of a booking total, all in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_fare_cents: i32,
    pub seat_cents: i32,
    pub meals_cents: i32,
    pub beverages_cents: i32,
    pub total_cents: i32,
}

impl PriceBreakdown {
    /// base fare + seat modifier (0 without a seat) + every meal + every beverage.
    ///
    /// Integer cents keep the sum exact, so line item order never changes the
    /// result and removing an item restores the previous total. Sums saturate at
    /// the `i32` bounds instead of wrapping.
    pub fn compute(
        base_fare_cents: i32,
        seat: Option<&Seat>,
        meals: &[InFlightService],
        beverages: &[InFlightService],
    ) -> Self {
        let seat_cents = seat.map(|s| s.price_modifier_cents).unwrap_or(0);
        let meals_cents = line_items_cents(meals);
        let beverages_cents = line_items_cents(beverages);

        Self {
            base_fare_cents,
            seat_cents,
            meals_cents,
            beverages_cents,
            total_cents: base_fare_cents
                .saturating_add(seat_cents)
                .saturating_add(meals_cents)
                .saturating_add(beverages_cents),
        }
    }

    pub fn services_cents(&self) -> i32 {
        self.meals_cents.saturating_add(self.beverages_cents)
    }

    /// Two-decimal rendering for the review step.
    pub fn total_label(&self) -> String {
        format_cents(self.total_cents)
    }
}

fn line_items_cents(items: &[InFlightService]) -> i32 {
    items.iter().fold(0, |sum: i32, item| sum.saturating_add(item.price_cents))
}

/// Shorthand for `PriceBreakdown::compute(..).total_cents`.
pub fn total_cents(
    base_fare_cents: i32,
    seat: Option<&Seat>,
    meals: &[InFlightService],
    beverages: &[InFlightService],
) -> i32 {
    PriceBreakdown::compute(base_fare_cents, seat, meals, beverages).total_cents
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdream_catalog::fixtures::fallback_services;
    use airdream_catalog::{generate_seat_map, SeatConfiguration};

    fn service(id: &str) -> InFlightService {
        fallback_services().into_iter().find(|s| s.id == id).unwrap()
    }

    fn seat(number: &str) -> Seat {
        generate_seat_map("aircraft-1", SeatConfiguration::default())
            .get(number)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_reference_total() {
        let window = seat("14A");
        let breakdown = PriceBreakdown::compute(89_900, Some(&window), &[service("meal-1")], &[service("bev-1")]);

        assert_eq!(breakdown.seat_cents, 2500);
        assert_eq!(breakdown.services_cents(), 1899 + 399);
        assert_eq!(breakdown.total_cents, 94_698);
        assert_eq!(breakdown.total_label(), "946.98");
    }

    #[test]
    fn test_empty_booking_is_base_fare() {
        let breakdown = PriceBreakdown::compute(59_900, None, &[], &[]);
        assert_eq!(breakdown.total_cents, 59_900);
        assert_eq!(breakdown.total_label(), "599.00");
        assert_eq!(breakdown.seat_cents, 0);
    }

    #[test]
    fn test_order_independence() {
        let window = seat("10A");
        let meals_ab = [service("meal-1"), service("meal-2")];
        let meals_ba = [service("meal-2"), service("meal-1")];

        let meals_then_seat = line_items_cents(&meals_ab) + window.price_modifier_cents;
        let seat_then_meals = window.price_modifier_cents + line_items_cents(&meals_ba);
        assert_eq!(meals_then_seat, seat_then_meals);

        assert_eq!(
            total_cents(50_000, Some(&window), &meals_ab, &[]),
            total_cents(50_000, Some(&window), &meals_ba, &[])
        );
    }

    #[test]
    fn test_exit_row_seat_contributes_bonus() {
        let exit_window = seat("20F");
        assert_eq!(total_cents(0, Some(&exit_window), &[], &[]), 5500);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_wrapping() {
        let breakdown = PriceBreakdown::compute(i32::MAX - 100, Some(&seat("14A")), &[], &[]);
        assert_eq!(breakdown.total_cents, i32::MAX);

        let mut pricey = service("bev-1");
        pricey.price_cents = i32::MAX;
        let beverages = [pricey.clone(), pricey];
        assert_eq!(line_items_cents(&beverages), i32::MAX);
        assert_eq!(total_cents(10_000, None, &[], &beverages), i32::MAX);

        let breakdown = PriceBreakdown::compute(i32::MIN, None, &[service("meal-1")], &[]);
        assert_eq!(breakdown.total_cents, i32::MIN + 1899);
    }
}
