use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckInStatus {
    TooEarly,
    Open,
    Closed,
}

/// Online check-in opens `opens_hours_before` departure and closes
/// `closes_hours_before` it. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckInWindow {
    pub opens_hours_before: i64,
    pub closes_hours_before: i64,
}

impl Default for CheckInWindow {
    fn default() -> Self {
        Self {
            opens_hours_before: 24,
            closes_hours_before: 2,
        }
    }
}

impl CheckInWindow {
    pub fn new(opens_hours_before: i64, closes_hours_before: i64) -> Self {
        Self {
            opens_hours_before,
            closes_hours_before,
        }
    }

    pub fn status(&self, departure: NaiveDateTime, now: NaiveDateTime) -> CheckInStatus {
        let until_departure = departure - now;
        if until_departure > Duration::hours(self.opens_hours_before) {
            CheckInStatus::TooEarly
        } else if until_departure < Duration::hours(self.closes_hours_before) {
            CheckInStatus::Closed
        } else {
            CheckInStatus::Open
        }
    }

    pub fn can_check_in(&self, departure: NaiveDateTime, now: NaiveDateTime) -> bool {
        self.status(departure, now) == CheckInStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn departure() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 7, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let window = CheckInWindow::default();
        let at = |hours_before: i64, minutes: i64| {
            departure() - Duration::hours(hours_before) - Duration::minutes(minutes)
        };

        assert_eq!(window.status(departure(), at(24, 1)), CheckInStatus::TooEarly);
        assert_eq!(window.status(departure(), at(24, 0)), CheckInStatus::Open);
        assert_eq!(window.status(departure(), at(5, 0)), CheckInStatus::Open);
        assert_eq!(window.status(departure(), at(2, 0)), CheckInStatus::Open);
        assert_eq!(window.status(departure(), at(1, 59)), CheckInStatus::Closed);
        assert_eq!(window.status(departure(), at(-3, 0)), CheckInStatus::Closed);
    }

    #[test]
    fn test_custom_window() {
        let window = CheckInWindow::new(48, 1);
        let now = departure() - Duration::hours(30);
        assert!(window.can_check_in(departure(), now));
        assert!(!CheckInWindow::default().can_check_in(departure(), now));
    }
}
