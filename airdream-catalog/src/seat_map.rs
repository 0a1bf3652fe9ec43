use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Every cabin is laid out over this many rows.
pub const CABIN_ROWS: u32 = 30;

/// Exit rows are a fixed policy, not aircraft metadata.
pub const EXIT_ROWS: [u32; 2] = [10, 20];

pub const WINDOW_SURCHARGE_CENTS: i32 = 2500;
pub const AISLE_SURCHARGE_CENTS: i32 = 2000;
pub const MIDDLE_SURCHARGE_CENTS: i32 = 1500;
pub const EXIT_ROW_SURCHARGE_CENTS: i32 = 3000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Window,
    Middle,
    Aisle,
}

impl SeatType {
    /// Positional surcharge, flat across rows.
    pub fn base_surcharge_cents(self) -> i32 {
        match self {
            SeatType::Window => WINDOW_SURCHARGE_CENTS,
            SeatType::Aisle => AISLE_SURCHARGE_CENTS,
            SeatType::Middle => MIDDLE_SURCHARGE_CENTS,
        }
    }
}

pub fn is_exit_row(row: u32) -> bool {
    EXIT_ROWS.contains(&row)
}

pub fn price_modifier_cents(seat_type: SeatType, exit_row: bool) -> i32 {
    let bonus = if exit_row { EXIT_ROW_SURCHARGE_CENTS } else { 0 };
    seat_type.base_surcharge_cents() + bonus
}

/// Seats left and right of the single aisle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfiguration {
    pub left: u8,
    pub right: u8,
}

impl SeatConfiguration {
    pub fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    pub fn seats_per_row(&self) -> usize {
        self.left as usize + self.right as usize
    }
}

impl Default for SeatConfiguration {
    fn default() -> Self {
        Self { left: 3, right: 3 }
    }
}

impl fmt::Display for SeatConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatConfigError {
    #[error("Seat configuration must look like \"3-3\", got {0:?}")]
    Malformed(String),

    #[error("Invalid seat count {0:?} in seat configuration")]
    InvalidCount(String),
}

impl FromStr for SeatConfiguration {
    type Err = SeatConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| SeatConfigError::Malformed(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| SeatConfigError::InvalidCount(part.to_string()))
        };

        Ok(Self {
            left: parse(left)?,
            right: parse(right)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Window is the outermost seat of a side, aisle the innermost. A lone seat is a window.
fn seat_type_at(side: Side, index: usize, count: usize) -> SeatType {
    let (outer, inner) = match side {
        Side::Left => (0, count - 1),
        Side::Right => (count - 1, 0),
    };

    if index == outer {
        SeatType::Window
    } else if index == inner {
        SeatType::Aisle
    } else {
        SeatType::Middle
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub aircraft_id: String,
    /// Row plus letter, e.g. `"14A"`. The seat picker keys on this.
    pub seat_number: String,
    pub row_number: u32,
    pub seat_letter: char,
    pub seat_type: SeatType,
    pub is_exit_row: bool,
    pub price_modifier_cents: i32,
}

impl Seat {
    fn new(aircraft_id: &str, row: u32, letter: char, seat_type: SeatType) -> Self {
        let seat_number = format!("{}{}", row, letter);
        let exit_row = is_exit_row(row);
        Self {
            id: format!("{}-{}", aircraft_id, seat_number),
            aircraft_id: aircraft_id.to_string(),
            seat_number,
            row_number: row,
            seat_letter: letter,
            seat_type,
            is_exit_row: exit_row,
            price_modifier_cents: price_modifier_cents(seat_type, exit_row),
        }
    }
}

/// The ordered seat layout of one aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap {
    pub aircraft_id: String,
    pub seats: Vec<Seat>,
}

impl SeatMap {
    /// Wrap seats loaded from the store, ordered by row then letter.
    pub fn from_seats(aircraft_id: impl Into<String>, mut seats: Vec<Seat>) -> Self {
        seats.sort_by(|a, b| {
            a.row_number
                .cmp(&b.row_number)
                .then(a.seat_letter.cmp(&b.seat_letter))
        });
        Self {
            aircraft_id: aircraft_id.into(),
            seats,
        }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn get(&self, seat_number: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.seat_number == seat_number)
    }

    pub fn row(&self, row_number: u32) -> Vec<&Seat> {
        self.seats
            .iter()
            .filter(|s| s.row_number == row_number)
            .collect()
    }

    pub fn rows(&self) -> BTreeMap<u32, Vec<&Seat>> {
        let mut rows: BTreeMap<u32, Vec<&Seat>> = BTreeMap::new();
        for seat in &self.seats {
            rows.entry(seat.row_number).or_default().push(seat);
        }
        rows
    }

    pub fn into_seats(self) -> Vec<Seat> {
        self.seats
    }
}

/// Lay out rows `1..=30` for an aircraft. Pure: same inputs, same seats, same order.
///
/// Letters run from `A` across the left side then the right side. Layouts wider
/// than 26 seats stop at `Z`.
pub fn generate_seat_map(aircraft_id: &str, config: SeatConfiguration) -> SeatMap {
    let mut letters = 'A'..='Z';
    let left: Vec<char> = letters.by_ref().take(config.left as usize).collect();
    let right: Vec<char> = letters.by_ref().take(config.right as usize).collect();

    let mut seats = Vec::with_capacity((left.len() + right.len()) * CABIN_ROWS as usize);

    for row in 1..=CABIN_ROWS {
        for (index, letter) in left.iter().enumerate() {
            let seat_type = seat_type_at(Side::Left, index, left.len());
            seats.push(Seat::new(aircraft_id, row, *letter, seat_type));
        }
        for (index, letter) in right.iter().enumerate() {
            let seat_type = seat_type_at(Side::Right, index, right.len());
            seats.push(Seat::new(aircraft_id, row, *letter, seat_type));
        }
    }

    SeatMap {
        aircraft_id: aircraft_id.to_string(),
        seats,
    }
}
