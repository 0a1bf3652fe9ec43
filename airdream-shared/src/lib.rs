pub mod money;
pub mod pii;
pub mod models;

pub use money::{format_cents, parse_cents, Cents};
pub use pii::Masked;
