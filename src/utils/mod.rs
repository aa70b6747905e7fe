pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{hours_and_minutes, mins2readable, minutes_to_hours};
pub use time::round2;
