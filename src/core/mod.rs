pub mod aggregate;
pub mod clock;
pub mod logic;
pub mod tracker;

pub use logic::{Started, SwitchedOut, TimeLogger, Toggled};
pub use tracker::{SessionTracker, TrackingMode};
