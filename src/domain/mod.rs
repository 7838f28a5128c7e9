//! Core value types and the variable-hour calculator.

pub mod boundary;
pub mod geo;
pub mod instant;
pub mod variable_time;

pub use boundary::DayBoundary;
pub use geo::GeoCoordinate;
pub use instant::Instant;
pub use variable_time::{compute, period_for, Period, PeriodKind, VariableTimeOfDay};
