pub mod constants;
mod plate;
mod week;

pub use plate::{build_day, coverage_percent};
pub use week::build_week;
