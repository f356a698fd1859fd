// Utils compartidos

pub mod constants;
pub mod units;
pub mod address;

pub use constants::*;
pub use units::{parse_units, format_units_fixed};
pub use address::{parse_address, shorten_address};
