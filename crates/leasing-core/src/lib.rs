pub mod currency;
pub mod error;
pub mod lease;
pub mod normalize;
pub mod time_value;
pub mod types;

pub use currency::format_currency;
pub use error::LeasingError;
pub use lease::calculator::{analyze_lease, calculate, LeaseInputs, LeaseResults};
pub use lease::form::{FormField, LeaseForm};
pub use lease::report::{build_report, LeaseReport};
pub use normalize::parse_value;
pub use types::*;
