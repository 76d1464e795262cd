pub mod date;
pub mod error;
pub mod observation;
pub mod quantity;

pub use date::{MinimumDate, format_timestamp, parse_start_date};
pub use error::{Error, Result};
pub use observation::PairedObservation;
pub use quantity::{DIASTOLIC_TYPE, QuantityKind, SYSTOLIC_TYPE, TypeIdentifiers};
