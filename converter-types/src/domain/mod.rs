//! Domain models for the currency converter.

pub mod math;
pub mod rates;
pub mod response;

pub use math::round;
pub use rates::{CONVERTED_PLACES, ConvertedRates, RateMap, scale_rates};
pub use response::ConversionResponse;
