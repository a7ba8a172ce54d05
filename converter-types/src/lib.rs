//! # Converter Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Rounding, rate maps and the conversion response
//! - `ports/` - The `RateProvider` trait that adapters must implement
//! - `markup` - Tagged-markup (XML) encoding of a conversion response
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Parameter and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod markup;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionResponse, ConvertedRates, RateMap, round, scale_rates};
pub use dto::*;
pub use error::{AppError, ParamError};
pub use markup::EncodeError;
pub use ports::{ProviderError, RateProvider};
