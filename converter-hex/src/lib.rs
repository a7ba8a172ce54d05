//! # Converter Hex
//!
//! Application service layer and HTTP adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `registry/` - Fixed, ordered set of rate providers resolved by name
//! - `service/` - Conversion service (validation, provider fallback, error mapping)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service works against `dyn RateProvider`, so any provider
//! implementation can be registered, including test doubles.

pub mod inbound;
pub mod openapi;
pub mod registry;
pub mod service;


pub use registry::{ProviderRegistry, RegistryError};
pub use service::{ConversionQuery, ConverterService};
