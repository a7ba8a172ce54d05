//! # Converter Providers
//!
//! Concrete rate providers (adapters) for the converter service.
//! Every provider here implements the `RateProvider` port:
//!
//! - [`FixerIoProvider`] - live rates from the fixer.io HTTP API
//! - [`LocalProvider`] - embedded snapshot for PLN, USD and EUR, no network

use std::sync::Arc;

use converter_types::RateProvider;

pub mod fixerio;
pub mod http;
pub mod local;

pub use fixerio::{DEFAULT_URL_TEMPLATE, FIXER_IO, FixerIoProvider};
pub use local::{LOCAL, LocalProvider};

/// Provider selected when the caller names none or an unknown one.
pub const DEFAULT_PROVIDER: &str = FIXER_IO;

/// Builds the built-in providers in lookup order: remote first, local second.
///
/// # Examples
///
/// ```ignore
/// let providers = build_providers("http://api.fixer.io/latest?base={base}");
/// assert_eq!(providers[0].name(), "fixerio");
/// ```
pub fn build_providers(fixer_url_template: &str) -> Vec<Arc<dyn RateProvider>> {
    vec![
        Arc::new(FixerIoProvider::with_url_template(fixer_url_template)),
        Arc::new(LocalProvider),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let providers = build_providers(DEFAULT_URL_TEMPLATE);
        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();

        assert_eq!(names, vec![FIXER_IO, LOCAL]);
        assert_eq!(names[0], DEFAULT_PROVIDER);
    }
}
