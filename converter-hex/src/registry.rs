//! Provider registry.
//!
//! Holds the providers known to the process in a fixed order. The set is
//! decided at startup and never changes afterwards.

use std::sync::Arc;

use converter_providers::{DEFAULT_PROVIDER, build_providers};
use converter_types::RateProvider;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("At least one rate provider must be registered")]
    Empty,
}

/// Ordered collection of rate providers with a designated default.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn RateProvider>>,
    default_index: usize,
}

impl ProviderRegistry {
    /// Creates a registry defaulting to `default_name`, or to the first
    /// provider when no provider carries that name.
    pub fn new(
        providers: Vec<Arc<dyn RateProvider>>,
        default_name: &str,
    ) -> Result<Self, RegistryError> {
        let first = providers.first().ok_or(RegistryError::Empty)?;

        let default_index = match providers.iter().position(|p| p.name() == default_name) {
            Some(index) => index,
            None => {
                warn!(
                    requested = default_name,
                    "Default provider is not registered, using {}",
                    first.name()
                );
                0
            }
        };

        Ok(Self {
            providers,
            default_index,
        })
    }

    /// Registry of the built-in providers: fixer.io (default) then local.
    pub fn builtin(fixer_url_template: &str) -> Result<Self, RegistryError> {
        Self::new(build_providers(fixer_url_template), DEFAULT_PROVIDER)
    }

    /// All providers in registration order.
    pub fn list(&self) -> &[Arc<dyn RateProvider>] {
        &self.providers
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// First provider whose name matches exactly (case-sensitive).
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn RateProvider>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    pub fn default_provider(&self) -> &Arc<dyn RateProvider> {
        &self.providers[self.default_index]
    }
}
