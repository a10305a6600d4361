/*!
Registry manager.

`ProviderRegistry` is the composition root: it takes the immutable
settings and the host probes, resolves the random configuration and
assembles the catalog once. Nothing here is global; callers own the
registry and pass it where it is needed.
*/

use std::path::PathBuf;

use crate::config::{EnvPropertySource, RegistrySettings};
use crate::crypto::capability::CapabilityDetector;
use crate::crypto::registry::builder::ServiceCatalogBuilder;
use crate::crypto::registry::catalog::{Catalog, ServiceDescriptor};
use crate::crypto::selector::ImplementationSelector;
use crate::crypto::types::{AllAvailable, ImplementationAvailability, RandomAlgorithm, ServiceType};
use crate::platform::{DeviceEntropySources, EntropySources, NativeLibrary, NativeRngStatus, NoNativeLibrary};
use crate::random::{resolve_device_path, DefaultRandomAlgorithmResolver, SeedSource, SeedSourceResolver};

/// Fully assembled provider state
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    settings: RegistrySettings,
    catalog: Catalog,
    seed_source: SeedSource,
    default_random_algorithm: RandomAlgorithm,
    entropy: NativeRngStatus,
}

impl ProviderRegistry {
    /// Assemble a registry assuming every implementation is usable
    pub fn initialize(
        settings: RegistrySettings,
        library: &dyn NativeLibrary,
        entropy: &dyn EntropySources,
    ) -> Self {
        Self::initialize_with(settings, library, entropy, &AllAvailable)
    }

    /// Assemble a registry with an explicit availability check
    pub fn initialize_with(
        settings: RegistrySettings,
        library: &dyn NativeLibrary,
        entropy: &dyn EntropySources,
        availability: &dyn ImplementationAvailability,
    ) -> Self {
        let entropy = entropy.status();
        let seed_source = SeedSourceResolver::from_settings(&settings).resolve();
        let default_random_algorithm = DefaultRandomAlgorithmResolver::resolve(&seed_source, entropy.mixed);

        let catalog = {
            let detector = CapabilityDetector::new(&settings, library);
            let selector = ImplementationSelector::new(detector);
            ServiceCatalogBuilder::new(&settings, selector, entropy, availability).build()
        };

        log::info!(
            "Provider registry ready: {} services on {}, seed source '{}', default random {}",
            catalog.len(),
            settings.platform_identity,
            seed_source,
            default_random_algorithm
        );

        Self {
            settings,
            catalog,
            seed_source,
            default_random_algorithm,
            entropy,
        }
    }

    /// Assemble a registry from environment variables and the local devices
    ///
    /// No native digest library is linked, so every digest uses its
    /// portable implementation.
    pub fn from_environment() -> Self {
        let settings = RegistrySettings::from_properties(&EnvPropertySource::new());
        Self::initialize(settings, &NoNativeLibrary, &DeviceEntropySources::default())
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up a service by canonical name or alias
    pub fn lookup(&self, service_type: ServiceType, name: &str) -> Option<&ServiceDescriptor> {
        self.catalog.get(service_type, name)
    }

    pub fn seed_source(&self) -> &SeedSource {
        &self.seed_source
    }

    /// Algorithm for default-constructed secure random instances
    pub fn default_random_algorithm(&self) -> RandomAlgorithm {
        self.default_random_algorithm
    }

    pub fn entropy(&self) -> NativeRngStatus {
        self.entropy
    }

    /// Filesystem path of the configured seed source, if one is set
    pub fn seed_device_path(&self) -> Option<PathBuf> {
        if self.seed_source.is_empty() {
            return None;
        }
        Some(resolve_device_path(self.seed_source.as_str()))
    }
}
