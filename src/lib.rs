/*!
# Security Provider

The default security provider's service registry: which cryptographic
services exist, under which names and aliases, and which concrete
implementation backs each of them.

## Overview

This library builds an immutable catalog of services with:

- Native or portable message digests, chosen per algorithm from
  configuration, platform and native library availability
- Secure random generators gated on the OS entropy devices
- DSA signatures, key pair generators, parameters and key factories
- X.509 certificate factories, key stores, cert stores and PKIX cert paths
- Policy and login configuration entries
- Seed source resolution and entropy device path resolution

Configuration is read once into [`RegistrySettings`] and passed to
[`ProviderRegistry::initialize`]; there is no global state.
*/

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod platform;
pub mod random;

// Re-export commonly used types for convenience
pub use config::{EnvPropertySource, MapPropertySource, PropertyScope, PropertySource, RegistrySettings};
pub use crypto::types::{
    Attributes, Backend, DigestAlgorithm, Implementation, ImplementationAvailability, RandomAlgorithm,
    ServiceType,
};
pub use crypto::{
    AssemblyStage, CapabilityDetector, CapabilityFlags, Catalog, ImplementationSelector, ProviderRegistry,
    ServiceCatalogBuilder, ServiceDescriptor,
};
pub use error::{Error, Result};
pub use platform::{DeviceEntropySources, EntropySources, NativeLibrary, NativeLibraryStatus, NativeRngStatus, NoNativeLibrary};
pub use random::{DefaultRandomAlgorithmResolver, SeedSource, SeedSourceResolver};
