/*!
Cryptographic service registry.

This module provides the service types, native capability detection,
implementation selection and the catalog of registered services.
*/

pub mod capability;
pub mod registry;
pub mod selector;
pub mod types;

// Re-export commonly used items
pub use capability::{CapabilityDetector, CapabilityFlags};
pub use registry::{AssemblyStage, Catalog, ProviderRegistry, ServiceCatalogBuilder, ServiceDescriptor};
pub use selector::ImplementationSelector;
