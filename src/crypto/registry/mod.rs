/*!
Service registry.

Holds the service catalog, the staged builder that fills it and the
registry manager that ties settings and host probes together.
*/

pub mod builder;
pub mod catalog;
pub mod manager;

pub use builder::{AssemblyStage, ServiceCatalogBuilder};
pub use catalog::{Catalog, ServiceDescriptor};
pub use manager::ProviderRegistry;
