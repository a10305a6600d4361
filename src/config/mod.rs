/*!
Configuration for the service registry.
*/

pub mod properties;
pub mod settings;

pub use properties::{read_property, EnvPropertySource, MapPropertySource, PropertyScope, PropertySource};
pub use settings::{NativeDigestToggles, PlatformExclusions, RegistrySettings};
