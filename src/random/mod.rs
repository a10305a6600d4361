/*!
Secure random configuration: seed source, default algorithm and entropy
device paths.
*/

pub mod default_algorithm;
pub mod device;
pub mod seed;

pub use default_algorithm::DefaultRandomAlgorithmResolver;
pub use device::{resolve_device_path, resolve_device_path_from};
pub use seed::{SeedSource, SeedSourceResolver};
