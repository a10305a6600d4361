/*!
Core types for the service registry.

This module provides the algorithm enums, implementation references and
attribute maps used throughout the registry.
*/

pub mod algorithms;
pub mod aliases;
pub mod attributes;
pub mod implementation;

// Re-export core types for easier access
pub use algorithms::{
    CertStoreKind, DigestAlgorithm, DsaKeyPairVariant, DsaSignature, KeyStoreFormat,
    RandomAlgorithm, ServiceType,
};
pub use aliases::aliases_for;
pub use attributes::Attributes;
pub use implementation::{AllAvailable, Backend, Implementation, ImplementationAvailability};
