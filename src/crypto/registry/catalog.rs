/*!
Service descriptors and the catalog that holds them.

The catalog keeps descriptors in insertion order and indexes every
canonical name and alias per service type. Names are matched without
regard to ASCII case, the same way lookups treat them.
*/

use std::collections::HashMap;

use crate::crypto::types::{Attributes, Implementation, ServiceType};
use crate::error::{Error, Result};

/// A registered (type, algorithm, implementation, attributes) tuple
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct ServiceDescriptor {
    service_type: ServiceType,
    algorithm: String,
    aliases: Vec<String>,
    implementation: Implementation,
    attributes: Attributes,
}

impl ServiceDescriptor {
    /// Create a descriptor; duplicate aliases and aliases equal to the
    /// algorithm name are dropped
    pub fn new(
        service_type: ServiceType,
        algorithm: &str,
        aliases: Vec<String>,
        implementation: Implementation,
        attributes: Attributes,
    ) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let duplicate = alias.eq_ignore_ascii_case(algorithm)
                || unique.iter().any(|seen| seen.eq_ignore_ascii_case(&alias));
            if !duplicate {
                unique.push(alias);
            }
        }

        Self {
            service_type,
            algorithm: algorithm.to_string(),
            aliases: unique,
            implementation,
            attributes,
        }
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Canonical algorithm name
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn implementation(&self) -> Implementation {
        self.implementation
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up a single attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Canonical name followed by the aliases
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.algorithm.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

type NameKey = (ServiceType, String);

fn name_key(service_type: ServiceType, name: &str) -> NameKey {
    (service_type, name.to_ascii_uppercase())
}

/// Ordered, duplicate-free collection of service descriptors
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    descriptors: Vec<ServiceDescriptor>,
    names: HashMap<NameKey, usize>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor
    ///
    /// Rejected, leaving the catalog unchanged, if its type and algorithm
    /// are already present or any of its names is already taken within
    /// the same service type.
    pub(crate) fn insert(&mut self, descriptor: ServiceDescriptor) -> Result<()> {
        let service_type = descriptor.service_type;

        if let Some(&index) = self.names.get(&name_key(service_type, &descriptor.algorithm)) {
            let existing = &self.descriptors[index];
            if existing.algorithm.eq_ignore_ascii_case(&descriptor.algorithm) {
                return Err(Error::DuplicateService {
                    service_type: service_type.to_string(),
                    algorithm: descriptor.algorithm.clone(),
                });
            }
            return Err(Error::AliasCollision {
                service_type: service_type.to_string(),
                alias: descriptor.algorithm.clone(),
                existing: existing.algorithm.clone(),
            });
        }

        for alias in &descriptor.aliases {
            if let Some(&index) = self.names.get(&name_key(service_type, alias)) {
                return Err(Error::AliasCollision {
                    service_type: service_type.to_string(),
                    alias: alias.clone(),
                    existing: self.descriptors[index].algorithm.clone(),
                });
            }
        }

        let index = self.descriptors.len();
        for name in descriptor.names() {
            self.names.insert(name_key(service_type, name), index);
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Find a descriptor by canonical name or alias
    pub fn get(&self, service_type: ServiceType, name: &str) -> Option<&ServiceDescriptor> {
        self.names
            .get(&name_key(service_type, name))
            .map(|&index| &self.descriptors[index])
    }

    pub fn contains(&self, service_type: ServiceType, name: &str) -> bool {
        self.get(service_type, name).is_some()
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// Descriptors of one service type in registration order
    pub fn by_type(&self, service_type: ServiceType) -> impl Iterator<Item = &ServiceDescriptor> {
        self.descriptors
            .iter()
            .filter(move |descriptor| descriptor.service_type == service_type)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::types::DigestAlgorithm;

    fn digest(name: &str, aliases: &[&str]) -> ServiceDescriptor {
        ServiceDescriptor::new(
            ServiceType::MessageDigest,
            name,
            aliases.iter().map(|a| a.to_string()).collect(),
            Implementation::portable_digest(DigestAlgorithm::Sha256),
            Attributes::new(),
        )
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert(digest("SHA-256", &["SHA256", "2.16.840.1.101.3.4.2.1"])).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(ServiceType::MessageDigest, "SHA-256"));
        assert!(catalog.contains(ServiceType::MessageDigest, "sha256"));
        assert!(catalog.contains(ServiceType::MessageDigest, "2.16.840.1.101.3.4.2.1"));
        assert!(!catalog.contains(ServiceType::Signature, "SHA-256"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(digest("SHA-256", &[])).unwrap();

        let err = catalog.insert(digest("SHA-256", &[])).unwrap_err();
        assert!(matches!(err, Error::DuplicateService { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_alias_collisions_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(digest("SHA-1", &["SHA", "SHA1"])).unwrap();

        let err = catalog.insert(digest("SHA-0", &["SHA"])).unwrap_err();
        assert_eq!(
            err,
            Error::AliasCollision {
                service_type: "MessageDigest".into(),
                alias: "SHA".into(),
                existing: "SHA-1".into(),
            }
        );

        let err = catalog.insert(digest("sha1", &[])).unwrap_err();
        assert!(matches!(err, Error::AliasCollision { .. }));

        // Rejected descriptors leave no names behind
        assert!(!catalog.contains(ServiceType::MessageDigest, "SHA-0"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_same_name_different_type() {
        let mut catalog = Catalog::new();
        catalog.insert(digest("DSA", &[])).unwrap();
        catalog
            .insert(ServiceDescriptor::new(
                ServiceType::KeyFactory,
                "DSA",
                vec![],
                Implementation::DsaKeyFactory,
                Attributes::new(),
            ))
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_descriptor_drops_redundant_aliases() {
        let descriptor = digest("SHA-1", &["SHA", "sha", "SHA-1", "SHA1"]);
        assert_eq!(descriptor.aliases(), &["SHA".to_string(), "SHA1".to_string()]);
        assert_eq!(descriptor.names().count(), 3);
    }

    #[test]
    fn test_iteration_is_repeatable() {
        let mut catalog = Catalog::new();
        catalog.insert(digest("SHA-256", &[])).unwrap();
        catalog.insert(digest("SHA-384", &[])).unwrap();

        let first: Vec<&str> = catalog.iter().map(ServiceDescriptor::algorithm).collect();
        let second: Vec<&str> = (&catalog).into_iter().map(ServiceDescriptor::algorithm).collect();
        assert_eq!(first, vec!["SHA-256", "SHA-384"]);
        assert_eq!(first, second);
    }
}
