/*!
Configuration property sources.

The registry never reads process state directly. The host hands it a
[`PropertySource`], and a read that fails (denied, not valid UTF-8, ...)
is treated as if the property were not set.
*/

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Property namespace a key is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyScope {
    /// Process-level properties (command line, environment)
    System,
    /// Security configuration properties
    Security,
}

/// Narrow read-only view of the host configuration
pub trait PropertySource {
    /// Read a property; `Ok(None)` when unset
    fn get(&self, scope: PropertyScope, key: &str) -> Result<Option<String>>;
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn get(&self, scope: PropertyScope, key: &str) -> Result<Option<String>> {
        (**self).get(scope, key)
    }
}

/// Read a property, treating a failed read as absent
pub fn read_property(source: &dyn PropertySource, scope: PropertyScope, key: &str) -> Option<String> {
    match source.get(scope, key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{}; treating '{}' as unset", e, key);
            None
        }
    }
}

/// Properties backed by the process environment
///
/// `crypto.nativeMD5` is looked up as `CRYPTO_NATIVEMD5`, security scoped
/// keys get a `SECURITY_` prefix (`SECURITY_SECURERANDOM_SOURCE`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPropertySource;

impl EnvPropertySource {
    pub fn new() -> Self {
        Self
    }

    /// Environment variable name for a property key
    pub fn variable_name(scope: PropertyScope, key: &str) -> String {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        match scope {
            PropertyScope::System => name,
            PropertyScope::Security => format!("SECURITY_{}", name),
        }
    }
}

impl PropertySource for EnvPropertySource {
    fn get(&self, scope: PropertyScope, key: &str) -> Result<Option<String>> {
        let variable = Self::variable_name(scope, key);
        match std::env::var(&variable) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(Error::property_read(key, e.to_string())),
        }
    }
}

/// In-memory properties, mainly for embedding hosts and tests
#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    system: HashMap<String, String>,
    security: HashMap<String, String>,
    denied: HashSet<String>,
}

impl MapPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a system property
    pub fn with_system(mut self, key: &str, value: &str) -> Self {
        self.system.insert(key.to_string(), value.to_string());
        self
    }

    /// Set a security property
    pub fn with_security(mut self, key: &str, value: &str) -> Self {
        self.security.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every read of `key` fail as if access were denied
    pub fn deny(mut self, key: &str) -> Self {
        self.denied.insert(key.to_string());
        self
    }
}

impl PropertySource for MapPropertySource {
    fn get(&self, scope: PropertyScope, key: &str) -> Result<Option<String>> {
        if self.denied.contains(key) {
            return Err(Error::property_read(key, "access denied"));
        }
        let map = match scope {
            PropertyScope::System => &self.system,
            PropertyScope::Security => &self.security,
        };
        Ok(map.get(key).cloned())
    }
}
