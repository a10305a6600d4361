/*!
Seed source resolution.
*/

use std::fmt;

use crate::config::RegistrySettings;
use crate::constants::devices::{URL_DEV_RANDOM, URL_DEV_URANDOM};

/// Configured entropy source hint, empty or URI-like
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedSource(String);

impl SeedSource {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the source is exactly one of the canonical OS entropy devices
    pub fn is_os_device(&self) -> bool {
        self.0 == URL_DEV_RANDOM || self.0 == URL_DEV_URANDOM
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Applies seed source precedence: override, then property, then empty
#[derive(Debug, Clone, Default)]
pub struct SeedSourceResolver {
    override_value: String,
    property_value: Option<String>,
}

impl SeedSourceResolver {
    pub fn new(override_value: &str, property_value: Option<&str>) -> Self {
        Self {
            override_value: override_value.to_string(),
            property_value: property_value.map(str::to_string),
        }
    }

    pub fn from_settings(settings: &RegistrySettings) -> Self {
        Self::new(
            &settings.seed_source_override,
            settings.seed_source_property.as_deref(),
        )
    }

    /// Resolve the seed source; no URI validation happens here
    pub fn resolve(&self) -> SeedSource {
        if !self.override_value.is_empty() {
            return SeedSource::new(self.override_value.clone());
        }
        SeedSource::new(self.property_value.clone().unwrap_or_default())
    }
}
