/*!
Registry settings.

All configuration the registry consumes is read once into an immutable
[`RegistrySettings`] at the composition root and passed down from there.
*/

use std::collections::BTreeMap;

use crate::config::properties::{read_property, PropertyScope, PropertySource};
use crate::constants::{properties, NATIVE_MD5_EXCLUDED_PLATFORM};
use crate::crypto::types::DigestAlgorithm;
use crate::platform::detect_platform_identity;

/// Parse a native toggle: enabled unless explicitly `false`
fn parse_toggle(value: Option<String>) -> bool {
    match value {
        Some(value) => !value.eq_ignore_ascii_case("false"),
        None => true,
    }
}

/// Parse an opt-in flag: set only by `true`
fn parse_flag(value: Option<String>) -> bool {
    value.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Per-algorithm native digest toggles
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeDigestToggles {
    toggles: BTreeMap<DigestAlgorithm, bool>,
}

impl Default for NativeDigestToggles {
    fn default() -> Self {
        Self {
            toggles: DigestAlgorithm::NATIVE_CAPABLE.iter().map(|a| (*a, true)).collect(),
        }
    }
}

impl NativeDigestToggles {
    /// Check if the native path is enabled for a digest
    ///
    /// Digests without a native implementation are never enabled.
    pub fn is_enabled(&self, algorithm: DigestAlgorithm) -> bool {
        self.toggles.get(&algorithm).copied().unwrap_or(false)
    }

    /// Enable or disable the native path for a digest
    pub fn set(&mut self, algorithm: DigestAlgorithm, enabled: bool) {
        if algorithm.has_native() {
            self.toggles.insert(algorithm, enabled);
        }
    }
}

/// Platforms on which specific native digests must not be used
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformExclusions {
    entries: Vec<(DigestAlgorithm, String)>,
}

impl Default for PlatformExclusions {
    /// Native MD5 regresses performance on AIX
    fn default() -> Self {
        Self::none().with(DigestAlgorithm::Md5, NATIVE_MD5_EXCLUDED_PLATFORM)
    }
}

impl PlatformExclusions {
    /// Policy without any exclusions
    pub fn none() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add an exclusion
    pub fn with(mut self, algorithm: DigestAlgorithm, platform: &str) -> Self {
        self.entries.push((algorithm, platform.to_string()));
        self
    }

    /// Check if the native path of `algorithm` is excluded on `platform`
    pub fn excludes(&self, algorithm: DigestAlgorithm, platform: &str) -> bool {
        self.entries
            .iter()
            .any(|(excluded, name)| *excluded == algorithm && name == platform)
    }
}

/// Configuration of a registry build
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrySettings {
    /// Master switch for native digests
    pub global_native_digest: bool,
    /// Per-algorithm native switches
    pub native_digests: NativeDigestToggles,
    /// Use the legacy DSA key pair generator
    pub legacy_dsa_key_generation: bool,
    /// Seed source override (empty when unset)
    pub seed_source_override: String,
    /// Seed source from the security properties
    pub seed_source_property: Option<String>,
    /// Operating system name
    pub platform_identity: String,
    /// Native digest platform exclusions
    pub platform_exclusions: PlatformExclusions,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            global_native_digest: true,
            native_digests: NativeDigestToggles::default(),
            legacy_dsa_key_generation: false,
            seed_source_override: String::new(),
            seed_source_property: None,
            platform_identity: detect_platform_identity(),
            platform_exclusions: PlatformExclusions::default(),
        }
    }
}

impl RegistrySettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings that never select a native digest
    pub fn portable_only() -> Self {
        Self {
            global_native_digest: false,
            ..Self::default()
        }
    }

    /// Read settings from a property source
    ///
    /// Unset or unreadable properties fall back to their defaults.
    pub fn from_properties(source: &dyn PropertySource) -> Self {
        let system = |key: &str| read_property(source, PropertyScope::System, key);

        let mut native_digests = NativeDigestToggles::default();
        for algorithm in DigestAlgorithm::NATIVE_CAPABLE {
            if let Some(key) = algorithm.native_toggle() {
                native_digests.set(algorithm, parse_toggle(system(key)));
            }
        }

        let platform_identity = system(properties::OS_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(detect_platform_identity);

        let settings = Self {
            global_native_digest: parse_toggle(system(properties::NATIVE_DIGEST)),
            native_digests,
            legacy_dsa_key_generation: parse_flag(system(properties::LEGACY_DSA_KEY_PAIR_GENERATOR)),
            seed_source_override: system(properties::ENTROPY_GATHERING_DEVICE).unwrap_or_default(),
            seed_source_property: read_property(
                source,
                PropertyScope::Security,
                properties::SECURE_RANDOM_SOURCE,
            ),
            platform_identity,
            platform_exclusions: PlatformExclusions::default(),
        };

        log::debug!("Loaded registry settings: {:?}", settings);
        settings
    }

    /// Set the global native digest switch
    pub fn with_global_native_digest(mut self, enabled: bool) -> Self {
        self.global_native_digest = enabled;
        self
    }

    /// Set the native switch of one digest
    pub fn with_native_digest(mut self, algorithm: DigestAlgorithm, enabled: bool) -> Self {
        self.native_digests.set(algorithm, enabled);
        self
    }

    /// Select the legacy or current DSA key pair generator
    pub fn with_legacy_dsa_key_generation(mut self, legacy: bool) -> Self {
        self.legacy_dsa_key_generation = legacy;
        self
    }

    /// Set the seed source override
    pub fn with_seed_source_override(mut self, seed_source: &str) -> Self {
        self.seed_source_override = seed_source.to_string();
        self
    }

    /// Set the seed source security property
    pub fn with_seed_source_property(mut self, seed_source: Option<&str>) -> Self {
        self.seed_source_property = seed_source.map(str::to_string);
        self
    }

    /// Set the platform identity
    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform_identity = platform.to_string();
        self
    }

    /// Replace the platform exclusion policy
    pub fn with_platform_exclusions(mut self, exclusions: PlatformExclusions) -> Self {
        self.platform_exclusions = exclusions;
        self
    }
}
