/*!
Capability detection for native digest implementations.
*/

use once_cell::sync::OnceCell;

use crate::config::RegistrySettings;
use crate::crypto::types::DigestAlgorithm;
use crate::platform::NativeLibrary;

/// Inputs deciding whether a digest may use its native implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityFlags {
    /// Per-algorithm native switch
    pub native_enabled: bool,
    /// Global native digest switch
    pub global_native_enabled: bool,
    /// Native library loaded and provides the algorithm
    pub native_library_loaded: bool,
    /// Native path excluded on this platform
    pub platform_excluded: bool,
}

impl CapabilityFlags {
    /// Check if the native implementation may be selected
    pub fn is_native_eligible(&self) -> bool {
        self.global_native_enabled
            && self.native_enabled
            && self.native_library_loaded
            && !self.platform_excluded
    }
}

/// Resolves and memoizes capability flags per digest
pub struct CapabilityDetector<'a> {
    settings: &'a RegistrySettings,
    library: &'a dyn NativeLibrary,
    resolved: [OnceCell<CapabilityFlags>; DigestAlgorithm::ALL.len()],
}

impl<'a> CapabilityDetector<'a> {
    pub fn new(settings: &'a RegistrySettings, library: &'a dyn NativeLibrary) -> Self {
        Self {
            settings,
            library,
            resolved: Default::default(),
        }
    }

    /// Capability flags for a digest, computed on first request
    pub fn resolve(&self, algorithm: DigestAlgorithm) -> CapabilityFlags {
        *self.resolved[algorithm.index()].get_or_init(|| self.detect(algorithm))
    }

    fn detect(&self, algorithm: DigestAlgorithm) -> CapabilityFlags {
        if !algorithm.has_native() {
            return CapabilityFlags::default();
        }

        let flags = CapabilityFlags {
            native_enabled: self.settings.native_digests.is_enabled(algorithm),
            global_native_enabled: self.settings.global_native_digest,
            native_library_loaded: self.library.is_algorithm_available(algorithm),
            platform_excluded: self
                .settings
                .platform_exclusions
                .excludes(algorithm, &self.settings.platform_identity),
        };
        log::debug!("Capabilities for {}: {:?}", algorithm, flags);
        flags
    }
}
