/*!
Implementation selection.

Maps a digest and its capability flags to the native or portable
implementation, and the legacy DSA flag to a key pair generator variant.
*/

use crate::crypto::capability::{CapabilityDetector, CapabilityFlags};
use crate::crypto::types::{DigestAlgorithm, DsaKeyPairVariant, Implementation};

/// Chooses concrete implementations for catalog entries
pub struct ImplementationSelector<'a> {
    detector: CapabilityDetector<'a>,
}

impl<'a> ImplementationSelector<'a> {
    pub fn new(detector: CapabilityDetector<'a>) -> Self {
        Self { detector }
    }

    /// Capability detector backing this selector
    pub fn detector(&self) -> &CapabilityDetector<'a> {
        &self.detector
    }

    /// Select the implementation of a digest from explicit flags
    ///
    /// Native iff the flags make it eligible; every digest has a portable
    /// implementation so this never fails.
    pub fn select(algorithm: DigestAlgorithm, flags: CapabilityFlags) -> Implementation {
        if algorithm.has_native() && flags.is_native_eligible() {
            Implementation::native_digest(algorithm)
        } else {
            Implementation::portable_digest(algorithm)
        }
    }

    /// Select the implementation of a digest from detected capabilities
    pub fn select_digest(&self, algorithm: DigestAlgorithm) -> Implementation {
        Self::select(algorithm, self.detector.resolve(algorithm))
    }

    /// Select the DSA key pair generator variant
    pub fn select_variant(legacy: bool) -> DsaKeyPairVariant {
        if legacy {
            DsaKeyPairVariant::Legacy
        } else {
            DsaKeyPairVariant::Current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistrySettings;
    use crate::crypto::types::Backend;
    use crate::platform::NativeLibraryStatus;

    fn flags(bits: u8) -> CapabilityFlags {
        CapabilityFlags {
            global_native_enabled: bits & 0b0001 != 0,
            native_enabled: bits & 0b0010 != 0,
            native_library_loaded: bits & 0b0100 != 0,
            platform_excluded: bits & 0b1000 != 0,
        }
    }

    #[test]
    fn test_select_all_flag_combinations() {
        for bits in 0..16u8 {
            let flags = flags(bits);
            let selected = ImplementationSelector::select(DigestAlgorithm::Sha256, flags);
            let expect_native = flags.global_native_enabled
                && flags.native_enabled
                && flags.native_library_loaded
                && !flags.platform_excluded;

            let expected = if expect_native { Backend::Native } else { Backend::Portable };
            assert_eq!(selected.backend(), expected, "flags {:04b}", bits);
        }
    }

    #[test]
    fn test_no_native_for_sha3_even_if_flags_allow() {
        let selected = ImplementationSelector::select(DigestAlgorithm::Sha3_256, flags(0b0111));
        assert_eq!(selected, Implementation::portable_digest(DigestAlgorithm::Sha3_256));
    }

    #[test]
    fn test_select_digest_uses_detector() {
        let settings = RegistrySettings::default()
            .with_platform("Linux")
            .with_native_digest(DigestAlgorithm::Sha384, false);
        let library = NativeLibraryStatus::loaded();
        let selector = ImplementationSelector::new(CapabilityDetector::new(&settings, &library));

        assert_eq!(
            selector.select_digest(DigestAlgorithm::Sha512),
            Implementation::native_digest(DigestAlgorithm::Sha512)
        );
        assert_eq!(
            selector.select_digest(DigestAlgorithm::Sha384),
            Implementation::portable_digest(DigestAlgorithm::Sha384)
        );
    }

    #[test]
    fn test_select_variant() {
        assert_eq!(ImplementationSelector::select_variant(true), DsaKeyPairVariant::Legacy);
        assert_eq!(ImplementationSelector::select_variant(false), DsaKeyPairVariant::Current);
    }
}
