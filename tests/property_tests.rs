use std::collections::HashSet;

use security_provider::random::resolve_device_path_from;
use security_provider::{
    Backend, CapabilityFlags, DigestAlgorithm, ImplementationSelector, NativeLibraryStatus, NativeRngStatus,
    ProviderRegistry, RegistrySettings, SeedSource, ServiceType, DefaultRandomAlgorithmResolver, RandomAlgorithm,
};

use proptest::prelude::*;

// Strategy for generating digest algorithms
fn digest_algorithms() -> impl Strategy<Value = DigestAlgorithm> {
    prop::sample::select(DigestAlgorithm::ALL.to_vec())
}

// Strategy for generating platform names
fn platforms() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Linux"), Just("AIX"), Just("Darwin"), Just("SunOS")]
}

// Strategy for generating entropy availability
fn entropy() -> impl Strategy<Value = NativeRngStatus> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(mixed, blocking, non_blocking)| NativeRngStatus {
        mixed,
        blocking,
        non_blocking,
    })
}

// Strategy for generating settings with arbitrary native switches
fn settings() -> impl Strategy<Value = RegistrySettings> {
    (
        any::<bool>(),
        prop::collection::vec(any::<bool>(), DigestAlgorithm::NATIVE_CAPABLE.len()),
        any::<bool>(),
        platforms(),
    )
        .prop_map(|(global, toggles, legacy, platform)| {
            let mut settings = RegistrySettings::default()
                .with_global_native_digest(global)
                .with_legacy_dsa_key_generation(legacy)
                .with_platform(platform);
            for (algorithm, enabled) in DigestAlgorithm::NATIVE_CAPABLE.iter().zip(toggles) {
                settings = settings.with_native_digest(*algorithm, enabled);
            }
            settings
        })
}

proptest! {
    #[test]
    fn test_names_unique_per_type(settings in settings(), entropy in entropy()) {
        let registry = ProviderRegistry::initialize(settings, &NativeLibraryStatus::loaded(), &entropy);

        let mut seen = HashSet::new();
        for descriptor in registry.catalog() {
            for name in descriptor.names() {
                prop_assert!(
                    seen.insert((descriptor.service_type(), name.to_ascii_uppercase())),
                    "{}.{} registered twice", descriptor.service_type(), name
                );
            }
        }
    }

    #[test]
    fn test_every_digest_registered(settings in settings(), entropy in entropy()) {
        let registry = ProviderRegistry::initialize(settings, &NativeLibraryStatus::loaded(), &entropy);
        for algorithm in DigestAlgorithm::ALL {
            prop_assert!(registry.lookup(ServiceType::MessageDigest, algorithm.name()).is_some());
        }
        let expected = 38 + [entropy.mixed, entropy.blocking, entropy.non_blocking]
            .iter()
            .filter(|available| **available)
            .count();
        prop_assert_eq!(registry.catalog().len(), expected);
    }

    #[test]
    fn test_digest_backend_follows_settings(settings in settings(), algorithm in digest_algorithms()) {
        let native_expected = settings.global_native_digest
            && settings.native_digests.is_enabled(algorithm)
            && !settings.platform_exclusions.excludes(algorithm, &settings.platform_identity);
        let registry =
            ProviderRegistry::initialize(settings, &NativeLibraryStatus::loaded(), &NativeRngStatus::unavailable());

        let backend = registry
            .lookup(ServiceType::MessageDigest, algorithm.name())
            .map(|d| d.implementation().backend());
        let expected = if native_expected { Backend::Native } else { Backend::Portable };
        prop_assert_eq!(backend, Some(expected));
    }

    #[test]
    fn test_selection_total(
        algorithm in digest_algorithms(),
        native_enabled in any::<bool>(),
        global_native_enabled in any::<bool>(),
        native_library_loaded in any::<bool>(),
        platform_excluded in any::<bool>(),
    ) {
        let flags = CapabilityFlags {
            native_enabled,
            global_native_enabled,
            native_library_loaded,
            platform_excluded,
        };
        let implementation = ImplementationSelector::select(algorithm, flags);
        let native = algorithm.has_native()
            && native_enabled
            && global_native_enabled
            && native_library_loaded
            && !platform_excluded;
        prop_assert_eq!(implementation.backend() == Backend::Native, native);
    }

    #[test]
    fn test_default_random_needs_exact_device(source in "\\PC{0,40}", available in any::<bool>()) {
        let algorithm = DefaultRandomAlgorithmResolver::resolve(&SeedSource::new(source.clone()), available);
        let native = available && (source == "file:/dev/random" || source == "file:/dev/urandom");
        let expected = if native { RandomAlgorithm::NativePrng } else { RandomAlgorithm::Drbg };
        prop_assert_eq!(algorithm, expected);
    }

    #[test]
    fn test_device_resolution_is_deterministic(uri in "\\PC{0,60}") {
        let cwd = std::path::Path::new("/work");
        prop_assert_eq!(resolve_device_path_from(&uri, cwd), resolve_device_path_from(&uri, cwd));
    }

    #[test]
    fn test_absolute_file_uri_resolves_to_path(segments in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
        let path = format!("/{}", segments.join("/"));
        let resolved = resolve_device_path_from(&format!("file:{}", path), std::path::Path::new("/work"));
        prop_assert_eq!(resolved, std::path::PathBuf::from(path));
    }
}
