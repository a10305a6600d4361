/*!
Constants shared across the registry: configuration keys, canonical
entropy device locations and attribute names.
*/

/// Configuration property keys
pub mod properties {
    /// Master switch for all native digest implementations (system scope)
    pub const NATIVE_DIGEST: &str = "crypto.nativeDigest";

    /// Selects the legacy DSA key pair generator (system scope)
    pub const LEGACY_DSA_KEY_PAIR_GENERATOR: &str = "crypto.legacyDSAKeyPairGenerator";

    /// Seed source override, takes precedence over `SECURE_RANDOM_SOURCE` (system scope)
    pub const ENTROPY_GATHERING_DEVICE: &str = "crypto.egd";

    /// Seed source configured in the security properties (security scope)
    pub const SECURE_RANDOM_SOURCE: &str = "securerandom.source";

    /// Operating system name (system scope)
    pub const OS_NAME: &str = "os.name";
}

/// Canonical entropy device locations
pub mod devices {
    /// Blocking OS entropy device
    pub const URL_DEV_RANDOM: &str = "file:/dev/random";

    /// Non-blocking OS entropy device
    pub const URL_DEV_URANDOM: &str = "file:/dev/urandom";

    /// Filesystem path of the blocking device
    pub const DEV_RANDOM: &str = "/dev/random";

    /// Filesystem path of the non-blocking device
    pub const DEV_URANDOM: &str = "/dev/urandom";
}

/// Service attribute names and common values
pub mod attributes {
    pub const THREAD_SAFE: &str = "ThreadSafe";
    pub const IMPLEMENTED_IN: &str = "ImplementedIn";
    pub const SUPPORTED_KEY_CLASSES: &str = "SupportedKeyClasses";
    pub const KEY_SIZE: &str = "KeySize";
    pub const VALIDATION_ALGORITHM: &str = "ValidationAlgorithm";

    /// Value of `ImplementedIn` for every built-in service
    pub const SOFTWARE: &str = "Software";

    /// Key classes accepted by the DSA signature engines
    pub const DSA_KEY_CLASSES: &str =
        "java.security.interfaces.DSAPublicKey|java.security.interfaces.DSAPrivateKey";

    /// Validation algorithm implemented by the PKIX engines
    pub const RFC5280: &str = "RFC5280";

    /// Key size for SHA-1 and raw DSA signatures
    pub const DSA_SHA1_KEY_SIZE: &str = "1024";

    /// Key size for SHA-224/256 DSA signatures and DSA key/parameter generation
    pub const DSA_SHA2_KEY_SIZE: &str = "2048";
}

/// Platform excluded from native MD5 by default
pub const NATIVE_MD5_EXCLUDED_PLATFORM: &str = "AIX";
