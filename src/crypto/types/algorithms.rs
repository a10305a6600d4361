/*!
Algorithm type definitions.

This module defines the service types and algorithm enums the registry
selects implementations for.
*/

use std::fmt;

/// Engine class a descriptor is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceType {
    SecureRandom,
    Signature,
    KeyPairGenerator,
    AlgorithmParameterGenerator,
    AlgorithmParameters,
    KeyFactory,
    MessageDigest,
    CertificateFactory,
    KeyStore,
    CertStore,
    Policy,
    Configuration,
    CertPathBuilder,
    CertPathValidator,
}

impl ServiceType {
    /// Get the canonical name of the service type
    pub fn name(&self) -> &'static str {
        match self {
            ServiceType::SecureRandom => "SecureRandom",
            ServiceType::Signature => "Signature",
            ServiceType::KeyPairGenerator => "KeyPairGenerator",
            ServiceType::AlgorithmParameterGenerator => "AlgorithmParameterGenerator",
            ServiceType::AlgorithmParameters => "AlgorithmParameters",
            ServiceType::KeyFactory => "KeyFactory",
            ServiceType::MessageDigest => "MessageDigest",
            ServiceType::CertificateFactory => "CertificateFactory",
            ServiceType::KeyStore => "KeyStore",
            ServiceType::CertStore => "CertStore",
            ServiceType::Policy => "Policy",
            ServiceType::Configuration => "Configuration",
            ServiceType::CertPathBuilder => "CertPathBuilder",
            ServiceType::CertPathValidator => "CertPathValidator",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported message digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum DigestAlgorithm {
    Md2,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl DigestAlgorithm {
    /// Every digest in catalog order
    pub const ALL: [DigestAlgorithm; 13] = [
        DigestAlgorithm::Md2,
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha512_224,
        DigestAlgorithm::Sha512_256,
        DigestAlgorithm::Sha3_224,
        DigestAlgorithm::Sha3_256,
        DigestAlgorithm::Sha3_384,
        DigestAlgorithm::Sha3_512,
    ];

    /// Digests that have a native implementation
    pub const NATIVE_CAPABLE: [DigestAlgorithm; 8] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha512_224,
        DigestAlgorithm::Sha512_256,
    ];

    /// Get the standard name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md2 => "MD2",
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha224 => "SHA-224",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
            DigestAlgorithm::Sha512_224 => "SHA-512/224",
            DigestAlgorithm::Sha512_256 => "SHA-512/256",
            DigestAlgorithm::Sha3_224 => "SHA3-224",
            DigestAlgorithm::Sha3_256 => "SHA3-256",
            DigestAlgorithm::Sha3_384 => "SHA3-384",
            DigestAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    /// Property toggling the native implementation, if there is one
    pub fn native_toggle(&self) -> Option<&'static str> {
        match self {
            DigestAlgorithm::Md5 => Some("crypto.nativeMD5"),
            DigestAlgorithm::Sha1 => Some("crypto.nativeSHA"),
            DigestAlgorithm::Sha224 => Some("crypto.nativeSHA224"),
            DigestAlgorithm::Sha256 => Some("crypto.nativeSHA256"),
            DigestAlgorithm::Sha384 => Some("crypto.nativeSHA384"),
            DigestAlgorithm::Sha512 => Some("crypto.nativeSHA512"),
            DigestAlgorithm::Sha512_224 => Some("crypto.nativeSHA512_224"),
            DigestAlgorithm::Sha512_256 => Some("crypto.nativeSHA512_256"),
            DigestAlgorithm::Md2
            | DigestAlgorithm::Sha3_224
            | DigestAlgorithm::Sha3_256
            | DigestAlgorithm::Sha3_384
            | DigestAlgorithm::Sha3_512 => None,
        }
    }

    /// Check if a native implementation exists for this digest
    pub fn has_native(&self) -> bool {
        self.native_toggle().is_some()
    }

    /// Slot of the algorithm in [`DigestAlgorithm::ALL`]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Secure random algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomAlgorithm {
    /// Mixed native generator reading both OS devices
    NativePrng,
    /// Native generator reading only the blocking device
    NativePrngBlocking,
    /// Native generator reading only the non-blocking device
    NativePrngNonBlocking,
    /// Deterministic random bit generator
    Drbg,
    /// Legacy SHA-1 based generator
    Sha1Prng,
}

impl RandomAlgorithm {
    /// Get the standard name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            RandomAlgorithm::NativePrng => "NativePRNG",
            RandomAlgorithm::NativePrngBlocking => "NativePRNGBlocking",
            RandomAlgorithm::NativePrngNonBlocking => "NativePRNGNonBlocking",
            RandomAlgorithm::Drbg => "DRBG",
            RandomAlgorithm::Sha1Prng => "SHA1PRNG",
        }
    }

    /// Check if the generator reads OS entropy devices directly
    pub fn is_native(&self) -> bool {
        matches!(
            self,
            RandomAlgorithm::NativePrng
                | RandomAlgorithm::NativePrngBlocking
                | RandomAlgorithm::NativePrngNonBlocking
        )
    }
}

impl fmt::Display for RandomAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// DSA signature schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum DsaSignature {
    Sha1WithDsa,
    RawDsa,
    Sha224WithDsa,
    Sha256WithDsa,
}

impl DsaSignature {
    /// Schemes in catalog order
    pub const ALL: [DsaSignature; 4] = [
        DsaSignature::Sha1WithDsa,
        DsaSignature::RawDsa,
        DsaSignature::Sha224WithDsa,
        DsaSignature::Sha256WithDsa,
    ];

    /// Name of the scheme with DER-encoded signatures
    pub fn name(&self) -> &'static str {
        match self {
            DsaSignature::Sha1WithDsa => "SHA1withDSA",
            DsaSignature::RawDsa => "NONEwithDSA",
            DsaSignature::Sha224WithDsa => "SHA224withDSA",
            DsaSignature::Sha256WithDsa => "SHA256withDSA",
        }
    }

    /// Name of the scheme with IEEE P1363 encoded signatures
    pub fn p1363_name(&self) -> &'static str {
        match self {
            DsaSignature::Sha1WithDsa => "SHA1withDSAinP1363Format",
            DsaSignature::RawDsa => "NONEwithDSAinP1363Format",
            DsaSignature::Sha224WithDsa => "SHA224withDSAinP1363Format",
            DsaSignature::Sha256WithDsa => "SHA256withDSAinP1363Format",
        }
    }

    /// Recommended key size for the scheme
    pub fn key_size(&self) -> &'static str {
        use crate::constants::attributes::{DSA_SHA1_KEY_SIZE, DSA_SHA2_KEY_SIZE};

        match self {
            DsaSignature::Sha1WithDsa | DsaSignature::RawDsa => DSA_SHA1_KEY_SIZE,
            DsaSignature::Sha224WithDsa | DsaSignature::Sha256WithDsa => DSA_SHA2_KEY_SIZE,
        }
    }
}

/// DSA key pair generator variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum DsaKeyPairVariant {
    /// Generator keeping the historical default parameter handling
    Legacy,
    /// Generator following the current defaults
    Current,
}

/// Key store formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyStoreFormat {
    Pkcs12,
    Jks,
    CaseExactJks,
    Dks,
}

impl KeyStoreFormat {
    pub const ALL: [KeyStoreFormat; 4] = [
        KeyStoreFormat::Pkcs12,
        KeyStoreFormat::Jks,
        KeyStoreFormat::CaseExactJks,
        KeyStoreFormat::Dks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KeyStoreFormat::Pkcs12 => "PKCS12",
            KeyStoreFormat::Jks => "JKS",
            KeyStoreFormat::CaseExactJks => "CaseExactJKS",
            KeyStoreFormat::Dks => "DKS",
        }
    }
}

/// Certificate store kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum CertStoreKind {
    Collection,
    IndexedCollection,
}

impl CertStoreKind {
    pub const ALL: [CertStoreKind; 2] = [CertStoreKind::Collection, CertStoreKind::IndexedCollection];

    pub fn name(&self) -> &'static str {
        match self {
            CertStoreKind::Collection => "Collection",
            CertStoreKind::IndexedCollection => "com.sun.security.IndexedCollection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_index_matches_catalog_order() {
        for (i, algorithm) in DigestAlgorithm::ALL.iter().enumerate() {
            assert_eq!(algorithm.index(), i);
        }
    }

    #[test]
    fn test_native_capable_digests() {
        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(
                algorithm.has_native(),
                DigestAlgorithm::NATIVE_CAPABLE.contains(&algorithm),
                "{}",
                algorithm
            );
        }
        assert_eq!(DigestAlgorithm::Md5.native_toggle(), Some("crypto.nativeMD5"));
        assert_eq!(DigestAlgorithm::Sha3_256.native_toggle(), None);
    }

    #[test]
    fn test_dsa_key_sizes() {
        assert_eq!(DsaSignature::Sha1WithDsa.key_size(), "1024");
        assert_eq!(DsaSignature::RawDsa.key_size(), "1024");
        assert_eq!(DsaSignature::Sha224WithDsa.key_size(), "2048");
        assert_eq!(DsaSignature::Sha256WithDsa.key_size(), "2048");
    }

    #[test]
    fn test_random_algorithm_names() {
        assert_eq!(RandomAlgorithm::NativePrng.name(), "NativePRNG");
        assert_eq!(RandomAlgorithm::Drbg.to_string(), "DRBG");
        assert!(RandomAlgorithm::NativePrngBlocking.is_native());
        assert!(!RandomAlgorithm::Sha1Prng.is_native());
    }
}
