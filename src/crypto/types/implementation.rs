/*!
Implementation references.

Every concrete engine the catalog can point at is a variant of
[`Implementation`]. Selection code picks a variant; the external
registration mechanism maps variants to constructors.
*/

use std::fmt;

use super::algorithms::{
    CertStoreKind, DigestAlgorithm, DsaKeyPairVariant, DsaSignature, KeyStoreFormat,
    RandomAlgorithm,
};

/// Where an implementation comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Accelerated path backed by a native library or OS facility
    Native,
    /// Always-available software fallback
    Portable,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => f.write_str("native"),
            Backend::Portable => f.write_str("portable"),
        }
    }
}

/// Opaque reference to a concrete engine implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum Implementation {
    SecureRandom(RandomAlgorithm),
    Signature {
        scheme: DsaSignature,
        p1363: bool,
    },
    KeyPairGenerator(DsaKeyPairVariant),
    DsaParameterGenerator,
    DsaParameters,
    DsaKeyFactory,
    Digest {
        algorithm: DigestAlgorithm,
        backend: Backend,
    },
    X509Factory,
    KeyStore(KeyStoreFormat),
    CertStore(CertStoreKind),
    PolicyFile,
    LoginConfigFile,
    PkixCertPathBuilder,
    PkixCertPathValidator,
}

impl Implementation {
    /// Portable digest implementation
    pub fn portable_digest(algorithm: DigestAlgorithm) -> Self {
        Implementation::Digest { algorithm, backend: Backend::Portable }
    }

    /// Native digest implementation
    pub fn native_digest(algorithm: DigestAlgorithm) -> Self {
        Implementation::Digest { algorithm, backend: Backend::Native }
    }

    /// Get the backend this implementation runs on
    pub fn backend(&self) -> Backend {
        match self {
            Implementation::Digest { backend, .. } => *backend,
            Implementation::SecureRandom(algorithm) if algorithm.is_native() => Backend::Native,
            _ => Backend::Portable,
        }
    }

    /// The software implementation that can stand in for this one
    ///
    /// Native random generators have no software equivalent.
    pub fn portable_fallback(&self) -> Option<Implementation> {
        match self {
            Implementation::Digest { algorithm, .. } => Some(Self::portable_digest(*algorithm)),
            Implementation::SecureRandom(algorithm) if algorithm.is_native() => None,
            other => Some(*other),
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = self.backend();
        match self {
            Implementation::SecureRandom(algorithm) => {
                write!(f, "{}::random::{}", backend, algorithm.name())
            }
            Implementation::Signature { scheme, p1363 } => {
                let name = if *p1363 { scheme.p1363_name() } else { scheme.name() };
                write!(f, "{}::dsa::{}", backend, name)
            }
            Implementation::KeyPairGenerator(variant) => {
                write!(f, "{}::dsa::KeyPairGenerator::{:?}", backend, variant)
            }
            Implementation::DsaParameterGenerator => write!(f, "{}::dsa::ParameterGenerator", backend),
            Implementation::DsaParameters => write!(f, "{}::dsa::Parameters", backend),
            Implementation::DsaKeyFactory => write!(f, "{}::dsa::KeyFactory", backend),
            Implementation::Digest { algorithm, .. } => {
                write!(f, "{}::digest::{}", backend, algorithm.name())
            }
            Implementation::X509Factory => write!(f, "{}::x509::Factory", backend),
            Implementation::KeyStore(format) => write!(f, "{}::keystore::{}", backend, format.name()),
            Implementation::CertStore(kind) => write!(f, "{}::certstore::{}", backend, kind.name()),
            Implementation::PolicyFile => write!(f, "{}::policy::File", backend),
            Implementation::LoginConfigFile => write!(f, "{}::login::ConfigFile", backend),
            Implementation::PkixCertPathBuilder => write!(f, "{}::pkix::CertPathBuilder", backend),
            Implementation::PkixCertPathValidator => write!(f, "{}::pkix::CertPathValidator", backend),
        }
    }
}

/// Host capability answering whether an implementation can be constructed
pub trait ImplementationAvailability {
    /// Check if the implementation is usable in this process
    fn is_available(&self, implementation: &Implementation) -> bool;
}

/// Availability policy that trusts every implementation reference
#[derive(Debug, Clone, Copy, Default)]
pub struct AllAvailable;

impl ImplementationAvailability for AllAvailable {
    fn is_available(&self, _: &Implementation) -> bool {
        true
    }
}

impl<F> ImplementationAvailability for F
where
    F: Fn(&Implementation) -> bool,
{
    fn is_available(&self, implementation: &Implementation) -> bool {
        self(implementation)
    }
}
