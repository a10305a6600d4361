/*!
Catalog assembly.

The builder walks a fixed sequence of stages, one per service category,
appending each category's descriptors in declared order. No stage can
fail the build: an entry that cannot be backed by any implementation, or
that clashes with an earlier entry, is logged and left out.
*/

use crate::config::RegistrySettings;
use crate::constants::attributes::{
    DSA_KEY_CLASSES, DSA_SHA2_KEY_SIZE, IMPLEMENTED_IN, KEY_SIZE, RFC5280, SOFTWARE,
    SUPPORTED_KEY_CLASSES, THREAD_SAFE, VALIDATION_ALGORITHM,
};
use crate::crypto::registry::catalog::{Catalog, ServiceDescriptor};
use crate::crypto::selector::ImplementationSelector;
use crate::crypto::types::{
    aliases_for, Attributes, Backend, CertStoreKind, DigestAlgorithm, DsaSignature, Implementation,
    ImplementationAvailability, KeyStoreFormat, RandomAlgorithm, ServiceType,
};
use crate::error::{Error, Result};
use crate::platform::NativeRngStatus;

/// Assembly progress; each state names the last category registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStage {
    Empty,
    RandomRegistered,
    SignatureRegistered,
    KeyPairRegistered,
    ParametersRegistered,
    DigestRegistered,
    CertFactoryRegistered,
    KeyStoreRegistered,
    CertStoreRegistered,
    PolicyRegistered,
    ConfigRegistered,
    CertPathRegistered,
    Final,
}

impl AssemblyStage {
    /// The stage that follows this one; `Final` is terminal
    pub fn next(self) -> Self {
        match self {
            AssemblyStage::Empty => AssemblyStage::RandomRegistered,
            AssemblyStage::RandomRegistered => AssemblyStage::SignatureRegistered,
            AssemblyStage::SignatureRegistered => AssemblyStage::KeyPairRegistered,
            AssemblyStage::KeyPairRegistered => AssemblyStage::ParametersRegistered,
            AssemblyStage::ParametersRegistered => AssemblyStage::DigestRegistered,
            AssemblyStage::DigestRegistered => AssemblyStage::CertFactoryRegistered,
            AssemblyStage::CertFactoryRegistered => AssemblyStage::KeyStoreRegistered,
            AssemblyStage::KeyStoreRegistered => AssemblyStage::CertStoreRegistered,
            AssemblyStage::CertStoreRegistered => AssemblyStage::PolicyRegistered,
            AssemblyStage::PolicyRegistered => AssemblyStage::ConfigRegistered,
            AssemblyStage::ConfigRegistered => AssemblyStage::CertPathRegistered,
            AssemblyStage::CertPathRegistered => AssemblyStage::Final,
            AssemblyStage::Final => AssemblyStage::Final,
        }
    }
}

/// Assembles the service catalog
pub struct ServiceCatalogBuilder<'a> {
    settings: &'a RegistrySettings,
    selector: ImplementationSelector<'a>,
    entropy: NativeRngStatus,
    availability: &'a dyn ImplementationAvailability,
    stage: AssemblyStage,
    // Working attribute map; descriptors take a snapshot of it
    attributes: Attributes,
    catalog: Catalog,
}

impl<'a> ServiceCatalogBuilder<'a> {
    pub fn new(
        settings: &'a RegistrySettings,
        selector: ImplementationSelector<'a>,
        entropy: NativeRngStatus,
        availability: &'a dyn ImplementationAvailability,
    ) -> Self {
        Self {
            settings,
            selector,
            entropy,
            availability,
            stage: AssemblyStage::Empty,
            attributes: Attributes::new(),
            catalog: Catalog::new(),
        }
    }

    /// Current assembly stage
    pub fn stage(&self) -> AssemblyStage {
        self.stage
    }

    /// Descriptors registered so far
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register the next category and move to the next stage
    pub fn advance(&mut self) -> AssemblyStage {
        let next = self.stage.next();
        match next {
            AssemblyStage::Empty | AssemblyStage::Final => {}
            AssemblyStage::RandomRegistered => self.register_secure_random(),
            AssemblyStage::SignatureRegistered => self.register_signatures(),
            AssemblyStage::KeyPairRegistered => self.register_key_pair_generators(),
            AssemblyStage::ParametersRegistered => self.register_parameters(),
            AssemblyStage::DigestRegistered => self.register_digests(),
            AssemblyStage::CertFactoryRegistered => self.register_certificate_factories(),
            AssemblyStage::KeyStoreRegistered => self.register_key_stores(),
            AssemblyStage::CertStoreRegistered => self.register_cert_stores(),
            AssemblyStage::PolicyRegistered => self.register_policies(),
            AssemblyStage::ConfigRegistered => self.register_configurations(),
            AssemblyStage::CertPathRegistered => self.register_cert_path(),
        }
        log::debug!("Catalog stage {:?}: {} descriptors", next, self.catalog.len());
        self.stage = next;
        next
    }

    /// Run every remaining stage and return the finished catalog
    pub fn build(mut self) -> Catalog {
        while self.stage != AssemblyStage::Final {
            self.advance();
        }
        self.catalog
    }

    fn register_secure_random(&mut self) {
        self.attributes.insert(THREAD_SAFE, "true");

        let native = [
            (self.entropy.mixed, RandomAlgorithm::NativePrng),
            (self.entropy.blocking, RandomAlgorithm::NativePrngBlocking),
            (self.entropy.non_blocking, RandomAlgorithm::NativePrngNonBlocking),
        ];
        for (available, algorithm) in native {
            if available {
                self.add(ServiceType::SecureRandom, algorithm.name(), Implementation::SecureRandom(algorithm));
            } else {
                log::debug!("{} unavailable, not registered", algorithm);
            }
        }

        self.attributes.insert(IMPLEMENTED_IN, SOFTWARE);
        for algorithm in [RandomAlgorithm::Drbg, RandomAlgorithm::Sha1Prng] {
            self.add(ServiceType::SecureRandom, algorithm.name(), Implementation::SecureRandom(algorithm));
        }
    }

    fn register_signatures(&mut self) {
        self.attributes.clear();
        self.attributes.insert(SUPPORTED_KEY_CLASSES, DSA_KEY_CLASSES);
        self.attributes.insert(IMPLEMENTED_IN, SOFTWARE);

        for scheme in DsaSignature::ALL {
            self.attributes.insert(KEY_SIZE, scheme.key_size());
            self.add_with_alias(
                ServiceType::Signature,
                scheme.name(),
                Implementation::Signature { scheme, p1363: false },
            );
        }
        self.attributes.remove(KEY_SIZE);

        for scheme in DsaSignature::ALL {
            self.add_bare(
                ServiceType::Signature,
                scheme.p1363_name(),
                Implementation::Signature { scheme, p1363: true },
            );
        }
    }

    fn register_key_pair_generators(&mut self) {
        self.attributes.clear();
        self.attributes.insert(IMPLEMENTED_IN, SOFTWARE);
        self.attributes.insert(KEY_SIZE, DSA_SHA2_KEY_SIZE);

        let variant = ImplementationSelector::select_variant(self.settings.legacy_dsa_key_generation);
        self.add_with_alias(ServiceType::KeyPairGenerator, "DSA", Implementation::KeyPairGenerator(variant));
    }

    fn register_parameters(&mut self) {
        self.add_with_alias(
            ServiceType::AlgorithmParameterGenerator,
            "DSA",
            Implementation::DsaParameterGenerator,
        );
        self.attributes.remove(KEY_SIZE);

        self.add_with_alias(ServiceType::AlgorithmParameters, "DSA", Implementation::DsaParameters);
        self.add_with_alias(ServiceType::KeyFactory, "DSA", Implementation::DsaKeyFactory);
    }

    fn register_digests(&mut self) {
        for algorithm in DigestAlgorithm::ALL {
            let implementation = self.selector.select_digest(algorithm);
            self.add_with_alias(ServiceType::MessageDigest, algorithm.name(), implementation);
        }
    }

    fn register_certificate_factories(&mut self) {
        self.add_with_alias(ServiceType::CertificateFactory, "X.509", Implementation::X509Factory);
    }

    fn register_key_stores(&mut self) {
        for format in KeyStoreFormat::ALL {
            let implementation = Implementation::KeyStore(format);
            if format == KeyStoreFormat::Pkcs12 {
                self.add_bare(ServiceType::KeyStore, format.name(), implementation);
            } else {
                self.add(ServiceType::KeyStore, format.name(), implementation);
            }
        }
    }

    fn register_cert_stores(&mut self) {
        for kind in CertStoreKind::ALL {
            self.add(ServiceType::CertStore, kind.name(), Implementation::CertStore(kind));
        }
    }

    fn register_policies(&mut self) {
        self.add_bare(ServiceType::Policy, "JavaPolicy", Implementation::PolicyFile);
    }

    fn register_configurations(&mut self) {
        self.add_bare(ServiceType::Configuration, "JavaLoginConfig", Implementation::LoginConfigFile);
    }

    fn register_cert_path(&mut self) {
        self.attributes.clear();
        self.attributes.insert(VALIDATION_ALGORITHM, RFC5280);
        self.attributes.insert(IMPLEMENTED_IN, SOFTWARE);

        self.add(ServiceType::CertPathBuilder, "PKIX", Implementation::PkixCertPathBuilder);
        self.add(ServiceType::CertPathValidator, "PKIX", Implementation::PkixCertPathValidator);
    }

    /// Register with the current attributes and no aliases
    fn add(&mut self, service_type: ServiceType, algorithm: &str, implementation: Implementation) {
        let attributes = self.attributes.clone();
        self.register(service_type, algorithm, Vec::new(), implementation, attributes);
    }

    /// Register without attributes or aliases
    fn add_bare(&mut self, service_type: ServiceType, algorithm: &str, implementation: Implementation) {
        self.register(service_type, algorithm, Vec::new(), implementation, Attributes::new());
    }

    /// Register with the current attributes and the standard aliases
    fn add_with_alias(&mut self, service_type: ServiceType, algorithm: &str, implementation: Implementation) {
        let attributes = self.attributes.clone();
        self.register(service_type, algorithm, aliases_for(algorithm), implementation, attributes);
    }

    fn register(
        &mut self,
        service_type: ServiceType,
        algorithm: &str,
        aliases: Vec<String>,
        implementation: Implementation,
        attributes: Attributes,
    ) {
        let outcome = self
            .usable_implementation(service_type, algorithm, implementation)
            .and_then(|implementation| {
                let descriptor =
                    ServiceDescriptor::new(service_type, algorithm, aliases, implementation, attributes);
                self.catalog.insert(descriptor)
            });

        if let Err(e) = outcome {
            log::warn!("{}; {}.{} left out of the catalog", e, service_type, algorithm);
        }
    }

    /// The selected implementation if usable, else its portable fallback
    fn usable_implementation(
        &self,
        service_type: ServiceType,
        algorithm: &str,
        selected: Implementation,
    ) -> Result<Implementation> {
        if self.availability.is_available(&selected) {
            return Ok(selected);
        }

        if selected.backend() == Backend::Native {
            if let Some(portable) = selected.portable_fallback() {
                if self.availability.is_available(&portable) {
                    log::warn!("{} unavailable, falling back to {}", selected, portable);
                    return Ok(portable);
                }
            }
        }

        Err(Error::Unregistrable {
            service_type: service_type.to_string(),
            algorithm: algorithm.to_string(),
        })
    }
}
