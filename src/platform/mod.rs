/*!
Host capability probes.

This module provides the seams through which the registry learns about
the host: the platform identity, whether the native digest library
loaded, and which OS entropy sources exist.
*/

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::constants::devices::{DEV_RANDOM, DEV_URANDOM};
use crate::crypto::types::DigestAlgorithm;

// Platform-specific implementations
#[cfg(unix)]
pub mod unix;

/// Detect the name of the running operating system
///
/// Uses `uname` where available so the result matches the kernel's own
/// naming (`Linux`, `Darwin`, `AIX`, ...).
pub fn detect_platform_identity() -> String {
    #[cfg(unix)]
    {
        if let Some(name) = unix::system_name() {
            return name;
        }
    }

    std::env::consts::OS.to_string()
}

/// Load state of the native digest library
pub trait NativeLibrary {
    /// Check if the library loaded and is allowed to be used
    fn is_loaded(&self) -> bool;

    /// Check if the library provides a specific digest
    fn is_algorithm_available(&self, algorithm: DigestAlgorithm) -> bool {
        self.is_loaded() && algorithm.has_native()
    }
}

/// Host without a native digest library
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeLibrary;

impl NativeLibrary for NoNativeLibrary {
    fn is_loaded(&self) -> bool {
        false
    }
}

/// Native library state reported by the host
#[derive(Debug, Clone, Default)]
pub struct NativeLibraryStatus {
    loaded: bool,
    missing: HashSet<DigestAlgorithm>,
}

impl NativeLibraryStatus {
    /// Library loaded with every native digest available
    pub fn loaded() -> Self {
        Self { loaded: true, missing: HashSet::new() }
    }

    /// Library failed to load
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Mark a digest as missing from the loaded library
    pub fn without(mut self, algorithm: DigestAlgorithm) -> Self {
        self.missing.insert(algorithm);
        self
    }
}

impl NativeLibrary for NativeLibraryStatus {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn is_algorithm_available(&self, algorithm: DigestAlgorithm) -> bool {
        self.loaded && algorithm.has_native() && !self.missing.contains(&algorithm)
    }
}

/// Availability of the native random generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeRngStatus {
    /// Mixed generator (needs both devices)
    pub mixed: bool,
    /// Blocking generator
    pub blocking: bool,
    /// Non-blocking generator
    pub non_blocking: bool,
}

impl NativeRngStatus {
    /// All native generators usable
    pub fn available() -> Self {
        Self { mixed: true, blocking: true, non_blocking: true }
    }

    /// No native generator usable
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Source of native random generator availability
pub trait EntropySources {
    fn status(&self) -> NativeRngStatus;
}

impl EntropySources for NativeRngStatus {
    fn status(&self) -> NativeRngStatus {
        *self
    }
}

/// Probes the OS entropy devices on the filesystem
#[derive(Debug, Clone)]
pub struct DeviceEntropySources {
    random: PathBuf,
    urandom: PathBuf,
}

impl Default for DeviceEntropySources {
    fn default() -> Self {
        Self::new(DEV_RANDOM, DEV_URANDOM)
    }
}

impl DeviceEntropySources {
    /// Probe custom device locations
    pub fn new(random: impl AsRef<Path>, urandom: impl AsRef<Path>) -> Self {
        Self {
            random: random.as_ref().to_path_buf(),
            urandom: urandom.as_ref().to_path_buf(),
        }
    }

    fn readable(path: &Path) -> bool {
        std::fs::File::open(path).is_ok()
    }
}

impl EntropySources for DeviceEntropySources {
    fn status(&self) -> NativeRngStatus {
        let blocking = Self::readable(&self.random);
        let non_blocking = Self::readable(&self.urandom);
        log::debug!(
            "Entropy devices: {} readable={}, {} readable={}",
            self.random.display(),
            blocking,
            self.urandom.display(),
            non_blocking
        );
        NativeRngStatus {
            mixed: blocking && non_blocking,
            blocking,
            non_blocking,
        }
    }
}
