/*!
Default secure random algorithm resolution.
*/

use crate::crypto::types::RandomAlgorithm;
use crate::random::seed::SeedSource;

/// Picks the algorithm used for default-constructed secure random instances
pub struct DefaultRandomAlgorithmResolver;

impl DefaultRandomAlgorithmResolver {
    /// `NativePRNG` when it is available and the seed source names an OS
    /// entropy device exactly, `DRBG` otherwise
    pub fn resolve(seed_source: &SeedSource, native_rng_available: bool) -> RandomAlgorithm {
        if native_rng_available && seed_source.is_os_device() {
            RandomAlgorithm::NativePrng
        } else {
            RandomAlgorithm::Drbg
        }
    }
}
