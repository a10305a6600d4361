/*!
Error handling for the service registry.

None of these errors escape a registry build. Layers that can fail
return a `Result`; the orchestrating code recovers locally and logs what
it did.
*/

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration property could not be read (e.g. access denied)
    #[error("Failed to read property '{key}': {reason}")]
    PropertyRead {
        key: String,
        reason: String,
    },

    /// A descriptor with the same type and algorithm is already registered
    #[error("Duplicate service: {service_type}.{algorithm}")]
    DuplicateService {
        service_type: String,
        algorithm: String,
    },

    /// An alias collides with a name already registered for the same type
    #[error("Alias '{alias}' for {service_type} collides with '{existing}'")]
    AliasCollision {
        service_type: String,
        alias: String,
        existing: String,
    },

    /// Neither the selected nor the portable implementation can be used
    #[error("No usable implementation for {service_type}.{algorithm}")]
    Unregistrable {
        service_type: String,
        algorithm: String,
    },

    /// A seed source or device URI could not be parsed
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri {
        uri: String,
        reason: String,
    },
}

impl Error {
    /// Create a PropertyRead error
    pub fn property_read(key: &str, reason: impl Into<String>) -> Self {
        Error::PropertyRead {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidUri error
    pub fn invalid_uri(uri: &str, reason: impl Into<String>) -> Self {
        Error::InvalidUri {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }
}
