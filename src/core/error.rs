/*!
Error handling for the provider capability core.

Building the catalog never fails. Errors only come from validating entry
lists authored outside the built-in catalog, from parsing backend flags or
setting values, and from host-side dispatch of constructors.
*/

use thiserror::Error;

use crate::core::capability::{Capability, CapabilityCategory};

/// Result type for the provider capability core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the provider capability core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A provision appeared before any registration in its group
    #[error("Provision {capability} at position {index} of group '{group}' has no preceding registration")]
    OrphanedProvision {
        group: String,
        index: usize,
        capability: Capability,
    },

    /// A provision cannot be served by the registration it follows
    #[error("Provision {capability} at position {index} of group '{group}' does not fit {registration} registration")]
    IncompatibleProvision {
        group: String,
        index: usize,
        capability: Capability,
        registration: CapabilityCategory,
    },

    /// A capability whose algorithm does not belong to its category
    #[error("Malformed capability {0}")]
    MalformedCapability(Capability),

    /// The host asked for an instance of a declared-only constructor
    #[error("Constructor for {0} is declared pro forma and cannot be instantiated")]
    ProFormaConstructor(Capability),

    /// The host resolver could not produce an instance
    #[error("No implementation available for {0}")]
    Unavailable(Capability),

    /// An unrecognized backend feature name
    #[error("Unknown backend feature: {0}")]
    UnknownBackendFeature(String),

    /// A setting value that could not be interpreted
    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },
}

/// Create an orphaned provision error
#[macro_export]
macro_rules! orphaned_provision_err {
    ($group:expr, $index:expr, $capability:expr) => {
        Err($crate::core::error::Error::OrphanedProvision {
            group: $group.to_string(),
            index: $index,
            capability: $capability,
        })
    };
}
