//! Core components of the provider capability registration.
//!
//! This module contains the capability model, the feature group catalog,
//! the registry merge and its cache, runtime settings and error handling.

// Capability descriptors
pub mod capability;

// Registration and provision entries
pub mod entry;

// Backend build profiles
pub mod backend;

// Feature groups and their builder
pub mod group;

// The catalog of all algorithm families
pub mod catalog;

// Merged registry and cache
pub mod registry;

// Runtime settings
pub mod settings;

// Host-side constructor dispatch
pub mod dispatch;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::backend::{BackendFeature, BackendProfile};
pub use self::capability::{Algorithm, Capability, CapabilityCategory};
pub use self::catalog::FeatureCatalog;
pub use self::entry::{Constructor, FactoryId, FeatureEntry, Provision, Registration};
pub use self::error::{Error, Result};
pub use self::group::{FeatureGroup, GroupBuilder};
pub use self::registry::{RegistrationCache, Registry, RegistryBuilder};
pub use self::settings::{Settings, SettingsMap};
