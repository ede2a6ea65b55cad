/*!
Builder for provider runtimes.
*/

use std::sync::Arc;

use crate::core::backend::BackendProfile;
use crate::core::constants::DEFAULT_NAMESPACE;
use crate::core::settings::{Settings, SettingsMap};
use crate::provider::runtime::ProviderRuntime;

/// Builder for [`ProviderRuntime`]
pub struct ProviderBuilder {
    /// Runtime configuration source
    settings: Arc<dyn Settings>,

    /// Backend modules to register features for
    profile: BackendProfile,

    /// Settings namespace
    namespace: String,
}

impl ProviderBuilder {
    /// Create a new builder with empty settings and the build's backend profile
    pub fn new() -> Self {
        Self {
            settings: Arc::new(SettingsMap::new()),
            profile: BackendProfile::from_build(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Read runtime configuration from `settings`
    pub fn with_settings(mut self, settings: Arc<dyn Settings>) -> Self {
        self.settings = settings;
        self
    }

    /// Register features for a specific backend profile
    pub fn with_profile(mut self, profile: BackendProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Use a different settings namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Build the runtime
    pub fn build(self) -> Arc<ProviderRuntime> {
        Arc::new(ProviderRuntime::from_parts(
            self.settings,
            self.profile,
            self.namespace,
        ))
    }
}

impl Default for ProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
