/*!
Provider runtime and facade.

[`ProviderRuntime`] is the composition root: it owns the settings source, the
backend profile and the registration cache. Every [`BotanProvider`] created
from it shares the one registry the runtime builds.
*/

use std::fmt;
use std::sync::Arc;

use crate::core::backend::BackendProfile;
use crate::core::catalog::FeatureCatalog;
use crate::core::constants::PROVIDER_NAME;
use crate::core::registry::{RegistrationCache, RegistryBuilder};
use crate::core::settings::Settings;
use crate::provider::traits::{Features, Plugin};

/// Owner of the process-wide registration state of the provider
pub struct ProviderRuntime {
    settings: Arc<dyn Settings>,
    profile: BackendProfile,
    namespace: String,
    cache: RegistrationCache,
}

impl ProviderRuntime {
    pub(crate) fn from_parts(
        settings: Arc<dyn Settings>,
        profile: BackendProfile,
        namespace: String,
    ) -> Self {
        Self {
            settings,
            profile,
            namespace,
            cache: RegistrationCache::new(),
        }
    }

    /// Backend profile the catalog is built against
    pub fn profile(&self) -> &BackendProfile {
        &self.profile
    }

    /// Settings namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether the registry has been built yet
    pub fn is_built(&self) -> bool {
        self.cache.is_built()
    }

    /// The shared feature list, built on first call
    pub fn features(&self) -> Features {
        let registry = self.cache.get_or_build(|| {
            let catalog = FeatureCatalog::new(&self.profile);
            RegistryBuilder::new(&catalog, self.settings.as_ref())
                .namespace(&self.namespace)
                .provider(PROVIDER_NAME)
                .build()
        });
        Features::new(registry)
    }

    /// Create a provider facade backed by this runtime
    pub fn create_provider(self: &Arc<Self>) -> Box<BotanProvider> {
        log::debug!("creating {} provider", PROVIDER_NAME);
        Box::new(BotanProvider {
            runtime: Arc::clone(self),
        })
    }
}

impl fmt::Debug for ProviderRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRuntime")
            .field("profile", &self.profile)
            .field("namespace", &self.namespace)
            .field("built", &self.cache.is_built())
            .finish()
    }
}

/// The facade handed to the host
#[derive(Debug)]
pub struct BotanProvider {
    runtime: Arc<ProviderRuntime>,
}

impl BotanProvider {
    /// Runtime this facade belongs to
    pub fn runtime(&self) -> &Arc<ProviderRuntime> {
        &self.runtime
    }
}

impl Plugin for BotanProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn features(&self) -> Features {
        self.runtime.features()
    }

    fn destroy(self: Box<Self>) {
        log::debug!("destroying {} provider", PROVIDER_NAME);
    }
}
