/*!
Traits the host uses to talk to providers.
*/

use std::ops::Deref;
use std::sync::Arc;

use crate::core::entry::FeatureEntry;
use crate::core::registry::Registry;

/// A loaded provider as seen by the host
pub trait Plugin: Send + Sync {
    /// Fixed name identifying the provider
    fn name(&self) -> &str;

    /// The provider's feature list, built on first call
    fn features(&self) -> Features;

    /// Release the provider; shared feature data outlives it
    fn destroy(self: Box<Self>);
}

/// Handle to a provider's shared, immutable feature list
#[derive(Debug, Clone)]
pub struct Features {
    registry: Arc<Registry>,
}

impl Features {
    pub(crate) fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.registry.len()
    }

    pub fn entries(&self) -> &[FeatureEntry] {
        self.registry.entries()
    }

    /// The shared registry behind this handle
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Whether both handles point at the same registry instance
    pub fn same_registry(&self, other: &Features) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }
}

impl Deref for Features {
    type Target = [FeatureEntry];

    fn deref(&self) -> &Self::Target {
        self.registry.entries()
    }
}
