/*!
Merging feature groups into a registry.
*/

use crate::core::catalog::FeatureCatalog;
use crate::core::constants::{use_rng_key, DEFAULT_NAMESPACE, PROVIDER_NAME, USE_RNG_DEFAULT};
use crate::core::entry::FeatureEntry;
use crate::core::group::FeatureGroup;
use crate::core::registry::Registry;
use crate::core::settings::Settings;

/// Merges a [`FeatureCatalog`] into a [`Registry`]
///
/// The statically gated groups are appended in catalog order. The RNG group
/// goes last and only if `<namespace>.plugins.<provider>.use_rng` is set,
/// which is the only runtime input to the merge.
pub struct RegistryBuilder<'a> {
    catalog: &'a FeatureCatalog,
    settings: &'a dyn Settings,
    namespace: &'a str,
    provider: &'a str,
}

impl<'a> RegistryBuilder<'a> {
    pub fn new(catalog: &'a FeatureCatalog, settings: &'a dyn Settings) -> Self {
        Self {
            catalog,
            settings,
            namespace: DEFAULT_NAMESPACE,
            provider: PROVIDER_NAME,
        }
    }

    /// Settings namespace the RNG toggle is read from
    pub fn namespace(mut self, namespace: &'a str) -> Self {
        self.namespace = namespace;
        self
    }

    /// Provider name used in the settings key
    pub fn provider(mut self, provider: &'a str) -> Self {
        self.provider = provider;
        self
    }

    /// Run the merge
    pub fn build(&self) -> Registry {
        let mut entries = Vec::with_capacity(FeatureCatalog::max_len());

        for group in self.catalog.groups() {
            append(&mut entries, group);
        }

        let key = use_rng_key(self.namespace, self.provider);
        if self.settings.get_bool(&key, USE_RNG_DEFAULT) {
            append(&mut entries, self.catalog.rng_group());
        } else {
            log::debug!("{} disabled, skipping RNG features", key);
        }

        log::info!(
            "registered {} {} features ({} registrations)",
            entries.len(),
            self.provider,
            entries.iter().filter(|e| e.is_registration()).count()
        );
        Registry::from_entries(entries)
    }
}

fn append(entries: &mut Vec<FeatureEntry>, group: &FeatureGroup) {
    entries.extend_from_slice(group.entries());
    log::debug!("appended {} entries from group '{}'", group.len(), group.name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::{BackendFeature, BackendProfile};
    use crate::core::capability::CapabilityCategory;
    use crate::core::settings::SettingsMap;

    #[test]
    fn test_build_all_features() {
        let catalog = FeatureCatalog::new(&BackendProfile::all());
        let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();

        assert_eq!(registry.len(), FeatureCatalog::max_len());
        // RNG entries come after everything else
        let first_rng = registry
            .iter()
            .position(|e| e.category() == CapabilityCategory::Rng)
            .unwrap();
        assert_eq!(first_rng, registry.len() - catalog.rng_group().len());
    }

    #[test]
    fn test_rng_toggle() {
        let catalog = FeatureCatalog::new(&BackendProfile::all());
        let settings = SettingsMap::from_pairs([("charon.plugins.botan.use_rng", "no")]);
        let registry = RegistryBuilder::new(&catalog, &settings).build();

        assert_eq!(registry.count_of(CapabilityCategory::Rng), 0);
        assert_eq!(registry.len(), FeatureCatalog::max_len() - catalog.rng_group().len());
    }

    #[test]
    fn test_namespace_selects_key() {
        let catalog = FeatureCatalog::new(&BackendProfile::all());
        let settings = SettingsMap::from_pairs([("swanctl.plugins.botan.use_rng", "no")]);

        let default_ns = RegistryBuilder::new(&catalog, &settings).build();
        assert_eq!(default_ns.count_of(CapabilityCategory::Rng), 3);

        let swanctl = RegistryBuilder::new(&catalog, &settings)
            .namespace("swanctl")
            .build();
        assert_eq!(swanctl.count_of(CapabilityCategory::Rng), 0);
    }

    #[test]
    fn test_empty_profile_builds_empty_registry() {
        let catalog = FeatureCatalog::new(&BackendProfile::none());
        let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();

        assert!(registry.is_empty());
        assert!(registry.entries().is_empty());
    }

    #[test]
    fn test_only_rng() {
        let profile = BackendProfile::none()
            .with(BackendFeature::SystemRng)
            .with(BackendFeature::HmacDrbg);
        let catalog = FeatureCatalog::new(&profile);
        let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();

        assert_eq!(registry.len(), 4);
        assert!(registry.iter().all(|e| e.category() == CapabilityCategory::Rng));
    }
}
