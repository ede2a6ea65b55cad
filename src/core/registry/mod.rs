/*!
The merged capability registry.

The registry is the flat, ordered sequence of every entry that survived
static and runtime gating. It is built by [`RegistryBuilder`] and memoized in
a [`RegistrationCache`]; once built it is never modified.
*/

pub mod builder;
pub mod cache;

use sha2::{Digest, Sha256};

use crate::core::capability::{Capability, CapabilityCategory};
use crate::core::entry::{Constructor, FeatureEntry};
use crate::core::group::Registrations;

pub use builder::RegistryBuilder;
pub use cache::RegistrationCache;

/// The flattened catalog of all enabled feature entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<FeatureEntry>,
}

impl Registry {
    pub(crate) fn from_entries(entries: Vec<FeatureEntry>) -> Self {
        Self { entries }
    }

    /// All entries in merge order
    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    /// Number of entries actually appended
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureEntry> {
        self.entries.iter()
    }

    /// Registrations with the provisions attached to each
    pub fn registrations(&self) -> Registrations<'_> {
        Registrations::new(&self.entries)
    }

    /// Every provided capability, in order, duplicates included
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.entries
            .iter()
            .filter_map(FeatureEntry::as_provision)
            .map(|prov| prov.capability)
    }

    /// Whether any registration provides `capability`
    pub fn provides(&self, capability: &Capability) -> bool {
        self.capabilities().any(|provided| provided == *capability)
    }

    /// Number of provisions of `category`
    pub fn count_of(&self, category: CapabilityCategory) -> usize {
        self.capabilities().filter(|c| c.category == category).count()
    }

    /// Constructors registered as providing `capability`, in merge order
    pub fn constructors_for(&self, capability: &Capability) -> Vec<Constructor> {
        self.registrations()
            .filter(|view| view.capabilities().any(|c| c == *capability))
            .map(|view| view.registration.constructor)
            .collect()
    }

    /// SHA-256 over the rendered entries
    ///
    /// Two registries with the same entries in the same order have the same
    /// fingerprint.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            hasher.update(entry.to_string().as_bytes());
            hasher.update([0u8]);
        }
        hasher.finalize().into()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a FeatureEntry;
    type IntoIter = std::slice::Iter<'a, FeatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
