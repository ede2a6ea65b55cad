/*!
Feature groups.

A feature group is the ordered list of entries for one algorithm family.
Groups are assembled through [`GroupBuilder`]: a provision can only be added
through the [`RegistrationScope`] returned when a registration is opened, so a
provision without a registration cannot be written down. Whether each
provision fits its registration is checked by [`GroupBuilder::build`]. Entry
lists from elsewhere go through [`FeatureGroup::from_entries`], which checks
the same rules.
*/

use crate::core::capability::{Capability, CapabilityCategory};
use crate::core::entry::{Constructor, FactoryId, FeatureEntry, Provision, Registration};
use crate::core::error::{Error, Result};
use crate::orphaned_provision_err;

/// An ordered, gated bundle of entries for one algorithm family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGroup {
    name: &'static str,
    entries: Vec<FeatureEntry>,
}

impl FeatureGroup {
    /// Create a group from an arbitrary entry list, validating its structure
    pub fn from_entries(name: &'static str, entries: Vec<FeatureEntry>) -> Result<Self> {
        validate_entries(name, &entries)?;
        Ok(Self { name, entries })
    }

    /// A group that contributes nothing
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registrations of this group with the provisions attached to each
    pub fn registrations(&self) -> Registrations<'_> {
        Registrations::new(&self.entries)
    }

    /// Re-check the structural rules of this group
    pub fn validate(&self) -> Result<()> {
        validate_entries(self.name, &self.entries)
    }
}

fn validate_entries(group: &str, entries: &[FeatureEntry]) -> Result<()> {
    let mut current: Option<CapabilityCategory> = None;

    for (index, entry) in entries.iter().enumerate() {
        match entry {
            FeatureEntry::Registration(reg) => current = Some(reg.category),
            FeatureEntry::Provision(prov) => {
                let capability = prov.capability;
                if !capability.is_well_formed() {
                    return Err(Error::MalformedCapability(capability));
                }
                let Some(registration) = current else {
                    return orphaned_provision_err!(group, index, capability);
                };
                if !capability.category.is_served_by(registration) {
                    return Err(Error::IncompatibleProvision {
                        group: group.to_string(),
                        index,
                        capability,
                        registration,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Builder for a [`FeatureGroup`]
#[derive(Debug)]
pub struct GroupBuilder {
    name: &'static str,
    entries: Vec<FeatureEntry>,
}

impl GroupBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Open a registration whose constructor needs no key material
    pub fn register(
        &mut self,
        category: CapabilityCategory,
        factory: FactoryId,
    ) -> RegistrationScope<'_> {
        self.open(category, Constructor::Factory(factory), false)
    }

    /// Open a registration whose constructor is handed key material
    pub fn register_keyed(
        &mut self,
        category: CapabilityCategory,
        factory: FactoryId,
    ) -> RegistrationScope<'_> {
        self.open(category, Constructor::Factory(factory), true)
    }

    /// Open a registration that is only declared, never instantiated
    pub fn register_pro_forma(&mut self, category: CapabilityCategory) -> RegistrationScope<'_> {
        self.open(category, Constructor::ProForma, false)
    }

    fn open(
        &mut self,
        category: CapabilityCategory,
        constructor: Constructor,
        requires_key_material: bool,
    ) -> RegistrationScope<'_> {
        self.entries.push(FeatureEntry::Registration(Registration {
            category,
            constructor,
            requires_key_material,
        }));
        RegistrationScope {
            entries: &mut self.entries,
        }
    }

    /// Finish the group, rejecting provisions their registration cannot serve
    pub fn build(self) -> Result<FeatureGroup> {
        validate_entries(self.name, &self.entries)?;
        Ok(FeatureGroup {
            name: self.name,
            entries: self.entries,
        })
    }

    /// Finish a group whose entries are fixed in this crate
    ///
    /// Only for the built-in catalog, whose groups are checked by its tests.
    pub(crate) fn finish(self) -> FeatureGroup {
        debug_assert!(
            validate_entries(self.name, &self.entries).is_ok(),
            "invalid built-in group '{}'",
            self.name
        );
        FeatureGroup {
            name: self.name,
            entries: self.entries,
        }
    }
}

/// An open registration that provisions attach to
#[derive(Debug)]
pub struct RegistrationScope<'a> {
    entries: &'a mut Vec<FeatureEntry>,
}

impl RegistrationScope<'_> {
    /// Provide a capability through the open registration
    pub fn provide(&mut self, capability: Capability) -> &mut Self {
        self.push(capability, false)
    }

    /// Provide a capability as a fallback only
    pub fn provide_fallback(&mut self, capability: Capability) -> &mut Self {
        self.push(capability, true)
    }

    /// Provide a capability only if `condition` holds
    pub fn provide_if(&mut self, condition: bool, capability: Capability) -> &mut Self {
        if condition {
            self.push(capability, false);
        }
        self
    }

    /// Provide several capabilities, in order
    pub fn provide_all<I>(&mut self, capabilities: I) -> &mut Self
    where
        I: IntoIterator<Item = Capability>,
    {
        for capability in capabilities {
            self.push(capability, false);
        }
        self
    }

    /// Provide several capabilities, in order, only if `condition` holds
    pub fn provide_all_if<I>(&mut self, condition: bool, capabilities: I) -> &mut Self
    where
        I: IntoIterator<Item = Capability>,
    {
        if condition {
            self.provide_all(capabilities);
        }
        self
    }

    fn push(&mut self, capability: Capability, fallback: bool) -> &mut Self {
        self.entries.push(FeatureEntry::Provision(Provision { capability, fallback }));
        self
    }
}

/// A registration together with the provisions that follow it
#[derive(Debug, Clone, Copy)]
pub struct RegistrationView<'a> {
    pub registration: &'a Registration,
    entries: &'a [FeatureEntry],
}

impl<'a> RegistrationView<'a> {
    pub fn provisions(self) -> impl Iterator<Item = &'a Provision> + 'a {
        self.entries.iter().filter_map(FeatureEntry::as_provision)
    }

    pub fn capabilities(self) -> impl Iterator<Item = Capability> + 'a {
        self.provisions().map(|prov| prov.capability)
    }

    pub fn provision_count(&self) -> usize {
        self.entries.len()
    }
}

/// Iterator over registrations of an entry sequence
#[derive(Debug, Clone)]
pub struct Registrations<'a> {
    rest: &'a [FeatureEntry],
}

impl<'a> Registrations<'a> {
    pub(crate) fn new(entries: &'a [FeatureEntry]) -> Self {
        Self { rest: entries }
    }
}

impl<'a> Iterator for Registrations<'a> {
    type Item = RegistrationView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // leading provisions can only come from an orphan, skip them
        let start = self.rest.iter().position(FeatureEntry::is_registration)?;
        let rest = &self.rest[start..];
        let FeatureEntry::Registration(registration) = &rest[0] else {
            return None;
        };
        let end = rest[1..]
            .iter()
            .position(FeatureEntry::is_registration)
            .map_or(rest.len(), |pos| pos + 1);
        self.rest = &rest[end..];
        Some(RegistrationView {
            registration,
            entries: &rest[1..end],
        })
    }
}
