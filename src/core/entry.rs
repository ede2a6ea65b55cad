/*!
Feature entries.

A feature group is a sequence of entries. A [`Registration`] opens a new
provider context naming the constructor that implements a category; every
following [`Provision`] attaches one concrete capability to that context
until the next registration.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::capability::{Capability, CapabilityCategory};

/// External factories the host dispatcher can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum FactoryId {
    DiffieHellman,
    EcDiffieHellman,
    X25519,
    Crypter,
    Aead,
    Hasher,
    HmacPrf,
    HmacSigner,
    PublicKeyLoad,
    PrivateKeyLoad,
    RsaPublicKeyLoad,
    RsaPrivateKeyLoad,
    RsaPrivateKeyGen,
    EcPrivateKeyLoad,
    EcPrivateKeyGen,
    EdPublicKeyLoad,
    EdPrivateKeyLoad,
    EdPrivateKeyGen,
    Rng,
}

impl FactoryId {
    /// Symbol name of the factory
    pub fn symbol(&self) -> &'static str {
        match self {
            FactoryId::DiffieHellman => "botan_diffie_hellman_create",
            FactoryId::EcDiffieHellman => "botan_ec_diffie_hellman_create",
            FactoryId::X25519 => "botan_x25519_create",
            FactoryId::Crypter => "botan_crypter_create",
            FactoryId::Aead => "botan_aead_create",
            FactoryId::Hasher => "botan_hasher_create",
            FactoryId::HmacPrf => "botan_hmac_prf_create",
            FactoryId::HmacSigner => "botan_hmac_signer_create",
            FactoryId::PublicKeyLoad => "botan_public_key_load",
            FactoryId::PrivateKeyLoad => "botan_private_key_load",
            FactoryId::RsaPublicKeyLoad => "botan_rsa_public_key_load",
            FactoryId::RsaPrivateKeyLoad => "botan_rsa_private_key_load",
            FactoryId::RsaPrivateKeyGen => "botan_rsa_private_key_gen",
            FactoryId::EcPrivateKeyLoad => "botan_ec_private_key_load",
            FactoryId::EcPrivateKeyGen => "botan_ec_private_key_gen",
            FactoryId::EdPublicKeyLoad => "botan_ed_public_key_load",
            FactoryId::EdPrivateKeyLoad => "botan_ed_private_key_load",
            FactoryId::EdPrivateKeyGen => "botan_ed_private_key_gen",
            FactoryId::Rng => "botan_rng_create",
        }
    }
}

/// Constructor referenced by a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Constructor {
    /// A real factory the host may call
    Factory(FactoryId),
    /// Declared so capability checks succeed, never instantiated
    ProForma,
}

impl Constructor {
    /// Whether the host may ever call this constructor
    pub fn is_instantiable(&self) -> bool {
        matches!(self, Constructor::Factory(_))
    }

    /// The factory behind this constructor, if any
    pub fn factory(&self) -> Option<FactoryId> {
        match self {
            Constructor::Factory(id) => Some(*id),
            Constructor::ProForma => None,
        }
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constructor::Factory(id) => f.write_str(id.symbol()),
            Constructor::ProForma => f.write_str("pro-forma"),
        }
    }
}

/// Declares that a constructor implements a capability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Registration {
    pub category: CapabilityCategory,
    pub constructor: Constructor,
    /// Whether construction needs key material passed in
    pub requires_key_material: bool,
}

/// Attaches a capability to the current registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Provision {
    pub capability: Capability,
    /// Provided only as a fallback, not as a preferred implementation
    pub fallback: bool,
}

/// One entry of a feature group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum FeatureEntry {
    Registration(Registration),
    Provision(Provision),
}

impl FeatureEntry {
    /// Category of the entry
    pub fn category(&self) -> CapabilityCategory {
        match self {
            FeatureEntry::Registration(reg) => reg.category,
            FeatureEntry::Provision(prov) => prov.capability.category,
        }
    }

    pub fn as_registration(&self) -> Option<&Registration> {
        match self {
            FeatureEntry::Registration(reg) => Some(reg),
            FeatureEntry::Provision(_) => None,
        }
    }

    pub fn as_provision(&self) -> Option<&Provision> {
        match self {
            FeatureEntry::Registration(_) => None,
            FeatureEntry::Provision(prov) => Some(prov),
        }
    }

    pub fn is_registration(&self) -> bool {
        matches!(self, FeatureEntry::Registration(_))
    }
}

impl fmt::Display for FeatureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureEntry::Registration(reg) => {
                write!(f, "REGISTER {}:{}", reg.category, reg.constructor)?;
                if reg.requires_key_material {
                    f.write_str(" (keyed)")?;
                }
                Ok(())
            }
            FeatureEntry::Provision(prov) => {
                write!(f, "PROVIDE {}", prov.capability)?;
                if prov.fallback {
                    f.write_str(" (fallback)")?;
                }
                Ok(())
            }
        }
    }
}
