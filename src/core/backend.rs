/*!
Backend capability profiles.

A [`BackendProfile`] is the set of modules the cryptographic backend was
built with. Feature groups are pure functions of a profile, so gating is
decided once, before the catalog is assembled, and can be exercised in tests
by constructing profiles directly.
*/

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// A module the backend may have been built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum BackendFeature {
    DiffieHellman,
    Ecdh,
    X25519,
    Aes,
    ModeCbc,
    AeadGcm,
    AeadCcm,
    AeadChaCha20Poly1305,
    Md5,
    Sha1,
    /// SHA-224 and SHA-256
    Sha2_32,
    /// SHA-384 and SHA-512
    Sha2_64,
    Sha3,
    Hmac,
    Rsa,
    Ecdsa,
    Ed25519,
    EmsaPkcs1,
    EmsaPssr,
    EmeOaep,
    EmsaRaw,
    Emsa1,
    SystemRng,
    HmacDrbg,
}

impl BackendFeature {
    /// All backend features
    pub const ALL: [BackendFeature; 24] = [
        BackendFeature::DiffieHellman,
        BackendFeature::Ecdh,
        BackendFeature::X25519,
        BackendFeature::Aes,
        BackendFeature::ModeCbc,
        BackendFeature::AeadGcm,
        BackendFeature::AeadCcm,
        BackendFeature::AeadChaCha20Poly1305,
        BackendFeature::Md5,
        BackendFeature::Sha1,
        BackendFeature::Sha2_32,
        BackendFeature::Sha2_64,
        BackendFeature::Sha3,
        BackendFeature::Hmac,
        BackendFeature::Rsa,
        BackendFeature::Ecdsa,
        BackendFeature::Ed25519,
        BackendFeature::EmsaPkcs1,
        BackendFeature::EmsaPssr,
        BackendFeature::EmeOaep,
        BackendFeature::EmsaRaw,
        BackendFeature::Emsa1,
        BackendFeature::SystemRng,
        BackendFeature::HmacDrbg,
    ];

    /// Get the name of the feature as a string
    pub fn name(&self) -> &'static str {
        match self {
            BackendFeature::DiffieHellman => "diffie_hellman",
            BackendFeature::Ecdh => "ecdh",
            BackendFeature::X25519 => "x25519",
            BackendFeature::Aes => "aes",
            BackendFeature::ModeCbc => "mode_cbc",
            BackendFeature::AeadGcm => "aead_gcm",
            BackendFeature::AeadCcm => "aead_ccm",
            BackendFeature::AeadChaCha20Poly1305 => "aead_chacha20_poly1305",
            BackendFeature::Md5 => "md5",
            BackendFeature::Sha1 => "sha1",
            BackendFeature::Sha2_32 => "sha2_32",
            BackendFeature::Sha2_64 => "sha2_64",
            BackendFeature::Sha3 => "sha3",
            BackendFeature::Hmac => "hmac",
            BackendFeature::Rsa => "rsa",
            BackendFeature::Ecdsa => "ecdsa",
            BackendFeature::Ed25519 => "ed25519",
            BackendFeature::EmsaPkcs1 => "emsa_pkcs1",
            BackendFeature::EmsaPssr => "emsa_pssr",
            BackendFeature::EmeOaep => "eme_oaep",
            BackendFeature::EmsaRaw => "emsa_raw",
            BackendFeature::Emsa1 => "emsa1",
            BackendFeature::SystemRng => "system_rng",
            BackendFeature::HmacDrbg => "hmac_drbg",
        }
    }

    /// Check if the feature is enabled in the current build
    pub fn is_available(&self) -> bool {
        match self {
            BackendFeature::DiffieHellman => cfg!(feature = "backend-diffie-hellman"),
            BackendFeature::Ecdh => cfg!(feature = "backend-ecdh"),
            BackendFeature::X25519 => cfg!(feature = "backend-x25519"),
            BackendFeature::Aes => cfg!(feature = "backend-aes"),
            BackendFeature::ModeCbc => cfg!(feature = "backend-mode-cbc"),
            BackendFeature::AeadGcm => cfg!(feature = "backend-aead-gcm"),
            BackendFeature::AeadCcm => cfg!(feature = "backend-aead-ccm"),
            BackendFeature::AeadChaCha20Poly1305 => {
                cfg!(feature = "backend-aead-chacha20-poly1305")
            }
            BackendFeature::Md5 => cfg!(feature = "backend-md5"),
            BackendFeature::Sha1 => cfg!(feature = "backend-sha1"),
            BackendFeature::Sha2_32 => cfg!(feature = "backend-sha2-32"),
            BackendFeature::Sha2_64 => cfg!(feature = "backend-sha2-64"),
            BackendFeature::Sha3 => cfg!(feature = "backend-sha3"),
            BackendFeature::Hmac => cfg!(feature = "backend-hmac"),
            BackendFeature::Rsa => cfg!(feature = "backend-rsa"),
            BackendFeature::Ecdsa => cfg!(feature = "backend-ecdsa"),
            BackendFeature::Ed25519 => cfg!(feature = "backend-ed25519"),
            BackendFeature::EmsaPkcs1 => cfg!(feature = "backend-emsa-pkcs1"),
            BackendFeature::EmsaPssr => cfg!(feature = "backend-emsa-pssr"),
            BackendFeature::EmeOaep => cfg!(feature = "backend-eme-oaep"),
            BackendFeature::EmsaRaw => cfg!(feature = "backend-emsa-raw"),
            BackendFeature::Emsa1 => cfg!(feature = "backend-emsa1"),
            BackendFeature::SystemRng => cfg!(feature = "backend-system-rng"),
            BackendFeature::HmacDrbg => cfg!(feature = "backend-hmac-drbg"),
        }
    }
}

impl fmt::Display for BackendFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendFeature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        BackendFeature::ALL
            .iter()
            .copied()
            .find(|feature| feature.name() == wanted)
            .ok_or_else(|| Error::UnknownBackendFeature(s.to_string()))
    }
}

/// The set of backend features a catalog is built against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct BackendProfile {
    enabled: BTreeSet<BackendFeature>,
}

impl BackendProfile {
    /// Profile with every backend feature enabled
    pub fn all() -> Self {
        Self {
            enabled: BackendFeature::ALL.iter().copied().collect(),
        }
    }

    /// Profile with no backend feature enabled
    pub fn none() -> Self {
        Self::default()
    }

    /// Profile matching the `backend-*` Cargo features of this build
    pub fn from_build() -> Self {
        Self {
            enabled: BackendFeature::ALL
                .iter()
                .copied()
                .filter(BackendFeature::is_available)
                .collect(),
        }
    }

    /// Profile from feature names such as `"sha2_64"` or `"aead-gcm"`
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let enabled = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { enabled })
    }

    /// Enable a feature
    pub fn with(mut self, feature: BackendFeature) -> Self {
        self.enabled.insert(feature);
        self
    }

    /// Disable a feature
    pub fn without(mut self, feature: BackendFeature) -> Self {
        self.enabled.remove(&feature);
        self
    }

    pub fn has(&self, feature: BackendFeature) -> bool {
        self.enabled.contains(&feature)
    }

    pub fn has_all(&self, features: &[BackendFeature]) -> bool {
        features.iter().all(|f| self.has(*f))
    }

    pub fn has_any(&self, features: &[BackendFeature]) -> bool {
        features.iter().any(|f| self.has(*f))
    }

    /// Enabled features in a stable order
    pub fn features(&self) -> impl Iterator<Item = BackendFeature> + '_ {
        self.enabled.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

impl FromIterator<BackendFeature> for BackendProfile {
    fn from_iter<T: IntoIterator<Item = BackendFeature>>(iter: T) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}
