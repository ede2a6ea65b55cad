/*!
Capability descriptors.

A capability names one `(category, algorithm, key size)` tuple the provider
can supply. Capabilities are plain values: equality and hashing cover the
whole tuple, so two provisions of the same nominal capability compare equal
even when they come from different registrations.
*/

pub mod algorithms;

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

pub use algorithms::{
    DhGroup, EncryptionAlgorithm, EncryptionScheme, HashAlgorithm, IntegrityAlgorithm, KeyType,
    PrfAlgorithm, RngQuality, SignatureScheme,
};

/// Kinds of capability a provider can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum CapabilityCategory {
    /// Random number generator
    Rng,
    /// Unkeyed hash function
    Hasher,
    /// Keyed pseudorandom function
    Prf,
    /// Message authentication code
    Signer,
    /// Symmetric block cipher mode
    Crypter,
    /// Authenticated encryption
    Aead,
    /// Key exchange group
    Dh,
    /// Public key loader
    PublicKey,
    /// Private key loader
    PrivateKey,
    /// Private key generator
    PrivateKeyGen,
    /// Signature creation with a private key
    PrivateKeySign,
    /// Signature verification with a public key
    PublicKeyVerify,
    /// Encryption with a public key
    PublicKeyEncrypt,
    /// Decryption with a private key
    PrivateKeyDecrypt,
}

impl CapabilityCategory {
    /// All categories, in declaration order
    pub const ALL: [CapabilityCategory; 14] = [
        CapabilityCategory::Rng,
        CapabilityCategory::Hasher,
        CapabilityCategory::Prf,
        CapabilityCategory::Signer,
        CapabilityCategory::Crypter,
        CapabilityCategory::Aead,
        CapabilityCategory::Dh,
        CapabilityCategory::PublicKey,
        CapabilityCategory::PrivateKey,
        CapabilityCategory::PrivateKeyGen,
        CapabilityCategory::PrivateKeySign,
        CapabilityCategory::PublicKeyVerify,
        CapabilityCategory::PublicKeyEncrypt,
        CapabilityCategory::PrivateKeyDecrypt,
    ];

    /// Get the name of the category as a string
    pub fn name(&self) -> &'static str {
        match self {
            CapabilityCategory::Rng => "RNG",
            CapabilityCategory::Hasher => "HASHER",
            CapabilityCategory::Prf => "PRF",
            CapabilityCategory::Signer => "SIGNER",
            CapabilityCategory::Crypter => "CRYPTER",
            CapabilityCategory::Aead => "AEAD",
            CapabilityCategory::Dh => "DH",
            CapabilityCategory::PublicKey => "PUBKEY",
            CapabilityCategory::PrivateKey => "PRIVKEY",
            CapabilityCategory::PrivateKeyGen => "PRIVKEY_GEN",
            CapabilityCategory::PrivateKeySign => "PRIVKEY_SIGN",
            CapabilityCategory::PublicKeyVerify => "PUBKEY_VERIFY",
            CapabilityCategory::PublicKeyEncrypt => "PUBKEY_ENCRYPT",
            CapabilityCategory::PrivateKeyDecrypt => "PRIVKEY_DECRYPT",
        }
    }

    /// Whether this category is an operation on an already loaded key
    pub fn is_key_operation(&self) -> bool {
        matches!(
            self,
            CapabilityCategory::PrivateKeySign
                | CapabilityCategory::PublicKeyVerify
                | CapabilityCategory::PublicKeyEncrypt
                | CapabilityCategory::PrivateKeyDecrypt
        )
    }

    /// Whether this category loads or generates keys
    pub fn is_key_source(&self) -> bool {
        matches!(
            self,
            CapabilityCategory::PublicKey
                | CapabilityCategory::PrivateKey
                | CapabilityCategory::PrivateKeyGen
        )
    }

    /// Whether a provision of this category may attach to a registration of
    /// `registration`.
    ///
    /// Key operations hang off whichever key loader or generator precedes
    /// them; everything else must match exactly.
    pub fn is_served_by(&self, registration: CapabilityCategory) -> bool {
        *self == registration || (self.is_key_operation() && registration.is_key_source())
    }
}

impl fmt::Display for CapabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Algorithm identifier of a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Dh(DhGroup),
    Encryption(EncryptionAlgorithm),
    Hash(HashAlgorithm),
    Prf(PrfAlgorithm),
    Integrity(IntegrityAlgorithm),
    Key(KeyType),
    Signature(SignatureScheme),
    PublicKeyEncryption(EncryptionScheme),
    Rng(RngQuality),
}

impl Algorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dh(group) => group.name(),
            Algorithm::Encryption(alg) => alg.name(),
            Algorithm::Hash(alg) => alg.name(),
            Algorithm::Prf(alg) => alg.name(),
            Algorithm::Integrity(alg) => alg.name(),
            Algorithm::Key(key) => key.name(),
            Algorithm::Signature(scheme) => scheme.name(),
            Algorithm::PublicKeyEncryption(scheme) => scheme.name(),
            Algorithm::Rng(quality) => quality.name(),
        }
    }

    /// Whether this identifier is meaningful for `category`
    pub fn fits(&self, category: CapabilityCategory) -> bool {
        use CapabilityCategory as C;
        match self {
            Algorithm::Dh(_) => category == C::Dh,
            Algorithm::Encryption(alg) => {
                if alg.is_aead() {
                    category == C::Aead
                } else {
                    category == C::Crypter
                }
            }
            Algorithm::Hash(_) => category == C::Hasher,
            Algorithm::Prf(_) => category == C::Prf,
            Algorithm::Integrity(_) => category == C::Signer,
            Algorithm::Key(_) => category.is_key_source(),
            Algorithm::Signature(_) => {
                matches!(category, C::PrivateKeySign | C::PublicKeyVerify)
            }
            Algorithm::PublicKeyEncryption(_) => {
                matches!(category, C::PublicKeyEncrypt | C::PrivateKeyDecrypt)
            }
            Algorithm::Rng(_) => category == C::Rng,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single capability: category, algorithm and optional key size in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Capability {
    /// What kind of capability this is
    pub category: CapabilityCategory,
    /// Which algorithm it names
    pub algorithm: Algorithm,
    /// Key size in bytes, for algorithms available in several sizes
    pub key_size: Option<usize>,
}

impl Capability {
    /// Create a capability without a key size
    pub const fn new(category: CapabilityCategory, algorithm: Algorithm) -> Self {
        Self {
            category,
            algorithm,
            key_size: None,
        }
    }

    /// Create a capability with a key size in bytes
    pub const fn sized(
        category: CapabilityCategory,
        algorithm: Algorithm,
        key_size: usize,
    ) -> Self {
        Self {
            category,
            algorithm,
            key_size: Some(key_size),
        }
    }

    pub const fn dh(group: DhGroup) -> Self {
        Self::new(CapabilityCategory::Dh, Algorithm::Dh(group))
    }

    pub const fn crypter(alg: EncryptionAlgorithm, key_size: usize) -> Self {
        Self::sized(CapabilityCategory::Crypter, Algorithm::Encryption(alg), key_size)
    }

    pub const fn aead(alg: EncryptionAlgorithm, key_size: usize) -> Self {
        Self::sized(CapabilityCategory::Aead, Algorithm::Encryption(alg), key_size)
    }

    pub const fn hasher(alg: HashAlgorithm) -> Self {
        Self::new(CapabilityCategory::Hasher, Algorithm::Hash(alg))
    }

    pub const fn prf(alg: PrfAlgorithm) -> Self {
        Self::new(CapabilityCategory::Prf, Algorithm::Prf(alg))
    }

    pub const fn signer(alg: IntegrityAlgorithm) -> Self {
        Self::new(CapabilityCategory::Signer, Algorithm::Integrity(alg))
    }

    pub const fn public_key(key: KeyType) -> Self {
        Self::new(CapabilityCategory::PublicKey, Algorithm::Key(key))
    }

    pub const fn private_key(key: KeyType) -> Self {
        Self::new(CapabilityCategory::PrivateKey, Algorithm::Key(key))
    }

    pub const fn private_key_gen(key: KeyType) -> Self {
        Self::new(CapabilityCategory::PrivateKeyGen, Algorithm::Key(key))
    }

    pub const fn sign(scheme: SignatureScheme) -> Self {
        Self::new(CapabilityCategory::PrivateKeySign, Algorithm::Signature(scheme))
    }

    pub const fn verify(scheme: SignatureScheme) -> Self {
        Self::new(CapabilityCategory::PublicKeyVerify, Algorithm::Signature(scheme))
    }

    pub const fn encrypt(scheme: EncryptionScheme) -> Self {
        Self::new(
            CapabilityCategory::PublicKeyEncrypt,
            Algorithm::PublicKeyEncryption(scheme),
        )
    }

    pub const fn decrypt(scheme: EncryptionScheme) -> Self {
        Self::new(
            CapabilityCategory::PrivateKeyDecrypt,
            Algorithm::PublicKeyEncryption(scheme),
        )
    }

    pub const fn rng(quality: RngQuality) -> Self {
        Self::new(CapabilityCategory::Rng, Algorithm::Rng(quality))
    }

    /// Whether category and algorithm belong together
    pub fn is_well_formed(&self) -> bool {
        self.algorithm.fits(self.category)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.algorithm)?;
        if let Some(size) = self.key_size {
            write!(f, "-{}", size.saturating_mul(8))?;
        }
        Ok(())
    }
}
