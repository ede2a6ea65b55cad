/*!
Algorithm identifiers.

This module defines the concrete algorithm enums a capability can name,
one enum per capability family.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Diffie-Hellman groups (finite-field and elliptic-curve)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum DhGroup {
    Modp3072,
    Modp4096,
    Modp6144,
    Modp8192,
    Modp2048,
    Modp2048_224,
    Modp2048_256,
    Modp1536,
    Modp1024,
    Modp1024_160,
    Modp768,
    /// Caller-supplied MODP parameters
    ModpCustom,
    Ecp256,
    Ecp384,
    Ecp521,
    /// Brainpool P-256
    Ecp256Bp,
    /// Brainpool P-384
    Ecp384Bp,
    /// Brainpool P-512
    Ecp512Bp,
    Curve25519,
}

impl DhGroup {
    /// Get the name of the group as a string
    pub fn name(&self) -> &'static str {
        match self {
            DhGroup::Modp3072 => "MODP_3072",
            DhGroup::Modp4096 => "MODP_4096",
            DhGroup::Modp6144 => "MODP_6144",
            DhGroup::Modp8192 => "MODP_8192",
            DhGroup::Modp2048 => "MODP_2048",
            DhGroup::Modp2048_224 => "MODP_2048_224",
            DhGroup::Modp2048_256 => "MODP_2048_256",
            DhGroup::Modp1536 => "MODP_1536",
            DhGroup::Modp1024 => "MODP_1024",
            DhGroup::Modp1024_160 => "MODP_1024_160",
            DhGroup::Modp768 => "MODP_768",
            DhGroup::ModpCustom => "MODP_CUSTOM",
            DhGroup::Ecp256 => "ECP_256",
            DhGroup::Ecp384 => "ECP_384",
            DhGroup::Ecp521 => "ECP_521",
            DhGroup::Ecp256Bp => "ECP_256_BP",
            DhGroup::Ecp384Bp => "ECP_384_BP",
            DhGroup::Ecp512Bp => "ECP_512_BP",
            DhGroup::Curve25519 => "CURVE_25519",
        }
    }

    /// Whether the group is an elliptic-curve group
    pub fn is_elliptic(&self) -> bool {
        matches!(
            self,
            DhGroup::Ecp256
                | DhGroup::Ecp384
                | DhGroup::Ecp521
                | DhGroup::Ecp256Bp
                | DhGroup::Ecp384Bp
                | DhGroup::Ecp512Bp
                | DhGroup::Curve25519
        )
    }
}

/// Symmetric and authenticated encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum EncryptionAlgorithm {
    AesCbc,
    AesGcmIcv16,
    AesGcmIcv12,
    AesGcmIcv8,
    AesCcmIcv16,
    AesCcmIcv12,
    AesCcmIcv8,
    ChaCha20Poly1305,
}

impl EncryptionAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            EncryptionAlgorithm::AesCbc => "AES_CBC",
            EncryptionAlgorithm::AesGcmIcv16 => "AES_GCM_16",
            EncryptionAlgorithm::AesGcmIcv12 => "AES_GCM_12",
            EncryptionAlgorithm::AesGcmIcv8 => "AES_GCM_8",
            EncryptionAlgorithm::AesCcmIcv16 => "AES_CCM_16",
            EncryptionAlgorithm::AesCcmIcv12 => "AES_CCM_12",
            EncryptionAlgorithm::AesCcmIcv8 => "AES_CCM_8",
            EncryptionAlgorithm::ChaCha20Poly1305 => "CHACHA20_POLY1305",
        }
    }

    /// Whether the algorithm provides integrity protection itself
    pub fn is_aead(&self) -> bool {
        !matches!(self, EncryptionAlgorithm::AesCbc)
    }
}

/// Unkeyed hash functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    /// Identity "hash", only ever declared
    Identity,
}

impl HashAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "HASH_MD5",
            HashAlgorithm::Sha1 => "HASH_SHA1",
            HashAlgorithm::Sha224 => "HASH_SHA224",
            HashAlgorithm::Sha256 => "HASH_SHA256",
            HashAlgorithm::Sha384 => "HASH_SHA384",
            HashAlgorithm::Sha512 => "HASH_SHA512",
            HashAlgorithm::Sha3_224 => "HASH_SHA3_224",
            HashAlgorithm::Sha3_256 => "HASH_SHA3_256",
            HashAlgorithm::Sha3_384 => "HASH_SHA3_384",
            HashAlgorithm::Sha3_512 => "HASH_SHA3_512",
            HashAlgorithm::Identity => "HASH_IDENTITY",
        }
    }
}

/// Keyed pseudorandom functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum PrfAlgorithm {
    HmacSha1,
    HmacSha2_256,
    HmacSha2_384,
    HmacSha2_512,
}

impl PrfAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            PrfAlgorithm::HmacSha1 => "PRF_HMAC_SHA1",
            PrfAlgorithm::HmacSha2_256 => "PRF_HMAC_SHA2_256",
            PrfAlgorithm::HmacSha2_384 => "PRF_HMAC_SHA2_384",
            PrfAlgorithm::HmacSha2_512 => "PRF_HMAC_SHA2_512",
        }
    }
}

/// Message authentication codes, named `<mac>_<truncated bits>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum IntegrityAlgorithm {
    HmacSha1_96,
    HmacSha1_128,
    HmacSha1_160,
    HmacSha2_256_128,
    HmacSha2_256_256,
    HmacSha2_384_192,
    HmacSha2_384_384,
    HmacSha2_512_256,
    HmacSha2_512_512,
}

impl IntegrityAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            IntegrityAlgorithm::HmacSha1_96 => "HMAC_SHA1_96",
            IntegrityAlgorithm::HmacSha1_128 => "HMAC_SHA1_128",
            IntegrityAlgorithm::HmacSha1_160 => "HMAC_SHA1_160",
            IntegrityAlgorithm::HmacSha2_256_128 => "HMAC_SHA2_256_128",
            IntegrityAlgorithm::HmacSha2_256_256 => "HMAC_SHA2_256_256",
            IntegrityAlgorithm::HmacSha2_384_192 => "HMAC_SHA2_384_192",
            IntegrityAlgorithm::HmacSha2_384_384 => "HMAC_SHA2_384_384",
            IntegrityAlgorithm::HmacSha2_512_256 => "HMAC_SHA2_512_256",
            IntegrityAlgorithm::HmacSha2_512_512 => "HMAC_SHA2_512_512",
        }
    }

    /// Length of the truncated authentication tag in bits
    pub fn truncation_bits(&self) -> usize {
        match self {
            IntegrityAlgorithm::HmacSha1_96 => 96,
            IntegrityAlgorithm::HmacSha1_128 | IntegrityAlgorithm::HmacSha2_256_128 => 128,
            IntegrityAlgorithm::HmacSha1_160 => 160,
            IntegrityAlgorithm::HmacSha2_384_192 => 192,
            IntegrityAlgorithm::HmacSha2_256_256 | IntegrityAlgorithm::HmacSha2_512_256 => 256,
            IntegrityAlgorithm::HmacSha2_384_384 => 384,
            IntegrityAlgorithm::HmacSha2_512_512 => 512,
        }
    }
}

/// Asymmetric key types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum KeyType {
    /// Any key type the loader can recognize
    Any,
    Rsa,
    Ecdsa,
    Ed25519,
}

impl KeyType {
    /// Get the name of the key type as a string
    pub fn name(&self) -> &'static str {
        match self {
            KeyType::Any => "ANY",
            KeyType::Rsa => "RSA",
            KeyType::Ecdsa => "ECDSA",
            KeyType::Ed25519 => "ED25519",
        }
    }
}

/// Signature schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum SignatureScheme {
    RsaPkcs1Null,
    RsaPkcs1Sha1,
    RsaPkcs1Sha2_224,
    RsaPkcs1Sha2_256,
    RsaPkcs1Sha2_384,
    RsaPkcs1Sha2_512,
    RsaPkcs1Sha3_224,
    RsaPkcs1Sha3_256,
    RsaPkcs1Sha3_384,
    RsaPkcs1Sha3_512,
    RsaPss,
    EcdsaWithNull,
    EcdsaWithSha1Der,
    EcdsaWithSha256Der,
    EcdsaWithSha384Der,
    EcdsaWithSha512Der,
    Ecdsa256,
    Ecdsa384,
    Ecdsa521,
    Ed25519,
}

impl SignatureScheme {
    /// Get the name of the scheme as a string
    pub fn name(&self) -> &'static str {
        match self {
            SignatureScheme::RsaPkcs1Null => "RSA_EMSA_PKCS1_NULL",
            SignatureScheme::RsaPkcs1Sha1 => "RSA_EMSA_PKCS1_SHA1",
            SignatureScheme::RsaPkcs1Sha2_224 => "RSA_EMSA_PKCS1_SHA2_224",
            SignatureScheme::RsaPkcs1Sha2_256 => "RSA_EMSA_PKCS1_SHA2_256",
            SignatureScheme::RsaPkcs1Sha2_384 => "RSA_EMSA_PKCS1_SHA2_384",
            SignatureScheme::RsaPkcs1Sha2_512 => "RSA_EMSA_PKCS1_SHA2_512",
            SignatureScheme::RsaPkcs1Sha3_224 => "RSA_EMSA_PKCS1_SHA3_224",
            SignatureScheme::RsaPkcs1Sha3_256 => "RSA_EMSA_PKCS1_SHA3_256",
            SignatureScheme::RsaPkcs1Sha3_384 => "RSA_EMSA_PKCS1_SHA3_384",
            SignatureScheme::RsaPkcs1Sha3_512 => "RSA_EMSA_PKCS1_SHA3_512",
            SignatureScheme::RsaPss => "RSA_EMSA_PSS",
            SignatureScheme::EcdsaWithNull => "ECDSA_WITH_NULL",
            SignatureScheme::EcdsaWithSha1Der => "ECDSA_WITH_SHA1_DER",
            SignatureScheme::EcdsaWithSha256Der => "ECDSA_WITH_SHA256_DER",
            SignatureScheme::EcdsaWithSha384Der => "ECDSA_WITH_SHA384_DER",
            SignatureScheme::EcdsaWithSha512Der => "ECDSA_WITH_SHA512_DER",
            SignatureScheme::Ecdsa256 => "ECDSA_256",
            SignatureScheme::Ecdsa384 => "ECDSA_384",
            SignatureScheme::Ecdsa521 => "ECDSA_521",
            SignatureScheme::Ed25519 => "ED25519",
        }
    }

    /// The key type able to produce or check this signature
    pub fn key_type(&self) -> KeyType {
        match self {
            SignatureScheme::RsaPkcs1Null
            | SignatureScheme::RsaPkcs1Sha1
            | SignatureScheme::RsaPkcs1Sha2_224
            | SignatureScheme::RsaPkcs1Sha2_256
            | SignatureScheme::RsaPkcs1Sha2_384
            | SignatureScheme::RsaPkcs1Sha2_512
            | SignatureScheme::RsaPkcs1Sha3_224
            | SignatureScheme::RsaPkcs1Sha3_256
            | SignatureScheme::RsaPkcs1Sha3_384
            | SignatureScheme::RsaPkcs1Sha3_512
            | SignatureScheme::RsaPss => KeyType::Rsa,
            SignatureScheme::Ed25519 => KeyType::Ed25519,
            _ => KeyType::Ecdsa,
        }
    }
}

/// Public-key encryption schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum EncryptionScheme {
    RsaPkcs1,
    RsaOaepSha224,
    RsaOaepSha256,
    RsaOaepSha384,
    RsaOaepSha512,
}

impl EncryptionScheme {
    /// Get the name of the scheme as a string
    pub fn name(&self) -> &'static str {
        match self {
            EncryptionScheme::RsaPkcs1 => "ENCRYPT_RSA_PKCS1",
            EncryptionScheme::RsaOaepSha224 => "ENCRYPT_RSA_OAEP_SHA224",
            EncryptionScheme::RsaOaepSha256 => "ENCRYPT_RSA_OAEP_SHA256",
            EncryptionScheme::RsaOaepSha384 => "ENCRYPT_RSA_OAEP_SHA384",
            EncryptionScheme::RsaOaepSha512 => "ENCRYPT_RSA_OAEP_SHA512",
        }
    }
}

/// Quality levels of random number generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum RngQuality {
    Weak,
    Strong,
    True,
}

impl RngQuality {
    /// Get the name of the quality level as a string
    pub fn name(&self) -> &'static str {
        match self {
            RngQuality::Weak => "RNG_WEAK",
            RngQuality::Strong => "RNG_STRONG",
            RngQuality::True => "RNG_TRUE",
        }
    }
}
