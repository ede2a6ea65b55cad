/*!
The feature group catalog.

Every algorithm family the provider can expose, as one [`FeatureGroup`]
each, computed from a [`BackendProfile`]. Families and sub-ranges whose
backend modules are missing simply produce no entries.
*/

use once_cell::sync::Lazy;

use crate::core::backend::{BackendFeature as B, BackendProfile};
use crate::core::capability::{
    Capability, CapabilityCategory as C, DhGroup, EncryptionAlgorithm, EncryptionScheme,
    HashAlgorithm, IntegrityAlgorithm, KeyType, PrfAlgorithm, RngQuality, SignatureScheme,
};
use crate::core::constants::{AES_KEY_SIZES, CHACHA20_POLY1305_KEY_SIZE};
use crate::core::entry::FactoryId;
use crate::core::group::{FeatureGroup, GroupBuilder, RegistrationScope};

/// Upper bound on the number of entries any profile can produce
static MAX_LEN: Lazy<usize> =
    Lazy::new(|| FeatureCatalog::new(&BackendProfile::all()).max_entries());

/// All feature groups for one backend profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCatalog {
    /// Statically gated groups, in merge order
    groups: Vec<FeatureGroup>,
    /// The RNG group, merged last and only if enabled at runtime
    rng: FeatureGroup,
}

impl FeatureCatalog {
    /// Build the catalog for `profile`
    pub fn new(profile: &BackendProfile) -> Self {
        Self {
            groups: vec![
                dh_group(profile),
                ecdh_group(profile),
                crypter_group(profile),
                hasher_group(profile),
                prf_group(profile),
                signer_group(profile),
                public_key_group(profile),
                private_key_group(profile),
                rsa_group(profile),
                ecdsa_group(profile),
                ed25519_group(profile),
            ],
            rng: rng_group(profile),
        }
    }

    /// Entry count with every backend feature and the RNG group enabled
    pub fn max_len() -> usize {
        *MAX_LEN
    }

    /// Statically gated groups, in merge order
    pub fn groups(&self) -> &[FeatureGroup] {
        &self.groups
    }

    pub fn rng_group(&self) -> &FeatureGroup {
        &self.rng
    }

    /// Entries this catalog yields when the RNG group is included
    pub fn max_entries(&self) -> usize {
        self.groups.iter().map(FeatureGroup::len).sum::<usize>() + self.rng.len()
    }

    /// Look up a group by name
    pub fn group(&self, name: &str) -> Option<&FeatureGroup> {
        self.groups
            .iter()
            .chain(std::iter::once(&self.rng))
            .find(|group| group.name() == name)
    }
}

fn dh_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("dh");
    if profile.has(B::DiffieHellman) {
        group.register(C::Dh, FactoryId::DiffieHellman).provide_all(
            [
                DhGroup::Modp3072,
                DhGroup::Modp4096,
                DhGroup::Modp6144,
                DhGroup::Modp8192,
                DhGroup::Modp2048,
                DhGroup::Modp2048_224,
                DhGroup::Modp2048_256,
                DhGroup::Modp1536,
                DhGroup::Modp1024,
                DhGroup::Modp1024_160,
                DhGroup::Modp768,
                DhGroup::ModpCustom,
            ]
            .map(Capability::dh),
        );
    }
    group.finish()
}

fn ecdh_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("ecdh");
    if profile.has(B::Ecdh) {
        group.register(C::Dh, FactoryId::EcDiffieHellman).provide_all(
            [
                DhGroup::Ecp256,
                DhGroup::Ecp384,
                DhGroup::Ecp521,
                DhGroup::Ecp256Bp,
                DhGroup::Ecp384Bp,
                DhGroup::Ecp512Bp,
            ]
            .map(Capability::dh),
        );
    }
    // Curve25519 has its own implementation
    if profile.has(B::X25519) {
        group
            .register(C::Dh, FactoryId::X25519)
            .provide(Capability::dh(DhGroup::Curve25519));
    }
    group.finish()
}

fn aes_sized(
    make: fn(EncryptionAlgorithm, usize) -> Capability,
    alg: EncryptionAlgorithm,
) -> impl Iterator<Item = Capability> {
    AES_KEY_SIZES.into_iter().map(move |size| make(alg, size))
}

fn crypter_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("crypt");
    let aes = profile.has(B::Aes);

    if aes && profile.has(B::ModeCbc) {
        group
            .register(C::Crypter, FactoryId::Crypter)
            .provide_all(aes_sized(Capability::crypter, EncryptionAlgorithm::AesCbc));
    }

    // one registration covers every AEAD construction the backend has
    let gcm = aes && profile.has(B::AeadGcm);
    let ccm = aes && profile.has(B::AeadCcm);
    let chacha = profile.has(B::AeadChaCha20Poly1305);
    if gcm || ccm || chacha {
        let mut aead = group.register(C::Aead, FactoryId::Aead);
        for alg in [
            EncryptionAlgorithm::AesGcmIcv16,
            EncryptionAlgorithm::AesGcmIcv12,
            EncryptionAlgorithm::AesGcmIcv8,
        ] {
            aead.provide_all_if(gcm, aes_sized(Capability::aead, alg));
        }
        for alg in [
            EncryptionAlgorithm::AesCcmIcv16,
            EncryptionAlgorithm::AesCcmIcv12,
            EncryptionAlgorithm::AesCcmIcv8,
        ] {
            aead.provide_all_if(ccm, aes_sized(Capability::aead, alg));
        }
        aead.provide_if(
            chacha,
            Capability::aead(EncryptionAlgorithm::ChaCha20Poly1305, CHACHA20_POLY1305_KEY_SIZE),
        );
    }
    group.finish()
}

fn hasher_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("hash");
    let hashes = [B::Md5, B::Sha1, B::Sha2_32, B::Sha2_64, B::Sha3];
    if profile.has_any(&hashes) {
        group
            .register(C::Hasher, FactoryId::Hasher)
            .provide_if(profile.has(B::Md5), Capability::hasher(HashAlgorithm::Md5))
            .provide_if(profile.has(B::Sha1), Capability::hasher(HashAlgorithm::Sha1))
            .provide_all_if(
                profile.has(B::Sha2_32),
                [HashAlgorithm::Sha224, HashAlgorithm::Sha256].map(Capability::hasher),
            )
            .provide_all_if(
                profile.has(B::Sha2_64),
                [HashAlgorithm::Sha384, HashAlgorithm::Sha512].map(Capability::hasher),
            )
            .provide_all_if(
                profile.has(B::Sha3),
                [
                    HashAlgorithm::Sha3_224,
                    HashAlgorithm::Sha3_256,
                    HashAlgorithm::Sha3_384,
                    HashAlgorithm::Sha3_512,
                ]
                .map(Capability::hasher),
            );
    }
    group.finish()
}

fn prf_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("prf");
    if profile.has(B::Hmac) {
        group
            .register(C::Prf, FactoryId::HmacPrf)
            .provide_if(profile.has(B::Sha1), Capability::prf(PrfAlgorithm::HmacSha1))
            .provide_if(profile.has(B::Sha2_32), Capability::prf(PrfAlgorithm::HmacSha2_256))
            .provide_all_if(
                profile.has(B::Sha2_64),
                [PrfAlgorithm::HmacSha2_384, PrfAlgorithm::HmacSha2_512].map(Capability::prf),
            );
    }
    group.finish()
}

fn signer_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("hmac");
    if profile.has(B::Hmac) {
        group
            .register(C::Signer, FactoryId::HmacSigner)
            .provide_all_if(
                profile.has(B::Sha1),
                [
                    IntegrityAlgorithm::HmacSha1_96,
                    IntegrityAlgorithm::HmacSha1_128,
                    IntegrityAlgorithm::HmacSha1_160,
                ]
                .map(Capability::signer),
            )
            .provide_all_if(
                profile.has(B::Sha2_32),
                [
                    IntegrityAlgorithm::HmacSha2_256_128,
                    IntegrityAlgorithm::HmacSha2_256_256,
                ]
                .map(Capability::signer),
            )
            .provide_all_if(
                profile.has(B::Sha2_64),
                [
                    IntegrityAlgorithm::HmacSha2_384_192,
                    IntegrityAlgorithm::HmacSha2_384_384,
                    IntegrityAlgorithm::HmacSha2_512_256,
                    IntegrityAlgorithm::HmacSha2_512_512,
                ]
                .map(Capability::signer),
            );
    }
    group.finish()
}

/// Key types any of the generic loaders can parse, `Any` first
fn loadable_key_types(profile: &BackendProfile) -> Vec<KeyType> {
    let mut keys = vec![KeyType::Any];
    if profile.has(B::Rsa) {
        keys.push(KeyType::Rsa);
    }
    if profile.has(B::Ecdsa) {
        keys.push(KeyType::Ecdsa);
    }
    if profile.has(B::Ed25519) {
        keys.push(KeyType::Ed25519);
    }
    keys
}

fn public_key_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("pubkey");
    if profile.has_any(&[B::Rsa, B::Ecdsa, B::Ed25519]) {
        group
            .register_keyed(C::PublicKey, FactoryId::PublicKeyLoad)
            .provide_all(
                loadable_key_types(profile).into_iter().map(Capability::public_key),
            );
    }
    group.finish()
}

fn private_key_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("privkey");
    if profile.has_any(&[B::Rsa, B::Ecdsa, B::Ed25519]) {
        group
            .register_keyed(C::PrivateKey, FactoryId::PrivateKeyLoad)
            .provide_all(
                loadable_key_types(profile).into_iter().map(Capability::private_key),
            );
    }
    group.finish()
}

fn rsa_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("rsa");
    if !profile.has(B::Rsa) {
        return group.finish();
    }

    group
        .register_keyed(C::PublicKey, FactoryId::RsaPublicKeyLoad)
        .provide(Capability::public_key(KeyType::Rsa));
    group
        .register_keyed(C::PrivateKey, FactoryId::RsaPrivateKeyLoad)
        .provide(Capability::private_key(KeyType::Rsa))
        .provide(Capability::private_key(KeyType::Any));

    let mut rsa = group.register(C::PrivateKeyGen, FactoryId::RsaPrivateKeyGen);
    rsa.provide(Capability::private_key_gen(KeyType::Rsa));

    if profile.has(B::EmsaPkcs1) {
        rsa.provide(Capability::sign(SignatureScheme::RsaPkcs1Null))
            .provide(Capability::verify(SignatureScheme::RsaPkcs1Null));
        if profile.has(B::Sha1) {
            // declared twice, kept as is
            rsa.provide(Capability::sign(SignatureScheme::RsaPkcs1Sha1))
                .provide(Capability::sign(SignatureScheme::RsaPkcs1Sha1))
                .provide(Capability::verify(SignatureScheme::RsaPkcs1Sha1))
                .provide(Capability::verify(SignatureScheme::RsaPkcs1Sha1));
        }
        sign_and_verify(
            &mut rsa,
            profile.has(B::Sha2_32),
            &[SignatureScheme::RsaPkcs1Sha2_224, SignatureScheme::RsaPkcs1Sha2_256],
        );
        sign_and_verify(
            &mut rsa,
            profile.has(B::Sha2_64),
            &[SignatureScheme::RsaPkcs1Sha2_384, SignatureScheme::RsaPkcs1Sha2_512],
        );
        sign_and_verify(
            &mut rsa,
            profile.has(B::Sha3),
            &[
                SignatureScheme::RsaPkcs1Sha3_224,
                SignatureScheme::RsaPkcs1Sha3_256,
                SignatureScheme::RsaPkcs1Sha3_384,
                SignatureScheme::RsaPkcs1Sha3_512,
            ],
        );
    }
    if profile.has(B::EmsaPssr) {
        rsa.provide(Capability::sign(SignatureScheme::RsaPss))
            .provide(Capability::verify(SignatureScheme::RsaPss));
    }

    rsa.provide(Capability::decrypt(EncryptionScheme::RsaPkcs1))
        .provide(Capability::encrypt(EncryptionScheme::RsaPkcs1));
    if profile.has(B::EmeOaep) {
        rsa.provide_all_if(
            profile.has(B::Sha2_32),
            [EncryptionScheme::RsaOaepSha224, EncryptionScheme::RsaOaepSha256]
                .map(Capability::encrypt),
        )
        .provide_all_if(
            profile.has(B::Sha2_64),
            [EncryptionScheme::RsaOaepSha384, EncryptionScheme::RsaOaepSha512]
                .map(Capability::encrypt),
        );
    }

    group.finish()
}

/// All sign provisions of `schemes`, then all verify provisions
fn sign_and_verify(
    scope: &mut RegistrationScope<'_>,
    condition: bool,
    schemes: &[SignatureScheme],
) {
    scope
        .provide_all_if(condition, schemes.iter().copied().map(Capability::sign))
        .provide_all_if(condition, schemes.iter().copied().map(Capability::verify));
}

fn ecdsa_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("ecdsa");
    if !profile.has(B::Ecdsa) {
        return group.finish();
    }

    group
        .register_keyed(C::PrivateKey, FactoryId::EcPrivateKeyLoad)
        .provide(Capability::private_key(KeyType::Ecdsa))
        .provide(Capability::private_key(KeyType::Any));

    let mut ecdsa = group.register(C::PrivateKeyGen, FactoryId::EcPrivateKeyGen);
    ecdsa.provide(Capability::private_key_gen(KeyType::Ecdsa));

    if profile.has(B::EmsaRaw) {
        ecdsa
            .provide(Capability::sign(SignatureScheme::EcdsaWithNull))
            .provide(Capability::verify(SignatureScheme::EcdsaWithNull));
    }
    if profile.has(B::Emsa1) {
        if profile.has(B::Sha1) {
            ecdsa
                .provide(Capability::sign(SignatureScheme::EcdsaWithSha1Der))
                .provide(Capability::verify(SignatureScheme::EcdsaWithSha1Der));
        }
        if profile.has(B::Sha2_32) {
            ecdsa
                .provide(Capability::sign(SignatureScheme::EcdsaWithSha256Der))
                .provide(Capability::verify(SignatureScheme::EcdsaWithSha256Der))
                .provide(Capability::sign(SignatureScheme::Ecdsa256))
                .provide(Capability::verify(SignatureScheme::Ecdsa256));
        }
        let sha2_64 = profile.has(B::Sha2_64);
        sign_and_verify(
            &mut ecdsa,
            sha2_64,
            &[SignatureScheme::EcdsaWithSha384Der, SignatureScheme::EcdsaWithSha512Der],
        );
        sign_and_verify(
            &mut ecdsa,
            sha2_64,
            &[SignatureScheme::Ecdsa384, SignatureScheme::Ecdsa521],
        );
    }

    group.finish()
}

fn ed25519_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("ed25519");
    if !profile.has(B::Ed25519) {
        return group.finish();
    }

    group
        .register_keyed(C::PublicKey, FactoryId::EdPublicKeyLoad)
        .provide(Capability::public_key(KeyType::Ed25519));
    group
        .register_keyed(C::PrivateKey, FactoryId::EdPrivateKeyLoad)
        .provide(Capability::private_key(KeyType::Ed25519));
    group
        .register(C::PrivateKeyGen, FactoryId::EdPrivateKeyGen)
        .provide(Capability::private_key_gen(KeyType::Ed25519))
        .provide(Capability::sign(SignatureScheme::Ed25519))
        .provide(Capability::verify(SignatureScheme::Ed25519));
    // EdDSA signs the message itself, hosts still check for an identity hasher
    group
        .register_pro_forma(C::Hasher)
        .provide(Capability::hasher(HashAlgorithm::Identity));

    group.finish()
}

fn rng_group(profile: &BackendProfile) -> FeatureGroup {
    let mut group = GroupBuilder::new("rng");
    if profile.has_all(&[B::SystemRng, B::HmacDrbg]) {
        group.register(C::Rng, FactoryId::Rng).provide_all(
            [RngQuality::Weak, RngQuality::Strong, RngQuality::True].map(Capability::rng),
        );
    }
    group.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capability::CapabilityCategory;
    use crate::core::entry::{Constructor, FeatureEntry};

    fn provided(group: &FeatureGroup) -> Vec<Capability> {
        group.registrations().flat_map(|r| r.capabilities()).collect()
    }

    #[test]
    fn test_full_profile_group_sizes() {
        let catalog = FeatureCatalog::new(&BackendProfile::all());
        let sizes: Vec<_> = catalog
            .groups()
            .iter()
            .map(|g| (g.name(), g.len()))
            .collect();

        assert_eq!(
            sizes,
            vec![
                ("dh", 13),
                ("ecdh", 9),
                ("crypt", 24),
                ("hash", 11),
                ("prf", 5),
                ("hmac", 10),
                ("pubkey", 5),
                ("privkey", 5),
                ("rsa", 37),
                ("ecdsa", 21),
                ("ed25519", 10),
            ]
        );
        assert_eq!(catalog.rng_group().len(), 4);
        assert_eq!(catalog.max_entries(), 154);
        assert_eq!(FeatureCatalog::max_len(), 154);
    }

    #[test]
    fn test_every_group_is_well_formed() {
        let profiles = [
            BackendProfile::all(),
            BackendProfile::none(),
            BackendProfile::from_build(),
        ];
        for profile in profiles {
            let catalog = FeatureCatalog::new(&profile);
            for group in catalog.groups().iter().chain(Some(catalog.rng_group())) {
                assert!(group.validate().is_ok(), "group {} invalid", group.name());
                if let Some(first) = group.entries().first() {
                    assert!(
                        first.is_registration(),
                        "group {} starts with a provision",
                        group.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_profile_yields_empty_groups() {
        let catalog = FeatureCatalog::new(&BackendProfile::none());
        assert_eq!(catalog.max_entries(), 0);
        assert!(catalog.groups().iter().all(FeatureGroup::is_empty));
    }

    #[test]
    fn test_aead_registration_combines_constructions() {
        let profile = BackendProfile::none()
            .with(B::AeadChaCha20Poly1305)
            .with(B::AeadCcm);
        let catalog = FeatureCatalog::new(&profile);
        let crypt = catalog.group("crypt").unwrap();

        // CCM needs AES, so only ChaCha20-Poly1305 survives
        assert_eq!(crypt.registrations().count(), 1);
        assert_eq!(
            provided(crypt),
            vec![Capability::aead(EncryptionAlgorithm::ChaCha20Poly1305, 32)]
        );

        let catalog = FeatureCatalog::new(&profile.with(B::Aes));
        let crypt = catalog.group("crypt").unwrap();
        assert_eq!(crypt.registrations().count(), 1);
        assert_eq!(provided(crypt).len(), 10);
    }

    #[test]
    fn test_cbc_requires_aes_and_mode() {
        let catalog = FeatureCatalog::new(&BackendProfile::none().with(B::ModeCbc));
        assert!(catalog.group("crypt").unwrap().is_empty());

        let catalog = FeatureCatalog::new(&BackendProfile::none().with(B::ModeCbc).with(B::Aes));
        assert_eq!(
            provided(catalog.group("crypt").unwrap()),
            vec![
                Capability::crypter(EncryptionAlgorithm::AesCbc, 16),
                Capability::crypter(EncryptionAlgorithm::AesCbc, 24),
                Capability::crypter(EncryptionAlgorithm::AesCbc, 32),
            ]
        );
    }

    #[test]
    fn test_x25519_has_own_constructor() {
        let catalog = FeatureCatalog::new(&BackendProfile::all());
        let ecdh = catalog.group("ecdh").unwrap();
        let regs: Vec<_> = ecdh.registrations().collect();

        assert_eq!(regs.len(), 2);
        assert_eq!(
            regs[0].registration.constructor,
            Constructor::Factory(FactoryId::EcDiffieHellman)
        );
        assert_eq!(
            regs[1].registration.constructor,
            Constructor::Factory(FactoryId::X25519)
        );
        assert_eq!(
            regs[1].capabilities().collect::<Vec<_>>(),
            vec![Capability::dh(DhGroup::Curve25519)]
        );
    }

    #[test]
    fn test_rsa_keeps_duplicate_sha1_provisions() {
        let catalog = FeatureCatalog::new(&BackendProfile::all());
        let rsa = provided(catalog.group("rsa").unwrap());
        let sha1_signs = rsa
            .iter()
            .filter(|c| **c == Capability::sign(SignatureScheme::RsaPkcs1Sha1))
            .count();
        assert_eq!(sha1_signs, 2);
    }

    #[test]
    fn test_rsa_without_padding_modules() {
        let profile = BackendProfile::none().with(B::Rsa).with(B::Sha2_32);
        let catalog = FeatureCatalog::new(&profile);
        let rsa = provided(catalog.group("rsa").unwrap());

        assert!(rsa.contains(&Capability::encrypt(EncryptionScheme::RsaPkcs1)));
        assert!(rsa.contains(&Capability::decrypt(EncryptionScheme::RsaPkcs1)));
        assert!(!rsa.contains(&Capability::encrypt(EncryptionScheme::RsaOaepSha256)));
        assert!(!rsa.iter().any(|c| c.category == CapabilityCategory::PrivateKeySign));
    }

    #[test]
    fn test_ecdsa_large_curves_need_sha2_64() {
        // declared when SHA2-64 is present, the reverse of the upstream
        // `#ifndef` gate, which reads as a typo
        let base = BackendProfile::none().with(B::Ecdsa).with(B::Emsa1).with(B::Sha2_32);
        let without = provided(FeatureCatalog::new(&base).group("ecdsa").unwrap());
        assert!(!without.contains(&Capability::sign(SignatureScheme::Ecdsa384)));

        let with = provided(FeatureCatalog::new(&base.with(B::Sha2_64)).group("ecdsa").unwrap());
        assert!(with.contains(&Capability::sign(SignatureScheme::Ecdsa384)));
        assert!(with.contains(&Capability::verify(SignatureScheme::EcdsaWithSha512Der)));
    }

    #[test]
    fn test_ed25519_declares_pro_forma_identity_hasher() {
        let catalog = FeatureCatalog::new(&BackendProfile::none().with(B::Ed25519));
        let ed = catalog.group("ed25519").unwrap();
        let last = ed.registrations().last().unwrap();

        assert_eq!(last.registration.constructor, Constructor::ProForma);
        assert_eq!(last.registration.category, CapabilityCategory::Hasher);
        assert_eq!(
            last.capabilities().collect::<Vec<_>>(),
            vec![Capability::hasher(HashAlgorithm::Identity)]
        );
    }

    #[test]
    fn test_generic_loaders_follow_key_types() {
        let catalog = FeatureCatalog::new(&BackendProfile::none().with(B::Ed25519));
        assert_eq!(
            provided(catalog.group("pubkey").unwrap()),
            vec![
                Capability::public_key(KeyType::Any),
                Capability::public_key(KeyType::Ed25519)
            ]
        );
        let privkey = catalog.group("privkey").unwrap();
        match privkey.entries()[0] {
            FeatureEntry::Registration(reg) => assert!(reg.requires_key_material),
            _ => panic!("Expected a registration first"),
        }
    }

    #[test]
    fn test_rng_needs_system_rng_and_drbg() {
        let catalog = FeatureCatalog::new(&BackendProfile::none().with(B::SystemRng));
        assert!(catalog.rng_group().is_empty());

        let profile = BackendProfile::none().with(B::SystemRng).with(B::HmacDrbg);
        let catalog = FeatureCatalog::new(&profile);
        assert_eq!(catalog.rng_group().len(), 4);
    }
}
