use std::cell::Cell;

use botan_provider::{
    BackendFeature, BackendProfile, Capability, CapabilityCategory, Constructor, DhGroup,
    Dispatcher, EncryptionAlgorithm, EncryptionScheme, Error, FactoryId, FactoryResolver,
    FeatureCatalog, FeatureEntry, FeatureGroup, HashAlgorithm, IntegrityAlgorithm, KeyType,
    PrfAlgorithm, RegistryBuilder, RngQuality, SettingsMap, SignatureScheme,
};

struct CountingResolver {
    calls: Cell<usize>,
}

impl CountingResolver {
    fn new() -> Self {
        Self { calls: Cell::new(0) }
    }
}

impl FactoryResolver for CountingResolver {
    type Instance = (FactoryId, Capability);

    fn create(&self, factory: FactoryId, capability: &Capability) -> Option<Self::Instance> {
        self.calls.set(self.calls.get() + 1);
        Some((factory, *capability))
    }
}

/// Entries of `full` that are missing from `partial`, which must be a subsequence
fn removed_entries(full: &[FeatureEntry], partial: &[FeatureEntry]) -> Vec<FeatureEntry> {
    let mut rest = partial.iter().peekable();
    let mut removed = Vec::new();
    for entry in full {
        if rest.peek() == Some(&entry) {
            rest.next();
        } else {
            removed.push(*entry);
        }
    }
    assert!(rest.next().is_none(), "partial registry is not a subsequence");
    removed
}

#[test]
fn test_full_build() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let settings = SettingsMap::from_pairs([("charon.plugins.botan.use_rng", "yes")]);
    let registry = RegistryBuilder::new(&catalog, &settings).build();

    assert_eq!(registry.len(), FeatureCatalog::max_len());
    assert!(registry.provides(&Capability::hasher(HashAlgorithm::Sha256)));
    assert!(registry.provides(&Capability::aead(EncryptionAlgorithm::AesGcmIcv16, 16)));
    assert!(registry.provides(&Capability::dh(DhGroup::Modp3072)));
    assert!(registry.provides(&Capability::sign(SignatureScheme::RsaPss)));
    assert!(registry.provides(&Capability::rng(RngQuality::True)));

    // RNG entries form the tail
    let tail = catalog.rng_group().len();
    assert!(registry.entries()[registry.len() - tail..]
        .iter()
        .all(|e| e.category() == CapabilityCategory::Rng));
    assert!(registry.entries()[..registry.len() - tail]
        .iter()
        .all(|e| e.category() != CapabilityCategory::Rng));
}

#[test]
fn test_build_is_deterministic() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let settings = SettingsMap::new();

    let first = RegistryBuilder::new(&catalog, &settings).build();
    let rebuilt = FeatureCatalog::new(&BackendProfile::all());
    let second = RegistryBuilder::new(&rebuilt, &settings).build();

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_rng_disabled() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let mut settings = SettingsMap::new();
    settings.set_bool("charon.plugins.botan.use_rng", false);
    let registry = RegistryBuilder::new(&catalog, &settings).build();

    assert_eq!(registry.count_of(CapabilityCategory::Rng), 0);
    assert!(registry.iter().all(|e| e.category() != CapabilityCategory::Rng));
    assert_eq!(registry.len(), FeatureCatalog::max_len() - catalog.rng_group().len());
}

#[test]
fn test_invalid_rng_setting_falls_back_to_default() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let settings = SettingsMap::from_pairs([("charon.plugins.botan.use_rng", "maybe")]);
    let registry = RegistryBuilder::new(&catalog, &settings).build();

    assert_eq!(registry.count_of(CapabilityCategory::Rng), 3);
    assert!(matches!(
        settings.try_get_bool("charon.plugins.botan.use_rng"),
        Err(Error::InvalidSetting { .. })
    ));
}

#[test]
fn test_no_backend_features() {
    let catalog = FeatureCatalog::new(&BackendProfile::none());
    let settings = SettingsMap::from_pairs([("charon.plugins.botan.use_rng", "yes")]);
    let registry = RegistryBuilder::new(&catalog, &settings).build();

    assert_eq!(registry.len(), 0);
    assert_eq!(registry.registrations().count(), 0);
}

#[test]
fn test_merged_registry_has_no_orphans() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();

    assert!(registry.entries()[0].is_registration());
    let merged = FeatureGroup::from_entries("merged", registry.entries().to_vec());
    assert!(merged.is_ok());
}

#[test]
fn test_group_order() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let names: Vec<_> = catalog.groups().iter().map(FeatureGroup::name).collect();
    assert_eq!(
        names,
        vec![
            "dh", "ecdh", "crypt", "hash", "prf", "hmac", "pubkey", "privkey", "rsa", "ecdsa",
            "ed25519"
        ]
    );

    let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();
    let first = registry.registrations().next().unwrap();
    assert_eq!(
        first.registration.constructor,
        Constructor::Factory(FactoryId::DiffieHellman)
    );
}

#[test]
fn test_pro_forma_hasher_is_never_instantiated() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();
    let resolver = CountingResolver::new();
    let dispatcher = Dispatcher::new(&registry, &resolver);

    let identity = Capability::hasher(HashAlgorithm::Identity);
    assert!(registry.provides(&identity));
    assert_eq!(
        dispatcher.create(&identity),
        Err(Error::ProFormaConstructor(identity))
    );
    assert_eq!(resolver.calls.get(), 0);

    let sha256 = Capability::hasher(HashAlgorithm::Sha256);
    assert_eq!(
        dispatcher.create(&sha256),
        Ok((FactoryId::Hasher, sha256))
    );
    assert_eq!(resolver.calls.get(), 1);
}

#[test]
fn test_pro_forma_entries_are_all_registrations_without_factory() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();

    let pro_forma: Vec<_> = registry
        .iter()
        .filter_map(FeatureEntry::as_registration)
        .filter(|reg| !reg.constructor.is_instantiable())
        .collect();
    assert_eq!(pro_forma.len(), 1);
    assert_eq!(pro_forma[0].category, CapabilityCategory::Hasher);
}

#[test]
fn test_private_key_loaders() {
    let catalog = FeatureCatalog::new(&BackendProfile::all());
    let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();

    let any = Capability::private_key(KeyType::Any);
    let constructors = registry.constructors_for(&any);
    assert_eq!(
        constructors,
        vec![
            Constructor::Factory(FactoryId::PrivateKeyLoad),
            Constructor::Factory(FactoryId::RsaPrivateKeyLoad),
            Constructor::Factory(FactoryId::EcPrivateKeyLoad),
        ]
    );
}

#[test]
fn test_profile_from_names() {
    let profile = BackendProfile::from_names(["sha2_32", "HMAC", "aead-gcm"]).unwrap();
    assert!(profile.has(BackendFeature::Sha2_32));
    assert!(profile.has(BackendFeature::Hmac));
    assert!(profile.has(BackendFeature::AeadGcm));

    let catalog = FeatureCatalog::new(&profile);
    let registry = RegistryBuilder::new(&catalog, &SettingsMap::new()).build();
    // GCM without AES contributes nothing
    assert_eq!(registry.count_of(CapabilityCategory::Aead), 0);
    assert_eq!(registry.count_of(CapabilityCategory::Prf), 1);
    assert_eq!(registry.count_of(CapabilityCategory::Signer), 2);

    assert_eq!(
        BackendProfile::from_names(["sha4"]),
        Err(Error::UnknownBackendFeature("sha4".to_string()))
    );
}

#[test]
fn test_disabling_sha2_64_removes_exactly_its_entries() {
    let full_catalog = FeatureCatalog::new(&BackendProfile::all());
    let partial_catalog =
        FeatureCatalog::new(&BackendProfile::all().without(BackendFeature::Sha2_64));
    let settings = SettingsMap::new();
    let full = RegistryBuilder::new(&full_catalog, &settings).build();
    let partial = RegistryBuilder::new(&partial_catalog, &settings).build();

    let removed = removed_entries(full.entries(), partial.entries());
    assert!(removed.iter().all(|e| !e.is_registration()));

    let mut removed: Vec<_> = removed
        .iter()
        .filter_map(FeatureEntry::as_provision)
        .map(|prov| prov.capability)
        .collect();
    removed.sort();

    let mut expected = vec![
        Capability::hasher(HashAlgorithm::Sha384),
        Capability::hasher(HashAlgorithm::Sha512),
        Capability::prf(PrfAlgorithm::HmacSha2_384),
        Capability::prf(PrfAlgorithm::HmacSha2_512),
        Capability::signer(IntegrityAlgorithm::HmacSha2_384_192),
        Capability::signer(IntegrityAlgorithm::HmacSha2_384_384),
        Capability::signer(IntegrityAlgorithm::HmacSha2_512_256),
        Capability::signer(IntegrityAlgorithm::HmacSha2_512_512),
        Capability::encrypt(EncryptionScheme::RsaOaepSha384),
        Capability::encrypt(EncryptionScheme::RsaOaepSha512),
    ];
    for scheme in [
        SignatureScheme::RsaPkcs1Sha2_384,
        SignatureScheme::RsaPkcs1Sha2_512,
        SignatureScheme::EcdsaWithSha384Der,
        SignatureScheme::EcdsaWithSha512Der,
        SignatureScheme::Ecdsa384,
        SignatureScheme::Ecdsa521,
    ] {
        expected.push(Capability::sign(scheme));
        expected.push(Capability::verify(scheme));
    }
    expected.sort();

    assert_eq!(removed, expected);
    assert_eq!(full.len() - partial.len(), 22);
}
