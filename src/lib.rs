/*!
# Botan provider features

Capability registration for a Botan-backed cryptographic provider.

## Overview

The provider declares to its host which algorithms it supplies:

- Diffie-Hellman groups (MODP, ECP, Curve25519)
- AES-CBC crypters and AES-GCM/AES-CCM/ChaCha20-Poly1305 AEADs
- Hashers, HMAC based PRFs and signers
- RSA, ECDSA and Ed25519 key loading, generation, signatures and encryption
- Random number generators

Which of these are declared depends on the modules the backend was built
with (a [`BackendProfile`]) and on one runtime setting,
`<namespace>.plugins.botan.use_rng`. The merged list of entries is built
once per [`ProviderRuntime`] and shared by every provider handed out by it.

```no_run
use botan_provider::{Plugin, ProviderBuilder};

let runtime = ProviderBuilder::new().build();
let provider = runtime.create_provider();
println!("{} declares {} features", provider.name(), provider.features().count());
provider.destroy();
```
*/

// Capability model, catalog and registry
pub mod core;

// Host facing provider facade
pub mod provider;

// Re-export commonly used types for convenience
pub use crate::core::backend::{BackendFeature, BackendProfile};
pub use crate::core::capability::{
    Algorithm, Capability, CapabilityCategory, DhGroup, EncryptionAlgorithm, EncryptionScheme,
    HashAlgorithm, IntegrityAlgorithm, KeyType, PrfAlgorithm, RngQuality, SignatureScheme,
};
pub use crate::core::catalog::FeatureCatalog;
pub use crate::core::constants::{DEFAULT_NAMESPACE, PROVIDER_NAME};
pub use crate::core::dispatch::{Dispatcher, FactoryResolver};
pub use crate::core::entry::{Constructor, FactoryId, FeatureEntry, Provision, Registration};
pub use crate::core::error::{Error, Result};
pub use crate::core::group::{FeatureGroup, GroupBuilder, RegistrationScope};
pub use crate::core::registry::{RegistrationCache, Registry, RegistryBuilder};
pub use crate::core::settings::{Settings, SettingsMap};

pub use provider::{BotanProvider, Features, Plugin, ProviderBuilder, ProviderRuntime};
