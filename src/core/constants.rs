/*!
Constants for the provider capability core.
*/

/// Name the provider reports to the host
pub const PROVIDER_NAME: &str = "botan";

/// Settings namespace used when the host does not supply one
pub const DEFAULT_NAMESPACE: &str = "charon";

/// Settings key suffix deciding whether the RNG group is registered
pub const USE_RNG_SETTING: &str = "use_rng";

/// Default for [`USE_RNG_SETTING`]
pub const USE_RNG_DEFAULT: bool = true;

/// Key sizes (in bytes) registered for AES based crypters and AEADs
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Key size (in bytes) registered for ChaCha20-Poly1305
pub const CHACHA20_POLY1305_KEY_SIZE: usize = 32;

/// Full settings key of the RNG toggle for a namespace and provider name
pub fn use_rng_key(namespace: &str, provider: &str) -> String {
    format!("{}.plugins.{}.{}", namespace, provider, USE_RNG_SETTING)
}
