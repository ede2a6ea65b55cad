/*!
The provider facade.

This module contains what the host interacts with: the [`Plugin`] trait,
the [`BotanProvider`] facade and the [`ProviderRuntime`] that owns the shared
registration state.
*/

pub mod builder;
pub mod runtime;
pub mod traits;

pub use builder::ProviderBuilder;
pub use runtime::{BotanProvider, ProviderRuntime};
pub use traits::{Features, Plugin};
