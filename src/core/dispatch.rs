/*!
Host-side constructor dispatch.

The registration core never calls constructors itself. This module states
the contract for hosts that do: factories are resolved through a
[`FactoryResolver`], and pro-forma constructors are refused before the
resolver is ever consulted.
*/

use crate::core::capability::Capability;
use crate::core::entry::{Constructor, FactoryId};
use crate::core::error::{Error, Result};
use crate::core::registry::Registry;

/// Maps factories to algorithm instances, supplied by the host
pub trait FactoryResolver {
    /// What a factory produces
    type Instance;

    /// Invoke `factory` for `capability`, `None` if it cannot serve it
    fn create(&self, factory: FactoryId, capability: &Capability) -> Option<Self::Instance>;
}

impl Constructor {
    /// Instantiate `capability` through this constructor
    pub fn instantiate<R>(&self, resolver: &R, capability: &Capability) -> Result<R::Instance>
    where
        R: FactoryResolver + ?Sized,
    {
        match self {
            Constructor::Factory(factory) => resolver
                .create(*factory, capability)
                .ok_or(Error::Unavailable(*capability)),
            Constructor::ProForma => Err(Error::ProFormaConstructor(*capability)),
        }
    }
}

/// Creates instances for capabilities listed in a [`Registry`]
pub struct Dispatcher<'a, R: ?Sized> {
    registry: &'a Registry,
    resolver: &'a R,
}

impl<'a, R> Dispatcher<'a, R>
where
    R: FactoryResolver + ?Sized,
{
    pub fn new(registry: &'a Registry, resolver: &'a R) -> Self {
        Self { registry, resolver }
    }

    /// Create an instance from the first constructor that can serve `capability`
    pub fn create(&self, capability: &Capability) -> Result<R::Instance> {
        let constructors = self.registry.constructors_for(capability);
        let mut pro_forma = false;

        for constructor in &constructors {
            match constructor.instantiate(self.resolver, capability) {
                Ok(instance) => return Ok(instance),
                Err(Error::ProFormaConstructor(_)) => pro_forma = true,
                Err(_) => {}
            }
        }

        if pro_forma {
            Err(Error::ProFormaConstructor(*capability))
        } else {
            Err(Error::Unavailable(*capability))
        }
    }
}
