//! The domain provider contract and its type-erased form.

use crate::context::{ContextKey, DomainContext};
use crate::domain::Domain;
use crate::error::{DataError, Result};
use crate::user::UserId;
use async_trait::async_trait;
use std::any::Any;

/// A named data source producing one typed domain context per fetch.
///
/// Fetches must be idempotent and side-effect-free with respect to the read
/// path. Failures propagate unchanged to the data loader; there is no
/// per-provider retry, and one failed fetch fails the whole load.
#[async_trait]
pub trait DomainProvider: Send + Sync + 'static {
    /// The context type this provider produces. The registry resolves
    /// providers by this type, not by name.
    type Context: DomainContext;

    /// Stable domain identifier used for mutation correlation.
    fn domain(&self) -> Domain;

    async fn fetch(&self, user: &UserId) -> anyhow::Result<Self::Context>;
}

/// Object-safe adapter over [`DomainProvider`], so providers of different
/// context types can live in one registry.
#[async_trait]
pub(crate) trait ErasedProvider: Send + Sync {
    fn domain(&self) -> Domain;
    fn key(&self) -> ContextKey;
    async fn fetch_erased(&self, user: &UserId) -> Result<Box<dyn Any + Send + Sync>>;
}

pub(crate) struct Erased<P>(pub(crate) P);

#[async_trait]
impl<P: DomainProvider> ErasedProvider for Erased<P> {
    fn domain(&self) -> Domain {
        self.0.domain()
    }

    fn key(&self) -> ContextKey {
        ContextKey::of::<P::Context>()
    }

    async fn fetch_erased(&self, user: &UserId) -> Result<Box<dyn Any + Send + Sync>> {
        let context = self
            .0
            .fetch(user)
            .await
            .map_err(|source| DataError::Provider {
                domain: self.0.domain(),
                source,
            })?;
        Ok(Box::new(context))
    }
}
