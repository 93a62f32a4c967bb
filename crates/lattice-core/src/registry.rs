//! Statically-typed provider registry.
//!
//! Built once at startup, the registry maps a context type token to the one
//! provider that produces it. Ambiguous or missing mappings are
//! configuration errors surfaced at registration or load time, never
//! skipped at runtime.

use crate::context::ContextKey;
use crate::domain::Domain;
use crate::error::{DataError, Result};
use crate::provider::{DomainProvider, Erased, ErasedProvider};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub struct ProviderRegistry {
    by_key: HashMap<TypeId, Arc<dyn ErasedProvider>>,
}

impl ProviderRegistry {
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    pub(crate) fn provider_for(&self, key: ContextKey) -> Result<Arc<dyn ErasedProvider>> {
        self.by_key
            .get(&key.type_id())
            .cloned()
            .ok_or(DataError::NoProvider {
                context: key.name(),
            })
    }

    /// Resolve the domain a context type is keyed under. Views never state
    /// their domain directly; it is derived from their dependency through
    /// this lookup.
    pub fn domain_of(&self, key: ContextKey) -> Result<Domain> {
        self.provider_for(key).map(|p| p.domain())
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut domains: Vec<_> = self.by_key.values().map(|p| p.domain().as_str()).collect();
        domains.sort();
        f.debug_struct("ProviderRegistry")
            .field("domains", &domains)
            .finish()
    }
}

#[derive(Default)]
pub struct ProviderRegistryBuilder {
    by_key: HashMap<TypeId, Arc<dyn ErasedProvider>>,
    domains: HashSet<Domain>,
}

impl std::fmt::Debug for ProviderRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut domains: Vec<_> = self.by_key.values().map(|p| p.domain().as_str()).collect();
        domains.sort();
        f.debug_struct("ProviderRegistryBuilder")
            .field("domains", &domains)
            .finish()
    }
}

impl ProviderRegistryBuilder {
    /// Register a provider. Registering two providers for one context type,
    /// or two providers under one domain, is a startup configuration error.
    pub fn register<P: DomainProvider>(mut self, provider: P) -> Result<Self> {
        let erased = Erased(provider);
        let key = erased.key();
        let domain = erased.domain();
        if self.by_key.contains_key(&key.type_id()) {
            return Err(DataError::DuplicateProvider {
                context: key.name(),
            });
        }
        if !self.domains.insert(domain) {
            return Err(DataError::DuplicateDomain { domain });
        }
        tracing::debug!(domain = %domain, context = key.name(), "registered domain provider");
        self.by_key.insert(key.type_id(), Arc::new(erased));
        Ok(self)
    }

    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            by_key: self.by_key,
        }
    }
}
