//! Domain contexts and the per-request data bag.
//!
//! A domain context is a plain data value identified by its *type*; the
//! [`DataContext`] maps context type to fetched value for the lifetime of
//! one request. Keying by type instead of by string name makes a view's
//! dependency declaration the single source of truth for both what is
//! fetched and what is read.

use crate::error::{DataError, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Marker trait for typed payloads produced by fetching one domain.
///
/// Implementors are plain data-transfer values, produced fresh per request
/// and owned exclusively by the [`DataContext`] that holds them.
pub trait DomainContext: Any + Send + Sync + 'static {
    /// Human-readable name used in diagnostics.
    fn context_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// A type token identifying one domain-context type.
#[derive(Debug, Clone, Copy)]
pub struct ContextKey {
    id: TypeId,
    name: &'static str,
}

impl ContextKey {
    pub fn of<T: DomainContext>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::context_name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for ContextKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContextKey {}

impl PartialOrd for ContextKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ContextKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for ContextKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Per-request, write-once-per-key mapping from context type to value.
///
/// Created at the start of a page or mutation handling cycle, populated by
/// the data loader, read by views, discarded at the end of the request.
/// Reading a type that was never loaded is a programming error surfaced as
/// [`DataError::NotLoaded`], never a soft failure.
#[derive(Default)]
pub struct DataContext {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    names: HashMap<TypeId, &'static str>,
}

impl DataContext {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a context value. Each type may be written at most once per
    /// request.
    pub fn insert<T: DomainContext>(&mut self, value: T) -> Result<()> {
        self.insert_boxed(ContextKey::of::<T>(), Box::new(value))
    }

    pub(crate) fn insert_boxed(
        &mut self,
        key: ContextKey,
        value: Box<dyn Any + Send + Sync>,
    ) -> Result<()> {
        if self.values.contains_key(&key.type_id()) {
            return Err(DataError::AlreadyLoaded {
                context: key.name(),
            });
        }
        self.names.insert(key.type_id(), key.name());
        self.values.insert(key.type_id(), value);
        Ok(())
    }

    /// Read a loaded context value.
    pub fn get<T: DomainContext>(&self) -> Result<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or(DataError::NotLoaded {
                context: T::context_name(),
            })
    }

    pub fn contains(&self, key: ContextKey) -> bool {
        self.values.contains_key(&key.type_id())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for DataContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.names.values().collect();
        names.sort();
        f.debug_struct("DataContext").field("loaded", &names).finish()
    }
}
