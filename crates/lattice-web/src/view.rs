//! The view contract and the type-name registry.

use crate::error::{Result, WebError};
use lattice_core::{ContextKey, DataContext, DataError};
use lattice_ui::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// A render unit bound to zero or one domain context type.
///
/// `render` must be pure: byte-identical output for the same data context,
/// no reads outside the supplied context. A view with no dependency is a
/// static view; it never participates in data loading or mutation-triggered
/// re-rendering.
pub trait View: Send + Sync {
    /// Stable DOM-addressable identifier of the view's root element.
    fn id(&self) -> &str;

    /// The name clients report this view under. Must be unique per
    /// registry.
    fn type_name(&self) -> &'static str;

    /// The single domain context type this view reads, if any.
    fn dependency(&self) -> Option<ContextKey> {
        None
    }

    fn render(&self, data: &DataContext) -> std::result::Result<Node, DataError>;
}

/// Maps client-reported view type names to concrete views.
///
/// Built once at startup alongside the provider registry; a duplicate type
/// name is a configuration error.
#[derive(Default)]
pub struct ViewRegistry {
    by_type: HashMap<&'static str, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, view: Arc<dyn View>) -> Result<Self> {
        let type_name = view.type_name();
        if self.by_type.contains_key(type_name) {
            return Err(WebError::DuplicateView(type_name));
        }
        tracing::debug!(view = type_name, id = view.id(), "registered view");
        self.by_type.insert(type_name, view);
        Ok(self)
    }

    pub fn resolve(&self, type_name: &str) -> Option<Arc<dyn View>> {
        self.by_type.get(type_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.by_type.keys().collect();
        names.sort();
        f.debug_struct("ViewRegistry").field("views", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_ui::text;

    struct StubView;

    impl View for StubView {
        fn id(&self) -> &str {
            "stub"
        }

        fn type_name(&self) -> &'static str {
            "Stub"
        }

        fn render(&self, _data: &DataContext) -> std::result::Result<Node, DataError> {
            Ok(text("stub").into())
        }
    }

    #[test]
    fn resolve_finds_registered_views_by_type_name() {
        let registry = ViewRegistry::new().register(Arc::new(StubView)).unwrap();
        assert!(registry.resolve("Stub").is_some());
        assert!(registry.resolve("Missing").is_none());
    }

    #[test]
    fn duplicate_type_name_is_rejected() {
        let err = ViewRegistry::new()
            .register(Arc::new(StubView))
            .unwrap()
            .register(Arc::new(StubView))
            .unwrap_err();
        assert!(matches!(err, WebError::DuplicateView("Stub")));
    }
}
