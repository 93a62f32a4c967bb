//! Top-level view coordination.
//!
//! Two entry points, one per request shape:
//!
//! - **Full page**: gather the dependencies of every view on the page, run
//!   the data loader once over the union, render each view and stamp its
//!   root with tracking metadata.
//! - **Mutation response**: intersect the client-reported mounted views
//!   with the mutation's declared domains, reload only the domains the
//!   affected views need, and emit out-of-band patches for exactly those
//!   views.
//!
//! Both phases batch their loading — one loader call per phase — so views
//! sharing a domain never cause redundant fetches. Tracking and OOB markers
//! are set as attributes on the view's root node before serialization,
//! never spliced into rendered strings.

use crate::client_state::MountedView;
use crate::error::Result;
use crate::view::{View, ViewRegistry};
use lattice_core::{ContextKey, DataLoader, DataMutations, ProviderRegistry, UserId};
use lattice_ui::{render, Node};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Duration;

/// Attribute naming the view type on a stamped root element.
pub const VIEW_ATTR: &str = "data-view";
/// Attribute naming the domain on a stamped root element.
pub const DOMAIN_ATTR: &str = "data-domain";
/// Marker attribute for out-of-band replacement of one element by id.
pub const OOB_ATTR: &str = "data-swap-oob";

/// One rendered view of a full-page pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub id: String,
    pub html: String,
}

pub struct Orchestrator {
    providers: Arc<ProviderRegistry>,
    views: Arc<ViewRegistry>,
    loader: DataLoader,
}

impl Orchestrator {
    pub fn new(providers: Arc<ProviderRegistry>, views: Arc<ViewRegistry>) -> Self {
        let loader = DataLoader::new(providers.clone());
        Self {
            providers,
            views,
            loader,
        }
    }

    /// Bound every load phase by a hard deadline (see `DataLoader`).
    pub fn with_load_deadline(mut self, deadline: Duration) -> Self {
        self.loader = DataLoader::new(self.providers.clone()).with_deadline(deadline);
        self
    }

    pub fn views(&self) -> &Arc<ViewRegistry> {
        &self.views
    }

    /// Render a set of views for a full page load.
    ///
    /// Dependencies are gathered across all views (static views contribute
    /// nothing), loaded in one batch, and each view's root element is
    /// stamped with its id plus — for data-driven views only — the
    /// view-type and domain attributes the client later reports back.
    pub async fn render_views(
        &self,
        user: Option<&UserId>,
        views: &[Arc<dyn View>],
    ) -> Result<Vec<RenderedView>> {
        let keys: BTreeSet<ContextKey> = views.iter().filter_map(|v| v.dependency()).collect();
        let data = self.loader.load(user, &keys).await?;

        let mut rendered = Vec::with_capacity(views.len());
        for view in views {
            let tree = view.render(&data)?;
            let tree = self.stamp(view.as_ref(), tree, false)?;
            rendered.push(RenderedView {
                id: view.id().to_string(),
                html: render(&tree),
            });
        }
        Ok(rendered)
    }

    /// Render the out-of-band patch set for a completed mutation.
    ///
    /// The client reports which views are mounted; the mutation declares
    /// which domains changed; the intersection decides what re-renders.
    /// An empty intersection short-circuits to an empty response with no
    /// data loading at all.
    pub async fn render_mutation_response(
        &self,
        user: Option<&UserId>,
        mutations: &DataMutations,
        mounted: &[MountedView],
    ) -> Result<String> {
        let affected = self.affected_views(mutations, mounted);
        if affected.is_empty() {
            tracing::debug!("mutation affects no mounted view; empty patch set");
            return Ok(String::new());
        }

        let keys: BTreeSet<ContextKey> =
            affected.iter().filter_map(|v| v.dependency()).collect();
        let data = self.loader.load(user, &keys).await?;

        let mut patches = String::new();
        for view in &affected {
            let tree = view.render(&data)?;
            let tree = self.stamp(view.as_ref(), tree, true)?;
            patches.push_str(&render(&tree));
        }
        tracing::debug!(views = affected.len(), "rendered mutation patches");
        Ok(patches)
    }

    /// Intersect mounted views against the mutation's domain set and
    /// resolve them to concrete views, deduplicated in report order.
    fn affected_views(
        &self,
        mutations: &DataMutations,
        mounted: &[MountedView],
    ) -> Vec<Arc<dyn View>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut affected = Vec::new();
        for report in mounted {
            if !mutations.affects_name(&report.domain) {
                continue;
            }
            if !seen.insert(report.view.as_str()) {
                continue;
            }
            match self.views.resolve(&report.view) {
                Some(view) if view.dependency().is_some() => affected.push(view),
                Some(_) => {
                    tracing::warn!(
                        view = %report.view,
                        "client reported a domain for a static view; skipping"
                    );
                }
                None => {
                    tracing::warn!(
                        view = %report.view,
                        "client reported unknown view type; skipping"
                    );
                }
            }
        }
        affected
    }

    /// Stamp tracking metadata onto a view's root node.
    ///
    /// Static views keep their id (they are addressable swap targets) but
    /// never receive view-type or domain attributes, so the client never
    /// reports them as refresh candidates.
    fn stamp(&self, view: &dyn View, tree: Node, oob: bool) -> Result<Node> {
        let mut tree = tree.with_id(view.id());
        if let Some(key) = view.dependency() {
            let domain = self.providers.domain_of(key)?;
            tree = tree
                .with_attr(VIEW_ATTR, view.type_name())
                .with_attr(DOMAIN_ATTR, domain.as_str());
        }
        if oob {
            tree = tree.with_attr(OOB_ATTR, "true");
        }
        Ok(tree)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("providers", &self.providers)
            .field("views", &self.views)
            .finish()
    }
}
