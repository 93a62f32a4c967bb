//! Concurrent domain data loading.
//!
//! Given the set of context types a render phase requires, the loader
//! resolves every provider up front, fans the fetches out concurrently and
//! waits for all of them before assembling the per-request [`DataContext`].
//! There is no partial-success mode: one slow or failing provider fails the
//! batch, optionally bounded by a hard deadline.

use crate::context::{ContextKey, DataContext};
use crate::error::{DataError, Result};
use crate::registry::ProviderRegistry;
use crate::user::UserId;
use futures::future::try_join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

pub struct DataLoader {
    registry: Arc<ProviderRegistry>,
    deadline: Option<Duration>,
}

impl DataLoader {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            registry,
            deadline: None,
        }
    }

    /// Bound every load by a hard deadline. On expiry the whole load fails
    /// and in-flight fetches are cancelled by drop.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// Load every requested context type concurrently and assemble the
    /// request's data context.
    ///
    /// An empty request yields an empty context without touching identity.
    /// A non-empty request requires a resolved user; every key must map to
    /// a registered provider before any fetch starts.
    pub async fn load(
        &self,
        user: Option<&UserId>,
        keys: &BTreeSet<ContextKey>,
    ) -> Result<DataContext> {
        if keys.is_empty() {
            return Ok(DataContext::empty());
        }
        let user = user.ok_or(DataError::Unauthorized)?;

        let providers = keys
            .iter()
            .map(|key| self.registry.provider_for(*key))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            domains = providers.len(),
            user = %user,
            "loading domain contexts"
        );

        let fetches = try_join_all(providers.iter().map(|p| p.fetch_erased(user)));
        let values = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, fetches)
                .await
                .map_err(|_| DataError::Timeout {
                    timeout_ms: deadline.as_millis() as u64,
                })??,
            None => fetches.await?,
        };

        let mut context = DataContext::empty();
        for (provider, value) in providers.iter().zip(values) {
            context.insert_boxed(provider.key(), value)?;
        }
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DomainContext;
    use crate::domain::Domain;
    use crate::provider::DomainProvider;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TodoContext {
        titles: Vec<String>,
    }

    impl DomainContext for TodoContext {
        fn context_name() -> &'static str {
            "todos"
        }
    }

    struct AnalyticsContext {
        completion: f64,
    }

    impl DomainContext for AnalyticsContext {
        fn context_name() -> &'static str {
            "analytics"
        }
    }

    #[derive(Default)]
    struct CountingTodoProvider {
        fetches: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DomainProvider for CountingTodoProvider {
        type Context = TodoContext;

        fn domain(&self) -> Domain {
            Domain::new("todos")
        }

        async fn fetch(&self, _user: &UserId) -> anyhow::Result<TodoContext> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(TodoContext {
                titles: vec!["buy milk".into()],
            })
        }
    }

    struct AnalyticsProvider;

    #[async_trait]
    impl DomainProvider for AnalyticsProvider {
        type Context = AnalyticsContext;

        fn domain(&self) -> Domain {
            Domain::new("todoAnalytics")
        }

        async fn fetch(&self, _user: &UserId) -> anyhow::Result<AnalyticsContext> {
            Ok(AnalyticsContext { completion: 0.5 })
        }
    }

    struct FailingProvider;

    struct FailingContext;
    impl DomainContext for FailingContext {
        fn context_name() -> &'static str {
            "failing"
        }
    }

    #[async_trait]
    impl DomainProvider for FailingProvider {
        type Context = FailingContext;

        fn domain(&self) -> Domain {
            Domain::new("failing")
        }

        async fn fetch(&self, _user: &UserId) -> anyhow::Result<FailingContext> {
            anyhow::bail!("backend unavailable")
        }
    }

    struct SlowProvider;

    struct SlowContext;
    impl DomainContext for SlowContext {
        fn context_name() -> &'static str {
            "slow"
        }
    }

    #[async_trait]
    impl DomainProvider for SlowProvider {
        type Context = SlowContext;

        fn domain(&self) -> Domain {
            Domain::new("slow")
        }

        async fn fetch(&self, _user: &UserId) -> anyhow::Result<SlowContext> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(SlowContext)
        }
    }

    fn keys<const N: usize>(keys: [ContextKey; N]) -> BTreeSet<ContextKey> {
        BTreeSet::from(keys)
    }

    const USER: UserId = UserId::new(1);

    #[tokio::test]
    async fn empty_request_needs_no_identity() {
        let loader = DataLoader::new(Arc::new(ProviderRegistry::builder().build()));
        let ctx = loader.load(None, &BTreeSet::new()).await.unwrap();
        assert!(ctx.is_empty());
    }

    #[tokio::test]
    async fn missing_identity_fails_before_any_fetch() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let registry = ProviderRegistry::builder()
            .register(CountingTodoProvider {
                fetches: fetches.clone(),
            })
            .unwrap()
            .build();
        let loader = DataLoader::new(Arc::new(registry));

        let err = loader
            .load(None, &keys([ContextKey::of::<TodoContext>()]))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Unauthorized));
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn requested_types_are_fetched_exactly_once() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let registry = ProviderRegistry::builder()
            .register(CountingTodoProvider {
                fetches: fetches.clone(),
            })
            .unwrap()
            .register(AnalyticsProvider)
            .unwrap()
            .build();
        let loader = DataLoader::new(Arc::new(registry));

        // The union already deduplicates: two views depending on the same
        // context still cause one fetch.
        let ctx = loader
            .load(
                Some(&USER),
                &keys([
                    ContextKey::of::<TodoContext>(),
                    ContextKey::of::<TodoContext>(),
                    ContextKey::of::<AnalyticsContext>(),
                ]),
            )
            .await
            .unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get::<TodoContext>().unwrap().titles, vec!["buy milk"]);
        assert!((ctx.get::<AnalyticsContext>().unwrap().completion - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unregistered_key_fails_the_load() {
        let registry = ProviderRegistry::builder().build();
        let loader = DataLoader::new(Arc::new(registry));
        let err = loader
            .load(Some(&USER), &keys([ContextKey::of::<TodoContext>()]))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NoProvider { context: "todos" }));
    }

    #[tokio::test]
    async fn one_failing_provider_fails_the_whole_batch() {
        let registry = ProviderRegistry::builder()
            .register(AnalyticsProvider)
            .unwrap()
            .register(FailingProvider)
            .unwrap()
            .build();
        let loader = DataLoader::new(Arc::new(registry));

        let err = loader
            .load(
                Some(&USER),
                &keys([
                    ContextKey::of::<AnalyticsContext>(),
                    ContextKey::of::<FailingContext>(),
                ]),
            )
            .await
            .unwrap_err();
        match err {
            DataError::Provider { domain, .. } => assert_eq!(domain.as_str(), "failing"),
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_fails_the_batch() {
        let registry = ProviderRegistry::builder().register(SlowProvider).unwrap().build();
        let loader =
            DataLoader::new(Arc::new(registry)).with_deadline(Duration::from_millis(250));

        let err = loader
            .load(Some(&USER), &keys([ContextKey::of::<SlowContext>()]))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Timeout { timeout_ms: 250 }));
    }
}
