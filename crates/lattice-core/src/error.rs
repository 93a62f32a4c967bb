//! Error types for domain data loading.

use crate::domain::Domain;
use thiserror::Error;

/// Result type alias for data-loading operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while registering providers or loading domain data.
#[derive(Debug, Error)]
pub enum DataError {
    /// A load was attempted without a resolvable user identity.
    #[error("data loading requires an authenticated user")]
    Unauthorized,

    /// A domain context was read before it was loaded. This is a
    /// dependency-declaration bug in a view, not a user-facing condition.
    #[error("domain context `{context}` was read but never loaded")]
    NotLoaded { context: &'static str },

    /// A domain context was inserted twice within one request.
    #[error("domain context `{context}` was loaded twice")]
    AlreadyLoaded { context: &'static str },

    /// No provider is registered for a requested context type.
    #[error("no provider registered for domain context `{context}`")]
    NoProvider { context: &'static str },

    /// Two providers were registered for the same context type.
    #[error("a provider for domain context `{context}` is already registered")]
    DuplicateProvider { context: &'static str },

    /// Two providers were registered under the same domain name.
    #[error("a provider for domain `{domain}` is already registered")]
    DuplicateDomain { domain: Domain },

    /// A provider fetch failed; the whole batch fails with it.
    #[error("provider for domain `{domain}` failed: {source}")]
    Provider {
        domain: Domain,
        #[source]
        source: anyhow::Error,
    },

    /// The load deadline elapsed before every provider finished.
    #[error("domain loading exceeded the {timeout_ms}ms deadline")]
    Timeout { timeout_ms: u64 },
}
