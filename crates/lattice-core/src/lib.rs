//! Domain data model and loading pipeline.
//!
//! The correlation backbone of the framework: domains, typed domain
//! contexts, the per-request data bag, the provider contract, the
//! statically-typed provider registry and the concurrent data loader.
//!
//! ## Architecture
//!
//! ```text
//! View dependencies (ContextKey set)
//!        |
//!        v
//! DataLoader -- resolves --> ProviderRegistry (ContextKey -> provider)
//!        |                        |
//!        |  concurrent fan-out    v
//!        +----------------> DomainProvider::fetch(user)
//!        |
//!        v
//! DataContext (type -> value, write-once, request-scoped)
//! ```
//!
//! Providers are resolved by the *type* of context they produce, so a
//! view's dependency declaration is the single source of truth for both
//! what is fetched and what is read. Domain names appear once, as `const`
//! [`Domain`] items shared by providers and mutation declarations.

mod context;
mod domain;
mod error;
mod loader;
mod provider;
mod registry;
mod user;

pub use context::{ContextKey, DataContext, DomainContext};
pub use domain::{DataMutations, Domain};
pub use error::{DataError, Result};
pub use loader::DataLoader;
pub use provider::DomainProvider;
pub use registry::{ProviderRegistry, ProviderRegistryBuilder};
pub use user::UserId;
