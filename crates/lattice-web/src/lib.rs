//! View orchestration and HTTP boundary.
//!
//! Ties the vocabulary ([`lattice_ui`]) and the data pipeline
//! ([`lattice_core`]) together:
//!
//! - [`View`]: a render unit declaring the one domain context type it
//!   reads, or none.
//! - [`Orchestrator`]: batches data loading per render phase, stamps
//!   tracking metadata on rendered roots, and answers mutations with
//!   out-of-band patches for exactly the affected views.
//! - [`ViewState`]: the per-request record of what the client has mounted,
//!   reconstructed leniently from a header.
//! - [`Page`], [`serve`], [`WebConfig`]: document assembly and server
//!   bootstrap.
//!
//! ## Request flow
//!
//! ```text
//! full page:  views -> union deps -> load once -> render + stamp -> document
//! mutation:   header -> mounted ∩ mutated domains -> load once
//!                    -> render + OOB stamp -> patch string ("" if none)
//! ```

pub mod assets;
pub mod client_state;
pub mod config;
pub mod orchestrator;
pub mod page;
pub mod server;
pub mod view;

mod error;

pub use client_state::{parse_view_state, MountedView, ViewState, VIEW_STATE_HEADER};
pub use config::WebConfig;
pub use error::{Result, WebError};
pub use orchestrator::{Orchestrator, RenderedView, DOMAIN_ATTR, OOB_ATTR, VIEW_ATTR};
pub use page::Page;
pub use server::serve;
pub use view::{View, ViewRegistry};
