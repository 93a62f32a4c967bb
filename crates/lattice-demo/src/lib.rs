//! Demo todo application for the lattice view framework.
//!
//! Wires concrete domain providers, views and interaction routes into the
//! framework: the `todos` and `todoAnalytics` domains over an in-memory
//! store, the views rendering them, and mutating endpoints that declare
//! what they touched and answer with out-of-band patches.

pub mod domains;
pub mod routes;
pub mod store;
pub mod views;

pub use routes::{session_routes, todo_routes, AppState, DEMO_USER};
pub use store::{Todo, TodoStore};
