//! # System Lifecycle
//!
//! Starting and stopping the catalog actor, plus process-wide tracing setup.
//!
//! ## The CatalogSystem Pattern
//!
//! [`CatalogSystem::start`] creates the actor and its client, spawns the actor
//! in its own Tokio task, and keeps the task handle. Everything else in the
//! process talks to the catalog through clones of `system.client`.
//!
//! Shutdown is driven by channel closure rather than a stop message:
//!
//! 1. Every holder of a client clone drops it (for the HTTP server, that
//!    happens when `axum::serve` returns and the router is dropped)
//! 2. [`CatalogSystem::shutdown`] drops the last client and awaits the task
//! 3. The actor's `recv()` returns `None`, it logs `Shutdown` and exits
//!
//! A clone kept alive elsewhere makes `shutdown` wait for it.

mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use self::tracing::setup_tracing;
