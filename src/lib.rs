//! # City Info
//!
//! > **Cities and their points of interest, served from a single actor.**
//!
//! This crate keeps a two-level catalog in memory: a fixed set of cities, each
//! owning a list of points of interest that clients can create, replace, patch
//! and delete. Every change is checked against a validation policy before it is
//! committed, and a failed change leaves the catalog untouched.
//!
//! ## 🏗️ Architecture Notes
//!
//! ### 1. One writer, many readers
//! The [`Catalog`](catalog::Catalog) is plain synchronous data. At runtime it
//! sits behind a Tokio `RwLock` whose only writer is the
//! [`CatalogActor`](framework::CatalogActor), which applies mutations one at a
//! time in its own Tokio task. Concurrent callers hold clones of a
//! [`CatalogClient`](framework::CatalogClient): reads take the shared lock
//! directly and run alongside each other, mutations go through the mailbox, and
//! two concurrent creates can never receive the same id.
//!
//! ### 2. Validate, then commit
//! Create, replace and patch all build a candidate, run
//! [`validation::validate`] on it, and write it back only when the list of
//! violations is empty. Patches go through the closed-world [`patch`] engine
//! first, which only knows `/name` and `/description`.
//!
//! ### 3. Type-Safe Error Handling
//! [`CatalogError`](error::CatalogError) covers the store's outcomes,
//! [`PatchError`](patch::PatchError) the engine's, and
//! [`FrameworkError`](framework::FrameworkError) adds the ways the actor
//! plumbing can fail. The [`http`] layer maps them onto status codes.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured fields (`city_id`, `id`,
//! `size`). See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - `City`, `PointOfInterest`, the client-supplied draft and the id newtypes
//! - [`catalog`] - The store and its id allocator
//! - [`validation`] / [`patch`] - The rules and the patch engine
//! - [`framework`] - Actor, client, messages and the [`MockCatalog`](framework::mock::MockCatalog)
//! - [`lifecycle`] - [`CatalogSystem`](lifecycle::CatalogSystem) start/shutdown and tracing setup
//! - [`http`] - The `/api/cities` router
//! - [`config`] - Command-line and environment settings
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on 127.0.0.1:54673 with info logs
//! RUST_LOG=info cargo run
//!
//! curl http://127.0.0.1:54673/api/cities/1/pointsofinterest
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod patch;
pub mod validation;
