//! Actor plumbing around the [`Catalog`](crate::catalog::Catalog).
//!
//! # Main Components
//!
//! - [`CatalogActor`] - Sole writer of the catalog, applies mutations sequentially
//! - [`CatalogClient`] - Cloneable async handle: reads the catalog directly, sends mutations to the actor
//! - [`CatalogRequest`] - The mutation messages travelling over the mailbox
//! - [`FrameworkError`] - Catalog outcomes plus channel failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning the actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::{CatalogActor, SharedCatalog};
pub use client::CatalogClient;
pub use error::FrameworkError;
pub use message::{CatalogRequest, Response};
