//! # Framework Errors
//!
//! Errors seen by callers of the [`CatalogClient`](crate::framework::CatalogClient):
//! the catalog's own outcomes plus the ways the actor plumbing itself can fail.

use crate::error::CatalogError;

/// Errors that can occur between a client and the catalog actor.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl FrameworkError {
    /// The catalog outcome, if the request reached the catalog at all.
    pub fn catalog(&self) -> Option<&CatalogError> {
        match self {
            FrameworkError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}
