//! # Catalog Errors
//!
//! Outcomes of the catalog operations that are not a success. Every variant is
//! produced before any mutation is committed.

use crate::model::{CityId, PointOfInterestId};
use crate::validation::Violation;
use thiserror::Error;

/// Errors returned by [`Catalog`](crate::catalog::Catalog) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested city does not exist.
    #[error("City not found: {0}")]
    CityNotFound(CityId),

    /// The city exists but holds no point of interest with this id.
    #[error("Point of interest not found: {id} in {city_id}")]
    PointOfInterestNotFound {
        city_id: CityId,
        id: PointOfInterestId,
    },

    /// The candidate broke one or more rules; the list is never empty.
    #[error("Validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<Violation>),

    /// The allocator has handed out every representable id.
    #[error("Point of interest ids exhausted")]
    IdsExhausted,
}

impl CatalogError {
    /// True for both not-found variants, which callers may treat alike.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::CityNotFound(_) | CatalogError::PointOfInterestNotFound { .. }
        )
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            CatalogError::ValidationFailed(violations) => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
