use crate::model::{PointOfInterest, PointOfInterestId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u32);

impl From<u32> for CityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "city_{}", self.0)
    }
}

/// Represents a city in the catalog.
///
/// # Catalog
/// Cities are seeded when the [`Catalog`](crate::catalog::Catalog) is built and are
/// read-only afterwards. Only their [`points_of_interest`](City::points_of_interest)
/// change, through the point-of-interest operations of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub description: String,
    /// Kept in insertion order.
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    /// Creates a city with no points of interest.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - City name
    /// * `description` - Short description
    pub fn new(id: impl Into<CityId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            points_of_interest: Vec::new(),
        }
    }

    /// Adds seed points of interest, keeping their order.
    pub fn with_points_of_interest(mut self, points: impl IntoIterator<Item = PointOfInterest>) -> Self {
        self.points_of_interest.extend(points);
        self
    }

    pub fn point_of_interest(&self, id: PointOfInterestId) -> Option<&PointOfInterest> {
        self.points_of_interest.iter().find(|p| p.id == id)
    }

    pub fn point_of_interest_mut(&mut self, id: PointOfInterestId) -> Option<&mut PointOfInterest> {
        self.points_of_interest.iter_mut().find(|p| p.id == id)
    }
}
