use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Points of Interest.
///
/// Unique across every city in the catalog, not only within the owning city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointOfInterestId(pub u32);

impl From<u32> for PointOfInterestId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PointOfInterestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "poi_{}", self.0)
    }
}

/// A point of interest owned by a [`City`](crate::model::City).
///
/// See [`Catalog`](crate::catalog::Catalog) for the operations that create and
/// mutate it. Identity and city membership never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointOfInterest {
    pub id: PointOfInterestId,
    pub name: String,
    pub description: Option<String>,
}

impl PointOfInterest {
    /// Creates a new PointOfInterest instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally handed out by the catalog's allocator)
    /// * `name` - Display name
    /// * `description` - Optional description
    pub fn new(
        id: impl Into<PointOfInterestId>,
        name: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.map(str::to_owned),
        }
    }

    /// Update-shaped view of the current state, used as the patch snapshot.
    pub fn to_draft(&self) -> PointOfInterestDraft {
        PointOfInterestDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Overwrites the mutable fields. Callers validate the draft first.
    pub(crate) fn apply(&mut self, draft: PointOfInterestDraft) {
        self.name = draft.name;
        self.description = draft.description;
    }
}

/// Payload for creating or fully replacing a point of interest.
///
/// A missing `Name` decodes as an empty string so that it is reported by the
/// validation policy rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointOfInterestDraft {
    #[serde(default, alias = "name")]
    pub name: String,
    #[serde(default, alias = "description")]
    pub description: Option<String>,
}

impl PointOfInterestDraft {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_owned),
        }
    }
}
