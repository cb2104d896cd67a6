//! Global point-of-interest id allocation.

use crate::model::{City, PointOfInterestId};

/// Hands out point-of-interest ids that are unique across every city.
///
/// The counter starts at the highest id present in the seed and only moves
/// forward, so an id freed by a delete is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u32,
}

impl IdAllocator {
    /// Seeds the counter from the largest id found in any city.
    pub fn seeded_from(cities: &[City]) -> Self {
        let last = cities
            .iter()
            .flat_map(|city| city.points_of_interest.iter())
            .map(|poi| poi.id.0)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Returns the next id, or `None` once `u32::MAX` has been handed out.
    pub fn next_id(&mut self) -> Option<PointOfInterestId> {
        let next = self.last.checked_add(1)?;
        self.last = next;
        Some(PointOfInterestId(next))
    }
}
