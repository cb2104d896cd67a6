//! # Resource Store
//!
//! [`Catalog`] owns every city and point of interest for the lifetime of the
//! process. It is plain synchronous data: the
//! [`CatalogActor`](crate::framework::CatalogActor) is its only writer and
//! holds the lock around it, so nothing here locks.
//!
//! Every mutation builds its result in a local value, runs the
//! [validation policy](crate::validation) on it, and only then writes it back.
//! A failed operation leaves the catalog exactly as it was.

pub mod ids;
pub mod seed;

use crate::error::CatalogError;
use crate::model::{City, CityId, PointOfInterest, PointOfInterestDraft, PointOfInterestId};
use crate::patch::{apply_patch, PatchOp};
use crate::validation::validate;
use ids::IdAllocator;

#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    ids: IdAllocator,
}

impl Catalog {
    /// Builds a catalog from its seed cities.
    pub fn new(cities: Vec<City>) -> Self {
        let ids = IdAllocator::seeded_from(&cities);
        Self { cities, ids }
    }

    /// The catalog the service starts with. See [`seed::default_cities`].
    pub fn seeded() -> Self {
        Self::new(seed::default_cities())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, city_id: CityId) -> Result<&City, CatalogError> {
        self.cities
            .iter()
            .find(|c| c.id == city_id)
            .ok_or(CatalogError::CityNotFound(city_id))
    }

    fn city_mut(&mut self, city_id: CityId) -> Result<&mut City, CatalogError> {
        self.cities
            .iter_mut()
            .find(|c| c.id == city_id)
            .ok_or(CatalogError::CityNotFound(city_id))
    }

    pub fn points_of_interest(&self, city_id: CityId) -> Result<&[PointOfInterest], CatalogError> {
        Ok(&self.city(city_id)?.points_of_interest)
    }

    pub fn point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<&PointOfInterest, CatalogError> {
        self.city(city_id)?
            .point_of_interest(id)
            .ok_or(CatalogError::PointOfInterestNotFound { city_id, id })
    }

    fn point_of_interest_mut(
        &mut self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<&mut PointOfInterest, CatalogError> {
        self.city_mut(city_id)?
            .point_of_interest_mut(id)
            .ok_or(CatalogError::PointOfInterestNotFound { city_id, id })
    }

    /// Validates `draft`, then appends it to the city under a fresh id.
    ///
    /// The draft is checked before the city is resolved, so an invalid draft
    /// for an unknown city reports the validation failure.
    pub fn create_point_of_interest(
        &mut self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, CatalogError> {
        ensure_valid(&draft)?;
        // Resolve before allocating so a missing city does not burn an id.
        self.city(city_id)?;
        let id = self.ids.next_id().ok_or(CatalogError::IdsExhausted)?;

        let created = PointOfInterest {
            id,
            name: draft.name,
            description: draft.description,
        };
        self.city_mut(city_id)?.points_of_interest.push(created.clone());
        Ok(created)
    }

    /// Overwrites name and description of an existing point of interest.
    pub fn replace_point_of_interest(
        &mut self,
        city_id: CityId,
        id: PointOfInterestId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, CatalogError> {
        ensure_valid(&draft)?;
        let stored = self.point_of_interest_mut(city_id, id)?;
        stored.apply(draft);
        Ok(stored.clone())
    }

    /// Applies a patch document to the current state and commits the result if
    /// it passes validation.
    ///
    /// A structural patch failure is reported as a `Patch` violation.
    pub fn patch_point_of_interest(
        &mut self,
        city_id: CityId,
        id: PointOfInterestId,
        ops: &[PatchOp],
    ) -> Result<PointOfInterest, CatalogError> {
        let snapshot = self.point_of_interest(city_id, id)?.to_draft();
        let patched = apply_patch(&snapshot, ops)
            .map_err(|e| CatalogError::ValidationFailed(vec![e.into_violation()]))?;
        ensure_valid(&patched)?;

        let stored = self.point_of_interest_mut(city_id, id)?;
        stored.apply(patched);
        Ok(stored.clone())
    }

    /// Removes a point of interest. Its id is not reused.
    pub fn delete_point_of_interest(
        &mut self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<PointOfInterest, CatalogError> {
        let city = self.city_mut(city_id)?;
        let index = city
            .points_of_interest
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::PointOfInterestNotFound { city_id, id })?;
        Ok(city.points_of_interest.remove(index))
    }

    /// Number of points of interest across every city.
    pub(crate) fn len(&self) -> usize {
        self.cities.iter().map(|c| c.points_of_interest.len()).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn ensure_valid(candidate: &PointOfInterestDraft) -> Result<(), CatalogError> {
    let violations = validate(candidate);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::ValidationFailed(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            City::new(1, "Area", "First").with_points_of_interest([PointOfInterest::new(1, "Child1", None)]),
            City::new(2, "Other", "Second"),
        ])
    }

    fn draft(name: &str, description: &str) -> PointOfInterestDraft {
        PointOfInterestDraft::new(name, Some(description))
    }

    #[test]
    fn test_create_appends_with_next_global_id() {
        let mut catalog = catalog();
        let created = catalog
            .create_point_of_interest(CityId(1), draft("New", "desc"))
            .unwrap();
        assert_eq!(created, PointOfInterest::new(2, "New", Some("desc")));

        let ids: Vec<_> = catalog
            .points_of_interest(CityId(1))
            .unwrap()
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        // Ids are global: the other city continues the same sequence.
        let other = catalog
            .create_point_of_interest(CityId(2), draft("Elsewhere", "x"))
            .unwrap();
        assert_eq!(other.id, PointOfInterestId(3));
    }

    #[test]
    fn test_create_rejects_duplicate_name_and_description() {
        let mut catalog = catalog();
        let err = catalog
            .create_point_of_interest(CityId(1), draft("Dup", "Dup"))
            .unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert!(err.violations()[0].is_for(Field::Description));
        assert_eq!(catalog.points_of_interest(CityId(1)).unwrap().len(), 1);

        // The rejected create must not consume an id.
        let created = catalog
            .create_point_of_interest(CityId(1), draft("Fine", "ok"))
            .unwrap();
        assert_eq!(created.id, PointOfInterestId(2));
    }

    #[test]
    fn test_create_in_unknown_city() {
        let mut catalog = catalog();
        let err = catalog
            .create_point_of_interest(CityId(9), draft("New", "desc"))
            .unwrap_err();
        assert_eq!(err, CatalogError::CityNotFound(CityId(9)));

        let created = catalog
            .create_point_of_interest(CityId(1), draft("New", "desc"))
            .unwrap();
        assert_eq!(created.id, PointOfInterestId(2));
    }

    #[test]
    fn test_invalid_draft_wins_over_unknown_city() {
        let mut catalog = catalog();
        let err = catalog
            .create_point_of_interest(CityId(9), draft("", "desc"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::ValidationFailed(_)));
    }

    #[test]
    fn test_delete_never_reuses_id() {
        let mut catalog = catalog();
        catalog
            .create_point_of_interest(CityId(1), draft("New", "desc"))
            .unwrap();
        catalog
            .delete_point_of_interest(CityId(1), PointOfInterestId(2))
            .unwrap();
        assert!(catalog
            .point_of_interest(CityId(1), PointOfInterestId(2))
            .unwrap_err()
            .is_not_found());

        let next = catalog
            .create_point_of_interest(CityId(2), draft("Again", "desc"))
            .unwrap();
        assert_eq!(next.id, PointOfInterestId(3));
    }

    #[test]
    fn test_lookups_on_unknown_ids() {
        let mut catalog = catalog();
        let before = catalog.clone();

        assert_eq!(
            catalog.city(CityId(9)).unwrap_err(),
            CatalogError::CityNotFound(CityId(9))
        );
        assert!(catalog.points_of_interest(CityId(9)).is_err());
        assert_eq!(
            catalog
                .point_of_interest(CityId(1), PointOfInterestId(42))
                .unwrap_err(),
            CatalogError::PointOfInterestNotFound {
                city_id: CityId(1),
                id: PointOfInterestId(42)
            }
        );
        // A point of interest is only reachable through its own city.
        assert!(catalog
            .point_of_interest(CityId(2), PointOfInterestId(1))
            .unwrap_err()
            .is_not_found());

        let unknown = [(CityId(9), PointOfInterestId(1)), (CityId(1), PointOfInterestId(42))];
        for (city_id, id) in unknown {
            assert!(catalog
                .replace_point_of_interest(city_id, id, draft("A", "B"))
                .unwrap_err()
                .is_not_found());
            assert!(catalog
                .patch_point_of_interest(city_id, id, &[PatchOp::replace("/name", "A")])
                .unwrap_err()
                .is_not_found());
            assert!(catalog
                .delete_point_of_interest(city_id, id)
                .unwrap_err()
                .is_not_found());
        }
        assert_eq!(catalog.cities(), before.cities());
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut catalog = catalog();
        let updated = catalog
            .replace_point_of_interest(CityId(1), PointOfInterestId(1), draft("Renamed", "Now described"))
            .unwrap();
        assert_eq!(updated, PointOfInterest::new(1, "Renamed", Some("Now described")));
        assert_eq!(
            catalog.point_of_interest(CityId(1), PointOfInterestId(1)).unwrap(),
            &updated
        );
    }

    #[test]
    fn test_replace_rejects_without_mutation() {
        let mut catalog = catalog();
        let err = catalog
            .replace_point_of_interest(CityId(1), PointOfInterestId(1), draft("Same", "Same"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::ValidationFailed(_)));
        assert_eq!(
            catalog
                .point_of_interest(CityId(1), PointOfInterestId(1))
                .unwrap()
                .name,
            "Child1"
        );
    }

    #[test]
    fn test_patch_matches_replace() {
        let mut patched = catalog();
        let mut replaced = catalog();
        patched
            .patch_point_of_interest(
                CityId(1),
                PointOfInterestId(1),
                &[
                    PatchOp::replace("/name", "X"),
                    PatchOp::replace("/description", "Y"),
                ],
            )
            .unwrap();
        replaced
            .replace_point_of_interest(CityId(1), PointOfInterestId(1), draft("X", "Y"))
            .unwrap();
        assert_eq!(patched.cities(), replaced.cities());
    }

    #[test]
    fn test_patch_failed_test_op_leaves_child_unchanged() {
        let mut catalog = catalog();
        let err = catalog
            .patch_point_of_interest(
                CityId(1),
                PointOfInterestId(1),
                &[
                    PatchOp::test("/name", "WrongValue"),
                    PatchOp::replace("/name", "New"),
                ],
            )
            .unwrap_err();
        assert_eq!(err.violations()[0].field, "Patch");
        assert_eq!(
            catalog
                .point_of_interest(CityId(1), PointOfInterestId(1))
                .unwrap()
                .name,
            "Child1"
        );
    }

    #[test]
    fn test_patch_result_is_revalidated() {
        let mut catalog = catalog();
        let err = catalog
            .patch_point_of_interest(
                CityId(1),
                PointOfInterestId(1),
                &[PatchOp::replace("/description", "Child1")],
            )
            .unwrap_err();
        assert!(err.violations()[0].is_for(Field::Description));

        let err = catalog
            .patch_point_of_interest(CityId(1), PointOfInterestId(1), &[PatchOp::remove("/name")])
            .unwrap_err();
        assert!(err.violations()[0].is_for(Field::Name));

        let stored = catalog
            .point_of_interest(CityId(1), PointOfInterestId(1))
            .unwrap();
        assert_eq!(stored, &PointOfInterest::new(1, "Child1", None));
    }

    #[test]
    fn test_patch_tests_empty_description() {
        let mut catalog = catalog();
        let created = catalog
            .create_point_of_interest(CityId(1), draft("Park", ""))
            .unwrap();
        let patched = catalog
            .patch_point_of_interest(
                CityId(1),
                created.id,
                &[
                    PatchOp::test("/description", ""),
                    PatchOp::replace("/name", "New"),
                ],
            )
            .unwrap();
        assert_eq!(patched.name, "New");
    }

    #[test]
    fn test_seeded_catalog() {
        let mut catalog = Catalog::seeded();
        assert_eq!(catalog.cities().len(), 3);
        assert_eq!(catalog.len(), 6);
        let created = catalog
            .create_point_of_interest(CityId(3), draft("Arc de Triomphe", "A monument"))
            .unwrap();
        assert_eq!(created.id, PointOfInterestId(7));
    }
}
