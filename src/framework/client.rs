//! # Catalog Client
//!
//! The async, cloneable handle the rest of the application uses to reach the
//! [`CatalogActor`](crate::framework::CatalogActor).

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::framework::actor::SharedCatalog;
use crate::framework::message::{CatalogRequest, Response};
use crate::framework::FrameworkError;
use crate::model::{City, CityId, PointOfInterest, PointOfInterestDraft, PointOfInterestId};
use crate::patch::PatchOp;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

/// A type-safe client for interacting with a `CatalogActor`.
///
/// Holds a mailbox sender and a read handle on the catalog, so cloning is
/// cheap. Each mutating method sends exactly one request and waits for its
/// answer; nothing is retried.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
    catalog: SharedCatalog,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>, catalog: SharedCatalog) -> Self {
        Self { sender, catalog }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Runs `view` against the catalog under a shared lock.
    ///
    /// Reads never enter the mailbox, so they run concurrently with each other
    /// and do not queue behind pending mutations. A catalog whose actor has
    /// stopped is reported as closed rather than served stale.
    async fn read<T>(
        &self,
        view: impl FnOnce(&Catalog) -> Result<T, CatalogError>,
    ) -> Result<T, FrameworkError> {
        if self.sender.is_closed() {
            return Err(FrameworkError::ActorClosed);
        }
        let catalog = self.catalog.read().await;
        Ok(view(&catalog)?)
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, FrameworkError> {
        self.read(|catalog| Ok(catalog.cities().to_vec())).await
    }

    pub async fn get_city(&self, city_id: CityId) -> Result<City, FrameworkError> {
        let result = self.read(|catalog| catalog.city(city_id).cloned()).await;
        debug!(%city_id, found = result.is_ok(), "GetCity");
        result
    }

    pub async fn list_points_of_interest(
        &self,
        city_id: CityId,
    ) -> Result<Vec<PointOfInterest>, FrameworkError> {
        let result = self
            .read(|catalog| catalog.points_of_interest(city_id).map(<[_]>::to_vec))
            .await;
        if result.is_err() {
            info!(%city_id, "City wasn't found when accessing points of interest");
        }
        result
    }

    pub async fn get_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<PointOfInterest, FrameworkError> {
        let result = self
            .read(|catalog| catalog.point_of_interest(city_id, id).cloned())
            .await;
        debug!(%city_id, %id, found = result.is_ok(), "GetPointOfInterest");
        result
    }

    #[instrument(skip(self))]
    pub async fn create_point_of_interest(
        &self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::CreatePointOfInterest {
            city_id,
            draft,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn replace_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::ReplacePointOfInterest {
            city_id,
            id,
            draft,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self, ops), fields(ops = ops.len()))]
    pub async fn patch_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        ops: Vec<PatchOp>,
    ) -> Result<PointOfInterest, FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::PatchPointOfInterest {
            city_id,
            id,
            ops,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<(), FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::DeletePointOfInterest {
            city_id,
            id,
            respond_to,
        })
        .await
    }
}
