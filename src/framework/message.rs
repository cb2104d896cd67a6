//! # Catalog Messages
//!
//! The request type sent from a [`CatalogClient`](crate::framework::CatalogClient)
//! to the [`CatalogActor`](crate::framework::CatalogActor). One variant per
//! mutation; each carries the one-shot channel its answer goes back on. Reads
//! never travel over the mailbox.

use crate::error::CatalogError;
use crate::framework::FrameworkError;
use crate::model::{CityId, PointOfInterest, PointOfInterestDraft, PointOfInterestId};
use crate::patch::PatchOp;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request mutations.
///
/// Each answers with the state that was committed.
#[derive(Debug)]
pub enum CatalogRequest {
    CreatePointOfInterest {
        city_id: CityId,
        draft: PointOfInterestDraft,
        respond_to: Response<PointOfInterest>,
    },
    ReplacePointOfInterest {
        city_id: CityId,
        id: PointOfInterestId,
        draft: PointOfInterestDraft,
        respond_to: Response<PointOfInterest>,
    },
    PatchPointOfInterest {
        city_id: CityId,
        id: PointOfInterestId,
        ops: Vec<PatchOp>,
        respond_to: Response<PointOfInterest>,
    },
    DeletePointOfInterest {
        city_id: CityId,
        id: PointOfInterestId,
        respond_to: Response<()>,
    },
}

impl CatalogRequest {
    /// Short operation name used in logs and mock diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogRequest::CreatePointOfInterest { .. } => "CreatePointOfInterest",
            CatalogRequest::ReplacePointOfInterest { .. } => "ReplacePointOfInterest",
            CatalogRequest::PatchPointOfInterest { .. } => "PatchPointOfInterest",
            CatalogRequest::DeletePointOfInterest { .. } => "DeletePointOfInterest",
        }
    }
}

/// Sends a catalog outcome back to the waiting client.
///
/// A client that gave up waiting has dropped its receiver; that is not an error
/// for the actor.
pub(crate) fn reply<T>(respond_to: Response<T>, result: Result<T, CatalogError>) {
    let _ = respond_to.send(result.map_err(FrameworkError::from));
}
