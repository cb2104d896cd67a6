//! # Catalog Actor
//!
//! The "Server" half of the actor pair. [`CatalogActor`] owns the receiving
//! end of the mailbox and is the only writer of the [`Catalog`]. It processes
//! mutations one at a time in its own Tokio task.
//!
//! **Concurrency Model**:
//! The catalog sits behind a [`SharedCatalog`] lock. Any number of
//! [`CatalogClient`] clones read it directly and concurrently with each other.
//! Mutations travel over the mailbox instead, so they are serialized across the
//! whole store and two concurrent creates can never be handed the same id. A
//! reader waits at most for the one mutation being applied, never for the
//! mutations queued behind it.

use crate::catalog::Catalog;
use crate::framework::client::CatalogClient;
use crate::framework::message::{reply, CatalogRequest};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

/// The catalog as seen by the actor (writer) and its clients (readers).
pub type SharedCatalog = Arc<RwLock<Catalog>>;

pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    catalog: SharedCatalog,
}

impl CatalogActor {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mailbox. When it is full, mutating
    ///   client calls wait until there is space. Reads are not affected.
    /// * `catalog` - The seeded catalog the actor takes ownership of.
    ///
    /// # Returns
    ///
    /// 1. The `CatalogActor` (the server), which must be driven via `.run()`.
    /// 2. The `CatalogClient`, which can be cloned and shared across tasks.
    pub fn new(buffer_size: usize, catalog: Catalog) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let catalog = Arc::new(RwLock::new(catalog));
        let client = CatalogClient::new(sender, catalog.clone());
        (Self { receiver, catalog }, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        {
            let catalog = self.catalog.read().await;
            info!(
                cities = catalog.cities().len(),
                size = catalog.len(),
                "Actor started"
            );
        }

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg).await;
        }

        let size = self.catalog.read().await.len();
        info!(size, "Shutdown");
    }

    async fn handle(&mut self, msg: CatalogRequest) {
        let mut catalog = self.catalog.write().await;
        match msg {
            CatalogRequest::CreatePointOfInterest {
                city_id,
                draft,
                respond_to,
            } => {
                debug!(%city_id, ?draft, "Create");
                let result = catalog.create_point_of_interest(city_id, draft);
                match &result {
                    Ok(created) => {
                        info!(%city_id, id = %created.id, size = catalog.len(), "Created")
                    }
                    Err(e) => warn!(%city_id, error = %e, "Create failed"),
                }
                reply(respond_to, result);
            }
            CatalogRequest::ReplacePointOfInterest {
                city_id,
                id,
                draft,
                respond_to,
            } => {
                debug!(%city_id, %id, ?draft, "Replace");
                let result = catalog.replace_point_of_interest(city_id, id, draft);
                match &result {
                    Ok(_) => info!(%city_id, %id, "Replaced"),
                    Err(e) => warn!(%city_id, %id, error = %e, "Replace failed"),
                }
                reply(respond_to, result);
            }
            CatalogRequest::PatchPointOfInterest {
                city_id,
                id,
                ops,
                respond_to,
            } => {
                debug!(%city_id, %id, ?ops, "Patch");
                let result = catalog.patch_point_of_interest(city_id, id, &ops);
                match &result {
                    Ok(_) => info!(%city_id, %id, ops = ops.len(), "Patched"),
                    Err(e) => warn!(%city_id, %id, error = %e, "Patch failed"),
                }
                reply(respond_to, result);
            }
            CatalogRequest::DeletePointOfInterest {
                city_id,
                id,
                respond_to,
            } => {
                debug!(%city_id, %id, "Delete");
                let result = catalog.delete_point_of_interest(city_id, id);
                match &result {
                    Ok(_) => info!(%city_id, %id, size = catalog.len(), "Deleted"),
                    Err(e) => warn!(%city_id, %id, error = %e, "Delete failed"),
                }
                reply(respond_to, result.map(|_| ()));
            }
        }
    }
}
