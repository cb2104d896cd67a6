use crate::catalog::Catalog;
use crate::framework::{CatalogActor, CatalogClient};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the catalog actor.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting the actor task and stopping it again
/// - **Handing out access**: The public [`client`](Self::client) is cloned into
///   whatever needs the catalog, such as the HTTP router
///
/// # Example
///
/// ```
/// use city_info::catalog::Catalog;
/// use city_info::lifecycle::CatalogSystem;
///
/// # #[tokio::main]
/// # async fn main() {
/// let system = CatalogSystem::start(Catalog::seeded(), 32);
///
/// let cities = system.client.list_cities().await.unwrap();
/// assert_eq!(cities.len(), 3);
///
/// system.shutdown().await.unwrap();
/// # }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the catalog actor
    pub client: CatalogClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the catalog actor over `catalog` with a mailbox of
    /// `mailbox_capacity` requests.
    ///
    /// # Panics
    ///
    /// If `mailbox_capacity` is zero. [`Config`](crate::config::Config) rejects
    /// that value at parse time.
    pub fn start(catalog: Catalog, mailbox_capacity: usize) -> Self {
        let (actor, client) = CatalogActor::new(mailbox_capacity, catalog);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the actor.
    ///
    /// Dropping the client closes the mailbox once every clone handed out has
    /// been dropped too. The actor drains what is queued, then exits its loop.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(JoinError)` if the actor task panicked or was cancelled
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e);
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
