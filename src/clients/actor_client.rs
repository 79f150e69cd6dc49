use async_trait::async_trait;
use tracing::debug;
use crate::actor_framework::{Entity, FrameworkError, ResourceClient};

/// Operations every entity client shares.
///
/// Implementors supply the underlying [`ResourceClient`] and an error mapping;
/// the lookups come for free.
#[async_trait]
pub trait ActorClient<T: Entity>: Send + Sync {
    type Error: Send;

    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: FrameworkError) -> Self::Error;

    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!(%id, "Sending get request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        debug!("Sending list request");
        self.inner().query(|_: &T| true).await.map_err(Self::map_error)
    }

    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        debug!(%id, "Sending delete request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
