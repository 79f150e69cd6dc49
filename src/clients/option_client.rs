use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{OptionCreate, Product, ProductOption};
use crate::option_actor::{OptionAction, OptionActionResult, OptionError};
use super::actor_client::ActorClient;
use super::product_client::ProductClient;

/// Client for interacting with the Option actor.
///
/// Also resolves an option's parent product through the product client.
#[derive(Clone)]
pub struct OptionClient {
    inner: ResourceClient<ProductOption>,
    product_client: ProductClient,
}

impl OptionClient {
    pub fn new(inner: ResourceClient<ProductOption>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    #[instrument(skip(self, option), fields(product_id = %option.product_id))]
    pub async fn create_option(&self, option: OptionCreate) -> Result<String, OptionError> {
        debug!("Sending request");
        self.inner.create(option).await.map_err(Self::map_error)
    }

    /// Returns the product that owns `option_id`, or `None` when either the
    /// option or its product is missing.
    #[instrument(skip(self))]
    pub async fn find_product_by_option_id(&self, option_id: String) -> Result<Option<Product>, OptionError> {
        let Some(option) = self.get(option_id).await? else {
            return Ok(None);
        };
        self.product_client.get(option.product_id).await
            .map_err(|e| OptionError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn check_quantity(&self, id: String) -> Result<u32, OptionError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OptionAction::CheckQuantity).await {
            Ok(OptionActionResult::Quantity(level)) => Ok(level),
            Ok(other) => Err(OptionError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes `quantity` from stock and returns what is left.
    #[instrument(skip(self))]
    pub async fn subtract_quantity(&self, id: String, quantity: u32) -> Result<u32, OptionError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OptionAction::SubtractQuantity(quantity)).await {
            Ok(OptionActionResult::Subtracted { remaining }) => Ok(remaining),
            Ok(OptionActionResult::Insufficient { available }) => {
                Err(OptionError::InsufficientQuantity { requested: quantity, available })
            }
            Ok(other) => Err(OptionError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn restore_quantity(&self, id: String, quantity: u32) -> Result<u32, OptionError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OptionAction::RestoreQuantity(quantity)).await {
            Ok(OptionActionResult::Restored { remaining }) => Ok(remaining),
            Ok(other) => Err(OptionError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

impl ActorClient<ProductOption> for OptionClient {
    type Error = OptionError;

    fn inner(&self) -> &ResourceClient<ProductOption> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OptionError {
        match e {
            FrameworkError::NotFound(id) => OptionError::NotFound(id),
            FrameworkError::Rejected(reason) => OptionError::ValidationError(reason),
            other => OptionError::ActorCommunicationError(other.to_string()),
        }
    }
}
