use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{User, UserCreate};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use super::actor_client::ActorClient;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, user), fields(user_email = %user.email))]
    pub async fn create_user(&self, user: UserCreate) -> Result<String, UserError> {
        debug!("Sending request");
        self.inner.create(user).await.map_err(Self::map_error)
    }

    /// Debits the user's wish quota and returns what is left.
    #[instrument(skip(self))]
    pub async fn subtract_wish(&self, id: String, quantity: u32, product_id: String) -> Result<u32, UserError> {
        debug!("Sending request");
        let action = UserAction::SubtractWish { quantity, product_id };
        match self.inner.perform_action(id, action).await {
            Ok(UserActionResult::WishSubtracted { remaining }) => Ok(remaining),
            Ok(UserActionResult::InsufficientWish { available }) => {
                Err(UserError::InsufficientWishQuota { requested: quantity, available })
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> UserError {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Rejected(reason) => UserError::ValidationError(reason),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
