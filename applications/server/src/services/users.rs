/// User service - orchestrates the persistence gateway for the HTTP layer
use crate::error::Result;
use roster_core::{NewUser, User, UserGateway, UserId};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    gateway: Arc<dyn UserGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }

    /// Persist a new user; id and creation time are assigned by the gateway
    pub async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = self.gateway.save(user).await?;
        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    /// Look up a user, `None` when the id is unknown
    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.gateway.find_by_id(id).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.gateway.find_all().await?)
    }

    /// Remove a user; unknown ids are ignored
    pub async fn delete(&self, id: &UserId) -> Result<()> {
        self.gateway.delete_by_id(id).await?;
        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
