use crate::users;
use async_trait::async_trait;
use roster_core::{error::Result, gateway::UserGateway, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserGateway for LocalStorageContext {
    async fn save(&self, user: NewUser) -> Result<User> {
        users::save(&self.pool, user).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }
}
