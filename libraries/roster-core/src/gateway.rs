//! Persistence gateway for user records

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Store of user records keyed by `UserId`
///
/// Every operation is a single statement against the backing store. There is
/// no version field and no transaction spanning more than one call.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Persist a record
    ///
    /// Runs [`NewUser::prepare_for_insert`] and writes the row. A record
    /// without an id always produces a new row. Returns the stored record.
    async fn save(&self, user: NewUser) -> Result<User>;

    /// Get a user by id, `None` if no such row exists
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Get all users
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Delete a user by id; deleting a missing id is not an error
    async fn delete_by_id(&self, id: &UserId) -> Result<()>;
}
