//! User record queries

use crate::StorageError;
use chrono::{DateTime, Utc};
use roster_core::{
    error::Result,
    types::{NewUser, User, UserId},
};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    uuid: UserId,
    name: Option<String>,
    email: Option<String>,
    #[sqlx(rename = "createdAt")]
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> std::result::Result<Self, Self::Error> {
        let created_at = DateTime::from_timestamp_millis(row.created_at).ok_or_else(|| {
            StorageError::invalid_row(
                "user",
                row.uuid.as_str(),
                format!("createdAt out of range: {}", row.created_at),
            )
        })?;

        Ok(User {
            id: row.uuid,
            name: row.name,
            email: row.email,
            created_at,
        })
    }
}

/// Persist a user record
///
/// Runs the pre-write hook ([`NewUser::prepare_for_insert`]) and inserts the
/// row. When the record carries an id that is already stored, `name` and
/// `email` are re-saved and the original `createdAt` is kept.
///
/// # Returns
///
/// The record as stored
pub async fn save(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let user = user.prepare_for_insert(Utc::now());

    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (uuid, name, email, createdAt)
         VALUES (?, ?, ?, ?)
         ON CONFLICT(uuid)
         DO UPDATE SET name = excluded.name, email = excluded.email
         RETURNING uuid, name, email, createdAt",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.created_at.timestamp_millis())
    .fetch_one(pool)
    .await?;

    tracing::debug!(user_id = %row.uuid, "Saved user");

    Ok(User::try_from(row)?)
}

/// Get a user by id
///
/// # Returns
///
/// Returns `Ok(None)` if no user has this id
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT uuid, name, email, createdAt FROM users WHERE uuid = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(User::try_from).transpose()?)
}

/// Get all users, in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT uuid, name, email, createdAt FROM users ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| User::try_from(row).map_err(Into::into))
        .collect()
}

/// Delete a user
///
/// Deleting an id that does not exist is a no-op.
pub async fn delete(pool: &SqlitePool, id: &UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE uuid = ?")
        .bind(id)
        .execute(pool)
        .await?;

    tracing::debug!(user_id = %id, rows = result.rows_affected(), "Deleted user");

    Ok(())
}
