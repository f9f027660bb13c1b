//! User domain type
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Persisted user record
///
/// `id` and `created_at` are always present once a row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[serde(rename = "uuid")]
    #[schema(value_type = String, format = Uuid)]
    pub id: UserId,

    /// Display name
    pub name: Option<String>,

    /// Contact email, stored as given
    pub email: Option<String>,

    /// Server-side creation time, millisecond precision
    #[serde(rename = "createdAt")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// User record that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Identifier to persist under; generated on insert when absent
    #[serde(rename = "uuid", default)]
    pub id: Option<UserId>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Ignored on insert, the store always stamps its own time
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewUser {
    /// Create a record with no id and no timestamp
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            id: None,
            name,
            email,
            created_at: None,
        }
    }

    /// Pre-write hook run once, right before the row is inserted.
    ///
    /// Assigns a fresh id if none was supplied and stamps `created_at` with
    /// `now`, discarding any caller-supplied value.
    pub fn prepare_for_insert(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id.unwrap_or_else(UserId::generate),
            name: self.name,
            email: self.email,
            created_at: now.trunc_subsecs(3),
        }
    }
}
