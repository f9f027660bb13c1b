//! Roster Core
//!
//! Domain types, the persistence gateway contract, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserId`
//! - **Gateway Trait**: `UserGateway`, implemented by `roster-storage`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use roster_core::types::NewUser;
//!
//! let draft = NewUser::new(Some("Ann".to_string()), Some("ann@x.com".to_string()));
//! let user = draft.prepare_for_insert(Utc::now());
//!
//! assert_eq!(user.id.as_str().len(), 36);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod gateway;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use gateway::UserGateway;
pub use types::{NewUser, User, UserId};
