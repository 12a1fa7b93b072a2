//! Port abstraction for reading the set of existing users.
//!
//! The listing seeder attributes every generated listing to an existing user,
//! so it needs the full set of user identifiers before generating anything.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum UserDirectoryError {
        /// Directory connection could not be established.
        Connection { message: String } => "user directory connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "user directory query failed: {message}",
    }
}

/// Port for listing every known user identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return the identifiers of all users, in storage order.
    ///
    /// An empty result is not an error at this layer.
    async fn list_user_ids(&self) -> Result<Vec<UserId>, UserDirectoryError>;
}

/// Directory backed by a fixed set of identifiers.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectory {
    users: Vec<UserId>,
}

impl FixtureUserDirectory {
    /// Create a directory that always returns `users`.
    pub fn new(users: Vec<UserId>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn list_user_ids(&self) -> Result<Vec<UserId>, UserDirectoryError> {
        Ok(self.users.clone())
    }
}
