//! PostgreSQL-backed user directory.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::UserId;
use crate::domain::ports::{UserDirectory, UserDirectoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of [`UserDirectory`].
#[derive(Clone)]
pub struct DieselUserDirectory {
    pool: DbPool,
}

impl DieselUserDirectory {
    /// Create a directory reading from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for DieselUserDirectory {
    async fn list_user_ids(&self) -> Result<Vec<UserId>, UserDirectoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserDirectoryError::connection))?;

        let ids: Vec<Uuid> = users::table
            .select(users::id)
            .order(users::created_at.asc())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(err, UserDirectoryError::query, UserDirectoryError::connection)
            })?;

        Ok(ids.into_iter().map(UserId::from_uuid).collect())
    }
}
