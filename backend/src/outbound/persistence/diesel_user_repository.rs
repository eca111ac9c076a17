//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{DisplayName, User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_query_error(error: diesel::result::Error) -> UserRepositoryError {
    map_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let name = DisplayName::new(row.display_name)
        .map_err(|_| UserRepositoryError::query("stored display name is invalid"))?;
    Ok(User::new(UserId::from_uuid(row.id), name))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_or_create(
        &self,
        display_name: DisplayName,
    ) -> Result<User, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserRepositoryError::connection))?;

        // Display names are unique; a concurrent first login loses the insert
        // race and falls through to the select.
        let new_row = NewUserRow {
            id: Uuid::new_v4(),
            display_name: display_name.as_ref(),
        };
        diesel::insert_into(users::table)
            .values(&new_row)
            .on_conflict(users::display_name)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;

        let row: UserRow = users::table
            .filter(users::display_name.eq(display_name.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_query_error)?;

        row_to_user(row)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserRepositoryError::connection))?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(user_id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;

        row.map(row_to_user).transpose()
    }
}
