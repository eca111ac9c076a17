//! PostgreSQL-backed `PhotoRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{PhotoRepository, PhotoRepositoryError};
use crate::domain::{Photo, PhotoDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPhotoRow, PhotoRow};
use super::pool::DbPool;
use super::schema::photos;

/// Diesel-backed implementation of the photo repository port.
#[derive(Clone)]
pub struct DieselPhotoRepository {
    pool: DbPool,
}

impl DieselPhotoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_photo(row: PhotoRow) -> Photo {
    Photo {
        id: row.id,
        room_id: row.room_id,
        file: row.file,
        description: row.description,
    }
}

#[async_trait]
impl PhotoRepository for DieselPhotoRepository {
    async fn insert(
        &self,
        room_id: Uuid,
        draft: PhotoDraft,
    ) -> Result<Photo, PhotoRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PhotoRepositoryError::connection))?;

        let new_row = NewPhotoRow {
            id: Uuid::new_v4(),
            room_id,
            file: draft.file(),
            description: draft.description(),
        };
        let row: PhotoRow = diesel::insert_into(photos::table)
            .values(&new_row)
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(
                    err,
                    PhotoRepositoryError::query,
                    PhotoRepositoryError::connection,
                )
            })?;

        Ok(row_to_photo(row))
    }
}
