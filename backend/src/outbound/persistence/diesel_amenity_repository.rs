//! PostgreSQL-backed `AmenityRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::ports::{AmenityRepository, AmenityRepositoryError};
use crate::domain::{Amenity, AmenityDraft, AmenityPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AmenityChangeset, AmenityRow, NewAmenityRow};
use super::pool::DbPool;
use super::schema::amenities;

/// Diesel-backed implementation of the amenity repository port.
#[derive(Clone)]
pub struct DieselAmenityRepository {
    pool: DbPool,
}

impl DieselAmenityRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_checkout_error(error: super::pool::PoolError) -> AmenityRepositoryError {
    map_pool_error(error, AmenityRepositoryError::connection)
}

fn map_query_error(error: diesel::result::Error) -> AmenityRepositoryError {
    map_diesel_error(
        error,
        AmenityRepositoryError::query,
        AmenityRepositoryError::connection,
    )
}

fn row_to_amenity(row: AmenityRow) -> Amenity {
    Amenity {
        id: row.id,
        name: row.name,
        description: row.description,
    }
}

#[async_trait]
impl AmenityRepository for DieselAmenityRepository {
    async fn insert(&self, draft: AmenityDraft) -> Result<Amenity, AmenityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        let new_row = NewAmenityRow {
            id: Uuid::new_v4(),
            name: draft.name(),
            description: draft.description(),
        };
        let row: AmenityRow = diesel::insert_into(amenities::table)
            .values(&new_row)
            .returning(AmenityRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;

        Ok(row_to_amenity(row))
    }

    async fn find_by_id(
        &self,
        amenity_id: Uuid,
    ) -> Result<Option<Amenity>, AmenityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        let row: Option<AmenityRow> = amenities::table
            .filter(amenities::id.eq(amenity_id))
            .select(AmenityRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;

        Ok(row.map(row_to_amenity))
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<Amenity>, AmenityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        let total: i64 = amenities::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;

        let rows: Vec<AmenityRow> = amenities::table
            .order(amenities::name.asc())
            .offset(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .limit(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .select(AmenityRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;

        let items = rows.into_iter().map(row_to_amenity).collect();
        Ok(Paginated::new(items, page, u64::try_from(total).unwrap_or(0)))
    }

    async fn update(
        &self,
        amenity_id: Uuid,
        patch: AmenityPatch,
    ) -> Result<Option<Amenity>, AmenityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        // Diesel rejects an empty changeset; an empty patch degrades to a
        // plain read.
        let row: Option<AmenityRow> = if patch.is_empty() {
            amenities::table
                .filter(amenities::id.eq(amenity_id))
                .select(AmenityRow::as_select())
                .first(&mut conn)
                .await
                .optional()
                .map_err(map_query_error)?
        } else {
            let changeset = AmenityChangeset {
                name: patch.name(),
                description: patch.description(),
            };
            diesel::update(amenities::table.filter(amenities::id.eq(amenity_id)))
                .set(&changeset)
                .returning(AmenityRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_query_error)?
        };

        Ok(row.map(row_to_amenity))
    }

    async fn delete(&self, amenity_id: Uuid) -> Result<bool, AmenityRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_checkout_error)?;

        let deleted = diesel::delete(amenities::table.filter(amenities::id.eq(amenity_id)))
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;

        Ok(deleted > 0)
    }
}
