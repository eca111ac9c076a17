//! PostgreSQL-backed `ReviewRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::ports::{ReviewRepository, ReviewRepositoryError};
use crate::domain::{Review, ReviewDraft, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewReviewRow, ReviewRow};
use super::pool::DbPool;
use super::schema::reviews;

/// Diesel-backed implementation of the review repository port.
#[derive(Clone)]
pub struct DieselReviewRepository {
    pool: DbPool,
}

impl DieselReviewRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_query_error(error: diesel::result::Error) -> ReviewRepositoryError {
    map_diesel_error(
        error,
        ReviewRepositoryError::query,
        ReviewRepositoryError::connection,
    )
}

fn row_to_review(row: ReviewRow) -> Review {
    Review {
        id: row.id,
        room_id: row.room_id,
        user_id: UserId::from_uuid(row.user_id),
        payload: row.payload,
        rating: row.rating,
    }
}

#[async_trait]
impl ReviewRepository for DieselReviewRepository {
    async fn insert(
        &self,
        room_id: Uuid,
        user_id: UserId,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ReviewRepositoryError::connection))?;

        let new_row = NewReviewRow {
            id: Uuid::new_v4(),
            room_id,
            user_id: *user_id.as_uuid(),
            payload: draft.payload(),
            rating: draft.rating(),
        };
        let row: ReviewRow = diesel::insert_into(reviews::table)
            .values(&new_row)
            .returning(ReviewRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;

        Ok(row_to_review(row))
    }

    async fn list_for_room(
        &self,
        room_id: Uuid,
        page: PageRequest,
    ) -> Result<Paginated<Review>, ReviewRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ReviewRepositoryError::connection))?;

        let total: i64 = reviews::table
            .filter(reviews::room_id.eq(room_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;

        let rows: Vec<ReviewRow> = reviews::table
            .filter(reviews::room_id.eq(room_id))
            .order((reviews::created_at.desc(), reviews::id.desc()))
            .offset(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .limit(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .select(ReviewRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;

        let items = rows.into_iter().map(row_to_review).collect();
        Ok(Paginated::new(items, page, u64::try_from(total).unwrap_or(0)))
    }
}
