//! Review domain services.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::ports::{
    ReviewRepository, ReviewRepositoryError, ReviewsCommand, ReviewsQuery, RoomRepository,
    RoomRepositoryError,
};
use crate::domain::reviews::{Review, ReviewDraft};
use crate::domain::user::UserId;

fn map_review_repository_error(error: ReviewRepositoryError) -> Error {
    match error {
        ReviewRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("review repository unavailable: {message}"))
        }
        ReviewRepositoryError::Query { message } => {
            Error::internal(format!("review repository error: {message}"))
        }
    }
}

fn map_room_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("room repository unavailable: {message}"))
        }
        other => Error::internal(format!("room repository error: {other}")),
    }
}

async fn ensure_room_exists<R>(rooms: &R, room_id: Uuid) -> Result<(), Error>
where
    R: RoomRepository + ?Sized,
{
    rooms
        .find_by_id(room_id)
        .await
        .map_err(map_room_repository_error)?
        .ok_or_else(|| Error::not_found(format!("room {room_id} not found")))?;
    Ok(())
}

/// Review service implementing the command driving port.
#[derive(Clone)]
pub struct ReviewsCommandService<V, R> {
    review_repo: Arc<V>,
    room_repo: Arc<R>,
}

impl<V, R> ReviewsCommandService<V, R> {
    /// Create a new command service with its repositories.
    pub fn new(review_repo: Arc<V>, room_repo: Arc<R>) -> Self {
        Self {
            review_repo,
            room_repo,
        }
    }
}

#[async_trait]
impl<V, R> ReviewsCommand for ReviewsCommandService<V, R>
where
    V: ReviewRepository,
    R: RoomRepository,
{
    async fn create_review(
        &self,
        room_id: Uuid,
        requester: UserId,
        draft: ReviewDraft,
    ) -> Result<Review, Error> {
        ensure_room_exists(self.room_repo.as_ref(), room_id).await?;
        self.review_repo
            .insert(room_id, requester, draft)
            .await
            .map_err(map_review_repository_error)
    }
}

/// Review service implementing the query driving port.
#[derive(Clone)]
pub struct ReviewsQueryService<V, R> {
    review_repo: Arc<V>,
    room_repo: Arc<R>,
}

impl<V, R> ReviewsQueryService<V, R> {
    /// Create a new query service with its repositories.
    pub fn new(review_repo: Arc<V>, room_repo: Arc<R>) -> Self {
        Self {
            review_repo,
            room_repo,
        }
    }
}

#[async_trait]
impl<V, R> ReviewsQuery for ReviewsQueryService<V, R>
where
    V: ReviewRepository,
    R: RoomRepository,
{
    async fn list_reviews(
        &self,
        room_id: Uuid,
        page: PageRequest,
    ) -> Result<Paginated<Review>, Error> {
        ensure_room_exists(self.room_repo.as_ref(), room_id).await?;
        self.review_repo
            .list_for_room(room_id, page)
            .await
            .map_err(map_review_repository_error)
    }
}
