//! Port for review persistence.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::reviews::{Review, ReviewDraft};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by review repository adapters.
    pub enum ReviewRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "review repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "review repository query failed: {message}",
    }
}

/// Port for writing and listing room reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a review against a room.
    async fn insert(
        &self,
        room_id: Uuid,
        user_id: UserId,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewRepositoryError>;

    /// Read one page of reviews for a room, newest first.
    async fn list_for_room(
        &self,
        room_id: Uuid,
        page: PageRequest,
    ) -> Result<Paginated<Review>, ReviewRepositoryError>;
}

/// Fixture implementation for tests that do not exercise reviews.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewRepository;

#[async_trait]
impl ReviewRepository for FixtureReviewRepository {
    async fn insert(
        &self,
        room_id: Uuid,
        user_id: UserId,
        draft: ReviewDraft,
    ) -> Result<Review, ReviewRepositoryError> {
        Ok(Review {
            id: Uuid::new_v4(),
            room_id,
            user_id,
            payload: draft.payload().to_owned(),
            rating: draft.rating(),
        })
    }

    async fn list_for_room(
        &self,
        _room_id: Uuid,
        page: PageRequest,
    ) -> Result<Paginated<Review>, ReviewRepositoryError> {
        Ok(Paginated::new(Vec::new(), page, 0))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_insert_echoes_the_draft() {
        let repo = FixtureReviewRepository;
        let room_id = Uuid::new_v4();
        let draft = ReviewDraft::new("spotless and quiet", 5).expect("valid draft");

        let review = repo
            .insert(room_id, UserId::random(), draft)
            .await
            .expect("fixture insert succeeds");

        assert_eq!(review.room_id, room_id);
        assert_eq!(review.rating, 5);
    }
}
