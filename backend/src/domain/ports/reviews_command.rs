//! Driving port for review creation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::reviews::{Review, ReviewDraft};
use crate::domain::user::UserId;

/// Driving port for review write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsCommand: Send + Sync {
    /// Record a review against a room. Fails with `not_found` for an unknown
    /// room.
    async fn create_review(
        &self,
        room_id: Uuid,
        requester: UserId,
        draft: ReviewDraft,
    ) -> Result<Review, Error>;
}
