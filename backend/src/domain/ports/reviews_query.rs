//! Driving port for public review reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::reviews::Review;

/// Driving port for review read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsQuery: Send + Sync {
    /// Read one page of reviews for a room. Fails with `not_found` for an
    /// unknown room.
    async fn list_reviews(
        &self,
        room_id: Uuid,
        page: PageRequest,
    ) -> Result<Paginated<Review>, Error>;
}
