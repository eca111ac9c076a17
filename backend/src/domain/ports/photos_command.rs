//! Driving port for photo metadata creation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::photos::{Photo, PhotoDraft};
use crate::domain::user::UserId;

/// Driving port for photo write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotosCommand: Send + Sync {
    /// Record a photo against a room. Only the room owner may do this;
    /// anyone else receives `forbidden`.
    async fn create_photo(
        &self,
        room_id: Uuid,
        requester: UserId,
        draft: PhotoDraft,
    ) -> Result<Photo, Error>;
}
