//! Driving port for public room reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::rooms::Room;

/// Driving port for room read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsQuery: Send + Sync {
    /// Fetch a hydrated room, failing with `not_found` for unknown ids.
    async fn get_room(&self, room_id: Uuid) -> Result<Room, Error>;

    /// Read one page of rooms.
    async fn list_rooms(&self, page: PageRequest) -> Result<Paginated<Room>, Error>;
}
