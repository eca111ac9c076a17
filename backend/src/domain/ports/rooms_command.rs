//! Driving port for room mutations.
//!
//! Implementations orchestrate category validation, ownership checks, and
//! the transactional repository write; callers receive the hydrated room as
//! it stands after the whole operation committed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::rooms::{Room, RoomDraft, RoomPatch};
use crate::domain::user::UserId;

/// Request to create a room.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoomRequest {
    pub owner_id: UserId,
    pub draft: RoomDraft,
    /// Required; absent values fail validation in the implementation so the
    /// caller sees a uniform error shape.
    pub category_id: Option<Uuid>,
    pub amenity_ids: Vec<Uuid>,
}

/// Request to partially update a room.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRoomRequest {
    pub room_id: Uuid,
    pub requester: UserId,
    pub patch: RoomPatch,
    /// `Some` re-validates and swaps the category.
    pub category_id: Option<Uuid>,
    /// `Some` replaces the entire amenity set; `None` leaves it untouched.
    pub amenity_ids: Option<Vec<Uuid>>,
}

/// Driving port for room write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomsCommand: Send + Sync {
    /// Create a room and return it hydrated with category and amenities.
    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, Error>;

    /// Apply a partial update, enforcing ownership, and return the hydrated
    /// post-update room.
    async fn update_room(&self, request: UpdateRoomRequest) -> Result<Room, Error>;

    /// Delete a room, enforcing ownership. Nested resources cascade.
    async fn delete_room(&self, room_id: Uuid, requester: UserId) -> Result<(), Error>;
}
