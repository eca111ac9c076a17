//! Port for room persistence.
//!
//! `create` and `update` are transactional: the room row and its amenity
//! links commit together or not at all. An unresolved amenity id surfaces as
//! [`RoomRepositoryError::AmenityNotFound`] and must roll back the entire
//! write.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::rooms::{Room, RoomDraft, RoomPatch};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by room repository adapters.
    pub enum RoomRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "room repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "room repository query failed: {message}",
        /// A referenced amenity id does not exist; the write was rolled back.
        AmenityNotFound { id: Uuid } =>
            "amenity {id} does not exist",
    }
}

/// Port for writing and reading rooms together with their amenity links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a new room with its category and amenity links in one
    /// transaction. Returns the hydrated room.
    async fn create(
        &self,
        owner_id: UserId,
        draft: RoomDraft,
        category_id: Uuid,
        amenity_ids: Vec<Uuid>,
    ) -> Result<Room, RoomRepositoryError>;

    /// Apply a partial update in one transaction. `amenity_ids` of `Some`
    /// replaces the entire link set; `None` leaves it untouched. Returns the
    /// hydrated post-update room.
    async fn update(
        &self,
        room_id: Uuid,
        patch: RoomPatch,
        category_id: Option<Uuid>,
        amenity_ids: Option<Vec<Uuid>>,
    ) -> Result<Room, RoomRepositoryError>;

    /// Find a hydrated room by id.
    async fn find_by_id(&self, room_id: Uuid) -> Result<Option<Room>, RoomRepositoryError>;

    /// Read one page of rooms, newest first.
    async fn list(&self, page: PageRequest) -> Result<Paginated<Room>, RoomRepositoryError>;

    /// Delete a room. Links, bookings, reviews, and photos cascade.
    async fn delete(&self, room_id: Uuid) -> Result<(), RoomRepositoryError>;
}

/// Fixture implementation for tests that do not exercise room persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRoomRepository;

#[async_trait]
impl RoomRepository for FixtureRoomRepository {
    async fn create(
        &self,
        _owner_id: UserId,
        _draft: RoomDraft,
        _category_id: Uuid,
        _amenity_ids: Vec<Uuid>,
    ) -> Result<Room, RoomRepositoryError> {
        Err(RoomRepositoryError::query("fixture repository is read-only"))
    }

    async fn update(
        &self,
        _room_id: Uuid,
        _patch: RoomPatch,
        _category_id: Option<Uuid>,
        _amenity_ids: Option<Vec<Uuid>>,
    ) -> Result<Room, RoomRepositoryError> {
        Err(RoomRepositoryError::query("fixture repository is read-only"))
    }

    async fn find_by_id(&self, _room_id: Uuid) -> Result<Option<Room>, RoomRepositoryError> {
        Ok(None)
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<Room>, RoomRepositoryError> {
        Ok(Paginated::new(Vec::new(), page, 0))
    }

    async fn delete(&self, _room_id: Uuid) -> Result<(), RoomRepositoryError> {
        Ok(())
    }
}
