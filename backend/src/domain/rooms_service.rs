//! Room domain services.
//!
//! The command service orchestrates the full room write path: it resolves
//! and validates the category, deduplicates the requested amenity set, and
//! delegates to the repository, whose create/update are transactional. The
//! query service serves the public read surface.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use serde_json::json;
use uuid::Uuid;

use crate::domain::categories::{Category, CategoryKind};
use crate::domain::error::Error;
use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, CreateRoomRequest, RoomRepository,
    RoomRepositoryError, RoomsCommand, RoomsQuery, UpdateRoomRequest,
};
use crate::domain::rooms::Room;
use crate::domain::user::UserId;

fn map_room_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("room repository unavailable: {message}"))
        }
        RoomRepositoryError::Query { message } => {
            Error::internal(format!("room repository error: {message}"))
        }
        RoomRepositoryError::AmenityNotFound { id } => {
            Error::invalid_request("amenity not found").with_details(json!({ "amenityId": id }))
        }
    }
}

fn map_category_repository_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

/// Resolve and validate the category attached to a room write.
///
/// A missing id, an unknown id, and a non-room kind are all client errors;
/// the kind check keeps experience categories off lodging listings.
async fn resolve_room_category<C>(
    categories: &C,
    category_id: Option<Uuid>,
) -> Result<Category, Error>
where
    C: CategoryRepository + ?Sized,
{
    let category_id = category_id.ok_or_else(|| Error::invalid_request("category is required"))?;
    let category = categories
        .find_by_id(category_id)
        .await
        .map_err(map_category_repository_error)?
        .ok_or_else(|| {
            Error::invalid_request("category not found")
                .with_details(json!({ "categoryId": category_id }))
        })?;
    if category.kind != CategoryKind::Rooms {
        return Err(
            Error::invalid_request("category kind must be rooms").with_details(json!({
                "categoryId": category_id,
                "kind": category.kind,
            })),
        );
    }
    Ok(category)
}

/// Drop duplicate amenity ids while keeping first-seen order.
fn dedup_amenity_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Room service implementing the command driving port.
#[derive(Clone)]
pub struct RoomsCommandService<R, C> {
    room_repo: Arc<R>,
    category_repo: Arc<C>,
}

impl<R, C> RoomsCommandService<R, C> {
    /// Create a new command service with its repositories.
    pub fn new(room_repo: Arc<R>, category_repo: Arc<C>) -> Self {
        Self {
            room_repo,
            category_repo,
        }
    }
}

impl<R, C> RoomsCommandService<R, C>
where
    R: RoomRepository,
{
    async fn find_owned_room(&self, room_id: Uuid, requester: &UserId) -> Result<Room, Error> {
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await
            .map_err(map_room_repository_error)?
            .ok_or_else(|| Error::not_found(format!("room {room_id} not found")))?;
        room.ensure_owned_by(requester)?;
        Ok(room)
    }
}

#[async_trait]
impl<R, C> RoomsCommand for RoomsCommandService<R, C>
where
    R: RoomRepository,
    C: CategoryRepository,
{
    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, Error> {
        let category =
            resolve_room_category(self.category_repo.as_ref(), request.category_id).await?;
        let amenity_ids = dedup_amenity_ids(request.amenity_ids);

        self.room_repo
            .create(request.owner_id, request.draft, category.id, amenity_ids)
            .await
            .map_err(map_room_repository_error)
    }

    async fn update_room(&self, request: UpdateRoomRequest) -> Result<Room, Error> {
        self.find_owned_room(request.room_id, &request.requester)
            .await?;

        let category_id = match request.category_id {
            Some(id) => Some(
                resolve_room_category(self.category_repo.as_ref(), Some(id))
                    .await?
                    .id,
            ),
            None => None,
        };
        let amenity_ids = request.amenity_ids.map(dedup_amenity_ids);

        self.room_repo
            .update(request.room_id, request.patch, category_id, amenity_ids)
            .await
            .map_err(map_room_repository_error)
    }

    async fn delete_room(&self, room_id: Uuid, requester: UserId) -> Result<(), Error> {
        self.find_owned_room(room_id, &requester).await?;
        self.room_repo
            .delete(room_id)
            .await
            .map_err(map_room_repository_error)
    }
}

/// Room service implementing the query driving port.
#[derive(Clone)]
pub struct RoomsQueryService<R> {
    room_repo: Arc<R>,
}

impl<R> RoomsQueryService<R> {
    /// Create a new query service with the room repository.
    pub fn new(room_repo: Arc<R>) -> Self {
        Self { room_repo }
    }
}

#[async_trait]
impl<R> RoomsQuery for RoomsQueryService<R>
where
    R: RoomRepository,
{
    async fn get_room(&self, room_id: Uuid) -> Result<Room, Error> {
        self.room_repo
            .find_by_id(room_id)
            .await
            .map_err(map_room_repository_error)?
            .ok_or_else(|| Error::not_found(format!("room {room_id} not found")))
    }

    async fn list_rooms(&self, page: PageRequest) -> Result<Paginated<Room>, Error> {
        self.room_repo
            .list(page)
            .await
            .map_err(map_room_repository_error)
    }
}

#[cfg(test)]
#[path = "rooms_service_tests.rs"]
mod tests;
