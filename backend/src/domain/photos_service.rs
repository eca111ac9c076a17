//! Photo domain service.
//!
//! Photo creation is the one nested write gated on ownership rather than
//! mere authentication.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::photos::{Photo, PhotoDraft};
use crate::domain::ports::{
    PhotoRepository, PhotoRepositoryError, PhotosCommand, RoomRepository, RoomRepositoryError,
};
use crate::domain::user::UserId;

fn map_photo_repository_error(error: PhotoRepositoryError) -> Error {
    match error {
        PhotoRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("photo repository unavailable: {message}"))
        }
        PhotoRepositoryError::Query { message } => {
            Error::internal(format!("photo repository error: {message}"))
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

/// Photo service implementing the command driving port.
#[derive(Clone)]
pub struct PhotosCommandService<P, R> {
    photo_repo: Arc<P>,
    room_repo: Arc<R>,
}

impl<P, R> PhotosCommandService<P, R> {
    /// Create a new command service with its repositories.
    pub fn new(photo_repo: Arc<P>, room_repo: Arc<R>) -> Self {
        Self {
            photo_repo,
            room_repo,
        }
    }
}

#[async_trait]
impl<P, R> PhotosCommand for PhotosCommandService<P, R>
where
    P: PhotoRepository,
    R: RoomRepository,
{
    async fn create_photo(
        &self,
        room_id: Uuid,
        requester: UserId,
        draft: PhotoDraft,
    ) -> Result<Photo, Error> {
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await
            .map_err(map_room_repository_error)?
            .ok_or_else(|| Error::not_found(format!("room {room_id} not found")))?;
        room.ensure_owned_by(&requester)?;

        self.photo_repo
            .insert(room_id, draft)
            .await
            .map_err(map_photo_repository_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::categories::{Category, CategoryKind};
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::{MockPhotoRepository, MockRoomRepository};
    use crate::domain::rooms::{Room, RoomKind};

    fn stored_room(owner: UserId) -> Room {
        Room {
            id: Uuid::new_v4(),
            owner_id: owner,
            name: "Seaside loft".into(),
            country: "PT".into(),
            city: "Lisbon".into(),
            price: 120,
            rooms: 2,
            toilets: 1,
            description: "Bright loft near the water".into(),
            address: "Rua do Mar 12".into(),
            pet_friendly: true,
            kind: RoomKind::EntirePlace,
            category: Category {
                id: Uuid::new_v4(),
                name: "Tiny homes".into(),
                kind: CategoryKind::Rooms,
            },
            amenities: Vec::new(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_non_owners() {
        let room = stored_room(UserId::random());
        let room_id = room.id;
        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_find_by_id()
            .returning(move |_| Ok(Some(room.clone())));
        let mut photos = MockPhotoRepository::new();
        photos.expect_insert().never();
        let service = PhotosCommandService::new(Arc::new(photos), Arc::new(rooms));

        let draft = PhotoDraft::new("https://cdn.example/p.jpg", None).expect("valid draft");
        let err = service
            .create_photo(room_id, UserId::random(), draft)
            .await
            .expect_err("must be rejected");

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[rstest]
    #[tokio::test]
    async fn create_records_owner_photos() {
        let owner = UserId::random();
        let room = stored_room(owner.clone());
        let room_id = room.id;
        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_find_by_id()
            .returning(move |_| Ok(Some(room.clone())));
        let mut photos = MockPhotoRepository::new();
        photos.expect_insert().returning(|room_id, draft| {
            Ok(Photo {
                id: Uuid::new_v4(),
                room_id,
                file: draft.file().to_owned(),
                description: draft.description().map(str::to_owned),
            })
        });
        let service = PhotosCommandService::new(Arc::new(photos), Arc::new(rooms));

        let draft = PhotoDraft::new("https://cdn.example/p.jpg", Some("terrace".into()))
            .expect("valid draft");
        let photo = service
            .create_photo(room_id, owner, draft)
            .await
            .expect("create succeeds");

        assert_eq!(photo.room_id, room_id);
        assert_eq!(photo.description.as_deref(), Some("terrace"));
    }
}
