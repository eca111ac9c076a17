//! Port for photo metadata persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::photos::{Photo, PhotoDraft};

use super::define_port_error;

define_port_error! {
    /// Errors raised by photo repository adapters.
    pub enum PhotoRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "photo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "photo repository query failed: {message}",
    }
}

/// Port for recording photo metadata against a room.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Persist a photo record.
    async fn insert(&self, room_id: Uuid, draft: PhotoDraft)
        -> Result<Photo, PhotoRepositoryError>;
}

/// Fixture implementation for tests that do not exercise photos.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePhotoRepository;

#[async_trait]
impl PhotoRepository for FixturePhotoRepository {
    async fn insert(
        &self,
        room_id: Uuid,
        draft: PhotoDraft,
    ) -> Result<Photo, PhotoRepositoryError> {
        Ok(Photo {
            id: Uuid::new_v4(),
            room_id,
            file: draft.file().to_owned(),
            description: draft.description().map(str::to_owned),
        })
    }
}
