//! Driving port for amenity mutations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::amenities::{Amenity, AmenityDraft, AmenityPatch};
use crate::domain::error::Error;

/// Driving port for amenity write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenitiesCommand: Send + Sync {
    /// Create an amenity.
    async fn create_amenity(&self, draft: AmenityDraft) -> Result<Amenity, Error>;

    /// Apply a partial update, failing with `not_found` for unknown ids.
    async fn update_amenity(
        &self,
        amenity_id: Uuid,
        patch: AmenityPatch,
    ) -> Result<Amenity, Error>;

    /// Delete an amenity, failing with `not_found` for unknown ids.
    async fn delete_amenity(&self, amenity_id: Uuid) -> Result<(), Error>;
}
