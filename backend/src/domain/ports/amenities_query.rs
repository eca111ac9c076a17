//! Driving port for public amenity reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::amenities::Amenity;
use crate::domain::error::Error;

/// Driving port for amenity read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenitiesQuery: Send + Sync {
    /// Fetch an amenity, failing with `not_found` for unknown ids.
    async fn get_amenity(&self, amenity_id: Uuid) -> Result<Amenity, Error>;

    /// Read one page of amenities.
    async fn list_amenities(&self, page: PageRequest) -> Result<Paginated<Amenity>, Error>;
}
