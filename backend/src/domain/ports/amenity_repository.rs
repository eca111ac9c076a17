//! Port for amenity persistence.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::amenities::{Amenity, AmenityDraft, AmenityPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by amenity repository adapters.
    pub enum AmenityRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "amenity repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "amenity repository query failed: {message}",
    }
}

/// Port for amenity CRUD. Missing rows surface as `None`/`false`, not errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    /// Persist a new amenity.
    async fn insert(&self, draft: AmenityDraft) -> Result<Amenity, AmenityRepositoryError>;

    /// Find an amenity by id.
    async fn find_by_id(&self, amenity_id: Uuid)
        -> Result<Option<Amenity>, AmenityRepositoryError>;

    /// Read one page of amenities, ordered by name.
    async fn list(&self, page: PageRequest) -> Result<Paginated<Amenity>, AmenityRepositoryError>;

    /// Apply a partial update, returning the updated amenity or `None` when
    /// the id is unknown.
    async fn update(
        &self,
        amenity_id: Uuid,
        patch: AmenityPatch,
    ) -> Result<Option<Amenity>, AmenityRepositoryError>;

    /// Delete an amenity, reporting whether a row existed. Room links
    /// cascade.
    async fn delete(&self, amenity_id: Uuid) -> Result<bool, AmenityRepositoryError>;
}

/// Fixture implementation for tests that do not exercise amenities.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAmenityRepository;

#[async_trait]
impl AmenityRepository for FixtureAmenityRepository {
    async fn insert(&self, draft: AmenityDraft) -> Result<Amenity, AmenityRepositoryError> {
        Ok(Amenity {
            id: Uuid::new_v4(),
            name: draft.name().to_owned(),
            description: draft.description().map(str::to_owned),
        })
    }

    async fn find_by_id(
        &self,
        _amenity_id: Uuid,
    ) -> Result<Option<Amenity>, AmenityRepositoryError> {
        Ok(None)
    }

    async fn list(&self, page: PageRequest) -> Result<Paginated<Amenity>, AmenityRepositoryError> {
        Ok(Paginated::new(Vec::new(), page, 0))
    }

    async fn update(
        &self,
        _amenity_id: Uuid,
        _patch: AmenityPatch,
    ) -> Result<Option<Amenity>, AmenityRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _amenity_id: Uuid) -> Result<bool, AmenityRepositoryError> {
        Ok(false)
    }
}
