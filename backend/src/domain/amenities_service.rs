//! Amenity domain services.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use uuid::Uuid;

use crate::domain::amenities::{Amenity, AmenityDraft, AmenityPatch};
use crate::domain::error::Error;
use crate::domain::ports::{
    AmenitiesCommand, AmenitiesQuery, AmenityRepository, AmenityRepositoryError,
};

fn map_repository_error(error: AmenityRepositoryError) -> Error {
    match error {
        AmenityRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("amenity repository unavailable: {message}"))
        }
        AmenityRepositoryError::Query { message } => {
            Error::internal(format!("amenity repository error: {message}"))
        }
    }
}

/// Amenity service implementing the command driving port.
#[derive(Clone)]
pub struct AmenitiesCommandService<A> {
    amenity_repo: Arc<A>,
}

impl<A> AmenitiesCommandService<A> {
    /// Create a new command service with the amenity repository.
    pub fn new(amenity_repo: Arc<A>) -> Self {
        Self { amenity_repo }
    }
}

#[async_trait]
impl<A> AmenitiesCommand for AmenitiesCommandService<A>
where
    A: AmenityRepository,
{
    async fn create_amenity(&self, draft: AmenityDraft) -> Result<Amenity, Error> {
        self.amenity_repo
            .insert(draft)
            .await
            .map_err(map_repository_error)
    }

    async fn update_amenity(
        &self,
        amenity_id: Uuid,
        patch: AmenityPatch,
    ) -> Result<Amenity, Error> {
        self.amenity_repo
            .update(amenity_id, patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("amenity {amenity_id} not found")))
    }

    async fn delete_amenity(&self, amenity_id: Uuid) -> Result<(), Error> {
        let deleted = self
            .amenity_repo
            .delete(amenity_id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(format!("amenity {amenity_id} not found")))
        }
    }
}

/// Amenity service implementing the query driving port.
#[derive(Clone)]
pub struct AmenitiesQueryService<A> {
    amenity_repo: Arc<A>,
}

impl<A> AmenitiesQueryService<A> {
    /// Create a new query service with the amenity repository.
    pub fn new(amenity_repo: Arc<A>) -> Self {
        Self { amenity_repo }
    }
}

#[async_trait]
impl<A> AmenitiesQuery for AmenitiesQueryService<A>
where
    A: AmenityRepository,
{
    async fn get_amenity(&self, amenity_id: Uuid) -> Result<Amenity, Error> {
        self.amenity_repo
            .find_by_id(amenity_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("amenity {amenity_id} not found")))
    }

    async fn list_amenities(&self, page: PageRequest) -> Result<Paginated<Amenity>, Error> {
        self.amenity_repo
            .list(page)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::MockAmenityRepository;

    #[rstest]
    #[tokio::test]
    async fn update_maps_missing_rows_to_not_found() {
        let mut repo = MockAmenityRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));
        let service = AmenitiesCommandService::new(Arc::new(repo));

        let err = service
            .update_amenity(Uuid::new_v4(), AmenityPatch::default())
            .await
            .expect_err("must be rejected");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_maps_missing_rows_to_not_found() {
        let mut repo = MockAmenityRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = AmenitiesCommandService::new(Arc::new(repo));

        let err = service
            .delete_amenity(Uuid::new_v4())
            .await
            .expect_err("must be rejected");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn get_maps_connection_failures_to_service_unavailable() {
        let mut repo = MockAmenityRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AmenityRepositoryError::connection("pool exhausted")));
        let service = AmenitiesQueryService::new(Arc::new(repo));

        let err = service
            .get_amenity(Uuid::new_v4())
            .await
            .expect_err("must be rejected");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
