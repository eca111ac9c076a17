//! Port for category reference-data reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::categories::Category;

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "category repository query failed: {message}",
    }
}

/// Read-only port over the category catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by id.
    async fn find_by_id(&self, category_id: Uuid)
        -> Result<Option<Category>, CategoryRepositoryError>;
}

/// Fixture implementation for tests that do not exercise categories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn find_by_id(
        &self,
        _category_id: Uuid,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(None)
    }
}
