//! PostgreSQL-backed `CategoryRepository` implementation using Diesel ORM.
//!
//! Categories are reference data seeded by migrations; this adapter only
//! reads.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Category;
use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::CategoryRow;
use super::pool::DbPool;
use super::schema::categories;

/// Diesel-backed implementation of the category repository port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_category(row: CategoryRow) -> Result<Category, CategoryRepositoryError> {
    let kind = row
        .kind
        .parse()
        .map_err(|_| CategoryRepositoryError::query("unknown stored category kind"))?;
    Ok(Category {
        id: row.id,
        name: row.name,
        kind,
    })
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CategoryRepositoryError::connection))?;

        let row: Option<CategoryRow> = categories::table
            .filter(categories::id.eq(category_id))
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_diesel_error(
                    err,
                    CategoryRepositoryError::query,
                    CategoryRepositoryError::connection,
                )
            })?;

        row.map(row_to_category).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion.

    use chrono::Utc;
    use rstest::rstest;

    use crate::domain::CategoryKind;

    use super::*;

    fn category_row(kind: &str) -> CategoryRow {
        let now = Utc::now();
        CategoryRow {
            id: Uuid::new_v4(),
            name: "Tiny homes".into(),
            kind: kind.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    fn rows_convert_to_domain_categories() {
        let category = row_to_category(category_row("rooms")).expect("valid row converts");
        assert_eq!(category.kind, CategoryKind::Rooms);
        assert_eq!(category.name, "Tiny homes");
    }

    #[rstest]
    fn rows_with_unknown_kinds_are_rejected() {
        let result = row_to_category(category_row("boats"));
        assert!(matches!(result, Err(CategoryRepositoryError::Query { .. })));
    }
}
