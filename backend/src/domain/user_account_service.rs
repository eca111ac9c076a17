//! User account service backing the authentication boundary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::ports::{UserRepository, UserRepositoryError, UsersService};
use crate::domain::user::{DisplayName, User, UserId};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User account service implementing the users driving port.
#[derive(Clone)]
pub struct UserAccountService<U> {
    user_repo: Arc<U>,
}

impl<U> UserAccountService<U> {
    /// Create a new service with the user repository.
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UsersService for UserAccountService<U>
where
    U: UserRepository,
{
    async fn login(&self, display_name: DisplayName) -> Result<User, Error> {
        self.user_repo
            .find_or_create(display_name)
            .await
            .map_err(map_repository_error)
    }

    async fn current_user(&self, user_id: UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::unauthorized("session user no longer exists"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::MockUserRepository;

    #[rstest]
    #[tokio::test]
    async fn current_user_maps_missing_rows_to_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = UserAccountService::new(Arc::new(repo));

        let err = service
            .current_user(UserId::random())
            .await
            .expect_err("must be rejected");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[tokio::test]
    async fn login_returns_the_repository_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_or_create()
            .returning(|name| Ok(User::new(UserId::random(), name)));
        let service = UserAccountService::new(Arc::new(repo));

        let name = DisplayName::new("Ada").expect("valid name");
        let user = service.login(name.clone()).await.expect("login succeeds");

        assert_eq!(user.display_name(), &name);
    }
}
