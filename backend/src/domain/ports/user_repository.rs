//! Port for user persistence at the authentication boundary.

use async_trait::async_trait;

use crate::domain::user::{DisplayName, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// Port for login-time user lookup and creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the user with this display name, creating one if absent.
    async fn find_or_create(&self, display_name: DisplayName)
        -> Result<User, UserRepositoryError>;

    /// Find a user by id.
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation backing the development-mode login flow.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_or_create(
        &self,
        display_name: DisplayName,
    ) -> Result<User, UserRepositoryError> {
        Ok(User::new(UserId::random(), display_name))
    }

    async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_login_mints_a_fresh_user() {
        let repo = FixtureUserRepository;
        let name = DisplayName::new("Ada").expect("valid name");

        let user = repo
            .find_or_create(name.clone())
            .await
            .expect("fixture login succeeds");

        assert_eq!(user.display_name(), &name);
    }
}
