//! Driving port for the authentication boundary.
//!
//! Authentication itself is deliberately thin: a display-name login that
//! find-or-creates the user. Everything else in the system only consumes the
//! resulting user id.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::{DisplayName, User, UserId};

/// Driving port for login and session-user lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Log in by display name, creating the user on first sight.
    async fn login(&self, display_name: DisplayName) -> Result<User, Error>;

    /// Resolve the user behind a session, failing with `unauthorized` when
    /// the id no longer exists.
    async fn current_user(&self, user_id: UserId) -> Result<User, Error>;
}
