//! Session-backed authentication context.
//!
//! The encrypted session cookie carries exactly one claim: the id of the
//! logged-in user. [`SessionContext`] is the only way handlers touch it, so
//! the cookie layout stays private to this module. A missing or tampered id
//! degrades to "not logged in" (401), never to a panic or a 500.

use std::future::{Ready, ready};

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::domain::{Error, UserId};

const USER_ID_KEY: &str = "user_id";

/// Extractor giving handlers domain-level access to the session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Record the authenticated user in the session cookie.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop the session entirely, logging the user out.
    pub fn clear(&self) {
        self.0.purge();
    }

    /// The logged-in user's id, if any.
    ///
    /// A stored id that no longer parses as a UUID is treated as absent; the
    /// cookie is authenticated, so this only happens across incompatible
    /// deployments.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                tracing::warn!(%error, "discarding malformed user id in session cookie");
                Ok(None)
            }
        }
    }

    /// The logged-in user's id, or `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        ready(Session::from_request(req, payload).into_inner().map(Self))
    }
}
