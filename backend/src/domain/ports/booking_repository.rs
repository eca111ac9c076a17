//! Port for booking persistence and availability reads.
//!
//! `insert` owns the overlap guard: the conflict check and the row insert
//! share one transaction, so of two concurrent overlapping requests exactly
//! one commits and the other observes [`BookingRepositoryError::Overlap`].

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::bookings::{Booking, BookingDraft};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
        /// The requested stay overlaps an existing booking for the room.
        Overlap =>
            "booking dates overlap an existing stay",
    }
}

/// Port for writing bookings and reading upcoming stays.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a booking, failing with [`BookingRepositoryError::Overlap`]
    /// when the stay intersects an existing one for the same room.
    async fn insert(&self, draft: BookingDraft) -> Result<Booking, BookingRepositoryError>;

    /// Room-kind bookings with `check_in` strictly after `as_of`, ascending
    /// by check-in date.
    async fn list_upcoming(
        &self,
        room_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<Vec<Booking>, BookingRepositoryError>;
}

/// Fixture implementation for tests that do not exercise bookings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingRepository;

#[async_trait]
impl BookingRepository for FixtureBookingRepository {
    async fn insert(&self, _draft: BookingDraft) -> Result<Booking, BookingRepositoryError> {
        Err(BookingRepositoryError::query(
            "fixture repository is read-only",
        ))
    }

    async fn list_upcoming(
        &self,
        _room_id: Uuid,
        _as_of: NaiveDate,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(Vec::new())
    }
}
