//! Driving port for booking availability reads.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::bookings::Booking;
use crate::domain::error::Error;

/// Driving port for booking read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsQuery: Send + Sync {
    /// Upcoming room-kind bookings for a room, ascending by check-in date.
    /// Fails with `not_found` for an unknown room.
    async fn list_upcoming(&self, room_id: Uuid, as_of: NaiveDate)
        -> Result<Vec<Booking>, Error>;
}
