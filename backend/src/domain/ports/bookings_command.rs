//! Driving port for booking creation.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::bookings::Booking;
use crate::domain::error::Error;
use crate::domain::user::UserId;

/// Request to book a stay in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    pub room_id: Uuid,
    pub requester: UserId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    /// The caller's calendar date; check-in must fall strictly after it.
    pub as_of: NaiveDate,
}

/// Driving port for booking write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingsCommand: Send + Sync {
    /// Create a booking. Fails with `not_found` for an unknown room,
    /// `invalid_request` for bad dates or guest counts, and `conflict` when
    /// the stay overlaps an existing booking.
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error>;
}
