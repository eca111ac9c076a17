//! Bookings: date-ranged reservations against a room.
//!
//! Ranges are half-open `[check_in, check_out)`, so back-to-back stays that
//! meet at a boundary date do not conflict.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;

/// Closed set of booking kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    Rooms,
    Experiences,
}

impl BookingKind {
    /// Stable wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Experiences => "experiences",
        }
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised kind strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking kind: {0}")]
pub struct UnknownBookingKind(pub String);

impl FromStr for BookingKind {
    type Err = UnknownBookingKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rooms" => Ok(Self::Rooms),
            "experiences" => Ok(Self::Experiences),
            other => Err(UnknownBookingKind(other.to_owned())),
        }
    }
}

/// Validation failures for booking input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
    #[error("check-in must be after {as_of}")]
    CheckInNotInFuture { as_of: NaiveDate },
    #[error("guest count must be at least one")]
    NoGuests,
}

/// A persisted booking. Bookings are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub room_id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub kind: BookingKind,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

impl Booking {
    /// Whether this booking's stay overlaps the half-open range
    /// `[check_in, check_out)`.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        ranges_overlap(self.check_in, self.check_out, check_in, check_out)
    }
}

/// Whether two half-open date ranges intersect.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Validated input for creating a room booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    room_id: Uuid,
    user_id: UserId,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
}

impl BookingDraft {
    /// Validate raw input into a draft.
    ///
    /// `as_of` is the caller's notion of today; check-in must fall strictly
    /// after it, so same-day bookings are rejected.
    pub fn new(
        room_id: Uuid,
        user_id: UserId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
        as_of: NaiveDate,
    ) -> Result<Self, BookingValidationError> {
        if check_out <= check_in {
            return Err(BookingValidationError::CheckOutNotAfterCheckIn);
        }
        if check_in <= as_of {
            return Err(BookingValidationError::CheckInNotInFuture { as_of });
        }
        if guests < 1 {
            return Err(BookingValidationError::NoGuests);
        }
        Ok(Self {
            room_id,
            user_id,
            check_in,
            check_out,
            guests,
        })
    }

    pub fn room_id(&self) -> Uuid {
        self.room_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn guests(&self) -> i32 {
        self.guests
    }
}
