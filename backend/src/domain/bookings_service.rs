//! Booking domain services.
//!
//! Availability reads and booking creation both verify the room exists
//! first, so an unknown room is a 404 rather than an empty list or a
//! dangling reservation. The overlap guard itself lives in the repository,
//! inside the insert transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::bookings::{Booking, BookingDraft};
use crate::domain::error::Error;
use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, BookingsCommand, BookingsQuery,
    CreateBookingRequest, RoomRepository, RoomRepositoryError,
};

fn map_booking_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("booking repository unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking repository error: {message}"))
        }
        BookingRepositoryError::Overlap => {
            Error::conflict("booking dates overlap an existing stay")
        }
    }
}

fn map_room_repository_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("room repository unavailable: {message}"))
        }
        other => Error::internal(format!("room repository error: {other}")),
    }
}

async fn ensure_room_exists<R>(rooms: &R, room_id: Uuid) -> Result<(), Error>
where
    R: RoomRepository + ?Sized,
{
    rooms
        .find_by_id(room_id)
        .await
        .map_err(map_room_repository_error)?
        .ok_or_else(|| Error::not_found(format!("room {room_id} not found")))?;
    Ok(())
}

/// Booking service implementing the command driving port.
#[derive(Clone)]
pub struct BookingsCommandService<B, R> {
    booking_repo: Arc<B>,
    room_repo: Arc<R>,
}

impl<B, R> BookingsCommandService<B, R> {
    /// Create a new command service with its repositories.
    pub fn new(booking_repo: Arc<B>, room_repo: Arc<R>) -> Self {
        Self {
            booking_repo,
            room_repo,
        }
    }
}

#[async_trait]
impl<B, R> BookingsCommand for BookingsCommandService<B, R>
where
    B: BookingRepository,
    R: RoomRepository,
{
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error> {
        ensure_room_exists(self.room_repo.as_ref(), request.room_id).await?;

        let draft = BookingDraft::new(
            request.room_id,
            request.requester,
            request.check_in,
            request.check_out,
            request.guests,
            request.as_of,
        )
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        self.booking_repo
            .insert(draft)
            .await
            .map_err(map_booking_repository_error)
    }
}

/// Booking service implementing the query driving port.
#[derive(Clone)]
pub struct BookingsQueryService<B, R> {
    booking_repo: Arc<B>,
    room_repo: Arc<R>,
}

impl<B, R> BookingsQueryService<B, R> {
    /// Create a new query service with its repositories.
    pub fn new(booking_repo: Arc<B>, room_repo: Arc<R>) -> Self {
        Self {
            booking_repo,
            room_repo,
        }
    }
}

#[async_trait]
impl<B, R> BookingsQuery for BookingsQueryService<B, R>
where
    B: BookingRepository,
    R: RoomRepository,
{
    async fn list_upcoming(
        &self,
        room_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<Vec<Booking>, Error> {
        ensure_room_exists(self.room_repo.as_ref(), room_id).await?;
        self.booking_repo
            .list_upcoming(room_id, as_of)
            .await
            .map_err(map_booking_repository_error)
    }
}
