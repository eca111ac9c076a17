//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.
//!
//! The insert transaction locks the room row before counting conflicting
//! stays, so of two concurrent requests for intersecting ranges exactly one
//! commits. Without the lock, READ COMMITTED would let both counts miss the
//! other's uncommitted insert.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingDraft, BookingKind, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookingRow, NewBookingRow};
use super::pool::DbPool;
use super::schema::{bookings, rooms};

/// Diesel-backed implementation of the booking repository port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failure inside the booking insert transaction.
enum BookingTxError {
    Diesel(diesel::result::Error),
    Overlap,
}

impl From<diesel::result::Error> for BookingTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn map_tx_error(error: BookingTxError) -> BookingRepositoryError {
    match error {
        BookingTxError::Diesel(err) => map_query_error(err),
        BookingTxError::Overlap => BookingRepositoryError::overlap(),
    }
}

fn map_query_error(error: diesel::result::Error) -> BookingRepositoryError {
    map_diesel_error(
        error,
        BookingRepositoryError::query,
        BookingRepositoryError::connection,
    )
}

fn row_to_booking(row: BookingRow) -> Result<Booking, BookingRepositoryError> {
    let kind = row.kind.parse().map_err(|_| {
        BookingRepositoryError::query("unknown stored booking kind")
    })?;
    Ok(Booking {
        id: row.id,
        room_id: row.room_id,
        user_id: UserId::from_uuid(row.user_id),
        kind,
        check_in: row.check_in,
        check_out: row.check_out,
        guests: row.guests,
    })
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn insert(&self, draft: BookingDraft) -> Result<Booking, BookingRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, BookingRepositoryError::connection))?;

        let row = conn
            .transaction::<BookingRow, BookingTxError, _>(|conn| {
                let draft = &draft;
                async move {
                    // Serialise booking writes per room; the overlap count
                    // only holds while no concurrent insert is in flight.
                    rooms::table
                        .filter(rooms::id.eq(draft.room_id()))
                        .select(rooms::id)
                        .for_update()
                        .load::<Uuid>(conn)
                        .await?;

                    // Half-open ranges intersect when each starts before the
                    // other ends.
                    let conflicts: i64 = bookings::table
                        .filter(bookings::room_id.eq(draft.room_id()))
                        .filter(bookings::kind.eq(BookingKind::Rooms.as_str()))
                        .filter(bookings::check_in.lt(draft.check_out()))
                        .filter(bookings::check_out.gt(draft.check_in()))
                        .count()
                        .get_result(conn)
                        .await?;
                    if conflicts > 0 {
                        return Err(BookingTxError::Overlap);
                    }

                    let new_row = NewBookingRow {
                        id: Uuid::new_v4(),
                        room_id: draft.room_id(),
                        user_id: *draft.user_id().as_uuid(),
                        kind: BookingKind::Rooms.as_str(),
                        check_in: draft.check_in(),
                        check_out: draft.check_out(),
                        guests: draft.guests(),
                    };
                    let row = diesel::insert_into(bookings::table)
                        .values(&new_row)
                        .returning(BookingRow::as_returning())
                        .get_result(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_tx_error)?;

        row_to_booking(row)
    }

    async fn list_upcoming(
        &self,
        room_id: Uuid,
        as_of: NaiveDate,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, BookingRepositoryError::connection))?;

        let rows: Vec<BookingRow> = bookings::table
            .filter(bookings::room_id.eq(room_id))
            .filter(bookings::kind.eq(BookingKind::Rooms.as_str()))
            .filter(bookings::check_in.gt(as_of))
            .order(bookings::check_in.asc())
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;

        rows.into_iter().map(row_to_booking).collect()
    }
}
