//! Booking HTTP handlers.
//!
//! ```text
//! GET  /api/v1/rooms/{room_id}/bookings
//! POST /api/v1/rooms/{room_id}/bookings
//! ```
//!
//! "Today" is the server's local calendar date; it is resolved here and
//! passed explicitly through the ports so the services stay clock-free.

use actix_web::{get, post, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Booking;
use crate::domain::ports::CreateBookingRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_date, parse_uuid};

/// Request payload for booking a stay.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingBody {
    #[schema(format = "date", example = "2026-09-10")]
    pub check_in: String,
    #[schema(format = "date", example = "2026-09-14")]
    pub check_out: String,
    #[schema(example = 2)]
    pub guests: Option<i32>,
}

/// List upcoming bookings for a room.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/bookings",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "Upcoming bookings, ascending by check-in", body = Vec<Booking>),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listRoomBookings"
)]
#[get("/rooms/{room_id}/bookings")]
pub async fn list_room_bookings(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Booking>>> {
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let as_of = Local::now().date_naive();
    let bookings = state.bookings_query.list_upcoming(room_id, as_of).await?;
    Ok(web::Json(bookings))
}

/// Book a stay in a room for the authenticated user.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/bookings",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    request_body = CreateBookingBody,
    responses(
        (status = 200, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema),
        (status = 409, description = "Dates overlap an existing booking", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createRoomBooking",
    security(("SessionCookie" = []))
)]
#[post("/rooms/{room_id}/bookings")]
pub async fn create_room_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<CreateBookingBody>,
) -> ApiResult<web::Json<Booking>> {
    let requester = session.require_user_id()?;
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let body = payload.into_inner();
    let check_in = parse_date(body.check_in, FieldName::new("checkIn"))?;
    let check_out = parse_date(body.check_out, FieldName::new("checkOut"))?;

    let booking = state
        .bookings
        .create_booking(CreateBookingRequest {
            room_id,
            requester,
            check_in,
            check_out,
            guests: body.guests.unwrap_or(1),
            as_of: Local::now().date_naive(),
        })
        .await?;

    Ok(web::Json(booking))
}
