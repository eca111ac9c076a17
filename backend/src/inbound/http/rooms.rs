//! Room HTTP handlers.
//!
//! ```text
//! GET    /api/v1/rooms
//! POST   /api/v1/rooms
//! GET    /api/v1/rooms/{room_id}
//! PUT    /api/v1/rooms/{room_id}
//! DELETE /api/v1/rooms/{room_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateRoomRequest, UpdateRoomRequest};
use crate::domain::{
    Error, Room, RoomDraft, RoomFields, RoomKind, RoomPatch, RoomPatchFields,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, PageQuery, missing_field_error, parse_choice, parse_optional_uuid, parse_uuid,
    parse_uuid_list,
};

const PAGE_SIZE: u32 = 20;
const KIND_CHOICES: &str = "entire_place, private_room, shared_room";

/// Request payload for creating a room.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBody {
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    #[schema(example = "entire_place")]
    pub kind: String,
    #[schema(format = "uuid")]
    pub category: Option<String>,
    #[schema(value_type = Option<Vec<uuid::Uuid>>)]
    pub amenities: Option<Vec<String>>,
}

/// Request payload for partially updating a room.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomBody {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<i32>,
    pub rooms: Option<i32>,
    pub toilets: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<String>,
    #[schema(format = "uuid")]
    pub category: Option<String>,
    /// `Some` replaces the entire amenity set.
    #[schema(value_type = Option<Vec<uuid::Uuid>>)]
    pub amenities: Option<Vec<String>>,
}

fn parse_create_body(
    body: CreateRoomBody,
) -> Result<(RoomDraft, uuid::Uuid, Vec<uuid::Uuid>), Error> {
    let kind = parse_choice::<RoomKind>(body.kind, FieldName::new("kind"), KIND_CHOICES)?;
    let draft = RoomDraft::new(RoomFields {
        name: body.name,
        country: body.country,
        city: body.city,
        price: body.price,
        rooms: body.rooms,
        toilets: body.toilets,
        description: body.description,
        address: body.address,
        pet_friendly: body.pet_friendly,
        kind,
    })
    .map_err(|err| Error::invalid_request(err.to_string()))?;
    let category = body
        .category
        .ok_or_else(|| missing_field_error(FieldName::new("category")))?;
    let category = parse_uuid(category, FieldName::new("category"))?;
    let amenities = parse_uuid_list(
        body.amenities.unwrap_or_default(),
        FieldName::new("amenities"),
    )?;
    Ok((draft, category, amenities))
}

fn parse_update_body(
    body: UpdateRoomBody,
) -> Result<(RoomPatch, Option<uuid::Uuid>, Option<Vec<uuid::Uuid>>), Error> {
    let kind = body
        .kind
        .map(|raw| parse_choice::<RoomKind>(raw, FieldName::new("kind"), KIND_CHOICES))
        .transpose()?;
    let patch = RoomPatch::new(RoomPatchFields {
        name: body.name,
        country: body.country,
        city: body.city,
        price: body.price,
        rooms: body.rooms,
        toilets: body.toilets,
        description: body.description,
        address: body.address,
        pet_friendly: body.pet_friendly,
        kind,
    })
    .map_err(|err| Error::invalid_request(err.to_string()))?;
    let category = parse_optional_uuid(body.category, FieldName::new("category"))?;
    let amenities = body
        .amenities
        .map(|ids| parse_uuid_list(ids, FieldName::new("amenities")))
        .transpose()?;
    Ok((patch, category, amenities))
}

/// List rooms, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    params(("page" = Option<String>, Query, description = "1-based page number; invalid values fall back to 1")),
    responses(
        (status = 200, description = "One page of rooms", body = Paginated<Room>),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms")]
pub async fn list_rooms(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paginated<Room>>> {
    let page = state.rooms_query.list_rooms(query.request(PAGE_SIZE)).await?;
    Ok(web::Json(page))
}

/// Fetch a single room.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "The room", body = Room),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "getRoom"
)]
#[get("/rooms/{room_id}")]
pub async fn get_room(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Room>> {
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let room = state.rooms_query.get_room(room_id).await?;
    Ok(web::Json(room))
}

/// Create a room owned by the authenticated user.
///
/// The room, its category reference, and its amenity links are written in
/// one transaction; any unresolved amenity id rolls the whole write back.
#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    request_body = CreateRoomBody,
    responses(
        (status = 200, description = "Room created", body = Room),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "createRoom",
    security(("SessionCookie" = []))
)]
#[post("/rooms")]
pub async fn create_room(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateRoomBody>,
) -> ApiResult<web::Json<Room>> {
    let owner_id = session.require_user_id()?;
    let (draft, category_id, amenity_ids) = parse_create_body(payload.into_inner())?;

    let room = state
        .rooms
        .create_room(CreateRoomRequest {
            owner_id,
            draft,
            category_id: Some(category_id),
            amenity_ids,
        })
        .await?;

    Ok(web::Json(room))
}

/// Partially update an owned room.
#[utoipa::path(
    put,
    path = "/api/v1/rooms/{room_id}",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    request_body = UpdateRoomBody,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "updateRoom",
    security(("SessionCookie" = []))
)]
#[put("/rooms/{room_id}")]
pub async fn update_room(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateRoomBody>,
) -> ApiResult<web::Json<Room>> {
    let requester = session.require_user_id()?;
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let (patch, category_id, amenity_ids) = parse_update_body(payload.into_inner())?;

    let room = state
        .rooms
        .update_room(UpdateRoomRequest {
            room_id,
            requester,
            patch,
            category_id,
            amenity_ids,
        })
        .await?;

    Ok(web::Json(room))
}

/// Delete an owned room. Amenity links, bookings, reviews, and photos go
/// with it.
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{room_id}",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["rooms"],
    operation_id = "deleteRoom",
    security(("SessionCookie" = []))
)]
#[delete("/rooms/{room_id}")]
pub async fn delete_room(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let requester = session.require_user_id()?;
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    state.rooms.delete_room(room_id, requester).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "rooms_tests.rs"]
mod tests;
