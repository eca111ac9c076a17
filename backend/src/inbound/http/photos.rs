//! Photo HTTP handlers.
//!
//! ```text
//! POST /api/v1/rooms/{room_id}/photos
//! ```
//!
//! Only metadata is recorded here; upload storage lives outside this
//! service.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Photo, PhotoDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for recording a room photo.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoBody {
    #[schema(example = "https://cdn.example/rooms/42/terrace.jpg")]
    pub file: String,
    pub description: Option<String>,
}

/// Record a photo against an owned room.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/photos",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    request_body = CreatePhotoBody,
    responses(
        (status = 200, description = "Photo recorded", body = Photo),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["photos"],
    operation_id = "createRoomPhoto",
    security(("SessionCookie" = []))
)]
#[post("/rooms/{room_id}/photos")]
pub async fn create_room_photo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<CreatePhotoBody>,
) -> ApiResult<web::Json<Photo>> {
    let requester = session.require_user_id()?;
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let body = payload.into_inner();
    let draft = PhotoDraft::new(body.file, body.description)
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let photo = state.photos.create_photo(room_id, requester, draft).await?;
    Ok(web::Json(photo))
}
