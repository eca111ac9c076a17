//! Review HTTP handlers.
//!
//! ```text
//! GET  /api/v1/rooms/{room_id}/reviews
//! POST /api/v1/rooms/{room_id}/reviews
//! ```

use actix_web::{get, post, web};
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Review, ReviewDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, PageQuery, parse_uuid};

const PAGE_SIZE: u32 = 3;

/// Request payload for reviewing a room.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewBody {
    #[schema(example = "Spotless and quiet, would stay again.")]
    pub payload: String,
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
}

/// List reviews for a room.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/reviews",
    params(
        ("room_id" = uuid::Uuid, Path, description = "Room identifier"),
        ("page" = Option<String>, Query, description = "1-based page number; invalid values fall back to 1")
    ),
    responses(
        (status = 200, description = "One page of reviews", body = Paginated<Review>),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "listRoomReviews"
)]
#[get("/rooms/{room_id}/reviews")]
pub async fn list_room_reviews(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paginated<Review>>> {
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let page = state
        .reviews_query
        .list_reviews(room_id, query.request(PAGE_SIZE))
        .await?;
    Ok(web::Json(page))
}

/// Review a room as the authenticated user.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/reviews",
    params(("room_id" = uuid::Uuid, Path, description = "Room identifier")),
    request_body = CreateReviewBody,
    responses(
        (status = 200, description = "Review recorded", body = Review),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown room", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "createRoomReview",
    security(("SessionCookie" = []))
)]
#[post("/rooms/{room_id}/reviews")]
pub async fn create_room_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<CreateReviewBody>,
) -> ApiResult<web::Json<Review>> {
    let requester = session.require_user_id()?;
    let room_id = parse_uuid(path.into_inner(), FieldName::new("roomId"))?;
    let body = payload.into_inner();
    let draft = ReviewDraft::new(body.payload, body.rating)
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let review = state.reviews.create_review(room_id, requester, draft).await?;
    Ok(web::Json(review))
}
