//! Amenity HTTP handlers.
//!
//! ```text
//! GET    /api/v1/amenities
//! POST   /api/v1/amenities
//! GET    /api/v1/amenities/{amenity_id}
//! PUT    /api/v1/amenities/{amenity_id}
//! DELETE /api/v1/amenities/{amenity_id}
//! ```
//!
//! Writes need authentication only; amenities have no owner.

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Amenity, AmenityDraft, AmenityPatch, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, PageQuery, parse_uuid};

const PAGE_SIZE: u32 = 20;

/// Request payload for creating an amenity.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAmenityBody {
    #[schema(example = "wifi")]
    pub name: String,
    pub description: Option<String>,
}

/// Request payload for partially updating an amenity.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAmenityBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// List amenities.
#[utoipa::path(
    get,
    path = "/api/v1/amenities",
    params(("page" = Option<String>, Query, description = "1-based page number; invalid values fall back to 1")),
    responses(
        (status = 200, description = "One page of amenities", body = Paginated<Amenity>),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "listAmenities"
)]
#[get("/amenities")]
pub async fn list_amenities(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Paginated<Amenity>>> {
    let page = state
        .amenities_query
        .list_amenities(query.request(PAGE_SIZE))
        .await?;
    Ok(web::Json(page))
}

/// Fetch a single amenity.
#[utoipa::path(
    get,
    path = "/api/v1/amenities/{amenity_id}",
    params(("amenity_id" = uuid::Uuid, Path, description = "Amenity identifier")),
    responses(
        (status = 200, description = "The amenity", body = Amenity),
        (status = 404, description = "Unknown amenity", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "getAmenity"
)]
#[get("/amenities/{amenity_id}")]
pub async fn get_amenity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Amenity>> {
    let amenity_id = parse_uuid(path.into_inner(), FieldName::new("amenityId"))?;
    let amenity = state.amenities_query.get_amenity(amenity_id).await?;
    Ok(web::Json(amenity))
}

/// Create an amenity.
#[utoipa::path(
    post,
    path = "/api/v1/amenities",
    request_body = CreateAmenityBody,
    responses(
        (status = 200, description = "Amenity created", body = Amenity),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "createAmenity",
    security(("SessionCookie" = []))
)]
#[post("/amenities")]
pub async fn create_amenity(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateAmenityBody>,
) -> ApiResult<web::Json<Amenity>> {
    session.require_user_id()?;
    let body = payload.into_inner();
    let draft = AmenityDraft::new(body.name, body.description)
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let amenity = state.amenities.create_amenity(draft).await?;
    Ok(web::Json(amenity))
}

/// Partially update an amenity.
#[utoipa::path(
    put,
    path = "/api/v1/amenities/{amenity_id}",
    params(("amenity_id" = uuid::Uuid, Path, description = "Amenity identifier")),
    request_body = UpdateAmenityBody,
    responses(
        (status = 200, description = "Amenity updated", body = Amenity),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown amenity", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "updateAmenity",
    security(("SessionCookie" = []))
)]
#[put("/amenities/{amenity_id}")]
pub async fn update_amenity(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateAmenityBody>,
) -> ApiResult<web::Json<Amenity>> {
    session.require_user_id()?;
    let amenity_id = parse_uuid(path.into_inner(), FieldName::new("amenityId"))?;
    let body = payload.into_inner();
    let patch = AmenityPatch::new(body.name, body.description)
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let amenity = state.amenities.update_amenity(amenity_id, patch).await?;
    Ok(web::Json(amenity))
}

/// Delete an amenity. Room links cascade; rooms themselves are untouched.
#[utoipa::path(
    delete,
    path = "/api/v1/amenities/{amenity_id}",
    params(("amenity_id" = uuid::Uuid, Path, description = "Amenity identifier")),
    responses(
        (status = 204, description = "Amenity deleted"),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown amenity", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "deleteAmenity",
    security(("SessionCookie" = []))
)]
#[delete("/amenities/{amenity_id}")]
pub async fn delete_amenity(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let amenity_id = parse_uuid(path.into_inner(), FieldName::new("amenityId"))?;
    state.amenities.delete_amenity(amenity_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
