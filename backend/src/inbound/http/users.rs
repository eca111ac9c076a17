//! Authentication boundary HTTP handlers.
//!
//! ```text
//! POST /api/v1/login
//! POST /api/v1/logout
//! GET  /api/v1/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{DisplayName, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request payload for display-name login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    #[schema(example = "Ada Lovelace")]
    pub display_name: String,
}

/// Log in by display name, creating the user on first sight.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequestBody,
    responses(
        (status = 200, description = "Logged in", body = User),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequestBody>,
) -> ApiResult<web::Json<User>> {
    let display_name = DisplayName::new(payload.into_inner().display_name).map_err(|err| {
        crate::domain::Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "displayName" }))
    })?;

    let user = state.users.login(display_name).await?;
    session.persist_user(user.id())?;

    Ok(web::Json(user))
}

/// Drop the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 200, description = "Logged out")),
    tags = ["users"],
    operation_id = "logout",
    security(("SessionCookie" = []))
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::Ok().json(json!({ "ok": true }))
}

/// Return the user behind the current session.
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Unauthorized", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "me",
    security(("SessionCookie" = []))
)]
#[get("/me")]
pub async fn me(state: web::Data<HttpState>, session: SessionContext) -> ApiResult<web::Json<User>> {
    let user_id = session.require_user_id()?;
    let user = state.users.current_user(user_id).await?;
    Ok(web::Json(user))
}
