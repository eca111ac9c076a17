//! HTTP mapping for domain errors.
//!
//! The domain error stays transport agnostic; this adapter turns it into a
//! JSON response with a stable status code per error code, and redacts
//! internal errors so implementation detail never reaches clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        // Pick up the request-scoped trace id when the error carries none.
        let mut payload = self.clone();
        if payload.trace_id().is_none() {
            if let Some(id) = TraceId::current() {
                payload = payload.with_trace_id(id.to_string());
            }
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = payload.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(&payload))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("login required"), StatusCode::UNAUTHORIZED)]
    #[case(Error::forbidden("not yours"), StatusCode::FORBIDDEN)]
    #[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("dates overlap"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
    fn maps_each_code_to_its_status(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn internal_errors_are_redacted_but_keep_the_trace_id() {
        let error = Error::internal("connection string was postgres://secret")
            .with_trace_id("trace-1");
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("trace-1")
        );

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["message"], "Internal server error");
        assert_eq!(json["traceId"], "trace-1");
    }

    #[rstest]
    #[tokio::test]
    async fn client_errors_pass_through_unredacted() {
        let error = Error::not_found("room 123 not found");
        let response = error.error_response();

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["code"], "not_found");
        assert_eq!(json["message"], "room 123 not found");
    }
}
