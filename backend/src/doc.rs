//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer
//! - **Schemas**: Domain types plus the error envelope wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that document errors without
//!   coupling the domain `Error` to the utoipa framework
//! - **Security**: Session cookie authentication scheme
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Amenity, Booking, BookingKind, Category, CategoryKind, Photo, Review, Room, RoomKind, User,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Hearthside backend API",
        description = "HTTP interface for lodging listings, bookings, reviews, and photos."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::me,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::rooms::get_room,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::update_room,
        crate::inbound::http::rooms::delete_room,
        crate::inbound::http::amenities::list_amenities,
        crate::inbound::http::amenities::get_amenity,
        crate::inbound::http::amenities::create_amenity,
        crate::inbound::http::amenities::update_amenity,
        crate::inbound::http::amenities::delete_amenity,
        crate::inbound::http::bookings::list_room_bookings,
        crate::inbound::http::bookings::create_room_booking,
        crate::inbound::http::reviews::list_room_reviews,
        crate::inbound::http::reviews::create_room_review,
        crate::inbound::http::photos::create_room_photo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Room,
        RoomKind,
        Category,
        CategoryKind,
        Amenity,
        Booking,
        BookingKind,
        Review,
        Photo,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "users", description = "Session login and identity"),
        (name = "rooms", description = "Lodging listings"),
        (name = "amenities", description = "Reusable room features"),
        (name = "bookings", description = "Date-ranged reservations"),
        (name = "reviews", description = "Guest reviews"),
        (name = "photos", description = "Listing photo metadata"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
