//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{
    FixtureAmenityRepository, FixtureBookingRepository, FixtureCategoryRepository,
    FixturePhotoRepository, FixtureReviewRepository, FixtureRoomRepository, FixtureUserRepository,
};
use crate::domain::{
    AmenitiesCommandService, AmenitiesQueryService, BookingsCommandService, BookingsQueryService,
    PhotosCommandService, ReviewsCommandService, ReviewsQueryService, RoomsCommandService,
    RoomsQueryService, UserAccountService,
};
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Build an [`HttpState`] wired entirely over fixture repositories.
///
/// Handler tests start from this state and swap in mocks for the ports
/// under test.
pub fn fixture_http_state() -> HttpState {
    let rooms = Arc::new(FixtureRoomRepository);
    let categories = Arc::new(FixtureCategoryRepository);
    let amenities = Arc::new(FixtureAmenityRepository);
    let bookings = Arc::new(FixtureBookingRepository);
    let reviews = Arc::new(FixtureReviewRepository);
    let photos = Arc::new(FixturePhotoRepository);
    let users = Arc::new(FixtureUserRepository);

    HttpState {
        users: Arc::new(UserAccountService::new(users)),
        rooms: Arc::new(RoomsCommandService::new(rooms.clone(), categories)),
        rooms_query: Arc::new(RoomsQueryService::new(rooms.clone())),
        amenities: Arc::new(AmenitiesCommandService::new(amenities.clone())),
        amenities_query: Arc::new(AmenitiesQueryService::new(amenities)),
        bookings: Arc::new(BookingsCommandService::new(bookings.clone(), rooms.clone())),
        bookings_query: Arc::new(BookingsQueryService::new(bookings, rooms.clone())),
        reviews: Arc::new(ReviewsCommandService::new(reviews.clone(), rooms.clone())),
        reviews_query: Arc::new(ReviewsQueryService::new(reviews, rooms.clone())),
        photos: Arc::new(PhotosCommandService::new(photos, rooms)),
    }
}
