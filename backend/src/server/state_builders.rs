//! Builders for the HTTP state over repository-backed services.

use std::sync::Arc;

use actix_web::web;

use backend::domain::ports::{
    FixtureAmenityRepository, FixtureBookingRepository, FixtureCategoryRepository,
    FixturePhotoRepository, FixtureReviewRepository, FixtureRoomRepository, FixtureUserRepository,
};
use backend::domain::{
    AmenitiesCommandService, AmenitiesQueryService, BookingsCommandService, BookingsQueryService,
    PhotosCommandService, ReviewsCommandService, ReviewsQueryService, RoomsCommandService,
    RoomsQueryService, UserAccountService,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselAmenityRepository, DieselBookingRepository, DieselCategoryRepository,
    DieselPhotoRepository, DieselReviewRepository, DieselRoomRepository, DieselUserRepository,
};

use super::ServerConfig;

fn diesel_http_state(pool: &DbPool) -> HttpState {
    let rooms = Arc::new(DieselRoomRepository::new(pool.clone()));
    let categories = Arc::new(DieselCategoryRepository::new(pool.clone()));
    let amenities = Arc::new(DieselAmenityRepository::new(pool.clone()));
    let bookings = Arc::new(DieselBookingRepository::new(pool.clone()));
    let reviews = Arc::new(DieselReviewRepository::new(pool.clone()));
    let photos = Arc::new(DieselPhotoRepository::new(pool.clone()));
    let users = Arc::new(DieselUserRepository::new(pool.clone()));

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

/// Fixture-backed state for running without a database.
///
/// Reads answer with empty results and writes fail cleanly, which keeps the
/// server bootable for smoke tests and local API exploration.
fn fixture_http_state() -> HttpState {
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

/// Build the shared HTTP state, database-backed when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => diesel_http_state(pool),
        None => fixture_http_state(),
    };
    web::Data::new(state)
}
