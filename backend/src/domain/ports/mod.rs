//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories) are implemented by the persistence adapters
//! and carry their own `*RepositoryError` enums; driving ports are the
//! use-case traits the HTTP layer depends on and speak the domain `Error`.

mod macros;
pub(crate) use macros::define_port_error;

mod amenities_command;
mod amenities_query;
mod amenity_repository;
mod booking_repository;
mod bookings_command;
mod bookings_query;
mod category_repository;
mod photo_repository;
mod photos_command;
mod review_repository;
mod reviews_command;
mod reviews_query;
mod room_repository;
mod rooms_command;
mod rooms_query;
mod user_repository;
mod users_service;

#[cfg(test)]
pub use amenities_command::MockAmenitiesCommand;
pub use amenities_command::AmenitiesCommand;
#[cfg(test)]
pub use amenities_query::MockAmenitiesQuery;
pub use amenities_query::AmenitiesQuery;
#[cfg(test)]
pub use amenity_repository::MockAmenityRepository;
pub use amenity_repository::{AmenityRepository, AmenityRepositoryError, FixtureAmenityRepository};
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{
    BookingRepository, BookingRepositoryError, FixtureBookingRepository,
};
#[cfg(test)]
pub use bookings_command::MockBookingsCommand;
pub use bookings_command::{BookingsCommand, CreateBookingRequest};
#[cfg(test)]
pub use bookings_query::MockBookingsQuery;
pub use bookings_query::BookingsQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use photo_repository::MockPhotoRepository;
pub use photo_repository::{FixturePhotoRepository, PhotoRepository, PhotoRepositoryError};
#[cfg(test)]
pub use photos_command::MockPhotosCommand;
pub use photos_command::PhotosCommand;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{FixtureReviewRepository, ReviewRepository, ReviewRepositoryError};
#[cfg(test)]
pub use reviews_command::MockReviewsCommand;
pub use reviews_command::ReviewsCommand;
#[cfg(test)]
pub use reviews_query::MockReviewsQuery;
pub use reviews_query::ReviewsQuery;
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{FixtureRoomRepository, RoomRepository, RoomRepositoryError};
#[cfg(test)]
pub use rooms_command::MockRoomsCommand;
pub use rooms_command::{CreateRoomRequest, RoomsCommand, UpdateRoomRequest};
#[cfg(test)]
pub use rooms_query::MockRoomsQuery;
pub use rooms_query::RoomsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_service::MockUsersService;
pub use users_service::UsersService;
