//! Persistence adapters backed by PostgreSQL via Diesel.
//!
//! Each repository is a thin adapter implementing a domain port. Row structs
//! in [`models`] stay internal; only domain types cross the boundary. Pooling
//! lives in [`pool`], shared error mapping in `diesel_error_mapping`.

mod diesel_amenity_repository;
mod diesel_booking_repository;
mod diesel_category_repository;
mod diesel_error_mapping;
mod diesel_photo_repository;
mod diesel_review_repository;
mod diesel_room_repository;
mod diesel_user_repository;
mod models;
mod schema;

pub mod pool;

pub use diesel_amenity_repository::DieselAmenityRepository;
pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_photo_repository::DieselPhotoRepository;
pub use diesel_review_repository::DieselReviewRepository;
pub use diesel_room_repository::DieselRoomRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
