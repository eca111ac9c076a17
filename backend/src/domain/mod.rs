//! Domain layer: entities, validation, services, and ports.
//!
//! Everything here is transport and persistence agnostic. Inbound adapters
//! drive the services through the traits in [`ports`]; outbound adapters
//! implement the repository traits the services depend on.

pub mod ports;

mod amenities;
mod amenities_service;
mod bookings;
mod bookings_service;
mod categories;
mod error;
mod photos;
mod photos_service;
mod reviews;
mod reviews_service;
mod rooms;
mod rooms_service;
mod user;
mod user_account_service;

pub use amenities::{Amenity, AmenityDraft, AmenityPatch, AmenityValidationError};
pub use amenities_service::{AmenitiesCommandService, AmenitiesQueryService};
pub use bookings::{
    Booking, BookingDraft, BookingKind, BookingValidationError, UnknownBookingKind,
    ranges_overlap,
};
pub use bookings_service::{BookingsCommandService, BookingsQueryService};
pub use categories::{Category, CategoryKind, UnknownCategoryKind};
pub use error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use photos::{Photo, PhotoDraft, PhotoValidationError};
pub use photos_service::PhotosCommandService;
pub use reviews::{Review, ReviewDraft, ReviewValidationError};
pub use reviews_service::{ReviewsCommandService, ReviewsQueryService};
pub use rooms::{
    Room, RoomDraft, RoomFields, RoomKind, RoomPatch, RoomPatchFields, RoomValidationError,
    UnknownRoomKind,
};
pub use rooms_service::{RoomsCommandService, RoomsQueryService};
pub use user::{DisplayName, User, UserId, UserValidationError};
pub use user_account_service::UserAccountService;
