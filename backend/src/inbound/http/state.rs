//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AmenitiesCommand, AmenitiesQuery, BookingsCommand, BookingsQuery, PhotosCommand,
    ReviewsCommand, ReviewsQuery, RoomsCommand, RoomsQuery, UsersService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersService>,
    pub rooms: Arc<dyn RoomsCommand>,
    pub rooms_query: Arc<dyn RoomsQuery>,
    pub amenities: Arc<dyn AmenitiesCommand>,
    pub amenities_query: Arc<dyn AmenitiesQuery>,
    pub bookings: Arc<dyn BookingsCommand>,
    pub bookings_query: Arc<dyn BookingsQuery>,
    pub reviews: Arc<dyn ReviewsCommand>,
    pub reviews_query: Arc<dyn ReviewsQuery>,
    pub photos: Arc<dyn PhotosCommand>,
}
