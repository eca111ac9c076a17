//! HTTP inbound adapter exposing REST endpoints.

pub mod amenities;
pub mod bookings;
pub mod error;
pub mod health;
pub mod photos;
pub mod reviews;
pub mod rooms;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
