//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{amenities, bookings, categories, photos, reviews, room_amenities, rooms, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub display_name: String,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub display_name: &'a str,
}

// ---------------------------------------------------------------------------
// Category models
// ---------------------------------------------------------------------------

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Amenity models
// ---------------------------------------------------------------------------

/// Row struct for reading from the amenities table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = amenities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AmenityRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new amenity records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = amenities)]
pub(crate) struct NewAmenityRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
}

/// Changeset struct for partially updating amenity records.
///
/// `None` fields are skipped by Diesel, which matches patch semantics.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = amenities)]
pub(crate) struct AmenityChangeset<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Room models
// ---------------------------------------------------------------------------

/// Row struct for reading from the rooms table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    #[diesel(column_name = room_count)]
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: String,
    pub category_id: Uuid,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new room records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = rooms)]
pub(crate) struct NewRoomRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: &'a str,
    pub country: &'a str,
    pub city: &'a str,
    pub price: i32,
    #[diesel(column_name = room_count)]
    pub rooms: i32,
    pub toilets: i32,
    pub description: &'a str,
    pub address: &'a str,
    pub pet_friendly: bool,
    pub kind: &'a str,
    pub category_id: Uuid,
}

/// Changeset struct for partially updating room records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = rooms)]
pub(crate) struct RoomChangeset<'a> {
    pub name: Option<&'a str>,
    pub country: Option<&'a str>,
    pub city: Option<&'a str>,
    pub price: Option<i32>,
    #[diesel(column_name = room_count)]
    pub rooms: Option<i32>,
    pub toilets: Option<i32>,
    pub description: Option<&'a str>,
    pub address: Option<&'a str>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<&'a str>,
    pub category_id: Option<Uuid>,
}

impl RoomChangeset<'_> {
    /// Diesel rejects an empty changeset; callers skip the UPDATE when every
    /// field is absent.
    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.city.is_none()
            && self.price.is_none()
            && self.rooms.is_none()
            && self.toilets.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.pet_friendly.is_none()
            && self.kind.is_none()
            && self.category_id.is_none()
    }
}

/// Insertable struct for room-to-amenity links.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = room_amenities)]
pub(crate) struct NewRoomAmenityRow {
    pub room_id: Uuid,
    pub amenity_id: Uuid,
}

// ---------------------------------------------------------------------------
// Booking models
// ---------------------------------------------------------------------------

/// Row struct for reading from the bookings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new booking records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub kind: &'a str,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

// ---------------------------------------------------------------------------
// Review models
// ---------------------------------------------------------------------------

/// Row struct for reading from the reviews table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewRow {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub payload: String,
    pub rating: i32,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new review records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub payload: &'a str,
    pub rating: i32,
}

// ---------------------------------------------------------------------------
// Photo models
// ---------------------------------------------------------------------------

/// Row struct for reading from the photos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PhotoRow {
    pub id: Uuid,
    pub room_id: Uuid,
    pub file: String,
    pub description: Option<String>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new photo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = photos)]
pub(crate) struct NewPhotoRow<'a> {
    pub id: Uuid,
    pub room_id: Uuid,
    pub file: &'a str,
    pub description: Option<&'a str>,
}
