//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// User accounts.
    ///
    /// A user exists once per display name; login creates the row on first
    /// sight.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable display name (max 32 characters, unique).
        #[max_length = 32]
        display_name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Listing categories, reference data seeded by migrations.
    categories (id) {
        id -> Uuid,
        #[max_length = 150]
        name -> Varchar,
        /// Discriminator: `rooms` or `experiences`.
        #[max_length = 20]
        kind -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Reusable room features such as "wifi".
    amenities (id) {
        id -> Uuid,
        #[max_length = 150]
        name -> Varchar,
        description -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Lodging listings.
    rooms (id) {
        id -> Uuid,
        owner_id -> Uuid,
        #[max_length = 180]
        name -> Varchar,
        #[max_length = 75]
        country -> Varchar,
        #[max_length = 75]
        city -> Varchar,
        /// Nightly price; positive by check constraint.
        price -> Int4,
        #[sql_name = "rooms"]
        room_count -> Int4,
        toilets -> Int4,
        description -> Text,
        address -> Text,
        pet_friendly -> Bool,
        /// Discriminator: `entire_place`, `private_room`, or `shared_room`.
        #[max_length = 20]
        kind -> Varchar,
        category_id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Room-to-amenity links. Composite primary key prevents duplicates.
    room_amenities (room_id, amenity_id) {
        room_id -> Uuid,
        amenity_id -> Uuid,
    }
}

diesel::table! {
    /// Date-ranged reservations. Ranges are half-open `[check_in, check_out)`.
    bookings (id) {
        id -> Uuid,
        room_id -> Uuid,
        user_id -> Uuid,
        /// Discriminator: `rooms` or `experiences`.
        #[max_length = 20]
        kind -> Varchar,
        check_in -> Date,
        check_out -> Date,
        guests -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Guest reviews attached to a room.
    reviews (id) {
        id -> Uuid,
        room_id -> Uuid,
        user_id -> Uuid,
        payload -> Text,
        /// Star rating, 1 to 5 by check constraint.
        rating -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Photo metadata records; upload storage lives elsewhere.
    photos (id) {
        id -> Uuid,
        room_id -> Uuid,
        file -> Text,
        description -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(rooms -> categories (category_id));
diesel::joinable!(rooms -> users (owner_id));
diesel::joinable!(room_amenities -> rooms (room_id));
diesel::joinable!(room_amenities -> amenities (amenity_id));
diesel::joinable!(bookings -> rooms (room_id));
diesel::joinable!(bookings -> users (user_id));
diesel::joinable!(reviews -> rooms (room_id));
diesel::joinable!(reviews -> users (user_id));
diesel::joinable!(photos -> rooms (room_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    categories,
    amenities,
    rooms,
    room_amenities,
    bookings,
    reviews,
    photos,
);
