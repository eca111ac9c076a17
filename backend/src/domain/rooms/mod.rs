//! Rooms: the central lodging-listing aggregate.
//!
//! A [`Room`] is always hydrated with its resolved [`Category`] and full
//! amenity set; repositories never return a partially attached room. Input
//! passes through [`RoomDraft`] (create) or [`RoomPatch`] (partial update),
//! whose constructors enforce the field invariants, so a constructed value
//! is valid by definition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::amenities::Amenity;
use crate::domain::categories::Category;
use crate::domain::error::Error;
use crate::domain::user::UserId;

/// Maximum room name length, matching the column width.
const NAME_MAX: usize = 180;

/// Closed set of room kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

impl RoomKind {
    /// Stable wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EntirePlace => "entire_place",
            Self::PrivateRoom => "private_room",
            Self::SharedRoom => "shared_room",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised kind strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown room kind: {0}")]
pub struct UnknownRoomKind(pub String);

impl FromStr for RoomKind {
    type Err = UnknownRoomKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entire_place" => Ok(Self::EntirePlace),
            "private_room" => Ok(Self::PrivateRoom),
            "shared_room" => Ok(Self::SharedRoom),
            other => Err(UnknownRoomKind(other.to_owned())),
        }
    }
}

/// Validation failures for room input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomValidationError {
    #[error("room name must not be empty")]
    EmptyName,
    #[error("room name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("price must be greater than zero")]
    NonPositivePrice,
    #[error("room count must not be negative")]
    NegativeRooms,
    #[error("toilet count must not be negative")]
    NegativeToilets,
}

/// A hydrated room listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub owner_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub category: Category,
    pub amenities: Vec<Amenity>,
}

impl Room {
    /// Reject callers other than the owner.
    ///
    /// Every mutating room path goes through this check; handlers map the
    /// returned error straight to a 403 response.
    pub fn ensure_owned_by(&self, user_id: &UserId) -> Result<(), Error> {
        if &self.owner_id == user_id {
            Ok(())
        } else {
            Err(Error::forbidden("only the owner may modify this room"))
        }
    }
}

/// Validated input for creating a room.
///
/// Amenity and category identifiers stay unresolved here; resolution happens
/// inside the repository transaction so that an unresolved id aborts the
/// whole write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    name: String,
    country: String,
    city: String,
    price: i32,
    rooms: i32,
    toilets: i32,
    description: String,
    address: String,
    pet_friendly: bool,
    kind: RoomKind,
}

/// Raw field bundle consumed by [`RoomDraft::new`].
#[derive(Debug, Clone)]
pub struct RoomFields {
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
}

impl RoomDraft {
    /// Validate raw fields into a draft.
    pub fn new(fields: RoomFields) -> Result<Self, RoomValidationError> {
        let name = validate_name(fields.name)?;
        validate_price(fields.price)?;
        validate_counts(fields.rooms, fields.toilets)?;
        Ok(Self {
            name,
            country: fields.country,
            city: fields.city,
            price: fields.price,
            rooms: fields.rooms,
            toilets: fields.toilets,
            description: fields.description,
            address: fields.address,
            pet_friendly: fields.pet_friendly,
            kind: fields.kind,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn country(&self) -> &str {
        self.country.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn rooms(&self) -> i32 {
        self.rooms
    }

    pub fn toilets(&self) -> i32 {
        self.toilets
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn pet_friendly(&self) -> bool {
        self.pet_friendly
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }
}

/// Partial update for a room. Absent fields keep their stored values.
///
/// `category_id` and `amenity_ids` are carried separately by the command
/// payload because they need resolution against other aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPatch {
    name: Option<String>,
    country: Option<String>,
    city: Option<String>,
    price: Option<i32>,
    rooms: Option<i32>,
    toilets: Option<i32>,
    description: Option<String>,
    address: Option<String>,
    pet_friendly: Option<bool>,
    kind: Option<RoomKind>,
}

/// Raw optional field bundle consumed by [`RoomPatch::new`].
#[derive(Debug, Clone, Default)]
pub struct RoomPatchFields {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<i32>,
    pub rooms: Option<i32>,
    pub toilets: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<RoomKind>,
}

impl RoomPatch {
    /// Validate raw optional fields into a patch.
    pub fn new(fields: RoomPatchFields) -> Result<Self, RoomValidationError> {
        let name = fields.name.map(validate_name).transpose()?;
        if let Some(price) = fields.price {
            validate_price(price)?;
        }
        validate_counts(fields.rooms.unwrap_or(0), fields.toilets.unwrap_or(0))?;
        Ok(Self {
            name,
            country: fields.country,
            city: fields.city,
            price: fields.price,
            rooms: fields.rooms,
            toilets: fields.toilets,
            description: fields.description,
            address: fields.address,
            pet_friendly: fields.pet_friendly,
            kind: fields.kind,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn price(&self) -> Option<i32> {
        self.price
    }

    pub fn rooms(&self) -> Option<i32> {
        self.rooms
    }

    pub fn toilets(&self) -> Option<i32> {
        self.toilets
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn pet_friendly(&self) -> Option<bool> {
        self.pet_friendly
    }

    pub fn kind(&self) -> Option<RoomKind> {
        self.kind
    }
}

fn validate_name(name: String) -> Result<String, RoomValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RoomValidationError::EmptyName);
    }
    if trimmed.chars().count() > NAME_MAX {
        return Err(RoomValidationError::NameTooLong { max: NAME_MAX });
    }
    Ok(trimmed.to_owned())
}

fn validate_price(price: i32) -> Result<(), RoomValidationError> {
    if price <= 0 {
        return Err(RoomValidationError::NonPositivePrice);
    }
    Ok(())
}

fn validate_counts(rooms: i32, toilets: i32) -> Result<(), RoomValidationError> {
    if rooms < 0 {
        return Err(RoomValidationError::NegativeRooms);
    }
    if toilets < 0 {
        return Err(RoomValidationError::NegativeToilets);
    }
    Ok(())
}
