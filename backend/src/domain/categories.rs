//! Listing categories.
//!
//! Categories are reference data: the core reads them to validate room
//! creation but never creates or mutates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of category kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Categories applicable to lodging listings.
    Rooms,
    /// Categories applicable to experiences; never attachable to a room.
    Experiences,
}

impl CategoryKind {
    /// Stable wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Experiences => "experiences",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised kind strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category kind: {0}")]
pub struct UnknownCategoryKind(pub String);

impl FromStr for CategoryKind {
    type Err = UnknownCategoryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rooms" => Ok(Self::Rooms),
            "experiences" => Ok(Self::Experiences),
            other => Err(UnknownCategoryKind(other.to_owned())),
        }
    }
}

/// A listing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
}
