//! Amenities: reusable room features such as "wifi" or "parking".

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum amenity name length, matching the column width.
const NAME_MAX: usize = 150;

/// Validation failures for amenity input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmenityValidationError {
    #[error("amenity name must not be empty")]
    EmptyName,
    #[error("amenity name must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// A persisted amenity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validated input for creating an amenity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityDraft {
    name: String,
    description: Option<String>,
}

impl AmenityDraft {
    /// Validate raw input into a draft.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, AmenityValidationError> {
        let name = validate_name(name.into())?;
        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Partial update for an amenity. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenityPatch {
    name: Option<String>,
    description: Option<String>,
}

impl AmenityPatch {
    /// Validate raw optional input into a patch.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, AmenityValidationError> {
        let name = name.map(validate_name).transpose()?;
        Ok(Self { name, description })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

fn validate_name(name: String) -> Result<String, AmenityValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AmenityValidationError::EmptyName);
    }
    if trimmed.chars().count() > NAME_MAX {
        return Err(AmenityValidationError::NameTooLong { max: NAME_MAX });
    }
    Ok(trimmed.to_owned())
}
