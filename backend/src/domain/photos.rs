//! Room photos. Upload storage lives elsewhere; this service records the
//! file URL and an optional caption.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation failures for photo input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoValidationError {
    #[error("photo file reference must not be empty")]
    EmptyFile,
}

/// A persisted photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub room_id: Uuid,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validated input for recording a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDraft {
    file: String,
    description: Option<String>,
}

impl PhotoDraft {
    pub fn new(
        file: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, PhotoValidationError> {
        let file = file.into();
        if file.trim().is_empty() {
            return Err(PhotoValidationError::EmptyFile);
        }
        Ok(Self { file, description })
    }

    pub fn file(&self) -> &str {
        self.file.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
