//! Guest reviews attached to a room.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;

/// Inclusive rating bounds.
const RATING_MIN: i32 = 1;
const RATING_MAX: i32 = 5;

/// Validation failures for review input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewValidationError {
    #[error("review payload must not be empty")]
    EmptyPayload,
    #[error("rating must be between {min} and {max}")]
    RatingOutOfRange { min: i32, max: i32 },
}

/// A persisted review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub room_id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub payload: String,
    pub rating: i32,
}

/// Validated input for creating a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    payload: String,
    rating: i32,
}

impl ReviewDraft {
    pub fn new(payload: impl Into<String>, rating: i32) -> Result<Self, ReviewValidationError> {
        let payload = payload.into();
        if payload.trim().is_empty() {
            return Err(ReviewValidationError::EmptyPayload);
        }
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ReviewValidationError::RatingOutOfRange {
                min: RATING_MIN,
                max: RATING_MAX,
            });
        }
        Ok(Self { payload, rating })
    }

    pub fn payload(&self) -> &str {
        self.payload.as_str()
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }
}
