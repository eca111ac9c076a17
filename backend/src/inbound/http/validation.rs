//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifiers and dates travel as strings in JSON bodies. These helpers
//! parse them and produce 400 errors with structured `details` naming the
//! offending field.

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidChoice,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidChoice => "invalid_choice",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

pub(crate) fn parse_optional_uuid(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<Uuid>, Error> {
    value.map(|raw| parse_uuid(raw, field)).transpose()
}

pub(crate) fn parse_uuid_list(values: Vec<String>, field: FieldName) -> Result<Vec<Uuid>, Error> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Uuid::parse_str(&value).map_err(|_| {
                let field = field.as_str();
                ValidationError::new(field, format!("{field} must contain valid UUIDs"))
                    .with_index(ErrorCode::InvalidUuid, index, value)
            })
        })
        .collect()
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a YYYY-MM-DD date"))
        .with_value(ErrorCode::InvalidDate, value)
}

pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| invalid_date_error(field, &value))
}

/// Parse a closed-choice string via its `FromStr`, listing the field on
/// failure.
pub(crate) fn parse_choice<T>(value: String, field: FieldName, expected: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
{
    let field = field.as_str();
    value.parse::<T>().map_err(|_| {
        ValidationError::new(field, format!("{field} must be one of: {expected}"))
            .with_value(ErrorCode::InvalidChoice, value)
    })
}

/// Lenient `page` query parameter shared by list endpoints.
///
/// Malformed values fall back to the first page rather than failing the
/// request.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    pub(crate) fn request(&self, page_size: u32) -> pagination::PageRequest {
        pagination::PageRequest::new(pagination::PageNumber::lenient(self.page.as_deref()))
            .with_page_size(page_size)
    }
}
