//! Per-entity input validation.
//!
//! Each form takes the raw field values of one submission (plus a context
//! carrying the editing identity and the lookups the rules need) and
//! produces either a normalized value set or the collected field-scoped
//! errors. Forms never touch storage; persistence belongs to the services.

use brand_registry_api::error::{ValidationCode, ValidationError, ValidationErrors};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

pub mod mark;
pub mod parcel;
pub mod producer;
pub mod request;
pub mod user;

pub use mark::*;
pub use parcel::*;
pub use producer::*;
pub use request::*;
pub use user::*;

/// Trimmed, non-empty view of a raw optional field.
pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Require a field to be present; records the error and returns None otherwise.
pub(crate) fn required<'a>(
    errors: &mut ValidationErrors,
    field: &str,
    value: &'a Option<String>,
) -> Option<&'a str> {
    match text(value) {
        Some(value) => Some(value),
        None => {
            errors.add(
                field,
                ValidationError::new(ValidationCode::InvalidFormat, "this field is required"),
            );
            None
        }
    }
}

pub(crate) fn parse_decimal(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
) -> Option<Decimal> {
    match Decimal::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(
                field,
                ValidationError::new(ValidationCode::InvalidFormat, "must be a decimal number"),
            );
            None
        }
    }
}

pub(crate) fn parse_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(
                field,
                ValidationError::new(
                    ValidationCode::InvalidFormat,
                    "must be a date in YYYY-MM-DD form",
                ),
            );
            None
        }
    }
}

pub(crate) fn parse_int(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(
                field,
                ValidationError::new(ValidationCode::InvalidFormat, "must be a whole number"),
            );
            None
        }
    }
}

pub(crate) fn parse_uuid(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<Uuid> {
    match Uuid::parse_str(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(
                field,
                ValidationError::new(ValidationCode::InvalidFormat, "must be a valid identifier"),
            );
            None
        }
    }
}

/// Free-text field bounded to `max_chars` characters.
pub(crate) fn bounded(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    max_chars: usize,
) -> Option<String> {
    if value.chars().count() > max_chars {
        errors.add(
            field,
            ValidationError::new(
                ValidationCode::LengthOutOfRange,
                format!("cannot exceed {max_chars} characters"),
            ),
        );
        None
    } else {
        Some(value.to_string())
    }
}
