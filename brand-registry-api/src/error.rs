use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable codes for field-level validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationCode {
    InvalidFormat,
    ChecksumMismatch,
    LengthOutOfRange,
    InvalidCharacters,
    Duplicate,
    NotPositive,
    MissingLocation,
    OutOfBounds,
    InvalidDateRange,
    DescriptionTooShort,
    NoLivestockSpecified,
    UnapprovedDomain,
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ValidationCode::InvalidFormat => "InvalidFormat",
            ValidationCode::ChecksumMismatch => "ChecksumMismatch",
            ValidationCode::LengthOutOfRange => "LengthOutOfRange",
            ValidationCode::InvalidCharacters => "InvalidCharacters",
            ValidationCode::Duplicate => "Duplicate",
            ValidationCode::NotPositive => "NotPositive",
            ValidationCode::MissingLocation => "MissingLocation",
            ValidationCode::OutOfBounds => "OutOfBounds",
            ValidationCode::InvalidDateRange => "InvalidDateRange",
            ValidationCode::DescriptionTooShort => "DescriptionTooShort",
            ValidationCode::NoLivestockSpecified => "NoLivestockSpecified",
            ValidationCode::UnapprovedDomain => "UnapprovedDomain",
        };
        write!(f, "{code}")
    }
}

/// A single validation failure with its code and a user-presentable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Collected validation failures for one form submission.
///
/// Errors are gathered per field and returned together so the caller can
/// present every problem at once. Cross-field failures (location required,
/// date ordering, livestock totals) land in the form-level bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<ValidationError>>,
    form: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error to a named field.
    pub fn add(&mut self, field: &str, error: ValidationError) {
        self.fields.entry(field.to_string()).or_default().push(error);
    }

    /// Attach a cross-field error to the form-level bucket.
    pub fn add_form(&mut self, error: ValidationError) {
        self.form.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }

    /// Total number of collected errors across all buckets.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum::<usize>() + self.form.len()
    }

    pub fn field(&self, name: &str) -> &[ValidationError] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn form(&self) -> &[ValidationError] {
        &self.form
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// True when the named field carries an error with the given code.
    pub fn has(&self, field: &str, code: ValidationCode) -> bool {
        self.field(field).iter().any(|e| e.code == code)
    }

    /// True when the form-level bucket carries an error with the given code.
    pub fn has_form(&self, code: ValidationCode) -> bool {
        self.form.iter().any(|e| e.code == code)
    }

    /// Fold a validator result into the collection, keeping the value on success.
    pub fn collect<T>(&mut self, field: &str, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, error);
                None
            }
        }
    }

    /// Finish validation: the normalized value on success, the collected
    /// errors otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in &self.fields {
            for error in errors {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {error}")?;
                first = false;
            }
        }
        for error in &self.form {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("not found: {0}")]
    NotFound(String),

    /// Storage-level uniqueness race or an operation on an already-resolved
    /// record; the pre-flight checks passed but the commit did not.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for RegistryError {
    fn from(errors: ValidationErrors) -> Self {
        RegistryError::Validation(errors)
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_errors_per_field_without_fail_fast() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "national_id",
            ValidationError::new(ValidationCode::InvalidFormat, "digits only"),
        );
        errors.add(
            "national_id",
            ValidationError::new(ValidationCode::LengthOutOfRange, "7 or 8 digits"),
        );
        errors.add_form(ValidationError::new(
            ValidationCode::MissingLocation,
            "both coordinates are required",
        ));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.field("national_id").len(), 2);
        assert!(errors.has("national_id", ValidationCode::InvalidFormat));
        assert!(errors.has_form(ValidationCode::MissingLocation));
        assert!(errors.field("surname").is_empty());
    }

    #[test]
    fn into_result_returns_value_when_clean() {
        let errors = ValidationErrors::new();
        assert_eq!(errors.into_result(42), Ok(42));
    }

    #[test]
    fn into_result_returns_errors_when_dirty() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "email",
            ValidationError::new(ValidationCode::UnapprovedDomain, "domain not allowed"),
        );
        let result = errors.clone().into_result(());
        assert_eq!(result, Err(errors));
    }

    #[test]
    fn collect_keeps_ok_values_and_records_failures() {
        let mut errors = ValidationErrors::new();
        let ok: Result<i64, ValidationError> = Ok(7);
        let bad: Result<i64, ValidationError> = Err(ValidationError::new(
            ValidationCode::NotPositive,
            "must be positive",
        ));

        assert_eq!(errors.collect("order_number", ok), Some(7));
        assert_eq!(errors.collect("order_number", bad), None);
        assert_eq!(errors.field("order_number").len(), 1);
    }
}
