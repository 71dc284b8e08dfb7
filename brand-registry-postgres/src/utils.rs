use brand_registry_api::error::RegistryError;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s)
        .map_err(|_| format!("Value for column '{col_name}' is too long (max {N} chars)").into())
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| format!("Value for column '{col_name}' is too long (max {N} chars)").into())
}

/// Map a sqlx failure to the service error taxonomy. Unique-constraint
/// violations become `Conflict` (the pre-flight checks are advisory only);
/// everything else is logged and surfaced as a generic database failure.
pub fn map_db_err(context: &str, error: sqlx::Error) -> RegistryError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.code().as_deref() == Some("23505") {
            return RegistryError::Conflict(format!("{context}: already taken"));
        }
    }
    if matches!(error, sqlx::Error::RowNotFound) {
        return RegistryError::NotFound(context.to_string());
    }
    tracing::error!(context, %error, "database failure");
    RegistryError::Database(format!("{context} failed"))
}

/// Map a row-conversion failure.
pub fn map_row_err(context: &str, error: Box<dyn Error + Send + Sync>) -> RegistryError {
    tracing::error!(context, %error, "row conversion failure");
    RegistryError::Internal(format!("{context} failed"))
}
