//! Data models for Biblioteca

pub mod author;
pub mod book;
pub mod category;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use category::Category;
pub use loan::Loan;
pub use member::Member;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date carried in a JSON payload.
///
/// Dates stay plain strings through the required-field checks so those
/// checks report missing/empty values first; parsing happens afterwards.
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {}: expected YYYY-MM-DD", field)))
}

/// Deserialize a patch field so key presence survives.
///
/// An absent key stays `None`; a present key becomes `Some(inner)`, so
/// an explicit JSON `null` arrives as `Some(None)`. Pair with
/// `#[serde(default)]` on the nullable updatable columns, where a
/// present null means "clear the column" rather than "leave it alone".
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Parse a date patch field, keeping the absent / explicit-null
/// distinction intact.
pub(crate) fn parse_date_patch(
    field: &str,
    value: Option<Option<String>>,
) -> AppResult<Option<Option<NaiveDate>>> {
    match value {
        Some(Some(v)) => Ok(Some(Some(parse_date(field, &v)?))),
        Some(None) => Ok(Some(None)),
        None => Ok(None),
    }
}
