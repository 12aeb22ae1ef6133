//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::parse_date;
use crate::error::{AppError, AppResult};

/// Book row from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub published_date: NaiveDate,
    pub isbn: String,
    pub pages: i32,
    pub category_id: i32,
    pub author_id: i32,
}

/// Create book request
///
/// All six fields are required and must be non-empty (strings) or
/// non-zero (integers); see [`CreateBook::validate`].
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    /// Publication date, `YYYY-MM-DD`
    pub published_date: Option<String>,
    pub isbn: Option<String>,
    pub pages: Option<i32>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
}

/// Validated create payload, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub published_date: NaiveDate,
    pub isbn: String,
    pub pages: i32,
    pub category_id: i32,
    pub author_id: i32,
}

impl CreateBook {
    /// Check the required-field list and produce the typed insert payload.
    ///
    /// Absent, empty-string and zero values are all rejected with the
    /// same aggregate message.
    pub fn validate(self) -> AppResult<NewBook> {
        let (Some(title), Some(published_date), Some(isbn), Some(pages), Some(category_id), Some(author_id)) = (
            self.title.filter(|v| !v.is_empty()),
            self.published_date.filter(|v| !v.is_empty()),
            self.isbn.filter(|v| !v.is_empty()),
            self.pages.filter(|v| *v != 0),
            self.category_id.filter(|v| *v != 0),
            self.author_id.filter(|v| *v != 0),
        ) else {
            return Err(AppError::Validation("Missing or empty fields".to_string()));
        };

        Ok(NewBook {
            title,
            published_date: parse_date("published_date", &published_date)?,
            isbn,
            pages,
            category_id,
            author_id,
        })
    }
}

/// Update book request; only the listed fields can change
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    /// Publication date, `YYYY-MM-DD`
    pub published_date: Option<String>,
    pub isbn: Option<String>,
    pub pages: Option<i32>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
}

/// Validated partial update; at least one field is set
#[derive(Debug, Clone, PartialEq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub isbn: Option<String>,
    pub pages: Option<i32>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
}

impl UpdateBook {
    /// Reject the empty patch and parse date fields.
    pub fn validate(self) -> AppResult<BookChanges> {
        if self.title.is_none()
            && self.published_date.is_none()
            && self.isbn.is_none()
            && self.pages.is_none()
            && self.category_id.is_none()
            && self.author_id.is_none()
        {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        Ok(BookChanges {
            title: self.title,
            published_date: self
                .published_date
                .as_deref()
                .map(|v| parse_date("published_date", v))
                .transpose()?,
            isbn: self.isbn,
            pages: self.pages,
            category_id: self.category_id,
            author_id: self.author_id,
        })
    }
}
