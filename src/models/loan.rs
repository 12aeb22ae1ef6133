//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{double_option, parse_date, parse_date_patch};
use crate::error::{AppError, AppResult};

/// Loan row linking a book to a member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub book_id: i32,
    pub member_id: i32,
    pub loan_date: Option<NaiveDate>,
    /// Null while the book is still out
    pub return_date: Option<NaiveDate>,
}

/// Create loan request; dates are optional
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    /// Loan date, `YYYY-MM-DD`
    pub loan_date: Option<String>,
    /// Return date, `YYYY-MM-DD`
    pub return_date: Option<String>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewLoan {
    pub book_id: i32,
    pub member_id: i32,
    pub loan_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

impl CreateLoan {
    /// Presence check only on the two ids.
    pub fn validate(self) -> AppResult<NewLoan> {
        let (Some(book_id), Some(member_id)) = (self.book_id, self.member_id) else {
            return Err(AppError::Validation("Missing fields".to_string()));
        };

        Ok(NewLoan {
            book_id,
            member_id,
            loan_date: self
                .loan_date
                .as_deref()
                .map(|v| parse_date("loan_date", v))
                .transpose()?,
            return_date: self
                .return_date
                .as_deref()
                .map(|v| parse_date("return_date", v))
                .transpose()?,
        })
    }
}

/// Update loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLoan {
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    /// Loan date, `YYYY-MM-DD`; an explicit `null` clears it
    #[serde(default, deserialize_with = "double_option")]
    pub loan_date: Option<Option<String>>,
    /// Return date, `YYYY-MM-DD`; an explicit `null` clears it
    #[serde(default, deserialize_with = "double_option")]
    pub return_date: Option<Option<String>>,
}

/// Validated partial update; at least one field is set
#[derive(Debug, Clone, PartialEq)]
pub struct LoanChanges {
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    pub loan_date: Option<Option<NaiveDate>>,
    pub return_date: Option<Option<NaiveDate>>,
}

impl UpdateLoan {
    pub fn validate(self) -> AppResult<LoanChanges> {
        if self.book_id.is_none()
            && self.member_id.is_none()
            && self.loan_date.is_none()
            && self.return_date.is_none()
        {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        Ok(LoanChanges {
            book_id: self.book_id,
            member_id: self.member_id,
            loan_date: parse_date_patch("loan_date", self.loan_date)?,
            return_date: parse_date_patch("return_date", self.return_date)?,
        })
    }
}
