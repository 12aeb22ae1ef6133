//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{double_option, parse_date_patch};
use crate::error::{AppError, AppResult};

/// Registered library member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Set through updates only; null until then
    pub join_date: Option<NaiveDate>,
}

/// Create member request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
}

impl CreateMember {
    /// Presence check only; empty strings are accepted.
    pub fn validate(self) -> AppResult<NewMember> {
        let (Some(name), Some(email)) = (self.name, self.email) else {
            return Err(AppError::Validation("Missing fields".to_string()));
        };

        Ok(NewMember { name, email })
    }
}

/// Update member request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Join date, `YYYY-MM-DD`; an explicit `null` clears it
    #[serde(default, deserialize_with = "double_option")]
    pub join_date: Option<Option<String>>,
}

/// Validated partial update; at least one field is set
#[derive(Debug, Clone, PartialEq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub join_date: Option<Option<NaiveDate>>,
}

impl UpdateMember {
    pub fn validate(self) -> AppResult<MemberChanges> {
        if self.name.is_none() && self.email.is_none() && self.join_date.is_none() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        Ok(MemberChanges {
            name: self.name,
            email: self.email,
            join_date: parse_date_patch("join_date", self.join_date)?,
        })
    }
}
