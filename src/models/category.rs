//! Category model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Category row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Create category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub name: Option<String>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

impl CreateCategory {
    /// Presence check only; empty strings are accepted.
    pub fn validate(self) -> AppResult<NewCategory> {
        let Some(name) = self.name else {
            return Err(AppError::Validation("Missing name".to_string()));
        };

        Ok(NewCategory { name })
    }
}

/// Update category request; only the name can change
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

/// Validated partial update
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChanges {
    pub name: String,
}

impl UpdateCategory {
    pub fn validate(self) -> AppResult<CategoryChanges> {
        let Some(name) = self.name else {
            return Err(AppError::Validation("No fields to update".to_string()));
        };

        Ok(CategoryChanges { name })
    }
}
