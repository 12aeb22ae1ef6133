//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::double_option;
use crate::error::{AppError, AppResult};

/// Author row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub biography: Option<String>,
}

/// Create author request; biography is optional
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub name: Option<String>,
    pub biography: Option<String>,
}

/// Validated create payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub name: String,
    pub biography: Option<String>,
}

impl CreateAuthor {
    /// Presence check only; empty strings are accepted.
    pub fn validate(self) -> AppResult<NewAuthor> {
        let Some(name) = self.name else {
            return Err(AppError::Validation("Missing name".to_string()));
        };

        Ok(NewAuthor {
            name,
            biography: self.biography,
        })
    }
}

/// Update author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    /// An explicit `null` clears the stored biography
    #[serde(default, deserialize_with = "double_option")]
    pub biography: Option<Option<String>>,
}

/// Validated partial update; at least one field is set
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub biography: Option<Option<String>>,
}

impl UpdateAuthor {
    pub fn validate(self) -> AppResult<AuthorChanges> {
        if self.name.is_none() && self.biography.is_none() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        Ok(AuthorChanges {
            name: self.name,
            biography: self.biography,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_without_biography() {
        let author = CreateAuthor {
            name: Some("Umberto Eco".to_string()),
            biography: None,
        }
        .validate()
        .unwrap();
        assert_eq!(author.name, "Umberto Eco");
        assert!(author.biography.is_none());
    }

    #[test]
    fn create_keeps_biography() {
        let author = CreateAuthor {
            name: Some("Umberto Eco".to_string()),
            biography: Some("Italian novelist and semiotician".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(
            author.biography.as_deref(),
            Some("Italian novelist and semiotician")
        );
    }

    #[test]
    fn create_rejects_missing_name() {
        let result = CreateAuthor {
            name: None,
            biography: Some("no name given".to_string()),
        }
        .validate();
        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Missing name"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_biography_alone_is_enough() {
        let changes = UpdateAuthor {
            name: None,
            biography: Some(Some("updated".to_string())),
        }
        .validate()
        .unwrap();
        assert!(changes.name.is_none());
        assert_eq!(changes.biography, Some(Some("updated".to_string())));
    }

    #[test]
    fn update_with_explicit_null_clears_biography() {
        let patch: UpdateAuthor = serde_json::from_value(json!({"biography": null})).unwrap();
        let changes = patch.validate().unwrap();
        assert!(changes.name.is_none());
        assert_eq!(changes.biography, Some(None));
    }

    #[test]
    fn update_tells_absent_biography_apart_from_null() {
        let patch: UpdateAuthor = serde_json::from_value(json!({"name": "Jane Doe"})).unwrap();
        let changes = patch.validate().unwrap();
        assert_eq!(changes.biography, None);

        let patch: UpdateAuthor =
            serde_json::from_value(json!({"name": "Jane Doe", "biography": null})).unwrap();
        let changes = patch.validate().unwrap();
        assert_eq!(changes.name.as_deref(), Some("Jane Doe"));
        assert_eq!(changes.biography, Some(None));
    }
}
