//! Authors store and its Postgres implementation

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorChanges, NewAuthor},
};

/// Storage operations for authors
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorsStore: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Author>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Author>;
    async fn create(&self, author: NewAuthor) -> AppResult<i32>;
    /// `changes` must carry at least one set field.
    async fn update(&self, id: i32, changes: AuthorChanges) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorsStore for AuthorsRepository {
    async fn get_all(&self) -> AppResult<Vec<Author>> {
        let authors =
            sqlx::query_as::<_, Author>("SELECT id, name, biography FROM authors ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(authors)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT id, name, biography FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    async fn create(&self, author: NewAuthor) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO authors (name, biography) VALUES ($1, $2) RETURNING id",
        )
        .bind(&author.name)
        .bind(&author.biography)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, changes: AuthorChanges) -> AppResult<()> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE authors SET ");
        let mut fields = query.separated(", ");

        if let Some(name) = changes.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(biography) = changes.biography {
            // An inner None binds as SQL NULL and clears the column
            fields.push("biography = ").push_bind_unseparated(biography);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
