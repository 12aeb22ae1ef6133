//! Categories store and its Postgres implementation

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryChanges, NewCategory},
};

/// Storage operations for categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesStore: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Category>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Category>;
    async fn create(&self, category: NewCategory) -> AppResult<i32>;
    async fn update(&self, id: i32, changes: CategoryChanges) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoriesStore for CategoriesRepository {
    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    async fn create(&self, category: NewCategory) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id",
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, changes: CategoryChanges) -> AppResult<()> {
        sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
            .bind(&changes.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
