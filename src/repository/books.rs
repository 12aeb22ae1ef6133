//! Books store and its Postgres implementation

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookChanges, NewBook},
};

/// Storage operations for books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksStore: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Book>;
    async fn create(&self, book: NewBook) -> AppResult<i32>;
    /// `changes` must carry at least one set field.
    async fn update(&self, id: i32, changes: BookChanges) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BooksStore for BooksRepository {
    async fn get_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, published_date, isbn, pages, category_id, author_id FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, published_date, isbn, pages, category_id, author_id FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    async fn create(&self, book: NewBook) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, published_date, isbn, pages, category_id, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(book.published_date)
        .bind(&book.isbn)
        .bind(book.pages)
        .bind(book.category_id)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, changes: BookChanges) -> AppResult<()> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE books SET ");
        let mut fields = query.separated(", ");

        if let Some(title) = changes.title {
            fields.push("title = ").push_bind_unseparated(title);
        }
        if let Some(published_date) = changes.published_date {
            fields
                .push("published_date = ")
                .push_bind_unseparated(published_date);
        }
        if let Some(isbn) = changes.isbn {
            fields.push("isbn = ").push_bind_unseparated(isbn);
        }
        if let Some(pages) = changes.pages {
            fields.push("pages = ").push_bind_unseparated(pages);
        }
        if let Some(category_id) = changes.category_id {
            fields
                .push("category_id = ")
                .push_bind_unseparated(category_id);
        }
        if let Some(author_id) = changes.author_id {
            fields.push("author_id = ").push_bind_unseparated(author_id);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
