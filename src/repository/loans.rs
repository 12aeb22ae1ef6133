//! Loans store and its Postgres implementation

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::loan::{Loan, LoanChanges, NewLoan},
};

/// Storage operations for loans
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoansStore: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Loan>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Loan>;
    async fn create(&self, loan: NewLoan) -> AppResult<i32>;
    /// `changes` must carry at least one set field.
    async fn update(&self, id: i32, changes: LoanChanges) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoansStore for LoansRepository {
    async fn get_all(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT id, book_id, member_id, loan_date, return_date FROM loans ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            "SELECT id, book_id, member_id, loan_date, return_date FROM loans WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))
    }

    async fn create(&self, loan: NewLoan) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO loans (book_id, member_id, loan_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(loan.book_id)
        .bind(loan.member_id)
        .bind(loan.loan_date)
        .bind(loan.return_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, changes: LoanChanges) -> AppResult<()> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE loans SET ");
        let mut fields = query.separated(", ");

        if let Some(book_id) = changes.book_id {
            fields.push("book_id = ").push_bind_unseparated(book_id);
        }
        if let Some(member_id) = changes.member_id {
            fields.push("member_id = ").push_bind_unseparated(member_id);
        }
        if let Some(loan_date) = changes.loan_date {
            // An inner None binds as SQL NULL and clears the column
            fields.push("loan_date = ").push_bind_unseparated(loan_date);
        }
        if let Some(return_date) = changes.return_date {
            fields
                .push("return_date = ")
                .push_bind_unseparated(return_date);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
