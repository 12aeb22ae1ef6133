//! Members store and its Postgres implementation

use async_trait::async_trait;
use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberChanges, NewMember},
};

/// Storage operations for members
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersStore: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Member>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Member>;
    async fn create(&self, member: NewMember) -> AppResult<i32>;
    /// `changes` must carry at least one set field.
    async fn update(&self, id: i32, changes: MemberChanges) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembersStore for MembersRepository {
    async fn get_all(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, name, email, join_date FROM members ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "SELECT id, name, email, join_date FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    async fn create(&self, member: NewMember) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO members (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&member.name)
        .bind(&member.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, changes: MemberChanges) -> AppResult<()> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE members SET ");
        let mut fields = query.separated(", ");

        if let Some(name) = changes.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(email) = changes.email {
            fields.push("email = ").push_bind_unseparated(email);
        }
        if let Some(join_date) = changes.join_date {
            // An inner None binds as SQL NULL and clears the column
            fields.push("join_date = ").push_bind_unseparated(join_date);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
