//! Repository layer for database operations
//!
//! Each entity exposes a store trait so handlers depend on an injected
//! capability rather than a live pool; the Postgres implementations
//! live alongside the traits.

pub mod authors;
pub mod books;
pub mod categories;
pub mod loans;
pub mod members;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use authors::AuthorsStore;
pub use books::BooksStore;
pub use categories::CategoriesStore;
pub use loans::LoansStore;
pub use members::MembersStore;

/// Main repository struct holding one store per entity
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BooksStore>,
    pub members: Arc<dyn MembersStore>,
    pub authors: Arc<dyn AuthorsStore>,
    pub categories: Arc<dyn CategoriesStore>,
    pub loans: Arc<dyn LoansStore>,
}

impl Repository {
    /// Create a new repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            members: Arc::new(members::MembersRepository::new(pool.clone())),
            authors: Arc::new(authors::AuthorsRepository::new(pool.clone())),
            categories: Arc::new(categories::CategoriesRepository::new(pool.clone())),
            loans: Arc::new(loans::LoansRepository::new(pool)),
        }
    }
}

#[cfg(test)]
impl Default for Repository {
    /// All stores mocked with no expectations; tests override the ones
    /// they exercise.
    fn default() -> Self {
        Self {
            books: Arc::new(books::MockBooksStore::new()),
            members: Arc::new(members::MockMembersStore::new()),
            authors: Arc::new(authors::MockAuthorsStore::new()),
            categories: Arc::new(categories::MockCategoriesStore::new()),
            loans: Arc::new(loans::MockLoansStore::new()),
        }
    }
}
