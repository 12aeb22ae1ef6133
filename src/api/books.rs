//! Book management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::{AppJson, CreatedResponse, MessageResponse};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.repository.books.get_all().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.repository.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = CreatedResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<CreateBook>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let book = payload.validate()?;
    let id = state.repository.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.books.get_by_id(id).await?;
    let changes = payload.validate()?;
    state.repository.books.update(id, changes).await?;

    Ok(Json(MessageResponse {
        message: "Book updated".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.books.get_by_id(id).await?;
    state.repository.books.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Book deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        routing::{delete, get, post, put},
        Router,
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::AppConfig,
        error::AppError,
        models::book::{BookChanges, NewBook},
        repository::{books::MockBooksStore, Repository},
        AppState,
    };

    fn test_router(books: MockBooksStore) -> Router {
        let state = AppState {
            config: Arc::new(AppConfig::default()),
            repository: Repository {
                books: Arc::new(books),
                ..Default::default()
            },
        };

        Router::new()
            .route("/books", get(list_books))
            .route("/books", post(create_book))
            .route("/books/:id", get(get_book))
            .route("/books/:id", put(update_book))
            .route("/books/:id", delete(delete_book))
            .with_state(state)
    }

    fn sample_book() -> Book {
        Book {
            id: 1,
            title: "The Name of the Rose".to_string(),
            published_date: NaiveDate::from_ymd_opt(1980, 9, 1).unwrap(),
            isbn: "978-0-15-144647-6".to_string(),
            pages: 512,
            category_id: 1,
            author_id: 1,
        }
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_returns_all_books() {
        let mut books = MockBooksStore::new();
        books
            .expect_get_all()
            .returning(|| Ok(vec![sample_book()]));

        let response = test_router(books)
            .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body[0]["title"], "The Name of the Rose");
        assert_eq!(body[0]["published_date"], "1980-09-01");
    }

    #[tokio::test]
    async fn list_with_no_rows_is_an_empty_array() {
        let mut books = MockBooksStore::new();
        books.expect_get_all().returning(|| Ok(vec![]));

        let response = test_router(books)
            .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn get_unknown_id_is_404() {
        let mut books = MockBooksStore::new();
        books
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Err(AppError::NotFound("Book not found".to_string())));

        let response = test_router(books)
            .oneshot(
                Request::builder()
                    .uri("/books/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await, json!({"error": "Book not found"}));
    }

    #[tokio::test]
    async fn create_returns_new_id() {
        let mut books = MockBooksStore::new();
        books
            .expect_create()
            .with(eq(NewBook {
                title: "The Name of the Rose".to_string(),
                published_date: NaiveDate::from_ymd_opt(1980, 9, 1).unwrap(),
                isbn: "978-0-15-144647-6".to_string(),
                pages: 512,
                category_id: 1,
                author_id: 1,
            }))
            .returning(|_| Ok(7));

        let response = test_router(books)
            .oneshot(json_request(
                Method::POST,
                "/books",
                json!({
                    "title": "The Name of the Rose",
                    "published_date": "1980-09-01",
                    "isbn": "978-0-15-144647-6",
                    "pages": 512,
                    "category_id": 1,
                    "author_id": 1
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(read_json(response).await, json!({"id": 7}));
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_400() {
        // No store call expected
        let response = test_router(MockBooksStore::new())
            .oneshot(json_request(
                Method::POST,
                "/books",
                json!({"title": "X"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Missing or empty fields"})
        );
    }

    #[tokio::test]
    async fn create_without_json_body_is_400() {
        let response = test_router(MockBooksStore::new())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/books")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Request must be JSON"})
        );
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let mut books = MockBooksStore::new();
        books
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(sample_book()));
        books
            .expect_update()
            .with(
                eq(1),
                eq(BookChanges {
                    title: Some("Renamed".to_string()),
                    published_date: None,
                    isbn: None,
                    pages: None,
                    category_id: None,
                    author_id: None,
                }),
            )
            .returning(|_, _| Ok(()));

        let response = test_router(books)
            .oneshot(json_request(
                Method::PUT,
                "/books/1",
                json!({"title": "Renamed"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"message": "Book updated"}));
    }

    #[tokio::test]
    async fn update_with_no_fields_is_400() {
        let mut books = MockBooksStore::new();
        books
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(sample_book()));
        // expect_update deliberately absent

        let response = test_router(books)
            .oneshot(json_request(Method::PUT, "/books/1", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "No fields to update"})
        );
    }

    #[tokio::test]
    async fn update_unknown_id_is_404_and_mutates_nothing() {
        let mut books = MockBooksStore::new();
        books
            .expect_get_by_id()
            .with(eq(999))
            .returning(|_| Err(AppError::NotFound("Book not found".to_string())));

        let response = test_router(books)
            .oneshot(json_request(
                Method::PUT,
                "/books/999",
                json!({"title": "Ghost"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await, json!({"error": "Book not found"}));
    }

    #[tokio::test]
    async fn delete_removes_existing_book() {
        let mut books = MockBooksStore::new();
        books
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(sample_book()));
        books.expect_delete().with(eq(1)).returning(|_| Ok(()));

        let response = test_router(books)
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/books/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"message": "Book deleted"}));
    }
}
