//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, UpdateLoan},
};

use super::{AppJson, CreatedResponse, MessageResponse};

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "List of loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.repository.loans.get_all().await?;
    Ok(Json(loans))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Loan>> {
    let loan = state.repository.loans.get_by_id(id).await?;
    Ok(Json(loan))
}

/// Record a new loan
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = CreatedResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let loan = payload.validate()?;
    let id = state.repository.loans.create(loan).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update an existing loan
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated", body = MessageResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateLoan>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.loans.get_by_id(id).await?;
    let changes = payload.validate()?;
    state.repository.loans.update(id, changes).await?;

    Ok(Json(MessageResponse {
        message: "Loan updated".to_string(),
    }))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan deleted", body = MessageResponse),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.loans.get_by_id(id).await?;
    state.repository.loans.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Loan deleted".to_string(),
    }))
}
